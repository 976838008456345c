use bevy::prelude::*;
use cursor_host::{HostEventQueue, HostOverlaySlot, pump_host_events_system};

pub mod events;
pub mod plugins;
pub mod replay;
pub mod settings;
pub mod settings_types;
pub mod spring;
pub mod store;
pub mod timers;
pub mod visual;

pub use plugins::follower::CursorFollower;
pub use plugins::interaction::InteractionState;
pub use plugins::render::CursorOverlay;
pub use plugins::ripple::{LiveRipples, RippleEmitter};
pub use settings::Settings;
pub use store::{CursorSetters, CursorStore};
pub use timers::{TimerBag, TimerFired, TimerKey};

pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("FolioCursor");
    let _ = std::fs::create_dir_all(&path);
    path
}

/// Per-frame ordering of the cursor pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorSet {
    HostPump,
    Timers,
    Interaction,
    Follower,
    Ripples,
    Lifecycle,
    Render,
}

pub struct CoreEventsPlugin;

impl Plugin for CoreEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<events::PointerInput>()
            .add_message::<events::DocumentEvent>()
            .add_message::<events::CursorStyleRequest>()
            .add_message::<events::TimerFired>();
    }
}

/// The whole custom cursor. Touch devices and reduced-motion users get nothing
/// beyond a hidden overlay: no host queue, no systems.
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CoreEventsPlugin, settings::SettingsPlugin))
            .init_resource::<CursorStore>()
            .init_resource::<HostOverlaySlot>()
            .insert_resource(CursorOverlay::hidden());

        let capabilities = app.world().resource::<Settings>().capabilities;
        if !capabilities.cursor_enabled() {
            tracing::info!(
                touch = capabilities.touch,
                reduced_motion = capabilities.reduced_motion,
                "custom cursor disabled"
            );
            return;
        }

        app.init_resource::<HostEventQueue>()
            .init_resource::<TimerBag>()
            .configure_sets(
                Update,
                (
                    CursorSet::HostPump,
                    CursorSet::Timers,
                    CursorSet::Interaction,
                    CursorSet::Follower,
                    CursorSet::Ripples,
                    CursorSet::Lifecycle,
                    CursorSet::Render,
                )
                    .chain(),
            )
            .add_systems(Update, pump_host_events_system.in_set(CursorSet::HostPump))
            .add_systems(Update, timers::tick_timers_system.in_set(CursorSet::Timers))
            .add_plugins((
                plugins::interaction::InteractionPlugin,
                plugins::follower::FollowerPlugin,
                plugins::ripple::RipplePlugin,
                plugins::lifecycle::LifecyclePlugin,
                plugins::render::RenderPlugin,
            ));

        tracing::info!("custom cursor enabled");
    }
}
