use bevy::prelude::*;
use cursor_input::PointerTracker;

use crate::events::DocumentEvent;
use crate::plugins::follower::CursorFollower;
use crate::plugins::interaction::InteractionState;
use crate::store::{CursorSetters, CursorStore};
use crate::timers::TimerBag;
use crate::CursorSet;

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, teardown_system.in_set(CursorSet::Lifecycle));
    }
}

/// Nothing scheduled may fire against a torn-down cursor.
fn teardown_system(
    mut documents: MessageReader<DocumentEvent>,
    mut bag: ResMut<TimerBag>,
    mut store: ResMut<CursorStore>,
    mut interaction: ResMut<InteractionState>,
    mut follower: ResMut<CursorFollower>,
    mut tracker: ResMut<PointerTracker>,
) {
    if !documents
        .read()
        .any(|event| *event == DocumentEvent::Teardown)
    {
        return;
    }

    let cancelled = bag.cancel_all();
    store.reset();
    interaction.reset();
    follower.hide();
    tracker.reset();
    tracing::info!(cancelled, "cursor torn down");
}
