use bevy::prelude::*;
use cursor_input::{ElementId, ElementPredicate, classify};
use cursor_types::CursorVariant;

use crate::events::{CursorStyleRequest, PointerInput, TimerFired};
use crate::settings::Settings;
use crate::store::{CursorSetters, CursorStore};
use crate::timers::{TimerBag, TimerKey};
use crate::CursorSet;

pub const PREVIEW_LABEL: &str = "View";

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>().add_systems(
            Update,
            (
                interaction_timers_system,
                style_request_system,
                hover_system,
                press_system,
            )
                .chain()
                .in_set(CursorSet::Interaction),
        );
    }
}

/// The interactive element the pointer was last seen over.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct InteractionState {
    tracked: Option<ElementId>,
}

impl InteractionState {
    pub fn reset(&mut self) {
        self.tracked = None;
    }

    fn resting_variant(&self) -> CursorVariant {
        if self.tracked.is_some() {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        }
    }
}

fn clear_hover(store: &mut ResMut<CursorStore>, state: &mut ResMut<InteractionState>) {
    if state.tracked.is_some() {
        state.tracked = None;
    }
    store.reset();
}

fn interaction_timers_system(
    mut fired: MessageReader<TimerFired>,
    mut store: ResMut<CursorStore>,
    mut state: ResMut<InteractionState>,
) {
    for TimerFired(key) in fired.read() {
        match key {
            TimerKey::HoverClear => {
                tracing::debug!("left interactive elements, clearing hover");
                clear_hover(&mut store, &mut state);
            }
            TimerKey::ButtonReset => {
                tracing::debug!("button press settled, resetting cursor");
                clear_hover(&mut store, &mut state);
            }
            TimerKey::ClickRelease => {
                if store.cursor_variant() == CursorVariant::Click {
                    let variant = state.resting_variant();
                    store.set_cursor_variant(variant);
                }
            }
            _ => {}
        }
    }
}

fn style_request_system(
    mut requests: MessageReader<CursorStyleRequest>,
    mut store: ResMut<CursorStore>,
    mut bag: ResMut<TimerBag>,
) {
    for request in requests.read() {
        if matches!(request, CursorStyleRequest::Set { .. }) {
            bag.cancel(TimerKey::HoverClear);
        }
        let next = request.to_state();
        tracing::debug!(
            hovering = next.is_hovering,
            text = %next.cursor_text,
            variant = next.cursor_variant.label(),
            "external cursor style request"
        );
        store.apply(&next);
    }
}

/// Classifies only the newest move of the frame; older ones are stale.
fn hover_system(
    mut inputs: MessageReader<PointerInput>,
    settings: Res<Settings>,
    mut store: ResMut<CursorStore>,
    mut state: ResMut<InteractionState>,
    mut bag: ResMut<TimerBag>,
) {
    let Some(target) = inputs
        .read()
        .filter_map(|input| match input {
            PointerInput::Move { target, .. } => Some(target),
            _ => None,
        })
        .last()
    else {
        return;
    };

    let class = classify(target, &settings.routes);

    if class.over_form_field {
        bag.cancel(TimerKey::HoverClear);
        clear_hover(&mut store, &mut state);
        return;
    }

    if let Some(element) = class.interactive {
        bag.cancel(TimerKey::HoverClear);
        if state.tracked == Some(element.id) {
            return;
        }

        state.tracked = Some(element.id);
        let text = if class.portfolio { PREVIEW_LABEL } else { "" };
        store.set_is_hovering(true);
        store.set_cursor_variant(CursorVariant::Hover);
        store.set_cursor_text(text);
        tracing::debug!(element = element.id.0, portfolio = class.portfolio, "hovering interactive element");
        return;
    }

    // Every gap move restarts the grace period.
    if state.tracked.is_some() {
        bag.schedule(TimerKey::HoverClear, settings.timings.hover_clear());
    }
}

fn press_system(
    mut inputs: MessageReader<PointerInput>,
    settings: Res<Settings>,
    mut store: ResMut<CursorStore>,
    state: Res<InteractionState>,
    mut bag: ResMut<TimerBag>,
) {
    for input in inputs.read() {
        match input {
            PointerInput::Down { target, .. } => {
                let class = classify(target, &settings.routes);
                if class.over_form_field {
                    continue;
                }
                let Some(element) = class.interactive else {
                    continue;
                };

                if class.portfolio {
                    store.set_cursor_variant(CursorVariant::Click);
                    bag.schedule(TimerKey::ClickRelease, settings.timings.click_release());
                }
                if ElementPredicate::Button.matches(element) {
                    bag.schedule(TimerKey::ButtonReset, settings.timings.button_reset());
                }
                tracing::debug!(element = element.id.0, portfolio = class.portfolio, "pointer down");
            }
            PointerInput::Up { .. } => {
                bag.cancel(TimerKey::ClickRelease);
                store.set_cursor_variant(state.resting_variant());
            }
            PointerInput::Move { .. } => {}
        }
    }
}
