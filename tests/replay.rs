use cursor_host::QueuedDomEvent;
use cursor_types::{CursorState, CursorVisual};
use folio_cursor::replay::{REPLAY_FRAME_MS, REPLAY_TAIL_MS, load_script, replay_app, run_replay};
use folio_cursor::visual::cursor_visual;
use folio_cursor::{Settings, TimerBag};
use std::path::PathBuf;

fn demo_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/hover_session.json")
}

#[test]
fn demo_script_parses_in_time_order() {
    let script = load_script(&demo_script()).unwrap();

    assert_eq!(script.len(), 9);
    assert!(script.windows(2).all(|pair| pair[0].at_ms <= pair[1].at_ms));
    assert!(matches!(script[0].event, QueuedDomEvent::PointerMove { .. }));
    assert_eq!(
        script.last().map(|e| &e.event),
        Some(&QueuedDomEvent::RouteChange {
            path: "/projects/harbor-lights".to_string()
        })
    );
}

#[test]
fn demo_session_ends_hidden_with_nothing_pending() {
    let script = load_script(&demo_script()).unwrap();
    let last_at = script.last().map_or(0, |e| e.at_ms);

    let mut app = replay_app(Settings::default());
    let summary = run_replay(&mut app, script).unwrap();

    assert_eq!(summary.frames, (last_at + REPLAY_TAIL_MS).div_ceil(REPLAY_FRAME_MS) + 1);
    assert!(summary.published > 0);

    // The mouse left the document before the route change.
    let overlay = summary.overlay;
    assert!(!overlay.visible);
    assert!(overlay.ripples.is_empty());
    let resting: CursorVisual = cursor_visual(&CursorState::default());
    assert_eq!(overlay.cursor, resting);

    assert!(app.world().resource::<TimerBag>().is_empty());
}
