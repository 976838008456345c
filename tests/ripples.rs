mod common;

use common::{TestCursor, button, gap, page, plain_link, project_link};
use cursor_host::QueuedDomEvent;
use cursor_input::ElementInfo;
use cursor_types::{RippleKind, RippleId};
use folio_cursor::TimerKey;

#[test]
fn click_ripple_expires_after_700ms() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, button(20));
    cursor.press(10.0, 10.0, button(20));

    assert_eq!(cursor.live_ripples(), 1);
    assert_eq!(cursor.overlay().ripples[0].kind, RippleKind::Click);

    cursor.advance_ms(690);
    assert_eq!(cursor.live_ripples(), 1);
    cursor.frame();
    assert_eq!(cursor.live_ripples(), 0);
    assert_eq!(cursor.pending_timers(), 0);
    assert!(cursor.overlay().ripples.is_empty());
}

#[test]
fn navigation_ripple_lives_for_a_second() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, plain_link(5, "/about"));
    cursor.press(10.0, 10.0, plain_link(5, "/about"));
    assert_eq!(cursor.overlay().ripples[0].kind, RippleKind::Navigation);

    cursor.advance_ms(990);
    assert_eq!(cursor.live_ripples(), 1);
    cursor.frame();
    assert_eq!(cursor.live_ripples(), 0);
}

#[test]
fn cursor_labelled_elements_spawn_navigation_ripples() {
    let mut cursor = TestCursor::new();
    let labelled = vec![ElementInfo::new(7, "div").with_cursor_text("Drag"), page()];
    cursor.move_over(10.0, 10.0, labelled.clone());
    cursor.press(10.0, 10.0, labelled);

    assert_eq!(cursor.overlay().ripples[0].kind, RippleKind::Navigation);
}

#[test]
fn ripples_need_an_interactive_target() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, gap());
    cursor.press(10.0, 10.0, gap());
    cursor.press(10.0, 10.0, vec![ElementInfo::new(40, "textarea"), page()]);

    assert_eq!(cursor.live_ripples(), 0);
}

#[test]
fn ripples_are_anchored_to_the_smoothed_cursor() {
    let mut cursor = TestCursor::new();
    cursor.move_over(100.0, 100.0, gap());

    cursor.push(QueuedDomEvent::PointerMove {
        x: 400.0,
        y: 400.0,
        timestamp_ms: None,
        target: button(20).into(),
    });
    cursor.push(QueuedDomEvent::PointerDown {
        x: 400.0,
        y: 400.0,
        pointer: Default::default(),
        target: button(20).into(),
    });
    cursor.frame();

    let frame = cursor.overlay();
    let ripple = &frame.ripples[0];
    assert_eq!((ripple.x, ripple.y), (frame.x, frame.y));
    assert!(ripple.x < 200.0, "ripple at raw pointer: {}", ripple.x);

    cursor.advance_ms(300);
    let frame = cursor.overlay();
    assert_eq!((frame.ripples[0].x, frame.ripples[0].y), (ripple.x, ripple.y));
}

#[test]
fn ripple_ids_increase_monotonically() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, button(20));
    for _ in 0..3 {
        cursor.press(10.0, 10.0, button(20));
        cursor.release(10.0, 10.0, button(20));
    }

    let ids: Vec<RippleId> = cursor.overlay().ripples.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![RippleId(1), RippleId(2), RippleId(3)]);
}

#[test]
fn clear_all_on_route_change_leaves_nothing_pending() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, plain_link(5, "/about"));
    cursor.press(10.0, 10.0, plain_link(5, "/about"));
    cursor.press(12.0, 10.0, plain_link(5, "/about"));
    assert_eq!(cursor.live_ripples(), 2);

    cursor.advance_ms(100);
    cursor.send(QueuedDomEvent::RouteChange {
        path: "/about".to_string(),
    });

    assert_eq!(cursor.live_ripples(), 0);
    assert_eq!(cursor.pending_timers(), 0);
    assert!(cursor.overlay().ripples.is_empty());

    cursor.send(QueuedDomEvent::HashChange);
    assert_eq!(cursor.live_ripples(), 0);
}

#[test]
fn every_navigation_boundary_clears_ripples() {
    let boundaries = [
        QueuedDomEvent::PageHide,
        QueuedDomEvent::VisibilityChange { hidden: true },
        QueuedDomEvent::HashChange,
        QueuedDomEvent::PopState,
        QueuedDomEvent::Teardown,
    ];

    for boundary in boundaries {
        let mut cursor = TestCursor::new();
        cursor.move_over(10.0, 10.0, project_link(11, "harbor-lights"));
        cursor.press(10.0, 10.0, project_link(11, "harbor-lights"));
        assert_eq!(cursor.live_ripples(), 1);

        cursor.send(boundary.clone());
        assert_eq!(cursor.live_ripples(), 0, "{boundary:?}");
        assert!(!cursor.timers().is_pending(TimerKey::RippleExpiry(RippleId(1))));
    }
}

#[test]
fn becoming_visible_again_does_not_clear() {
    let mut cursor = TestCursor::new();
    cursor.move_over(10.0, 10.0, button(20));
    cursor.press(10.0, 10.0, button(20));
    cursor.send(QueuedDomEvent::VisibilityChange { hidden: false });

    assert_eq!(cursor.live_ripples(), 1);
}

#[test]
fn teardown_cancels_every_timer() {
    let mut cursor = TestCursor::new();
    let link = project_link(11, "harbor-lights");
    cursor.move_over(10.0, 10.0, link.clone());
    cursor.press(10.0, 10.0, link);
    cursor.move_over(60.0, 10.0, gap());
    cursor.push(QueuedDomEvent::MouseLeave);
    cursor.frame();
    assert!(cursor.pending_timers() >= 3);

    cursor.send(QueuedDomEvent::Teardown);
    assert_eq!(cursor.pending_timers(), 0);
    assert!(cursor.state().is_default());
    assert!(!cursor.overlay().visible);

    cursor.advance_ms(1500);
    assert!(cursor.state().is_default());
}
