#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use cursor_host::{HostEventQueue, OverlayFrame, QueuedDomEvent};
use cursor_input::{ElementInfo, ElementPath, PointerKind, PointerTracker};
use cursor_types::CursorState;
use folio_cursor::events::CursorStyleRequest;
use folio_cursor::{CursorFollower, CursorOverlay, CursorPlugin, CursorStore, LiveRipples, Settings, TimerBag};
use std::time::Duration;

pub const FRAME_MS: u64 = 10;

pub struct TestCursor {
    app: App,
    queue: HostEventQueue,
}

impl TestCursor {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let app = build_app(settings);
        let queue = app
            .world()
            .get_resource::<HostEventQueue>()
            .cloned()
            .expect("cursor should be enabled");
        Self { app, queue }
    }

    pub fn frame(&mut self) {
        self.app.update();
    }

    /// Runs whole frames until `ms` has elapsed.
    pub fn advance_ms(&mut self, ms: u64) {
        for _ in 0..ms / FRAME_MS {
            self.frame();
        }
    }

    pub fn push(&self, event: QueuedDomEvent) {
        self.queue.push(event);
    }

    pub fn send(&mut self, event: QueuedDomEvent) {
        self.push(event);
        self.frame();
    }

    pub fn move_over(&mut self, x: f32, y: f32, path: Vec<ElementInfo>) {
        self.send(QueuedDomEvent::PointerMove {
            x,
            y,
            timestamp_ms: None,
            target: ElementPath::new(path),
        });
    }

    pub fn press(&mut self, x: f32, y: f32, path: Vec<ElementInfo>) {
        self.send(QueuedDomEvent::PointerDown {
            x,
            y,
            pointer: PointerKind::Mouse,
            target: ElementPath::new(path),
        });
    }

    pub fn release(&mut self, x: f32, y: f32, path: Vec<ElementInfo>) {
        self.send(QueuedDomEvent::PointerUp {
            x,
            y,
            target: ElementPath::new(path),
        });
    }

    pub fn request_style(&mut self, request: CursorStyleRequest) {
        self.app
            .world_mut()
            .resource_mut::<Messages<CursorStyleRequest>>()
            .write(request);
        self.frame();
    }

    pub fn state(&self) -> CursorState {
        self.app.world().resource::<CursorStore>().state().clone()
    }

    pub fn overlay(&self) -> OverlayFrame {
        self.app.world().resource::<CursorOverlay>().0.clone()
    }

    pub fn follower(&self) -> &CursorFollower {
        self.app.world().resource::<CursorFollower>()
    }

    pub fn tracker(&self) -> &PointerTracker {
        self.app.world().resource::<PointerTracker>()
    }

    pub fn live_ripples(&self) -> usize {
        self.app.world().resource::<LiveRipples>().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.app.world().resource::<TimerBag>().len()
    }

    pub fn timers(&self) -> &TimerBag {
        self.app.world().resource::<TimerBag>()
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

pub fn build_app(settings: Settings) -> App {
    let mut app = App::new();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(FRAME_MS)));
    app.insert_resource(settings);
    app.add_plugins(MinimalPlugins).add_plugins(CursorPlugin);
    app.finish();
    app.cleanup();
    // First frame has a zero delta.
    app.update();
    app
}

pub fn page() -> ElementInfo {
    ElementInfo::new(1, "main")
}

pub fn project_link(id: u64, slug: &str) -> Vec<ElementInfo> {
    vec![
        ElementInfo::new(id * 10, "img"),
        ElementInfo::new(id, "a").with_href(format!("/projects/{slug}")),
        page(),
    ]
}

pub fn plain_link(id: u64, href: &str) -> Vec<ElementInfo> {
    vec![ElementInfo::new(id, "a").with_href(href), page()]
}

pub fn button(id: u64) -> Vec<ElementInfo> {
    vec![ElementInfo::new(id, "button"), page()]
}

pub fn gap() -> Vec<ElementInfo> {
    vec![ElementInfo::new(2, "div"), page()]
}
