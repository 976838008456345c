use bevy::prelude::Resource;

pub use cursor_types::{CursorTimings, HostCapabilities, RouteRules, SpringConfig, SpringPresets};

#[derive(Resource, serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub timings: CursorTimings,
    pub springs: SpringPresets,
    pub capabilities: HostCapabilities,
    pub routes: RouteRules,
}
