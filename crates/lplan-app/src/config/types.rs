//! Configuration types
//!
//! - `Settings` - contents of `.lplan/config.toml`
//! - `EndpointSettings` - where generation requests go
//! - `BehaviorSettings` - interaction toggles

use lplan_client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: EndpointSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Generation endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointSettings {
    /// Full URL the form is POSTed to
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while a plan is being generated
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}
