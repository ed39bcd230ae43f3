//! Configuration loading for `.lplan/config.toml`

mod settings;
mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::{BehaviorSettings, EndpointSettings, Settings};
