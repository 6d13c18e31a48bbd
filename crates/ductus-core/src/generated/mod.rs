use crate::KernConfig;
use std::sync::OnceLock;

pub(crate) mod catalog;

static DEFAULT_CONFIG: OnceLock<KernConfig> = OnceLock::new();

pub fn default_config() -> KernConfig {
    DEFAULT_CONFIG
        .get_or_init(|| {
            let json_text = include_str!("default_config.json");
            // The bundled file is checked by `generated_default_config_matches_options_defaults`.
            KernConfig::from_json_str(json_text).unwrap_or_default()
        })
        .clone()
}
