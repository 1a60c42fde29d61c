use serde::Deserialize;

use crate::api::DEFAULT_LISTING_URL;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
    #[serde(default = "default_root_label")]
    pub root_label: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            root_label: default_root_label(),
            vim_mode: false,
            icon_mode: default_icon_mode(),
        }
    }
}

fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}

fn default_root_label() -> String {
    "Home".to_string()
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}
