use std::{collections::HashMap, fs};

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://vkus-sovet.ru";

const MENU_PATH: &str = "/api/getMenu.php";
const SUB_MENU_PATH: &str = "/api/getSubMenu.php";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl Settings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn menu_url(&self) -> String {
        format!("{}{MENU_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub fn sub_menu_url(&self) -> String {
        format!("{}{SUB_MENU_PATH}", self.base_url.trim_end_matches('/'))
    }
}

/// Compiled-in default, overridden by `menu.toml` if present, overridden by
/// the environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("menu.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("base_url") {
                settings.base_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("MENU_BASE_URL") {
        settings.base_url = v;
    }

    settings
}
