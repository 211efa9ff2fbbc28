use serde::Deserialize;
use std::sync::OnceLock;

/// Runtime knobs for the site. Every field falls back to the built-in default,
/// so a partial `window.__NEXTTECH_CONFIG` object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Pixels of vertical scroll after which the header switches to its
    /// scrolled look.
    pub scrolled_threshold: f64,
    /// Offset added to `scrollY` before testing which nav section is in view.
    pub active_section_offset: f64,
    pub contact_email: String,
    pub telegram_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            active_section_offset: 200.0,
            contact_email: "hello@nexttech.com".into(),
            telegram_url: "https://t.me/whatdeucalion".into(),
        }
    }
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site config global could not be serialized")]
    Unserializable,
}

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Result<Option<SiteConfig>, ConfigError> {
    // Optional global written by env.js: window.__NEXTTECH_CONFIG = { ... }
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let any = match js_sys::Reflect::get(&window, &"__NEXTTECH_CONFIG".into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(None),
    };
    let raw = js_sys::JSON::stringify(&any)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or(ConfigError::Unserializable)?;
    parse(&raw).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Result<Option<SiteConfig>, ConfigError> {
    Ok(None)
}

fn resolve() -> SiteConfig {
    match snapshot_from_globals() {
        Ok(Some(cfg)) => {
            log::debug!("Site config loaded from window globals");
            cfg
        }
        Ok(None) => SiteConfig::default(),
        Err(err) => {
            log::warn!("Ignoring site config override: {}", err);
            SiteConfig::default()
        }
    }
}

pub fn current() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(resolve)
}
