pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/products";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub toast_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

/// Build-time configuration. The bundle has no runtime environment, so
/// overrides are baked in when trunk compiles it.
pub fn load() -> ClientConfig {
    let config = from_sources(
        option_env!("PRICE_TRACKER_API_BASE"),
        option_env!("PRICE_TRACKER_TOAST_MS"),
    );
    log::info!("Using API base {}", config.api_base);
    config
}

fn from_sources(api_base: Option<&str>, toast_ms: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
        config.api_base = base.trim_end_matches('/').to_string();
    }

    if let Some(raw) = toast_ms {
        match raw.trim().parse() {
            Ok(ms) => config.toast_timeout_ms = ms,
            Err(_) => log::warn!("Ignoring invalid PRICE_TRACKER_TOAST_MS: {:?}", raw),
        }
    }

    config
}
