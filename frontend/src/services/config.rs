use shared::DEFAULT_NARROW_BREAKPOINT_PX;

const DEFAULT_API_BASE_URL: &str = "https://server.pgbee.in";
const DEFAULT_RECAPTCHA_SITE_KEY: &str = "6Le_M5MrAAAAACrSz_3kuodKa-fyh7dk6kHeYeNC";

/// Runtime settings for the app. Build-time overrides:
/// `PGBEE_API_BASE_URL` and `PGBEE_RECAPTCHA_SITE_KEY`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Public reCAPTCHA v2 site key
    pub recaptcha_site_key: String,
    pub narrow_breakpoint_px: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PGBEE_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            recaptcha_site_key: option_env!("PGBEE_RECAPTCHA_SITE_KEY")
                .unwrap_or(DEFAULT_RECAPTCHA_SITE_KEY)
                .to_string(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}
