#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/myzpezbg";

/// Hosted endpoint receiving the contact form. Overridable at build time.
pub fn contact_form_endpoint() -> &'static str {
    option_env!("CONTACT_FORM_ENDPOINT").unwrap_or(DEFAULT_CONTACT_ENDPOINT)
}

/// Where newsletter signups go.
#[derive(Clone, Debug, PartialEq)]
pub enum NewsletterMode {
    /// Placeholder until the subscription API exists: waits, then reports success.
    Stub { delay_ms: u32 },
    Backend { url: String },
}

pub fn newsletter_mode() -> NewsletterMode {
    newsletter_mode_from(option_env!("NEWSLETTER_API_URL"))
}

fn newsletter_mode_from(api_url: Option<&str>) -> NewsletterMode {
    match api_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => NewsletterMode::Backend {
            url: format!("{}/api/newsletter/subscribe", url.trim_end_matches('/')),
        },
        None => NewsletterMode::Stub { delay_ms: NEWSLETTER_STUB_DELAY_MS },
    }
}

pub const NEWSLETTER_STUB_DELAY_MS: u32 = 1_000;

/// How long a success acknowledgment stays on screen before the form goes idle.
pub const SUCCESS_RESET_MS: u32 = 5_000;

pub const CONSENT_BANNER_DELAY_MS: u32 = 2_000;

/// Interval between steps of the auto-advancing process timeline.
pub const TIMELINE_STEP_MS: u32 = 2_000;

pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";

pub const WHATSAPP_URL: &str = "https://wa.me/33123456789";
pub const CONTACT_EMAIL: &str = "victor@victormirault.com";
