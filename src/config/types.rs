use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// Storefront API access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Public storefront access token sent with every request.
    #[serde(default = "default_access_token")]
    pub access_token: String,
    /// Storefront API version segment of the endpoint (e.g., "2024-01").
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Full GraphQL endpoint. When unset it is derived from the shop domain.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Sources for the shop domain, consulted in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Domain injected by the page template.
    #[serde(default)]
    pub domain: Option<String>,
    /// Legacy alias for `domain`.
    #[serde(default)]
    pub legacy_url: Option<String>,
    /// Shop identifier exposed by the platform (e.g., "acme.myshopify.com").
    #[serde(default)]
    pub platform_shop: Option<String>,
    /// Used when no other source applies.
    #[serde(default = "default_fallback_domain")]
    pub fallback_domain: String,
}

/// Offline behaviour when the storefront cannot be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Synthesize a result instead of reporting a network error.
    #[serde(default = "default_fallback_enabled")]
    pub enabled: bool,
    /// Delay before a synthesized success, in milliseconds.
    #[serde(default = "default_fallback_delay_ms")]
    pub delay_ms: u64,
    /// Emails containing this address are reported as already registered.
    #[serde(default = "default_taken_email")]
    pub taken_email: String,
}

/// Page binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Id of the registration form element.
    #[serde(default = "default_form_id")]
    pub form_id: String,
}

fn default_access_token() -> String {
    "2775ca5fde6e8747d9f412bcc248575d".to_string()
}

fn default_api_version() -> String {
    "2024-01".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_fallback_domain() -> String {
    "sw-edu-anita-balasanyan.myshopify.com".to_string()
}

fn default_fallback_enabled() -> bool {
    true
}

fn default_fallback_delay_ms() -> u64 {
    1500
}

fn default_taken_email() -> String {
    "test@test.com".to_string()
}

fn default_form_id() -> String {
    "registrationForm".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            access_token: default_access_token(),
            api_version: default_api_version(),
            endpoint: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            domain: None,
            legacy_url: None,
            platform_shop: None,
            fallback_domain: default_fallback_domain(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_fallback_enabled(),
            delay_ms: default_fallback_delay_ms(),
            taken_email: default_taken_email(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
        }
    }
}
