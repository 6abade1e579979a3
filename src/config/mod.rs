mod loader;
mod shop;
mod types;

pub use loader::ConfigError;
pub use shop::{resolve_shop_domain, ResolvedShopDomain, ShopDomainSource, PLATFORM_HOST_SUFFIX};
pub use types::{Config, FallbackConfig, FormConfig, ShopConfig, StorefrontConfig};
