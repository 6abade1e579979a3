//! Shop-domain resolution.

use super::types::ShopConfig;

/// Host suffix identifying a storefront served by the platform itself.
pub const PLATFORM_HOST_SUFFIX: &str = ".myshopify.com";

/// Where a resolved shop domain came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopDomainSource {
    Injected,
    LegacyAlias,
    PlatformShop,
    PageHost,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShopDomain {
    pub domain: String,
    pub source: ShopDomainSource,
}

/// Picks the shop domain from `shop` and the current page host.
///
/// Priority: injected domain, legacy alias, platform shop identifier, the
/// page host when it is a platform host, then the configured fallback.
/// Empty values are skipped. Scheme prefixes and trailing slashes are
/// removed so the result can be dropped into an endpoint URL.
pub fn resolve_shop_domain(shop: &ShopConfig, page_host: &str) -> ResolvedShopDomain {
    let candidates = [
        (shop.domain.as_deref(), ShopDomainSource::Injected),
        (shop.legacy_url.as_deref(), ShopDomainSource::LegacyAlias),
        (shop.platform_shop.as_deref(), ShopDomainSource::PlatformShop),
        (
            Some(page_host).filter(|host| host.contains(PLATFORM_HOST_SUFFIX)),
            ShopDomainSource::PageHost,
        ),
    ];

    for (value, source) in candidates {
        if let Some(domain) = value.map(normalize_domain).filter(|d| !d.is_empty()) {
            return ResolvedShopDomain { domain, source };
        }
    }

    tracing::warn!(
        fallback = %shop.fallback_domain,
        "Shop domain not found. Set shop.domain in the configuration."
    );
    ResolvedShopDomain {
        domain: normalize_domain(&shop.fallback_domain),
        source: ShopDomainSource::Fallback,
    }
}

fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}
