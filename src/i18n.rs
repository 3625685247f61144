//! Internationalization (i18n) module
//!
//! Picks the UI language from the system locale. Supports English and
//! Chinese Simplified. Log messages remain in English.

/// Locale used when the system locale is not supported
pub const FALLBACK_LOCALE: &str = "en";

/// Locales shipped in `locales/`
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// Map a system locale tag (`zh_CN.UTF-8`, `zh-Hans-CN`, `en-US`, ...) to a shipped locale
pub fn resolve_locale(tag: &str) -> &'static str {
    let tag = tag.to_lowercase();

    if tag.starts_with("zh") || tag.contains("hans") || tag.contains("chinese") {
        return "zh-CN";
    }

    FALLBACK_LOCALE
}

/// Detect the system locale and make it current
pub fn init_locale() {
    let detected = sys_locale::get_locale()
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    let locale = resolve_locale(&detected);

    rust_i18n::set_locale(locale);
    tracing::debug!(detected = %detected, locale, "Locale initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_chinese_tags() {
        assert_eq!(resolve_locale("zh_CN.UTF-8"), "zh-CN");
        assert_eq!(resolve_locale("zh-Hans-CN"), "zh-CN");
        assert_eq!(resolve_locale("ZH-TW"), "zh-CN");
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(resolve_locale("en-US"), "en");
        assert_eq!(resolve_locale("de_DE.UTF-8"), "en");
        assert_eq!(resolve_locale(""), "en");
    }

    #[test]
    fn test_resolved_locales_are_shipped() {
        for tag in ["zh", "fr", "en-GB"] {
            assert!(SUPPORTED_LOCALES.contains(&resolve_locale(tag)));
        }
    }
}
