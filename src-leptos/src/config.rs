//! Inline configuration block.

use crate::dom::Page;
use secure_files_types::UiConfig;

/// Id of the `<script type="application/json">` holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

/// Read overrides from `#ui-config`, falling back to defaults when the
/// block is absent or malformed.
pub fn load_config<P: Page>(page: &P) -> UiConfig {
    let Some(element) = page.element_by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };

    match UiConfig::from_json(&page.text(&element)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            UiConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;

    #[test]
    fn test_absent_block_gives_defaults() {
        let page = MemoryPage::new();
        assert_eq!(load_config(&page), UiConfig::default());
    }

    #[test]
    fn test_block_overrides() {
        let page = MemoryPage::new();
        let block = page.add("script", CONFIG_ELEMENT_ID, &[], None);
        page.set_text(&block, r#"{"theme_storage_key": "sfm-theme", "byte_decimals": 1}"#);

        let config = load_config(&page);
        assert_eq!(config.theme_storage_key, "sfm-theme");
        assert_eq!(config.byte_decimals, 1);
        assert_eq!(config.stats_url(), "/api/stats");
    }

    #[test]
    fn test_malformed_block_gives_defaults() {
        let page = MemoryPage::new();
        let block = page.add("script", CONFIG_ELEMENT_ID, &[], None);
        page.set_text(&block, "{ theme: dark }");

        assert_eq!(load_config(&page), UiConfig::default());
    }
}
