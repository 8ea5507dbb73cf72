//! Page bar configuration
//!
//! Holds the seed pages, id strategy and the fixed offsets used to anchor
//! transient menus. Values can be loaded from a TOML file; every field has a
//! default so partial files are accepted.

use crate::id::IdStrategy;
use crate::page::DEFAULT_COPY_SUFFIX;
use crate::page_list::DEFAULT_PAGES;
use pagebar_core::{PageBarError, PageBarResult, PageType, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distance the settings menu is lifted above its page button
pub const DEFAULT_SETTINGS_MENU_LIFT: f32 = 230.0;

/// Horizontal offset of the gap add-page menu from the "+" control
pub const DEFAULT_ADD_MENU_OFFSET_X: f32 = -20.0;

/// Vertical gap between the "+" control and its add-page menu
pub const DEFAULT_ADD_MENU_OFFSET_Y: f32 = 5.0;

/// Extra room above the gap menu that still counts as "inside" on mouse-leave
pub const DEFAULT_HOVER_TOLERANCE: f32 = 5.0;

/// Configuration for a page bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBarConfig {
    /// Pages present when the editor opens
    pub initial_pages: Vec<PageType>,

    /// How new page ids are produced
    pub id_strategy: IdStrategy,

    /// Suffix appended to duplicated page labels
    pub copy_suffix: String,

    /// Upward offset of the settings menu from its page button
    pub settings_menu_lift: f32,

    /// Offset of the gap add-page menu from the "+" control's bottom-left corner
    pub add_menu_offset_x: f32,
    pub add_menu_offset_y: f32,

    /// Vertical tolerance above the gap add-page menu
    pub hover_tolerance: f32,

    /// Close an add-page menu after a page type is chosen from it
    pub close_add_menu_on_select: bool,
}

impl Default for PageBarConfig {
    fn default() -> Self {
        Self {
            initial_pages: DEFAULT_PAGES.to_vec(),
            id_strategy: IdStrategy::default(),
            copy_suffix: DEFAULT_COPY_SUFFIX.to_string(),
            settings_menu_lift: DEFAULT_SETTINGS_MENU_LIFT,
            add_menu_offset_x: DEFAULT_ADD_MENU_OFFSET_X,
            add_menu_offset_y: DEFAULT_ADD_MENU_OFFSET_Y,
            hover_tolerance: DEFAULT_HOVER_TOLERANCE,
            close_add_menu_on_select: false,
        }
    }
}

impl PageBarConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> PageBarResult<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> PageBarResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PageBarError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str, path: &Path) -> PageBarResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| PageBarError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> PageBarResult<String> {
        toml::to_string_pretty(self).map_err(|e| PageBarError::internal(e.to_string()))
    }
}

impl Validatable for PageBarConfig {
    fn validate(&self) -> PageBarResult<()> {
        if self.copy_suffix.is_empty() {
            return Err(PageBarError::invalid_config("copy_suffix must not be empty"));
        }
        let offsets = [
            ("settings_menu_lift", self.settings_menu_lift),
            ("add_menu_offset_x", self.add_menu_offset_x),
            ("add_menu_offset_y", self.add_menu_offset_y),
            ("hover_tolerance", self.hover_tolerance),
        ];
        if let Some((name, _)) = offsets.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PageBarError::invalid_config(format!(
                "{} must be a finite number",
                name
            )));
        }
        if self.hover_tolerance < 0.0 {
            return Err(PageBarError::invalid_config(
                "hover_tolerance must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PageBarConfig::default();
        assert_eq!(config.initial_pages, vec![PageType::Cover, PageType::Scheduling]);
        assert_eq!(config.copy_suffix, " (copy)");
        assert_eq!(config.settings_menu_lift, 230.0);
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PageBarConfig::from_toml_str(
            r#"
            initial_pages = ["Form", "Ending"]
            id_strategy = "uuid"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_pages, vec![PageType::Form, PageType::Ending]);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.hover_tolerance, DEFAULT_HOVER_TOLERANCE);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PageBarConfig {
            copy_suffix: " - copy".to_string(),
            close_add_menu_on_select: true,
            ..PageBarConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(PageBarConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = PageBarConfig::from_toml_str("copy_suffix = \"\"").unwrap_err();
        assert!(matches!(err, PageBarError::InvalidConfig(_)));

        let err = PageBarConfig::from_toml_str("hover_tolerance = -1.0").unwrap_err();
        assert!(matches!(err, PageBarError::InvalidConfig(_)));

        let err = PageBarConfig::from_toml_str("initial_pages = [\"Quiz\"]").unwrap_err();
        assert!(matches!(err, PageBarError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "settings_menu_lift = 120.0").unwrap();
        let config = PageBarConfig::load(file.path()).unwrap();
        assert_eq!(config.settings_menu_lift, 120.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PageBarConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_io());
    }
}
