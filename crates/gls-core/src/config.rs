//! Listing configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for directory listings.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ListingConfig {
    /// Include hidden files (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// List directories before files.
    #[builder(default = "false")]
    #[serde(default)]
    pub directories_first: bool,

    /// Resolve symlinks so links to directories can be entered.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Cap on entries returned per listing (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_entries: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl ListingConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.max_entries {
            return Err("max_entries must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ListingConfig {
    /// Create a new listing config builder.
    pub fn builder() -> ListingConfigBuilder {
        ListingConfigBuilder::default()
    }

    /// Check if hidden files should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            directories_first: false,
            follow_symlinks: true,
            max_entries: None,
        }
    }
}
