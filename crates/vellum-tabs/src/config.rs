//! Collection configuration

use serde::{Deserialize, Serialize};

/// Controls how the collection fills in details callers omit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Prefix for generated titles when `add_tab` is given none.
    /// Titles are numbered from a counter that never resets, so a
    /// generated title is never repeated within one collection.
    pub title_prefix: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            title_prefix: "Tab".to_string(),
        }
    }
}
