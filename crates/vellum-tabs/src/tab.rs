//! Tab record and identifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tab, stable across reorders.
///
/// Ids are minted by the collection and never reused within one
/// collection's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the ordered tab strip.
///
/// `content` is an opaque handle into the host document model. The
/// collection stores it without interpreting it and never creates or
/// destroys the referenced content; that belongs to the host, driven by
/// [`TabEvent`](crate::TabEvent) notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab<C> {
    /// Unique identifier
    pub id: TabId,
    /// Header text shown in the strip
    pub title: String,
    /// Host document handle for the tab's body, attached after creation
    pub content: Option<C>,
    /// True for exactly the record matching the collection's active id
    pub is_active: bool,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl<C> Tab<C> {
    pub(crate) fn new(title: String) -> Self {
        let now = Utc::now();

        Self {
            id: TabId::new(),
            title,
            content: None,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update header text
    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Attach the host content handle
    pub(crate) fn set_content(&mut self, content: C) {
        self.content = Some(content);
        self.updated_at = Utc::now();
    }

    /// Get display title (with fallback for unnamed tabs)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab: Tab<String> = Tab::new("Notes".to_string());
        assert_eq!(tab.title, "Notes");
        assert!(!tab.is_active);
        assert!(tab.content.is_none());
    }

    #[test]
    fn test_display_title_fallback() {
        let mut tab: Tab<String> = Tab::new(String::new());
        assert_eq!(tab.display_title(), "Untitled");

        tab.set_title("Chapter 1".to_string());
        assert_eq!(tab.display_title(), "Chapter 1");
    }

    #[test]
    fn test_ids_are_unique() {
        let a: Tab<()> = Tab::new("a".to_string());
        let b: Tab<()> = Tab::new("b".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rename_bumps_updated_at() {
        let mut tab: Tab<String> = Tab::new("Old".to_string());
        let before = tab.updated_at;
        tab.set_title("New".to_string());
        assert!(tab.updated_at >= before);
        assert_eq!(tab.title, "New");
    }
}
