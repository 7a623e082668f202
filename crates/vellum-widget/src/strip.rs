//! Render-ready tab strip snapshot

use serde::{Deserialize, Serialize};
use vellum_tabs::TabCollection;

/// What the view layer needs to draw one tab header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub position: usize,
    /// Move buttons are hidden at the strip ends; these mirror the
    /// collection's boundary no-op rule so the view never offers a move
    /// the collection would ignore.
    pub can_move_left: bool,
    pub can_move_right: bool,
}

/// Full strip snapshot in display order.
///
/// Event payloads carry only changed ids, so the view re-reads this after
/// every notification instead of patching its own copy.
pub fn tab_strip<C: Clone>(tabs: &TabCollection<C>) -> Vec<TabInfo> {
    let snapshot = tabs.ordered_tabs();
    let last = snapshot.len().saturating_sub(1);

    snapshot
        .iter()
        .enumerate()
        .map(|(position, tab)| TabInfo {
            id: tab.id.to_string(),
            title: tab.display_title().to_string(),
            is_active: tab.is_active,
            position,
            can_move_left: position > 0,
            can_move_right: position < last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_reflects_order_and_boundaries() {
        let tabs: TabCollection<String> = TabCollection::new();
        tabs.add_tab(None, Some("A".to_string())).unwrap();
        tabs.add_tab(None, Some("B".to_string())).unwrap();
        tabs.add_tab(None, Some("C".to_string())).unwrap();

        let strip = tab_strip(&tabs);
        assert_eq!(strip.len(), 3);

        assert!(strip[0].is_active);
        assert!(!strip[0].can_move_left);
        assert!(strip[0].can_move_right);

        assert!(strip[1].can_move_left);
        assert!(strip[1].can_move_right);

        assert!(!strip[2].can_move_right);
        assert_eq!(strip[2].position, 2);
    }

    #[test]
    fn test_single_tab_has_no_moves() {
        let tabs: TabCollection<String> = TabCollection::new();
        tabs.add_tab(None, None).unwrap();

        let strip = tab_strip(&tabs);
        assert!(!strip[0].can_move_left);
        assert!(!strip[0].can_move_right);
    }

    #[test]
    fn test_untitled_tabs_get_the_fallback() {
        let tabs: TabCollection<String> = TabCollection::new();
        let id = tabs.add_tab(None, Some(String::new())).unwrap().id;
        tabs.rename_tab(&id, String::new()).unwrap();

        assert_eq!(tab_strip(&tabs)[0].title, "Untitled");
    }
}
