//! Change notifications
//!
//! Subscribers receive one typed event per committed change. Payloads
//! carry only the ids that changed, never full snapshots; a robust view
//! layer re-reads the collection after any event instead of patching its
//! own copy of the state.

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

/// Direction for [`TabCollection::move_tab`](crate::TabCollection::move_tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Event names, usable as a subscription filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TabAdded,
    TabRemoved,
    ActiveTabChanged,
    TabMoved,
    TabRenamed,
}

/// A committed change to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TabEvent {
    TabAdded { id: TabId, position: usize },
    TabRemoved { id: TabId },
    /// `id` is `None` when removing the last tab cleared the designation.
    ActiveTabChanged { id: Option<TabId> },
    TabMoved { id: TabId, new_position: usize },
    TabRenamed { id: TabId, title: String },
}

impl TabEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TabEvent::TabAdded { .. } => EventKind::TabAdded,
            TabEvent::TabRemoved { .. } => EventKind::TabRemoved,
            TabEvent::ActiveTabChanged { .. } => EventKind::ActiveTabChanged,
            TabEvent::TabMoved { .. } => EventKind::TabMoved,
            TabEvent::TabRenamed { .. } => EventKind::TabRenamed,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        let id = TabId::new();
        assert_eq!(
            TabEvent::TabAdded { id, position: 0 }.kind(),
            EventKind::TabAdded
        );
        assert_eq!(
            TabEvent::ActiveTabChanged { id: None }.kind(),
            EventKind::ActiveTabChanged
        );
    }

    #[test]
    fn test_serialized_shape() {
        let id = TabId::new();
        let json = serde_json::to_value(TabEvent::TabMoved {
            id,
            new_position: 2,
        })
        .unwrap();

        assert_eq!(json["event"], "tab_moved");
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["new_position"], 2);
    }
}
