//! UI action dispatch
//!
//! Tab headers and strip buttons forward raw interactions here. A stale
//! id is expected, not exceptional: the tab may have been removed between
//! render and click. Such actions are dropped quietly and the caller is
//! told to re-render from current state rather than shown an error.

use vellum_tabs::{Direction, TabCollection, TabError, TabId, TabsConfig};

use crate::Result;

/// A raw interaction on the tab strip.
#[derive(Debug, Clone)]
pub enum TabAction {
    /// "Add tab" button, inserting after the given tab when set
    Add { after: Option<TabId> },
    /// Close button on a tab header
    Close { id: TabId },
    /// Click on a tab header
    Activate { id: TabId },
    MoveLeft { id: TabId },
    MoveRight { id: TabId },
    /// Inline header edit committed
    Rename { id: TabId, title: String },
}

/// One tab strip bound to one collection instance.
pub struct TabsWidget<C> {
    tabs: TabCollection<C>,
}

impl<C: Clone> TabsWidget<C> {
    pub fn new() -> Self {
        Self::with_config(TabsConfig::default())
    }

    pub fn with_config(config: TabsConfig) -> Self {
        Self {
            tabs: TabCollection::with_config(config),
        }
    }

    /// The underlying collection, for subscriptions and reads.
    pub fn collection(&self) -> &TabCollection<C> {
        &self.tabs
    }

    /// Apply one interaction. Returns `true` when the caller should
    /// re-render, which includes dropped stale actions: the strip that
    /// produced them is out of date by definition.
    pub fn handle(&self, action: TabAction) -> Result<bool> {
        let outcome = match action {
            TabAction::Add { after } => self.tabs.add_tab(after.as_ref(), None).map(|_| ()),
            TabAction::Close { id } => self.tabs.remove_tab(&id),
            TabAction::Activate { id } => self.tabs.set_active_tab(&id),
            TabAction::MoveLeft { id } => self.tabs.move_tab(&id, Direction::Left),
            TabAction::MoveRight { id } => self.tabs.move_tab(&id, Direction::Right),
            TabAction::Rename { id, title } => self.tabs.rename_tab(&id, title),
        };

        match outcome {
            Ok(()) => Ok(true),
            Err(TabError::NotFound(id)) => {
                tracing::debug!(tab_id = %id, "Dropped action on stale tab");
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<C: Clone> Default for TabsWidget<C> {
    fn default() -> Self {
        Self::new()
    }
}
