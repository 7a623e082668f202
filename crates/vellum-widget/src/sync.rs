//! Host document synchronization
//!
//! The collection never creates or destroys tab body content; the host
//! document model does, driven by the collection's events. The hooks here
//! wire a host synchronizer and an event bridge onto one collection.

use vellum_tabs::{SubscriberId, TabCollection, TabEvent, TabId};

use crate::Result;

/// Host document model hooks for tab body content.
pub trait DocumentSync<C>: Send + 'static {
    /// Create a content node for a new tab and hand back its handle.
    fn create_content(&mut self, id: &TabId) -> C;
    /// Tear down the content node of a removed tab.
    fn destroy_content(&mut self, id: &TabId);
    /// Reorder content nodes to match the strip order.
    fn reorder_content(&mut self, order: &[TabId]);
}

/// Wire a document synchronizer to a collection.
///
/// Content is attached from inside the `TabAdded` notification;
/// `set_content` fires no event, so the flow cannot recurse.
pub fn bind_document_sync<C, S>(tabs: &TabCollection<C>, mut sync: S) -> Result<SubscriberId>
where
    C: Clone + Send + Sync + 'static,
    S: DocumentSync<C>,
{
    let handle = tabs.clone();
    let id = tabs.subscribe(move |event| match event {
        TabEvent::TabAdded { id, .. } => {
            let content = sync.create_content(id);
            if let Err(e) = handle.set_content(id, content) {
                tracing::warn!(tab_id = %id, error = %e, "Content attach failed");
            }
        }
        TabEvent::TabRemoved { id } => sync.destroy_content(id),
        TabEvent::TabMoved { .. } => {
            let order: Vec<TabId> = handle.ordered_tabs().iter().map(|t| t.id).collect();
            sync.reorder_content(&order);
        }
        TabEvent::ActiveTabChanged { .. } | TabEvent::TabRenamed { .. } => {}
    })?;

    Ok(id)
}

/// Forward every event to a host callback as a JSON payload.
pub fn bind_event_bridge<C, F>(tabs: &TabCollection<C>, mut forward: F) -> Result<SubscriberId>
where
    C: Clone,
    F: FnMut(&str) + Send + 'static,
{
    let id = tabs.subscribe(move |event| match serde_json::to_string(event) {
        Ok(payload) => forward(&payload),
        Err(e) => tracing::error!(error = %e, "Event serialization failed"),
    })?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;
    use vellum_tabs::Direction;

    /// Fake host document tree: a node id per tab plus their order.
    #[derive(Default)]
    struct FakeDocument {
        nodes: HashMap<TabId, String>,
        order: Vec<TabId>,
        next_node: u64,
    }

    #[derive(Clone, Default)]
    struct SharedDocument(Arc<Mutex<FakeDocument>>);

    impl DocumentSync<String> for SharedDocument {
        fn create_content(&mut self, id: &TabId) -> String {
            let mut doc = self.0.lock();
            doc.next_node += 1;
            let node = format!("node-{}", doc.next_node);
            doc.nodes.insert(*id, node.clone());
            doc.order.push(*id);
            node
        }

        fn destroy_content(&mut self, id: &TabId) {
            let mut doc = self.0.lock();
            doc.nodes.remove(id);
            doc.order.retain(|t| t != id);
        }

        fn reorder_content(&mut self, order: &[TabId]) {
            self.0.lock().order = order.to_vec();
        }
    }

    #[test]
    fn test_added_tabs_get_content_attached() {
        let tabs: TabCollection<String> = TabCollection::new();
        let doc = SharedDocument::default();
        bind_document_sync(&tabs, doc.clone()).unwrap();

        let a = tabs.add_tab(None, None).unwrap().id;

        assert_eq!(
            tabs.get_tab(&a).unwrap().content.as_deref(),
            Some("node-1")
        );
        assert!(doc.0.lock().nodes.contains_key(&a));
    }

    #[test]
    fn test_removed_tabs_drop_their_content() {
        let tabs: TabCollection<String> = TabCollection::new();
        let doc = SharedDocument::default();
        bind_document_sync(&tabs, doc.clone()).unwrap();

        let a = tabs.add_tab(None, None).unwrap().id;
        tabs.remove_tab(&a).unwrap();

        assert!(doc.0.lock().nodes.is_empty());
        assert!(doc.0.lock().order.is_empty());
    }

    #[test]
    fn test_moves_reorder_the_document() {
        let tabs: TabCollection<String> = TabCollection::new();
        let doc = SharedDocument::default();
        bind_document_sync(&tabs, doc.clone()).unwrap();

        let a = tabs.add_tab(None, None).unwrap().id;
        let b = tabs.add_tab(None, None).unwrap().id;
        tabs.move_tab(&b, Direction::Left).unwrap();

        assert_eq!(doc.0.lock().order, vec![b, a]);
    }

    #[test]
    fn test_event_bridge_emits_tagged_json() {
        let tabs: TabCollection<String> = TabCollection::new();
        let payloads: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&payloads);
        bind_event_bridge(&tabs, move |payload| sink.lock().push(payload.to_string())).unwrap();

        let a = tabs.add_tab(None, Some("A".to_string())).unwrap().id;
        tabs.rename_tab(&a, "B".to_string()).unwrap();

        let payloads = payloads.lock();
        let added: serde_json::Value = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(added["event"], "tab_added");
        assert_eq!(added["position"], 0);

        let renamed: serde_json::Value = serde_json::from_str(&payloads[1]).unwrap();
        assert_eq!(renamed["event"], "tab_renamed");
        assert_eq!(renamed["title"], "B");
    }
}
