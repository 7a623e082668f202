//! Ordered tab collection
//!
//! `order` is the authoritative left-to-right display order; `by_id` holds
//! the records. The two always carry the same id set, and the active id is
//! always a member of `order` (or unset when the collection is empty).
//! Every mutation validates before touching state, so a failed call leaves
//! the collection exactly as it was and fires nothing.
//!
//! Notifications are delivered synchronously after the mutation commits
//! and the write lock is released. Mutating the collection from inside a
//! listener is rejected with [`TabError::Reentrancy`]; reads and
//! [`set_content`](TabCollection::set_content) remain callable there.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::TabsConfig;
use crate::error::TabError;
use crate::event::{Direction, EventKind, SubscriberId, TabEvent};
use crate::tab::{Tab, TabId};
use crate::Result;

struct State<C> {
    /// Authoritative display order
    order: Vec<TabId>,
    /// Records keyed by id; key set always equals `order`'s contents
    by_id: HashMap<TabId, Tab<C>>,
    /// Currently active tab, unset only when the collection is empty
    active: Option<TabId>,
    /// Tabs ever created, used to number generated titles
    created_count: u64,
}

impl<C> State<C> {
    fn position_of(&self, id: &TabId) -> Option<usize> {
        self.order.iter().position(|t| t == id)
    }
}

struct Subscriber {
    id: SubscriberId,
    filter: Option<EventKind>,
    listener: Box<dyn FnMut(&TabEvent) + Send>,
}

/// Clears the dispatch flag even if a listener panics.
struct DispatchGuard<'a>(&'a AtomicBool);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Ordered, uniquely keyed set of tabs with one active designation.
///
/// Owned by a single widget instance. `Clone` produces a shared handle to
/// the same state, intended for that widget's own listeners and adapters,
/// not for sharing one collection across independent widgets.
pub struct TabCollection<C> {
    state: Arc<RwLock<State<C>>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    /// Set while listener notifications are being delivered
    dispatching: Arc<AtomicBool>,
    next_subscriber: Arc<AtomicU64>,
    config: Arc<TabsConfig>,
}

impl<C: Clone> TabCollection<C> {
    pub fn new() -> Self {
        Self::with_config(TabsConfig::default())
    }

    pub fn with_config(config: TabsConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                order: Vec::new(),
                by_id: HashMap::new(),
                active: None,
                created_count: 0,
            })),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            dispatching: Arc::new(AtomicBool::new(false)),
            next_subscriber: Arc::new(AtomicU64::new(0)),
            config: Arc::new(config),
        }
    }

    /// Create a tab and insert it after `after`, or at the end when
    /// `after` is absent or no longer present (a stale insertion anchor is
    /// not an error).
    ///
    /// The new tab becomes active only when the collection was empty.
    /// Emits `TabAdded`.
    pub fn add_tab(&self, after: Option<&TabId>, title: Option<String>) -> Result<Tab<C>> {
        self.mutation_guard("add_tab")?;

        let (tab, events) = {
            let mut state = self.state.write();
            state.created_count += 1;

            let title = title.unwrap_or_else(|| {
                format!("{} {}", self.config.title_prefix, state.created_count)
            });
            let mut tab = Tab::new(title);

            let position = match after.and_then(|a| state.position_of(a)) {
                Some(pos) => pos + 1,
                None => state.order.len(),
            };

            if state.order.is_empty() {
                tab.is_active = true;
                state.active = Some(tab.id);
            }
            state.order.insert(position, tab.id);
            state.by_id.insert(tab.id, tab.clone());

            tracing::info!(tab_id = %tab.id, title = %tab.title, position, "Created tab");

            let id = tab.id;
            (tab, vec![TabEvent::TabAdded { id, position }])
        };

        self.dispatch(&events);
        Ok(tab)
    }

    /// Remove a tab.
    ///
    /// Removing the active tab promotes its right-hand neighbor; when the
    /// removed tab was rightmost, the new last tab takes over; when the
    /// collection empties, the active designation is cleared. Emits
    /// `TabRemoved`, then `ActiveTabChanged` only if the active tab
    /// actually changed.
    pub fn remove_tab(&self, id: &TabId) -> Result<()> {
        self.mutation_guard("remove_tab")?;

        let events = {
            let mut state = self.state.write();
            let position = state.position_of(id).ok_or(TabError::NotFound(*id))?;

            // Pick the replacement before touching anything.
            let was_active = state.active.as_ref() == Some(id);
            let next_active = if !was_active {
                state.active
            } else if state.order.len() == 1 {
                None
            } else if position + 1 < state.order.len() {
                Some(state.order[position + 1])
            } else {
                Some(state.order[position - 1])
            };

            state.order.remove(position);
            state.by_id.remove(id);

            let mut events = vec![TabEvent::TabRemoved { id: *id }];
            if was_active {
                state.active = next_active;
                if let Some(next) = next_active {
                    if let Some(tab) = state.by_id.get_mut(&next) {
                        tab.is_active = true;
                    }
                }
                events.push(TabEvent::ActiveTabChanged { id: next_active });
            }

            tracing::info!(tab_id = %id, "Removed tab");

            events
        };

        self.dispatch(&events);
        Ok(())
    }

    /// Make `id` the active tab.
    ///
    /// Re-activating the current tab leaves state untouched but still
    /// emits `ActiveTabChanged`, so callers can treat activation as
    /// idempotent without tracking whether it was a no-op.
    pub fn set_active_tab(&self, id: &TabId) -> Result<()> {
        self.mutation_guard("set_active_tab")?;

        {
            let mut state = self.state.write();
            if !state.by_id.contains_key(id) {
                return Err(TabError::NotFound(*id));
            }

            if state.active.as_ref() != Some(id) {
                if let Some(prev) = state.active.take() {
                    if let Some(tab) = state.by_id.get_mut(&prev) {
                        tab.is_active = false;
                    }
                }
                if let Some(tab) = state.by_id.get_mut(id) {
                    tab.is_active = true;
                }
                state.active = Some(*id);
            }

            tracing::debug!(tab_id = %id, "Activated tab");
        }

        self.dispatch(&[TabEvent::ActiveTabChanged { id: Some(*id) }]);
        Ok(())
    }

    /// Swap `id` with its immediate neighbor in `direction`.
    ///
    /// A tab already at the boundary (leftmost moving left, rightmost
    /// moving right) is a silent no-op with no event, matching the strip
    /// UI which hides move buttons at the ends. Emits `TabMoved` only when
    /// a swap occurred.
    pub fn move_tab(&self, id: &TabId, direction: Direction) -> Result<()> {
        self.mutation_guard("move_tab")?;

        let moved = {
            let mut state = self.state.write();
            let position = state.position_of(id).ok_or(TabError::NotFound(*id))?;

            let target = match direction {
                Direction::Left if position > 0 => Some(position - 1),
                Direction::Right if position + 1 < state.order.len() => Some(position + 1),
                _ => None,
            };

            if let Some(target) = target {
                state.order.swap(position, target);
                tracing::debug!(tab_id = %id, new_position = target, "Moved tab");
            }
            target
        };

        if let Some(new_position) = moved {
            self.dispatch(&[TabEvent::TabMoved {
                id: *id,
                new_position,
            }]);
        }
        Ok(())
    }

    /// Update a tab's header text. Emits `TabRenamed`.
    pub fn rename_tab(&self, id: &TabId, title: String) -> Result<()> {
        self.mutation_guard("rename_tab")?;

        {
            let mut state = self.state.write();
            let tab = state.by_id.get_mut(id).ok_or(TabError::NotFound(*id))?;
            tab.set_title(title.clone());
            tracing::debug!(tab_id = %id, title = %title, "Renamed tab");
        }

        self.dispatch(&[TabEvent::TabRenamed { id: *id, title }]);
        Ok(())
    }

    /// Attach the host document handle for a tab's body content.
    ///
    /// Fires no event and is exempt from the reentrancy guard: the
    /// document synchronizer attaches content from inside the `TabAdded`
    /// notification, which is exactly this call.
    pub fn set_content(&self, id: &TabId, content: C) -> Result<()> {
        let mut state = self.state.write();
        let tab = state.by_id.get_mut(id).ok_or(TabError::NotFound(*id))?;
        tab.set_content(content);
        Ok(())
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: &TabId) -> Result<Tab<C>> {
        self.state
            .read()
            .by_id
            .get(id)
            .cloned()
            .ok_or(TabError::NotFound(*id))
    }

    /// Snapshot of all tabs in display order.
    pub fn ordered_tabs(&self) -> Vec<Tab<C>> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect()
    }

    /// The active tab, if the collection is non-empty.
    pub fn active_tab(&self) -> Option<Tab<C>> {
        let state = self.state.read();
        state.active.and_then(|id| state.by_id.get(&id).cloned())
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.state.read().active
    }

    /// Display position of a tab, if present.
    pub fn position(&self, id: &TabId) -> Option<usize> {
        self.state.read().position_of(id)
    }

    pub fn len(&self) -> usize {
        self.state.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().order.is_empty()
    }

    /// Register a listener for every event.
    pub fn subscribe<F>(&self, listener: F) -> Result<SubscriberId>
    where
        F: FnMut(&TabEvent) + Send + 'static,
    {
        self.register(None, Box::new(listener))
    }

    /// Register a listener for one event kind only.
    pub fn subscribe_to<F>(&self, kind: EventKind, listener: F) -> Result<SubscriberId>
    where
        F: FnMut(&TabEvent) + Send + 'static,
    {
        self.register(Some(kind), Box::new(listener))
    }

    /// Drop a listener. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> Result<bool> {
        self.mutation_guard("unsubscribe")?;

        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        Ok(subscribers.len() != before)
    }

    fn register(
        &self,
        filter: Option<EventKind>,
        listener: Box<dyn FnMut(&TabEvent) + Send>,
    ) -> Result<SubscriberId> {
        self.mutation_guard("subscribe")?;

        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push(Subscriber {
            id,
            filter,
            listener,
        });
        Ok(id)
    }

    fn mutation_guard(&self, operation: &'static str) -> Result<()> {
        if self.dispatching.load(Ordering::Acquire) {
            return Err(TabError::Reentrancy { operation });
        }
        Ok(())
    }

    fn dispatch(&self, events: &[TabEvent]) {
        if events.is_empty() {
            return;
        }

        let mut subscribers = self.subscribers.lock();
        self.dispatching.store(true, Ordering::Release);
        let _guard = DispatchGuard(&self.dispatching);

        for event in events {
            for subscriber in subscribers.iter_mut() {
                if subscriber.filter.map_or(true, |k| k == event.kind()) {
                    (subscriber.listener)(event);
                }
            }
        }
    }
}

impl<C: Clone> Default for TabCollection<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for TabCollection<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            dispatching: Arc::clone(&self.dispatching),
            next_subscriber: Arc::clone(&self.next_subscriber),
            config: Arc::clone(&self.config),
        }
    }
}
