//! Vellum Tab Collection
//!
//! An ordered, uniquely keyed set of tab records with a single active
//! designation. Mutations validate first, apply atomically, then notify
//! subscribers; the rendering layer and the host document model stay in
//! step by listening for [`TabEvent`]s and re-reading the collection.

mod collection;
mod config;
mod error;
mod event;
mod tab;

pub use collection::TabCollection;
pub use config::TabsConfig;
pub use error::TabError;
pub use event::{Direction, EventKind, SubscriberId, TabEvent};
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
