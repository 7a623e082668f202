//! Vellum Tab Widget
//!
//! Thin glue between the host editor and the tab collection: translates
//! raw strip interactions into collection calls, exposes render-ready
//! snapshots, and keeps the host document model in step with tab
//! lifecycle events. Rendering and the document tree themselves stay on
//! the host side; everything here works through events and snapshots.

mod action;
mod error;
mod strip;
mod sync;

pub use action::{TabAction, TabsWidget};
pub use error::WidgetError;
pub use strip::{tab_strip, TabInfo};
pub use sync::{bind_document_sync, bind_event_bridge, DocumentSync};

pub type Result<T> = std::result::Result<T, WidgetError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
