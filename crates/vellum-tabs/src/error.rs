//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("{operation} called while notifications for an earlier mutation were still being delivered")]
    Reentrancy { operation: &'static str },
}
