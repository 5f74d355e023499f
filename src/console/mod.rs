//! List/detail plumbing shared by the host and admin screens: paging,
//! confirmation prompts for status changes, PIN entry, KYC completion and
//! trust configuration edits.

pub mod events;
pub mod kyc;
pub mod pin;
pub mod support;
pub mod trust;

use thiserror::Error;

use crate::error::ApiError;
use crate::models::PageMeta;

pub use events::EventAction;
pub use support::SupportTransition;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("page {requested} is outside 1..={last}")]
    PageOutOfRange { requested: u32, last: u32 },
    #[error("{0}")]
    Pin(String),
    #[error("cannot {action} a ticket that is {status}")]
    Transition { action: &'static str, status: String },
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("unknown trust setting: {0}")]
    UnknownSetting(String),
    #[error("no trust tier at position {0}")]
    UnknownTier(usize),
    #[error("{0}")]
    Invalid(String),
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: ApiError,
    },
}

impl ConsoleError {
    pub(crate) fn from_api(err: ApiError, fallback: &str) -> Self {
        let message = err.message_or(fallback).to_string();
        ConsoleError::Api {
            message,
            source: err,
        }
    }
}

/// Text shown before a status change is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub destructive: bool,
}

/// Pages are numbered from 1; checked before any request is made.
pub fn requested_page(requested: u32) -> Result<u32, ConsoleError> {
    if requested == 0 {
        return Err(ConsoleError::PageOutOfRange { requested, last: 1 });
    }
    Ok(requested)
}

/// Page navigation is limited to `1..=last_page`.
pub fn target_page(meta: &PageMeta, requested: u32) -> Result<u32, ConsoleError> {
    let last = meta.last_page.max(1);
    if (1..=last).contains(&requested) {
        Ok(requested)
    } else {
        Err(ConsoleError::PageOutOfRange { requested, last })
    }
}
