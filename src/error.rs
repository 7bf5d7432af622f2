//! Error types for the fallible seams of the app.
//!
//! None of these reach the user: callers log them and fall back to a default
//! or keep their previous state.

use thiserror::Error;

/// Reading a preference value failed.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("cannot decode preference '{key}': {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode preference '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown time format: {0:?}")]
    UnknownTimeFormat(String),

    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),
}

/// Formatting a clock failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("unknown time zone identifier: {0:?}")]
    InvalidTimeZone(String),
}

/// A placement request that was not carried out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejected {
    /// A move or its cooldown is still in progress.
    #[error("placement locked by a move in progress")]
    Busy,

    /// Neither the preferred nor the main screen could be resolved.
    #[error("no usable screen for placement")]
    NoScreen,
}
