//! Error types for gesture translation, haptics and configuration

use thiserror::Error;

use crate::input::Phase;

#[derive(Error, Debug)]
pub enum Error {
    #[error("gesture began while already dragging")]
    BeginWhileDragging,

    #[error("{0:?} received while not dragging")]
    NotDragging(Phase),

    #[error("haptic engine unavailable: {0}")]
    HapticUnavailable(String),

    #[error("haptic trigger failed: {0}")]
    Haptic(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] toml::de::Error),

    #[error("failed to parse gesture script: {0}")]
    ScriptParse(#[source] toml::de::Error),

    #[error("unknown item in script: {0}")]
    UnknownItem(String),

    #[error("item declared twice in script: {0}")]
    DuplicateItem(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
