//! Swipe-to-delete for list items
//!
//! - Touch pans and trackpad scrolls reduced to one gesture sample stream
//! - A per-item translator deciding peek, delete or close
//! - A shared reveal slot so only one item is open at a time
//! - Best-effort haptics and a render snapshot for the presentation layer

pub mod config;
pub mod error;
pub mod haptics;
pub mod input;
pub mod item;
pub mod presentation;
pub mod replay;
pub mod reveal;

pub use config::Config;
pub use error::{Error, Result};
pub use haptics::{HapticFeedback, HapticSink, HapticStyle};
pub use input::{GestureSample, GestureTranslator, InputAdapter, InputSource, NativeEvent};
pub use item::{DeletableItem, ItemPhase};
pub use presentation::RenderState;
pub use reveal::{ItemId, RevealChange, RevealCoordinator, RevealObserver};
