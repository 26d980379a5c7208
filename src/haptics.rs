//! Best-effort haptic feedback
//!
//! Haptics are cosmetic: a missing or failing engine is logged and the
//! gesture carries on without feedback.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, trace, warn};

use crate::error::{Error, Result};
use crate::input::InputSource;

/// Feedback pattern played when the delete threshold is crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStyle {
    /// Strong single tap (touch screens)
    HeavyImpact,
    /// Detent click (trackpads)
    LevelChange,
}

impl HapticStyle {
    pub fn for_source(source: InputSource) -> Self {
        match source {
            InputSource::Touch => HapticStyle::HeavyImpact,
            InputSource::Trackpad => HapticStyle::LevelChange,
        }
    }
}

/// Platform haptic engine
pub trait HapticSink {
    fn trigger(&mut self, style: HapticStyle) -> Result<()>;
}

/// Haptic engine with an explicit "unavailable" state
pub enum HapticFeedback {
    Available(Box<dyn HapticSink>),
    Unavailable { reason: String },
}

impl HapticFeedback {
    pub fn new(sink: impl HapticSink + 'static) -> Self {
        HapticFeedback::Available(Box::new(sink))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        HapticFeedback::Unavailable {
            reason: reason.into(),
        }
    }

    /// Build the engine, falling back to `Unavailable` if construction fails
    pub fn probe<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn HapticSink>>,
    {
        match init() {
            Ok(sink) => HapticFeedback::Available(sink),
            Err(e) => {
                warn!("Haptic engine unavailable, continuing without feedback: {}", e);
                HapticFeedback::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, HapticFeedback::Available(_))
    }

    /// Fire and forget. A failing engine is disabled for the rest of the item's life.
    pub fn fire(&mut self, style: HapticStyle) {
        let result = match self {
            HapticFeedback::Available(sink) => sink.trigger(style),
            HapticFeedback::Unavailable { reason } => {
                trace!(?style, %reason, "Skipping haptic");
                return;
            }
        };

        if let Err(e) = result {
            warn!(?style, "Haptic trigger failed, disabling haptics: {}", e);
            *self = HapticFeedback::Unavailable {
                reason: e.to_string(),
            };
        }
    }
}

impl std::fmt::Debug for HapticFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticFeedback::Available(_) => f.write_str("HapticFeedback::Available"),
            HapticFeedback::Unavailable { reason } => f
                .debug_struct("HapticFeedback::Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Sink that only logs and counts; for headless runs
#[derive(Debug, Default, Clone)]
pub struct LogHaptics {
    fired: Rc<Cell<usize>>,
}

impl LogHaptics {
    /// Share a counter between several sinks
    pub fn with_counter(fired: Rc<Cell<usize>>) -> Self {
        Self { fired }
    }

    pub fn fired(&self) -> usize {
        self.fired.get()
    }
}

impl HapticSink for LogHaptics {
    fn trigger(&mut self, style: HapticStyle) -> Result<()> {
        self.fired.set(self.fired.get() + 1);
        info!(?style, "Haptic");
        Ok(())
    }
}

/// Sink that always fails, for platforms without a haptic engine
#[derive(Debug, Default)]
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn trigger(&mut self, _style: HapticStyle) -> Result<()> {
        Err(Error::HapticUnavailable("no haptic hardware".to_string()))
    }
}
