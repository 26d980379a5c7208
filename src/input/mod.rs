//! Input handling - gesture samples, platform adapters, gesture translation
//!
//! This module provides:
//! - The uniform `{phase, dx, dy, velocity}` sample every input path reduces to
//! - Adapters translating touch pans and trackpad scrolls into samples
//! - The gesture translator turning samples into offsets and decisions

mod adapter;
mod gestures;

pub use adapter::*;
pub use gestures::*;

use serde::{Deserialize, Serialize};

/// 2D displacement or velocity in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when horizontal movement dominates vertical movement
    pub fn is_horizontal(&self) -> bool {
        self.x.abs() > self.y.abs()
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Phase of a gesture sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    Change,
    End,
    Cancel,
}

/// Which kind of device produced a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// Velocity-gated drag recognizer; competes with vertical scrolling
    #[default]
    Touch,
    /// Wheel/scroll delta stream with momentum phases
    Trackpad,
}

/// One phase-tagged input sample for a single item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: Phase,
    pub source: InputSource,
    /// Displacement since the previous sample
    pub delta: Vector,
    /// Velocity reported at `Begin`; zero otherwise
    pub velocity: Vector,
}

impl GestureSample {
    pub fn begin(source: InputSource, velocity: Vector) -> Self {
        Self {
            phase: Phase::Begin,
            source,
            delta: Vector::ZERO,
            velocity,
        }
    }

    pub fn change(source: InputSource, dx: f64, dy: f64) -> Self {
        Self {
            phase: Phase::Change,
            source,
            delta: Vector::new(dx, dy),
            velocity: Vector::ZERO,
        }
    }

    pub fn end(source: InputSource) -> Self {
        Self {
            phase: Phase::End,
            source,
            delta: Vector::ZERO,
            velocity: Vector::ZERO,
        }
    }

    pub fn cancel(source: InputSource) -> Self {
        Self {
            phase: Phase::Cancel,
            source,
            delta: Vector::ZERO,
            velocity: Vector::ZERO,
        }
    }
}
