//! Shared input adapters for touch and trackpad sources
//!
//! Each platform reports drags in its own shape. The adapters here reduce
//! them to `GestureSample`s so the translator never branches on platform:
//! 1. Touch: a pan recognizer reporting absolute translation and velocity
//! 2. Trackpad: scroll-wheel deltas tagged with a phase and a momentum phase

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{GestureSample, InputSource, Vector};

/// Pan recognizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanState {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// Touch-style drag event, translation measured from the gesture start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanEvent {
    pub state: PanState,
    pub translation: Vector,
    #[serde(default)]
    pub velocity: Vector,
}

/// Phase of a scroll-wheel event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPhase {
    #[default]
    None,
    MayBegin,
    Began,
    Changed,
    Stationary,
    Ended,
    Cancelled,
}

/// Trackpad scroll event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollWheelEvent {
    pub phase: ScrollPhase,
    #[serde(default)]
    pub momentum_phase: ScrollPhase,
    /// Scroll delta since the previous event
    pub delta: Vector,
}

/// Event as delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    Pan(PanEvent),
    Scroll(ScrollWheelEvent),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PanGate {
    Idle,
    Tracking { last_translation: Vector },
    /// Vertical-dominant start; left to the enclosing scroll container
    Rejected,
}

/// Velocity-gated horizontal pan
#[derive(Debug, Clone)]
pub struct TouchDragAdapter {
    gate: PanGate,
}

impl Default for TouchDragAdapter {
    fn default() -> Self {
        Self { gate: PanGate::Idle }
    }
}

impl TouchDragAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a horizontal pan has been accepted and not yet finished
    pub fn is_tracking(&self) -> bool {
        matches!(self.gate, PanGate::Tracking { .. })
    }

    pub fn translate(&mut self, event: &PanEvent) -> Vec<GestureSample> {
        const SOURCE: InputSource = InputSource::Touch;

        match (event.state, self.gate) {
            (PanState::Began, PanGate::Tracking { .. }) => {
                // Let the translator report the duplicate begin
                vec![GestureSample::begin(SOURCE, event.velocity)]
            }
            (PanState::Began, _) => {
                if !event.velocity.is_horizontal() {
                    debug!(velocity = ?event.velocity, "Vertical pan, leaving it to the scroll container");
                    self.gate = PanGate::Rejected;
                    return Vec::new();
                }

                self.gate = PanGate::Tracking {
                    last_translation: event.translation,
                };

                let mut samples = vec![GestureSample::begin(SOURCE, event.velocity)];
                if event.translation != Vector::ZERO {
                    samples.push(GestureSample::change(
                        SOURCE,
                        event.translation.x,
                        event.translation.y,
                    ));
                }
                samples
            }
            (PanState::Changed, PanGate::Tracking { last_translation }) => {
                let delta = event.translation - last_translation;
                self.gate = PanGate::Tracking {
                    last_translation: event.translation,
                };
                vec![GestureSample::change(SOURCE, delta.x, delta.y)]
            }
            (PanState::Ended, PanGate::Tracking { .. }) => {
                self.gate = PanGate::Idle;
                vec![GestureSample::end(SOURCE)]
            }
            (PanState::Cancelled | PanState::Failed, PanGate::Tracking { .. }) => {
                self.gate = PanGate::Idle;
                vec![GestureSample::cancel(SOURCE)]
            }
            (PanState::Ended | PanState::Cancelled | PanState::Failed, _) => {
                self.gate = PanGate::Idle;
                Vec::new()
            }
            (PanState::Changed, _) => Vec::new(),
        }
    }
}

/// Two-finger horizontal trackpad scroll
#[derive(Debug, Clone, Default)]
pub struct TrackpadScrollAdapter {
    active: bool,
}

impl TrackpadScrollAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.active
    }

    pub fn translate(&mut self, event: &ScrollWheelEvent) -> Vec<GestureSample> {
        const SOURCE: InputSource = InputSource::Trackpad;

        // Inertial scrolling after the fingers lift never moves the item
        if matches!(event.momentum_phase, ScrollPhase::Began | ScrollPhase::Changed) {
            return Vec::new();
        }

        match event.phase {
            ScrollPhase::Began | ScrollPhase::Changed | ScrollPhase::Stationary => {
                let mut samples = Vec::with_capacity(2);
                if !self.active {
                    self.active = true;
                    samples.push(GestureSample::begin(SOURCE, Vector::ZERO));
                }
                samples.push(GestureSample::change(SOURCE, event.delta.x, event.delta.y));
                samples
            }
            ScrollPhase::Ended if self.active => {
                self.active = false;
                vec![
                    GestureSample::change(SOURCE, event.delta.x, event.delta.y),
                    GestureSample::end(SOURCE),
                ]
            }
            ScrollPhase::Cancelled if self.active => {
                self.active = false;
                vec![GestureSample::cancel(SOURCE)]
            }
            // Phaseless wheels and stray ends carry no drag
            _ => Vec::new(),
        }
    }
}

/// Per-item adapter, one variant per input source
#[derive(Debug, Clone)]
pub enum InputAdapter {
    TouchDrag(TouchDragAdapter),
    TrackpadScroll(TrackpadScrollAdapter),
}

impl InputAdapter {
    pub fn for_source(source: InputSource) -> Self {
        match source {
            InputSource::Touch => InputAdapter::TouchDrag(TouchDragAdapter::new()),
            InputSource::Trackpad => InputAdapter::TrackpadScroll(TrackpadScrollAdapter::new()),
        }
    }

    pub fn source(&self) -> InputSource {
        match self {
            InputAdapter::TouchDrag(_) => InputSource::Touch,
            InputAdapter::TrackpadScroll(_) => InputSource::Trackpad,
        }
    }

    pub fn is_tracking(&self) -> bool {
        match self {
            InputAdapter::TouchDrag(adapter) => adapter.is_tracking(),
            InputAdapter::TrackpadScroll(adapter) => adapter.is_tracking(),
        }
    }

    pub fn translate(&mut self, event: &NativeEvent) -> Vec<GestureSample> {
        match (self, event) {
            (InputAdapter::TouchDrag(adapter), NativeEvent::Pan(pan)) => adapter.translate(pan),
            (InputAdapter::TrackpadScroll(adapter), NativeEvent::Scroll(scroll)) => {
                adapter.translate(scroll)
            }
            (adapter, event) => {
                warn!(source = ?adapter.source(), ?event, "Event does not match the item's input source");
                Vec::new()
            }
        }
    }
}
