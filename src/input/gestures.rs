//! Gesture translation for swipe-to-delete
//!
//! Each item owns one translator. It turns the item's sample stream into:
//! - A live offset following the drag, clamped to the item's reveal extent
//! - A delete-threshold flag, with a one-shot haptic trigger on crossing
//! - A terminal decision when the gesture ends (delete, peek open, close)
//!
//! The translator knows nothing about other items; claiming and releasing
//! the shared reveal slot is left to whoever consumes its events.

use tracing::debug;

use super::{GestureSample, InputSource, Phase, Vector};
use crate::config::GestureConfig;
use crate::error::{Error, Result};

/// How the presentation layer should apply an offset change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Follows the pointer directly
    Interactive,
    /// Animated towards a rest position
    Animated,
}

/// Outcome of a finished gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Threshold crossed at release: the item is deleted
    CommitDelete,
    /// Rest at the peek offset, keeping the reveal slot
    SnapOpen,
    /// Rest fully closed, releasing the reveal slot
    SnapClosed,
}

/// Output of the translator
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// A drag session started
    Began { source: InputSource },

    /// Offsets changed
    OffsetChanged {
        live: f64,
        committed: f64,
        threshold_crossed: bool,
        transition: Transition,
    },

    /// The delete threshold was entered
    HapticTrigger { source: InputSource },

    /// The drag session finished
    Ended { decision: Decision },
}

/// State of a single drag, created on begin and dropped on end
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub source: InputSource,
    /// Displacement accumulated during this drag, always in `[-extent, 0]`
    pub live_offset: f64,
    /// Raw horizontal translation accepted since begin
    pub translation: f64,
    /// Vertical movement from vertical-dominant touch samples
    pub total_orthogonal: f64,
    pub haptic_fired: bool,
}

impl GestureSession {
    fn new(source: InputSource) -> Self {
        Self {
            source,
            live_offset: 0.0,
            translation: 0.0,
            total_orthogonal: 0.0,
            haptic_fired: false,
        }
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    Idle,
    Dragging(GestureSession),
    /// Forced closed mid-drag; the rest of that gesture is dropped
    Superseded,
}

/// Delete predicate: `extent / revealed <= ratio` while the drag is open.
///
/// A zero extent (width not yet measured) never crosses.
pub fn delete_threshold_crossed(extent: f64, live: f64, committed: f64, ratio: f64) -> bool {
    let revealed = -(live + committed);
    if live >= 0.0 || extent <= 0.0 || revealed <= 0.0 {
        return false;
    }
    extent / revealed <= ratio
}

/// Per-item swipe state machine
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    config: GestureConfig,
    width: f64,
    committed_offset: f64,
    state: SessionState,
}

impl GestureTranslator {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            width: 0.0,
            committed_offset: 0.0,
            state: SessionState::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the measured width; takes effect on the next sample
    pub fn set_width(&mut self, width: f64) {
        self.width = if width.is_finite() && width > 0.0 { width } else { 0.0 };
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Furthest the live offset may travel: `min(width, max_reveal_width)`
    pub fn reveal_extent(&self) -> f64 {
        self.width.min(self.config.max_reveal_width).max(0.0)
    }

    pub fn live_offset(&self) -> f64 {
        match &self.state {
            SessionState::Dragging(session) => session.live_offset,
            _ => 0.0,
        }
    }

    pub fn committed_offset(&self) -> f64 {
        self.committed_offset
    }

    /// Offset the content is drawn at
    pub fn total_offset(&self) -> f64 {
        self.live_offset() + self.committed_offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging(_))
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match &self.state {
            SessionState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn threshold_crossed(&self) -> bool {
        delete_threshold_crossed(
            self.reveal_extent(),
            self.live_offset(),
            self.committed_offset,
            self.config.delete_ratio,
        )
    }

    /// Feed one sample.
    ///
    /// Returns `Err` for samples that make no sense in the current state
    /// (a second begin, or a change/end with no drag); state is untouched.
    pub fn process(&mut self, sample: &GestureSample) -> Result<Vec<GestureEvent>> {
        match sample.phase {
            Phase::Begin => self.begin(sample.source),
            Phase::Change => self.change(sample.delta),
            Phase::End | Phase::Cancel => self.finish(sample.phase),
        }
    }

    fn begin(&mut self, source: InputSource) -> Result<Vec<GestureEvent>> {
        match self.state {
            SessionState::Dragging(_) => return Err(Error::BeginWhileDragging),
            SessionState::Superseded => {
                debug!("Starting a new drag after a forced close");
            }
            SessionState::Idle => {}
        }

        self.state = SessionState::Dragging(GestureSession::new(source));
        Ok(vec![GestureEvent::Began { source }])
    }

    fn change(&mut self, delta: Vector) -> Result<Vec<GestureEvent>> {
        let extent = self.reveal_extent();
        let committed = self.committed_offset;
        let config = &self.config;

        let session = match &mut self.state {
            SessionState::Dragging(session) => session,
            SessionState::Superseded => {
                debug!("Dropping sample from a force-closed drag");
                return Ok(Vec::new());
            }
            SessionState::Idle => return Err(Error::NotDragging(Phase::Change)),
        };

        // Width may have changed since the last sample
        session.live_offset = session.live_offset.clamp(-extent, 0.0);

        let touch = session.source == InputSource::Touch;
        if touch && delta.y.abs() > delta.x.abs() {
            session.total_orthogonal += delta.y.abs();
        }

        if touch && session.total_orthogonal >= config.orthogonal_budget {
            debug!(
                orthogonal = session.total_orthogonal,
                "Drag is a scroll, ignoring horizontal movement"
            );
        } else {
            session.translation += delta.x;
            let proposed = session.live_offset + delta.x;
            session.live_offset = if proposed + committed < 0.0 {
                proposed.clamp(-extent, 0.0)
            } else {
                0.0
            };
        }

        let crossed = delete_threshold_crossed(extent, session.live_offset, committed, config.delete_ratio);

        let mut events = Vec::with_capacity(2);
        if crossed && !session.haptic_fired {
            session.haptic_fired = true;
            events.push(GestureEvent::HapticTrigger { source: session.source });
        } else if !crossed {
            session.haptic_fired = false;
        }

        events.push(GestureEvent::OffsetChanged {
            live: session.live_offset,
            committed,
            threshold_crossed: crossed,
            transition: Transition::Interactive,
        });

        Ok(events)
    }

    fn finish(&mut self, phase: Phase) -> Result<Vec<GestureEvent>> {
        let session = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Dragging(session) => session,
            SessionState::Superseded => {
                debug!("Force-closed drag finished");
                return Ok(Vec::new());
            }
            SessionState::Idle => return Err(Error::NotDragging(phase)),
        };

        let extent = self.reveal_extent();
        let live = session.live_offset.clamp(-extent, 0.0);
        let committed = self.committed_offset;

        let within_budget = session.source == InputSource::Trackpad
            || session.total_orthogonal < self.config.orthogonal_budget;

        let delete = within_budget
            && delete_threshold_crossed(extent, live, committed, self.config.delete_ratio);

        let peek = match session.source {
            InputSource::Trackpad => live + committed < self.config.trackpad_peek_threshold,
            InputSource::Touch => {
                within_budget && session.translation + committed < self.config.touch_peek_threshold
            }
        };

        let decision = if delete {
            Decision::CommitDelete
        } else if peek {
            Decision::SnapOpen
        } else {
            Decision::SnapClosed
        };

        match decision {
            Decision::CommitDelete => {}
            Decision::SnapOpen => self.committed_offset = self.config.peek_offset,
            Decision::SnapClosed => self.committed_offset = 0.0,
        }

        debug!(
            ?decision,
            ?phase,
            live,
            translation = session.translation,
            orthogonal = session.total_orthogonal,
            "Drag finished"
        );

        Ok(vec![
            GestureEvent::OffsetChanged {
                live: 0.0,
                committed: self.committed_offset,
                threshold_crossed: false,
                transition: Transition::Animated,
            },
            GestureEvent::Ended { decision },
        ])
    }

    /// Snap fully closed because another item took the reveal slot.
    ///
    /// An in-progress drag is abandoned; its remaining samples are dropped.
    /// Returns the resulting offset change, or `None` if already closed.
    pub fn force_close(&mut self) -> Option<GestureEvent> {
        let was_dragging = self.is_dragging();
        let was_open = self.total_offset() != 0.0;

        self.committed_offset = 0.0;
        if was_dragging {
            self.state = SessionState::Superseded;
        }

        if was_dragging || was_open {
            Some(GestureEvent::OffsetChanged {
                live: 0.0,
                committed: 0.0,
                threshold_crossed: false,
                transition: Transition::Animated,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOUCH: InputSource = InputSource::Touch;
    const TRACKPAD: InputSource = InputSource::Trackpad;

    fn translator(width: f64) -> GestureTranslator {
        let mut t = GestureTranslator::new(GestureConfig::default());
        t.set_width(width);
        t
    }

    fn begin(t: &mut GestureTranslator, source: InputSource) -> Vec<GestureEvent> {
        t.process(&GestureSample::begin(source, Vector::new(-400.0, 0.0))).unwrap()
    }

    fn drag(t: &mut GestureTranslator, source: InputSource, dx: f64, dy: f64) -> Vec<GestureEvent> {
        t.process(&GestureSample::change(source, dx, dy)).unwrap()
    }

    fn end(t: &mut GestureTranslator, source: InputSource) -> Decision {
        let events = t.process(&GestureSample::end(source)).unwrap();
        match events.last() {
            Some(GestureEvent::Ended { decision }) => *decision,
            other => panic!("expected Ended, got {:?}", other),
        }
    }

    fn haptics(events: &[GestureEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GestureEvent::HapticTrigger { .. }))
            .count()
    }

    #[test]
    fn test_threshold_predicate() {
        assert!(delete_threshold_crossed(200.0, -100.0, 0.0, 2.0));
        assert!(!delete_threshold_crossed(200.0, -99.0, 0.0, 2.0));
        assert!(delete_threshold_crossed(200.0, -35.0, -65.0, 2.0));
        // Peeked but not dragging
        assert!(!delete_threshold_crossed(200.0, 0.0, -65.0, 2.0));
        // Width not measured yet
        assert!(!delete_threshold_crossed(0.0, -100.0, 0.0, 2.0));
    }

    #[test]
    fn test_begin_emits_began() {
        let mut t = translator(200.0);
        assert_eq!(begin(&mut t, TOUCH), vec![GestureEvent::Began { source: TOUCH }]);
        assert!(t.is_dragging());
    }

    #[test]
    fn test_live_offset_clamped_to_width() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -150.0, 0.0);
        drag(&mut t, TOUCH, -150.0, 0.0);
        assert_eq!(t.live_offset(), -200.0);
    }

    #[test]
    fn test_live_offset_clamped_to_max_reveal_width() {
        let mut t = translator(900.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -800.0, 0.0);
        assert_eq!(t.live_offset(), -500.0);
    }

    #[test]
    fn test_rightward_drag_snaps_to_zero() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -30.0, 0.0);
        drag(&mut t, TOUCH, 50.0, 0.0);
        assert_eq!(t.live_offset(), 0.0);
    }

    #[test]
    fn test_commit_delete_at_ratio_two() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -50.0, 0.0);
        assert!(!t.threshold_crossed());
        let events = drag(&mut t, TOUCH, -50.0, 0.0);
        assert!(t.threshold_crossed());
        assert_eq!(haptics(&events), 1);

        assert_eq!(end(&mut t, TOUCH), Decision::CommitDelete);
        assert_eq!(t.live_offset(), 0.0);
        assert!(!t.is_dragging());
    }

    #[test]
    fn test_overshoot_still_deletes() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -50.0, 0.0);
        drag(&mut t, TOUCH, -150.0, 0.0);
        assert_eq!(t.live_offset(), -200.0);
        assert_eq!(end(&mut t, TOUCH), Decision::CommitDelete);
    }

    #[test]
    fn test_touch_peek_open() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -70.0, 0.0);
        assert!(!t.threshold_crossed());

        assert_eq!(end(&mut t, TOUCH), Decision::SnapOpen);
        assert_eq!(t.committed_offset(), -65.0);
        assert_eq!(t.live_offset(), 0.0);
    }

    #[test]
    fn test_short_touch_drag_closes() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -40.0, 0.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapClosed);
        assert_eq!(t.committed_offset(), 0.0);
    }

    #[test]
    fn test_peeked_item_closes_on_rightward_touch_drag() {
        let mut t = translator(300.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -80.0, 0.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapOpen);

        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, 30.0, 0.0);
        assert_eq!(t.live_offset(), 0.0);
        assert_eq!(t.total_offset(), -65.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapClosed);
        assert_eq!(t.committed_offset(), 0.0);
    }

    #[test]
    fn test_peeked_item_deletes_on_further_drag() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -70.0, 0.0);
        end(&mut t, TOUCH);

        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -35.0, 0.0);
        // 200 / (35 + 65) = 2
        assert!(t.threshold_crossed());
        assert_eq!(end(&mut t, TOUCH), Decision::CommitDelete);
    }

    #[test]
    fn test_trackpad_peek_threshold() {
        let mut t = translator(300.0);
        begin(&mut t, TRACKPAD);
        drag(&mut t, TRACKPAD, -30.0, 0.0);
        drag(&mut t, TRACKPAD, -25.0, 0.0);
        assert_eq!(end(&mut t, TRACKPAD), Decision::SnapOpen);
        assert_eq!(t.committed_offset(), -65.0);

        let mut t = translator(300.0);
        begin(&mut t, TRACKPAD);
        drag(&mut t, TRACKPAD, -45.0, 0.0);
        assert_eq!(end(&mut t, TRACKPAD), Decision::SnapClosed);
    }

    #[test]
    fn test_trackpad_ignores_orthogonal_budget() {
        let mut t = translator(200.0);
        begin(&mut t, TRACKPAD);
        drag(&mut t, TRACKPAD, -2.0, 30.0);
        drag(&mut t, TRACKPAD, -98.0, 0.0);
        assert_eq!(t.live_offset(), -100.0);
        assert_eq!(end(&mut t, TRACKPAD), Decision::CommitDelete);
    }

    #[test]
    fn test_vertical_scroll_freezes_offset() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -20.0, 0.0);
        drag(&mut t, TOUCH, 1.0, 6.0);
        drag(&mut t, TOUCH, -50.0, 0.0);
        drag(&mut t, TOUCH, -50.0, 0.0);

        assert_eq!(t.live_offset(), -20.0);
        assert_eq!(t.session().unwrap().total_orthogonal, 6.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapClosed);
    }

    #[test]
    fn test_scroll_after_crossing_prevents_delete() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -120.0, 0.0);
        assert!(t.threshold_crossed());
        drag(&mut t, TOUCH, 0.0, 3.0);
        drag(&mut t, TOUCH, 0.0, 3.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapClosed);
    }

    #[test]
    fn test_small_vertical_jitter_is_tolerated() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, 0.0, 2.0);
        drag(&mut t, TOUCH, -100.0, 4.0);
        assert_eq!(t.session().unwrap().total_orthogonal, 2.0);
        assert_eq!(end(&mut t, TOUCH), Decision::CommitDelete);
    }

    #[test]
    fn test_haptic_fires_once_per_crossing() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        assert_eq!(haptics(&drag(&mut t, TOUCH, -100.0, 0.0)), 1);
        assert_eq!(haptics(&drag(&mut t, TOUCH, -10.0, 0.0)), 0);
        assert_eq!(haptics(&drag(&mut t, TOUCH, -10.0, 0.0)), 0);

        // Leave the crossed region, then re-enter
        assert_eq!(haptics(&drag(&mut t, TOUCH, 60.0, 0.0)), 0);
        assert!(!t.threshold_crossed());
        assert_eq!(haptics(&drag(&mut t, TOUCH, -60.0, 0.0)), 1);
    }

    #[test]
    fn test_haptic_rearms_on_next_gesture() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -100.0, 0.0);
        drag(&mut t, TOUCH, 0.0, 10.0);
        end(&mut t, TOUCH);

        begin(&mut t, TOUCH);
        assert_eq!(haptics(&drag(&mut t, TOUCH, -100.0, 0.0)), 1);
    }

    #[test]
    fn test_zero_width_never_crosses() {
        let mut t = translator(0.0);
        begin(&mut t, TOUCH);
        let events = drag(&mut t, TOUCH, -80.0, 0.0);
        assert_eq!(haptics(&events), 0);
        assert_eq!(t.live_offset(), 0.0);
        assert!(!t.threshold_crossed());
        assert_ne!(end(&mut t, TOUCH), Decision::CommitDelete);
    }

    #[test]
    fn test_width_change_reclamps_on_next_sample() {
        let mut t = translator(400.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -300.0, 0.0);
        assert_eq!(t.live_offset(), -300.0);

        t.set_width(200.0);
        drag(&mut t, TOUCH, 0.0, 0.0);
        assert_eq!(t.live_offset(), -200.0);
    }

    #[test]
    fn test_invalid_width_treated_as_unmeasured() {
        let mut t = translator(f64::NAN);
        assert_eq!(t.width(), 0.0);
        t.set_width(-20.0);
        assert_eq!(t.reveal_extent(), 0.0);
    }

    #[test]
    fn test_begin_while_dragging_is_rejected() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -40.0, 0.0);

        let err = t
            .process(&GestureSample::begin(TOUCH, Vector::new(-100.0, 0.0)))
            .unwrap_err();
        assert!(matches!(err, Error::BeginWhileDragging));
        assert_eq!(t.live_offset(), -40.0);
    }

    #[test]
    fn test_end_without_drag_is_rejected() {
        let mut t = translator(200.0);
        let err = t.process(&GestureSample::end(TOUCH)).unwrap_err();
        assert!(matches!(err, Error::NotDragging(Phase::End)));

        let err = t.process(&GestureSample::change(TOUCH, -10.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::NotDragging(Phase::Change)));
        assert_eq!(t.committed_offset(), 0.0);
    }

    #[test]
    fn test_cancel_decides_like_end() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -70.0, 0.0);
        let events = t.process(&GestureSample::cancel(TOUCH)).unwrap();
        assert_eq!(
            events.last(),
            Some(&GestureEvent::Ended { decision: Decision::SnapOpen })
        );
    }

    #[test]
    fn test_terminal_offset_change_is_animated() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        let events = drag(&mut t, TOUCH, -70.0, 0.0);
        assert!(matches!(
            events.last(),
            Some(GestureEvent::OffsetChanged { transition: Transition::Interactive, .. })
        ));

        let events = t.process(&GestureSample::end(TOUCH)).unwrap();
        assert_eq!(
            events[0],
            GestureEvent::OffsetChanged {
                live: 0.0,
                committed: -65.0,
                threshold_crossed: false,
                transition: Transition::Animated,
            }
        );
    }

    #[test]
    fn test_force_close_peeked() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -70.0, 0.0);
        end(&mut t, TOUCH);

        assert!(t.force_close().is_some());
        assert_eq!(t.total_offset(), 0.0);
        assert!(t.force_close().is_none());
    }

    #[test]
    fn test_force_close_mid_drag_drops_rest_of_gesture() {
        let mut t = translator(200.0);
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -120.0, 0.0);

        assert!(t.force_close().is_some());
        assert!(!t.is_dragging());
        assert_eq!(t.total_offset(), 0.0);

        assert!(drag(&mut t, TOUCH, -20.0, 0.0).is_empty());
        assert!(t.process(&GestureSample::end(TOUCH)).unwrap().is_empty());
        assert_eq!(t.committed_offset(), 0.0);

        // Next gesture works normally
        begin(&mut t, TOUCH);
        drag(&mut t, TOUCH, -70.0, 0.0);
        assert_eq!(end(&mut t, TOUCH), Decision::SnapOpen);
    }

    proptest! {
        #[test]
        fn prop_live_offset_stays_clamped(
            width in 0.0f64..1200.0,
            deltas in proptest::collection::vec((-400.0f64..400.0, -10.0f64..10.0), 1..40),
        ) {
            let mut t = translator(width);
            begin(&mut t, TOUCH);
            let extent = width.min(500.0);
            for (dx, dy) in deltas {
                drag(&mut t, TOUCH, dx, dy);
                prop_assert!(t.live_offset() <= 0.0);
                prop_assert!(t.live_offset() >= -extent);
            }
        }

        #[test]
        fn prop_committed_offset_is_a_rest_position(
            width in 0.0f64..800.0,
            sessions in proptest::collection::vec(
                (
                    proptest::collection::vec((-300.0f64..300.0, -20.0f64..20.0), 0..20),
                    any::<bool>(),
                    any::<bool>(),
                ),
                1..8,
            ),
        ) {
            let mut t = translator(width);
            for (deltas, trackpad, cancel) in sessions {
                let source = if trackpad { TRACKPAD } else { TOUCH };
                begin(&mut t, source);
                for (dx, dy) in deltas {
                    drag(&mut t, source, dx, dy);
                }
                let finish = if cancel {
                    GestureSample::cancel(source)
                } else {
                    GestureSample::end(source)
                };
                t.process(&finish).unwrap();
                let committed = t.committed_offset();
                prop_assert!(committed == 0.0 || committed == -65.0);
                prop_assert_eq!(t.live_offset(), 0.0);
            }
        }
    }
}
