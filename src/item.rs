//! Deletable list item
//!
//! Wires one item's input adapter and gesture translator to the shared
//! reveal coordinator, its haptic sink and the caller's delete action.
//!
//! Per-item state machine:
//! - Closed -> Dragging on begin
//! - Dragging -> Closed | Peeked | Deleted on end/cancel
//! - Peeked -> Dragging on begin, Peeked -> Deleted on tap
//! - Dragging | Peeked -> Closed when another item claims the reveal slot
//! - Deleted is terminal

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, SymbolConfig};
use crate::haptics::{HapticFeedback, HapticStyle};
use crate::input::{
    Decision, GestureEvent, GestureSample, GestureTranslator, InputAdapter, InputSource,
    NativeEvent, Transition,
};
use crate::presentation::{self, OffsetAnimation, RenderState};
use crate::reveal::{ItemId, RevealChange, RevealCoordinator, RevealObserver};

/// Externally observable item state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPhase {
    Closed,
    Dragging,
    Peeked,
    Deleted,
}

/// Work to do once the item state is no longer borrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Claim,
    Release,
    Delete,
}

struct ItemState {
    id: ItemId,
    phase: ItemPhase,
    adapter: InputAdapter,
    translator: GestureTranslator,
    haptics: HapticFeedback,
    height: f64,
    transition: Transition,
    animation: Option<OffsetAnimation>,
    snap_duration: Duration,
}

impl ItemState {
    fn apply(&mut self, events: Vec<GestureEvent>, previous_offset: f64, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        for event in events {
            match event {
                GestureEvent::Began { source } => {
                    debug!(item = %self.id, ?source, "Drag began");
                    self.phase = ItemPhase::Dragging;
                    effects.push(Effect::Claim);
                }
                GestureEvent::OffsetChanged {
                    live,
                    committed,
                    transition,
                    ..
                } => {
                    self.transition = transition;
                    self.animation = match transition {
                        Transition::Interactive => None,
                        Transition::Animated => Some(OffsetAnimation::new(
                            previous_offset,
                            live + committed,
                            now,
                            self.snap_duration,
                        )),
                    };
                }
                GestureEvent::HapticTrigger { source } => {
                    self.haptics.fire(HapticStyle::for_source(source));
                }
                GestureEvent::Ended { decision } => match decision {
                    Decision::CommitDelete => {
                        self.phase = ItemPhase::Deleted;
                        effects.push(Effect::Release);
                        effects.push(Effect::Delete);
                    }
                    Decision::SnapOpen => self.phase = ItemPhase::Peeked,
                    Decision::SnapClosed => {
                        self.phase = ItemPhase::Closed;
                        effects.push(Effect::Release);
                    }
                },
            }
        }

        effects
    }

    fn on_reveal_changed(&mut self, change: RevealChange) {
        let close = match change {
            RevealChange::Claimed(owner) => owner != self.id,
            RevealChange::Reset => true,
            RevealChange::Released(_) => false,
        };
        if !close || self.phase == ItemPhase::Deleted {
            return;
        }

        let previous = self.translator.total_offset();
        if self.translator.force_close().is_some() {
            debug!(item = %self.id, ?change, "Closing, reveal slot moved away");
            self.transition = Transition::Animated;
            self.animation = Some(OffsetAnimation::new(
                previous,
                0.0,
                Instant::now(),
                self.snap_duration,
            ));
        }
        self.phase = ItemPhase::Closed;
    }
}

impl RevealObserver for RefCell<ItemState> {
    fn reveal_changed(&self, change: RevealChange) {
        match self.try_borrow_mut() {
            Ok(mut state) => state.on_reveal_changed(change),
            Err(_) => warn!(?change, "Item busy, dropping reveal change"),
        }
    }
}

/// One swipe-to-delete item
pub struct DeletableItem {
    id: ItemId,
    state: Rc<RefCell<ItemState>>,
    coordinator: Rc<RevealCoordinator>,
    on_delete: Box<dyn FnMut()>,
    symbol: SymbolConfig,
    symbol_duration: Duration,
}

impl DeletableItem {
    pub fn new<F>(
        coordinator: Rc<RevealCoordinator>,
        config: &Config,
        source: InputSource,
        haptics: HapticFeedback,
        on_delete: F,
    ) -> Self
    where
        F: FnMut() + 'static,
    {
        let id = ItemId::new();
        let state = Rc::new(RefCell::new(ItemState {
            id,
            phase: ItemPhase::Closed,
            adapter: InputAdapter::for_source(source),
            translator: GestureTranslator::new(config.gesture.clone()),
            haptics,
            height: 0.0,
            transition: Transition::Interactive,
            animation: None,
            snap_duration: config.animation.snap_duration(),
        }));

        let observer = Rc::downgrade(&state);
        coordinator.subscribe(id, observer);

        debug!(item = %id, ?source, "Item created");

        Self {
            id,
            state,
            coordinator,
            on_delete: Box::new(on_delete),
            symbol: config.symbol.clone(),
            symbol_duration: config.animation.symbol_duration(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn phase(&self) -> ItemPhase {
        self.state.borrow().phase
    }

    pub fn source(&self) -> InputSource {
        self.state.borrow().adapter.source()
    }

    pub fn coordinator(&self) -> &Rc<RevealCoordinator> {
        &self.coordinator
    }

    /// Measured size of the item; may change at any time, including mid-drag
    pub fn set_size(&mut self, width: f64, height: f64) {
        let mut state = self.state.borrow_mut();
        state.translator.set_width(width);
        state.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
    }

    /// Feed a platform event through the item's adapter
    pub fn handle_event(&mut self, event: &NativeEvent) {
        let samples = self.state.borrow_mut().adapter.translate(event);
        let now = Instant::now();
        for sample in samples {
            self.handle_sample_at(&sample, now);
        }
    }

    pub fn handle_sample(&mut self, sample: &GestureSample) {
        self.handle_sample_at(sample, Instant::now());
    }

    /// Feed a sample, timestamping any animation it starts with `now`
    pub fn handle_sample_at(&mut self, sample: &GestureSample, now: Instant) {
        let effects = {
            let mut state = self.state.borrow_mut();
            if state.phase == ItemPhase::Deleted {
                debug!(item = %self.id, "Ignoring input for a deleted item");
                return;
            }

            let previous = state.translator.total_offset();
            match state.translator.process(sample) {
                Ok(events) => state.apply(events, previous, now),
                Err(e) => {
                    warn!(item = %self.id, phase = ?sample.phase, "Ignoring gesture sample: {}", e);
                    return;
                }
            }
        };

        self.run_effects(effects);
    }

    /// Tap on the revealed delete affordance. Only a peeked item responds.
    pub fn tap_delete(&mut self) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.phase != ItemPhase::Peeked {
                debug!(item = %self.id, phase = ?state.phase, "Tap ignored, delete affordance not revealed");
                return false;
            }
            state.phase = ItemPhase::Deleted;
        }

        self.run_effects(vec![Effect::Release, Effect::Delete]);
        true
    }

    pub fn render(&self) -> RenderState {
        self.render_at(Instant::now())
    }

    pub fn render_at(&self, now: Instant) -> RenderState {
        let state = self.state.borrow();
        let translator = &state.translator;

        let offset = translator.total_offset();
        let symbol_offset = presentation::symbol_offset(
            &self.symbol,
            translator.reveal_extent(),
            offset,
            translator.config().delete_ratio,
        );
        let displayed_offset = match state.animation {
            Some(animation) if !animation.is_finished(now) => animation.value_at(now),
            _ => offset,
        };

        RenderState {
            id: self.id,
            phase: state.phase,
            live_offset: translator.live_offset(),
            committed_offset: translator.committed_offset(),
            offset,
            displayed_offset,
            threshold_crossed: translator.threshold_crossed(),
            capsule_width: offset.abs(),
            symbol_offset,
            icon_height: presentation::icon_height(&self.symbol, state.height, symbol_offset),
            symbol_animation: self.symbol_duration,
            transition: state.transition,
            revealed: self.coordinator.is_revealed(self.id),
            disabled: self.coordinator.is_blocked(self.id),
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Claim => self.coordinator.claim(self.id),
                Effect::Release => {
                    self.coordinator.release(self.id);
                }
                Effect::Delete => {
                    info!(item = %self.id, "Item deleted");
                    (self.on_delete)();
                }
            }
        }
    }
}

impl Drop for DeletableItem {
    fn drop(&mut self) {
        self.coordinator.unsubscribe(self.id);
        self.coordinator.release(self.id);
    }
}

impl std::fmt::Debug for DeletableItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletableItem")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .finish()
    }
}
