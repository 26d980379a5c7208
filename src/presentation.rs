//! Render snapshot for the presentation layer
//!
//! The renderer reads a `RenderState` every frame: where to draw the
//! content, how wide the capsule behind it is, where the trash symbol
//! sits and how large it is, and whether the item is overlaid or disabled.

use std::time::{Duration, Instant};

use crate::config::SymbolConfig;
use crate::input::Transition;
use crate::item::ItemPhase;
use crate::reveal::ItemId;

/// Everything needed to draw one item for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub id: ItemId,
    pub phase: ItemPhase,
    pub live_offset: f64,
    pub committed_offset: f64,
    /// Target content offset, `live_offset + committed_offset`
    pub offset: f64,
    /// Offset to draw this frame, following any running snap animation
    pub displayed_offset: f64,
    pub threshold_crossed: bool,
    /// Width of the capsule exposed behind the content
    pub capsule_width: f64,
    pub symbol_offset: f64,
    /// Zero while the symbol is hidden
    pub icon_height: f64,
    /// The renderer slides the symbol linearly over this duration
    pub symbol_animation: Duration,
    pub transition: Transition,
    /// This item holds the reveal slot; its content is overlaid so taps hit the affordance
    pub revealed: bool,
    /// Another item holds the reveal slot
    pub disabled: bool,
}

/// Horizontal position of the trash symbol.
///
/// Hidden until the content passes `visible_threshold`, then parked at
/// `base_offset`; once the delete threshold is armed it follows the
/// content edge at `follow_margin`.
pub fn symbol_offset(config: &SymbolConfig, extent: f64, offset: f64, delete_ratio: f64) -> f64 {
    if offset >= config.visible_threshold {
        return config.hidden_offset;
    }

    if extent > 0.0 && extent / -offset <= delete_ratio {
        offset + config.follow_margin
    } else {
        config.base_offset
    }
}

/// Icon height: capped at `max_icon_height`, scaled down for short rows
pub fn icon_height(config: &SymbolConfig, row_height: f64, symbol_offset: f64) -> f64 {
    if symbol_offset > config.shown_cutoff {
        return 0.0;
    }

    if row_height < config.max_icon_height {
        row_height.max(0.0) * config.small_icon_scale
    } else {
        config.max_icon_height
    }
}

/// Eased transition between two offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
}

impl OffsetAnimation {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        let eased = 1.0 - (1.0 - progress).powi(3); // Ease out cubic
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_hidden_near_rest() {
        let config = SymbolConfig::default();
        assert_eq!(symbol_offset(&config, 300.0, 0.0, 2.0), -29.0);
        assert_eq!(symbol_offset(&config, 300.0, -55.0, 2.0), -29.0);
        assert_eq!(icon_height(&config, 44.0, -29.0), 0.0);
    }

    #[test]
    fn test_symbol_parked_when_visible() {
        let config = SymbolConfig::default();
        // Peeked at -65 on a wide row
        assert_eq!(symbol_offset(&config, 300.0, -65.0, 2.0), -31.5);
        assert_eq!(icon_height(&config, 44.0, -31.5), 20.0);
    }

    #[test]
    fn test_symbol_follows_once_armed() {
        let config = SymbolConfig::default();
        assert_eq!(symbol_offset(&config, 200.0, -120.0, 2.0), -70.0);
    }

    #[test]
    fn test_symbol_ignores_unmeasured_width() {
        let config = SymbolConfig::default();
        assert_eq!(symbol_offset(&config, 0.0, -80.0, 2.0), -31.5);
    }

    #[test]
    fn test_icon_scales_for_short_rows() {
        let config = SymbolConfig::default();
        assert!((icon_height(&config, 15.0, -31.5) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_animation_eases_to_target() {
        let start = Instant::now();
        let animation = OffsetAnimation::new(-70.0, -65.0, start, Duration::from_millis(300));

        assert_eq!(animation.value_at(start), -70.0);
        let mid = animation.value_at(start + Duration::from_millis(150));
        // Ease out: more than halfway after half the time
        assert!(mid > -67.5 && mid < -65.0);
        assert_eq!(animation.value_at(start + Duration::from_millis(300)), -65.0);
        assert!(animation.is_finished(start + Duration::from_millis(400)));
        assert!(!animation.is_finished(start + Duration::from_millis(10)));
    }

    #[test]
    fn test_zero_duration_animation_is_done() {
        let start = Instant::now();
        let animation = OffsetAnimation::new(-65.0, 0.0, start, Duration::ZERO);
        assert_eq!(animation.value_at(start), 0.0);
    }
}
