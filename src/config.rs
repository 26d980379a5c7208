//! Tunable gesture, symbol and animation constants
//!
//! Every value has a default matching the stock swipe-to-delete behaviour,
//! so a config file only needs to name what it overrides:
//!
//! ```toml
//! [gesture]
//! peek_offset = -80.0
//!
//! [animation]
//! snap_duration_ms = 250
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thresholds driving the gesture state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Widest distance an item can be dragged open, regardless of its width
    pub max_reveal_width: f64,

    /// Rest offset of a peeked item
    pub peek_offset: f64,

    /// Vertical travel after which a touch drag counts as a scroll
    pub orthogonal_budget: f64,

    /// Delete is armed once `reveal extent / revealed distance` drops to this
    pub delete_ratio: f64,

    /// Total offset a trackpad scroll must pass to end peeked
    pub trackpad_peek_threshold: f64,

    /// Translation a touch drag must pass to end peeked
    pub touch_peek_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_reveal_width: 500.0,
            peek_offset: -65.0,
            orthogonal_budget: 5.0,
            delete_ratio: 2.0,
            trackpad_peek_threshold: -50.0,
            touch_peek_threshold: -60.0,
        }
    }
}

/// Placement of the trash symbol inside the revealed capsule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Offset past which the symbol is shown at all
    pub visible_threshold: f64,
    /// Symbol offset while visible but not armed
    pub base_offset: f64,
    /// Symbol offset while tucked away
    pub hidden_offset: f64,
    /// Gap kept between the symbol and the content edge once armed
    pub follow_margin: f64,
    /// Symbol offsets at or beyond this get a non-zero icon size
    pub shown_cutoff: f64,
    pub max_icon_height: f64,
    /// Icon scale used for rows shorter than `max_icon_height`
    pub small_icon_scale: f64,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            visible_threshold: -55.0,
            base_offset: -31.5,
            hidden_offset: -29.0,
            follow_margin: 50.0,
            shown_cutoff: -30.0,
            max_icon_height: 20.0,
            small_icon_scale: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of snap open/closed and forced-close transitions
    pub snap_duration_ms: u64,
    /// Duration of the symbol sliding between its positions
    pub symbol_duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            snap_duration_ms: 350,
            symbol_duration_ms: 300,
        }
    }
}

impl AnimationConfig {
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    pub fn symbol_duration(&self) -> Duration {
        Duration::from_millis(self.symbol_duration_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub symbol: SymbolConfig,
    pub animation: AnimationConfig,
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(Error::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        tracing::info!("Loading gesture config from {:?}", path);

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load {:?}: {}", path, e);
                tracing::warn!("Using default gesture config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.gesture;
        if g.max_reveal_width.is_nan() || g.max_reveal_width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_reveal_width must be positive, got {}",
                g.max_reveal_width
            )));
        }
        if g.peek_offset.is_nan() || g.peek_offset >= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "peek_offset must be negative, got {}",
                g.peek_offset
            )));
        }
        if g.orthogonal_budget.is_nan() || g.orthogonal_budget < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "orthogonal_budget must not be negative, got {}",
                g.orthogonal_budget
            )));
        }
        if g.delete_ratio.is_nan() || g.delete_ratio <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "delete_ratio must be positive, got {}",
                g.delete_ratio
            )));
        }
        if self.animation.snap_duration_ms == 0 || self.animation.symbol_duration_ms == 0 {
            return Err(Error::InvalidConfig(
                "animation durations must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
