//! Headless gesture replay
//!
//! Loads a TOML script describing a list of items and a sequence of
//! platform events, then feeds the events to the items one per frame on a
//! calloop timer. Items share one reveal coordinator; deleted items are
//! removed from the list like a host would remove the row.
//!
//! ```toml
//! [[items]]
//! name = "inbox"
//! width = 320
//!
//! [[events]]
//! type = "pan"
//! item = "inbox"
//! state = "began"
//! vx = -300
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::haptics::{HapticFeedback, LogHaptics};
use crate::input::{
    InputSource, NativeEvent, PanEvent, PanState, ScrollPhase, ScrollWheelEvent, Vector,
};
use crate::item::{DeletableItem, ItemPhase};
use crate::reveal::RevealCoordinator;

fn default_height() -> f64 {
    44.0
}

/// One row of the replayed list
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptItem {
    pub name: String,
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub source: InputSource,
}

/// Scripted platform event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Touch pan; `x`/`y` is the translation since the pan began
    Pan {
        item: String,
        state: PanState,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        vx: f64,
        #[serde(default)]
        vy: f64,
    },
    /// Trackpad scroll; `dx`/`dy` is the delta since the previous event
    Scroll {
        item: String,
        #[serde(default)]
        phase: ScrollPhase,
        #[serde(default)]
        momentum: ScrollPhase,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
    /// Tap on the delete affordance
    Tap { item: String },
    Resize {
        item: String,
        width: f64,
        height: Option<f64>,
    },
    /// Clear the reveal slot from outside any item
    Reset,
}

impl ScriptEvent {
    pub fn item(&self) -> Option<&str> {
        match self {
            ScriptEvent::Pan { item, .. }
            | ScriptEvent::Scroll { item, .. }
            | ScriptEvent::Tap { item }
            | ScriptEvent::Resize { item, .. } => Some(item),
            ScriptEvent::Reset => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub items: Vec<ScriptItem>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(Error::ScriptParse)
    }
}

/// Final state of one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub phase: ItemPhase,
    pub live_offset: f64,
    pub committed_offset: f64,
    pub offset: f64,
    pub symbol_offset: f64,
    pub icon_height: f64,
    pub disabled: bool,
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub frames: usize,
    /// Names of deleted items, in deletion order
    pub deleted: Vec<String>,
    pub revealed: Option<String>,
    pub haptics: usize,
    /// Items still in the list
    pub items: Vec<ItemReport>,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames:   {}", self.frames)?;
        writeln!(f, "haptics:  {}", self.haptics)?;
        writeln!(f, "revealed: {}", self.revealed.as_deref().unwrap_or("-"))?;
        if self.deleted.is_empty() {
            writeln!(f, "deleted:  -")?;
        } else {
            writeln!(f, "deleted:  {}", self.deleted.join(", "))?;
        }
        for item in &self.items {
            writeln!(
                f,
                "  {:<16} {:<8} offset {:>7.1} (live {:>7.1}, committed {:>6.1}){}",
                item.name,
                format!("{:?}", item.phase).to_lowercase(),
                item.offset,
                item.live_offset,
                item.committed_offset,
                if item.disabled { " disabled" } else { "" },
            )?;
        }
        Ok(())
    }
}

struct Row {
    name: String,
    height: f64,
    item: DeletableItem,
}

/// Items plus the events still to be delivered
pub struct Replay {
    coordinator: Rc<RevealCoordinator>,
    rows: Vec<Row>,
    events: VecDeque<ScriptEvent>,
    deleted: Rc<RefCell<Vec<String>>>,
    haptics: Rc<Cell<usize>>,
    frames: usize,
}

impl Replay {
    /// Build the list. Every event must name a declared item.
    pub fn new(script: Script, config: &Config) -> Result<Self> {
        let mut names = HashSet::new();
        for item in &script.items {
            if !names.insert(item.name.as_str()) {
                return Err(Error::DuplicateItem(item.name.clone()));
            }
        }
        if let Some(name) = script
            .events
            .iter()
            .filter_map(ScriptEvent::item)
            .find(|name| !names.contains(name))
        {
            return Err(Error::UnknownItem(name.to_string()));
        }

        let coordinator = RevealCoordinator::new();
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let haptics = Rc::new(Cell::new(0));

        let rows = script
            .items
            .into_iter()
            .map(|entry| {
                let deleted = deleted.clone();
                let name = entry.name.clone();
                let mut item = DeletableItem::new(
                    coordinator.clone(),
                    config,
                    entry.source,
                    HapticFeedback::new(LogHaptics::with_counter(haptics.clone())),
                    move || deleted.borrow_mut().push(name.clone()),
                );
                item.set_size(entry.width, entry.height);
                Row {
                    name: entry.name,
                    height: entry.height,
                    item,
                }
            })
            .collect();

        Ok(Self {
            coordinator,
            rows,
            events: script.events.into(),
            deleted,
            haptics,
            frames: 0,
        })
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Deliver the next event. Returns false once the script is exhausted.
    pub fn step(&mut self) -> bool {
        let Some(event) = self.events.pop_front() else {
            return false;
        };
        self.frames += 1;
        debug!(frame = self.frames, ?event, "Replaying");

        match event {
            ScriptEvent::Reset => self.coordinator.reset(),
            event => self.deliver(event),
        }

        // The host removes deleted rows
        self.rows.retain(|row| row.item.phase() != ItemPhase::Deleted);
        !self.events.is_empty()
    }

    fn deliver(&mut self, event: ScriptEvent) {
        let Some(name) = event.item() else {
            return;
        };
        let Some(row) = self.rows.iter_mut().find(|row| row.name == name) else {
            warn!(item = name, "Event for an item no longer in the list");
            return;
        };

        match event {
            ScriptEvent::Pan {
                state, x, y, vx, vy, ..
            } => row.item.handle_event(&NativeEvent::Pan(PanEvent {
                state,
                translation: Vector::new(x, y),
                velocity: Vector::new(vx, vy),
            })),
            ScriptEvent::Scroll {
                phase,
                momentum,
                dx,
                dy,
                ..
            } => row.item.handle_event(&NativeEvent::Scroll(ScrollWheelEvent {
                phase,
                momentum_phase: momentum,
                delta: Vector::new(dx, dy),
            })),
            ScriptEvent::Tap { .. } => {
                row.item.tap_delete();
            }
            ScriptEvent::Resize { width, height, .. } => {
                row.height = height.unwrap_or(row.height);
                row.item.set_size(width, row.height);
            }
            ScriptEvent::Reset => {}
        }
    }

    pub fn report(&self) -> ReplayReport {
        let revealed = self.coordinator.read().and_then(|id| {
            self.rows
                .iter()
                .find(|row| row.item.id() == id)
                .map(|row| row.name.clone())
        });

        let items = self
            .rows
            .iter()
            .map(|row| {
                let render = row.item.render();
                ItemReport {
                    name: row.name.clone(),
                    phase: render.phase,
                    live_offset: render.live_offset,
                    committed_offset: render.committed_offset,
                    offset: render.offset,
                    symbol_offset: render.symbol_offset,
                    icon_height: render.icon_height,
                    disabled: render.disabled,
                }
            })
            .collect();

        ReplayReport {
            frames: self.frames,
            deleted: self.deleted.borrow().clone(),
            revealed,
            haptics: self.haptics.get(),
            items,
        }
    }

    /// Replay the whole script, one event per frame
    pub fn run(mut self, frame: Duration) -> anyhow::Result<ReplayReport> {
        let mut event_loop: EventLoop<Replay> =
            EventLoop::try_new().context("Failed to create event loop")?;
        let signal = event_loop.get_signal();

        info!(events = self.remaining(), items = self.rows.len(), "Starting replay");

        event_loop
            .handle()
            .insert_source(Timer::immediate(), move |_, _, replay| {
                if replay.step() {
                    TimeoutAction::ToDuration(frame)
                } else {
                    signal.stop();
                    TimeoutAction::Drop
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to insert frame timer: {}", e.error))?;

        event_loop
            .run(frame, &mut self, |_| {})
            .context("Event loop error")?;

        let report = self.report();
        info!(
            frames = report.frames,
            deleted = report.deleted.len(),
            "Replay finished"
        );
        Ok(report)
    }
}
