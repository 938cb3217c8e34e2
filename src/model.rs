//! Core session model for Catch the Mouse.
//! `GameState` is the only owner of session data; intents and timer ticks reach it
//! exclusively as `GameAction`s through the reducer.

use serde::Serialize;
use std::rc::Rc;
use yew::Reducible;

// ---------------- Tuning -----------------
pub const TIME_BUDGET_SECS: u32 = 12;
pub const COUNTDOWN_PERIOD_MS: u32 = 1000;
/// Relocation period at scale 1.0.
pub const BASE_RELOCATE_MS: f64 = 220.0;
pub const MIN_RELOCATE_MS: f64 = 75.0;
pub const SCALE_MIN: f64 = 0.85;
pub const SCALE_MAX: f64 = 1.8;
pub const REFERENCE_WIDTH_PX: f64 = 320.0;
pub const REFERENCE_HEIGHT_PX: f64 = 480.0;
/// Fresh positions land in `[SPAWN_MIN, SPAWN_MIN + SPAWN_SPAN]` percent.
pub const SPAWN_MIN: f64 = 10.0;
pub const SPAWN_SPAN: f64 = 80.0;
/// Bounds enforced on every arena resize.
pub const CLAMP_MIN: f64 = 8.0;
pub const CLAMP_MAX: f64 = 92.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

/// Target location in percent of the arena's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl Position {
    pub fn from_roll(roll: Roll) -> Self {
        let spread = |u: f64| {
            let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.5 };
            SPAWN_MIN + u * SPAWN_SPAN
        };
        Self {
            x: spread(roll.x),
            y: spread(roll.y),
        }
    }

    /// Pulls the point back inside the visible band without moving it otherwise.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(CLAMP_MIN, CLAMP_MAX),
            y: self.y.clamp(CLAMP_MIN, CLAMP_MAX),
        }
    }
}

/// Two uniform samples in `[0, 1)`, drawn where the action is dispatched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Roll {
    pub x: f64,
    pub y: f64,
}

impl Roll {
    pub fn sample() -> Self {
        Self {
            x: js_sys::Math::random(),
            y: js_sys::Math::random(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArenaMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl ArenaMetrics {
    /// Area ratio against the reference arena, clamped. `None` for an unusable measurement.
    pub fn scale_factor(&self) -> Option<f64> {
        let (w, h) = (self.width_px, self.height_px);
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        let ratio = (w * h) / (REFERENCE_WIDTH_PX * REFERENCE_HEIGHT_PX);
        Some(ratio.clamp(SCALE_MIN, SCALE_MAX))
    }
}

pub fn relocation_interval_ms(scale: f64) -> u32 {
    (BASE_RELOCATE_MS / scale).max(MIN_RELOCATE_MS).round() as u32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionRecord {
    pub time_left_secs: u32,
    /// Set while Playing, cleared on Won/Lost.
    pub started_at_ms: Option<f64>,
    pub best_time_ms: Option<f64>,
    pub last_time_ms: Option<f64>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            time_left_secs: TIME_BUDGET_SECS,
            started_at_ms: None,
            best_time_ms: None,
            last_time_ms: None,
        }
    }
}

/// Structured transition events for the console log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Started { session: u64, position: Position },
    Caught { session: u64, elapsed_ms: f64, best_ms: f64 },
    Escaped { session: u64 },
    ArenaScaled { scale: f64, interval_ms: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub position: Position,
    pub record: SessionRecord,
    pub scale: f64,
    /// Bumped on every start; ticks scheduled for an older session are ignored.
    pub session: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            position: Position::default(),
            record: SessionRecord::default(),
            scale: 1.0,
            session: 0,
        }
    }
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn relocation_interval_ms(&self) -> u32 {
        relocation_interval_ms(self.scale)
    }

    pub fn status_message(&self) -> String {
        match self.phase {
            GamePhase::Idle => "Press Start and catch the mouse before time runs out.".to_string(),
            GamePhase::Playing => format!("Catch it! {}s left", self.record.time_left_secs),
            GamePhase::Won => "Gotcha! You caught the mouse.".to_string(),
            GamePhase::Lost => "Too slow! The mouse got away.".to_string(),
        }
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_playing() { "Reset" } else { "Start" }
    }

    pub fn target_visible(&self) -> bool {
        self.phase != GamePhase::Idle
    }

    /// Remaining share of the time budget, 0.0..=1.0.
    pub fn countdown_fraction(&self) -> f64 {
        match self.phase {
            GamePhase::Playing => self.record.time_left_secs as f64 / TIME_BUDGET_SECS as f64,
            GamePhase::Lost => 0.0,
            GamePhase::Idle | GamePhase::Won => 1.0,
        }
    }

    pub fn transition_event(&self) -> Option<SessionEvent> {
        let session = self.session;
        match self.phase {
            GamePhase::Idle => None,
            GamePhase::Playing => Some(SessionEvent::Started {
                session,
                position: self.position,
            }),
            GamePhase::Won => Some(SessionEvent::Caught {
                session,
                elapsed_ms: self.record.last_time_ms?,
                best_ms: self.record.best_time_ms?,
            }),
            GamePhase::Lost => Some(SessionEvent::Escaped { session }),
        }
    }

    fn accepts_tick(&self, session: u64) -> bool {
        self.is_playing() && self.session == session
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Start or restart from any phase.
    Start { now_ms: f64, roll: Roll },
    /// Player clicked the target.
    Catch { now_ms: f64 },
    ArenaResized(ArenaMetrics),
    Relocate { session: u64, roll: Roll },
    /// Once per second while Playing; `roll` is used for the escape jump on expiry.
    CountdownTick { session: u64, roll: Roll },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        match action {
            Start { now_ms, roll } => {
                let mut new = (*self).clone();
                new.phase = GamePhase::Playing;
                new.record.time_left_secs = TIME_BUDGET_SECS;
                new.record.started_at_ms = Some(now_ms);
                new.position = Position::from_roll(roll);
                new.session = new.session.wrapping_add(1);
                Rc::new(new)
            }
            Catch { now_ms } => {
                if !self.is_playing() {
                    return self;
                }
                let Some(started) = self.record.started_at_ms else {
                    return self;
                };
                // Expiry is decided by the countdown tick alone; a click landing before it wins.
                let elapsed = (now_ms - started).max(0.0);
                let mut new = (*self).clone();
                new.record.last_time_ms = Some(elapsed);
                new.record.best_time_ms = Some(match new.record.best_time_ms {
                    Some(best) => best.min(elapsed),
                    None => elapsed,
                });
                new.record.started_at_ms = None;
                new.phase = GamePhase::Won;
                Rc::new(new)
            }
            ArenaResized(metrics) => {
                let Some(scale) = metrics.scale_factor() else {
                    return self;
                };
                let position = self.position.clamped();
                if scale == self.scale && position == self.position {
                    return self;
                }
                let mut new = (*self).clone();
                new.scale = scale;
                new.position = position;
                Rc::new(new)
            }
            Relocate { session, roll } => {
                if !self.accepts_tick(session) {
                    return self;
                }
                let mut new = (*self).clone();
                new.position = Position::from_roll(roll);
                Rc::new(new)
            }
            CountdownTick { session, roll } => {
                if !self.accepts_tick(session) {
                    return self;
                }
                let mut new = (*self).clone();
                let left = new.record.time_left_secs.saturating_sub(1);
                new.record.time_left_secs = left;
                if left == 0 {
                    new.phase = GamePhase::Lost;
                    new.record.started_at_ms = None;
                    new.position = Position::from_roll(roll);
                }
                Rc::new(new)
            }
        }
    }
}
