//! Game session state machine.
//!
//! One play-through is a value of [`GameState`], mutated only through
//! [`GameAction`]s in the reducer. Randomness and the clock arrive in action
//! payloads, so reduction is deterministic. The view layer owns the timers
//! (spawn interval, stats interval, initial burst) and feeds actions in; the
//! reducer ignores spawn/click/stats traffic outside `Running`, so a timer
//! callback landing after stop or win is inert.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::settings::{ButtonDisplay, Settings};
use crate::util::{ButtonColor, format_duration};

/// Session lifecycle. `Idle` is both initial and terminal; stopping an idle
/// session is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Won,
}

/// One live button on screen. Single use: removed on its first click.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorButton {
    pub id: u64,
    pub color: ButtonColor,
    /// Text chosen by the display mode at creation; never updated afterwards.
    pub label: String,
}

/// Click-rate metrics recomputed once per stats tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionStats {
    pub elapsed_ms: f64,
    /// Clicks per second since the previous tick.
    pub current_cps: f64,
    /// Clicks per second over the whole session.
    pub avg_cps: f64,
    /// Highest instantaneous rate seen; non-decreasing within a session.
    pub max_cps: f64,
    pub prev_clicked: u32,
    pub prev_tick_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// Bumped on every start; lets the view re-arm timers per session.
    pub session: u64,
    pub created: u32,
    pub clicked: u32,
    pub buttons: Vec<ColorButton>,
    pub next_id: u64,
    pub started_at_ms: f64,
    pub stats: SessionStats,
    /// Settings snapshot taken at start; later saves apply to the next start.
    pub initial_count: u32,
    pub add_delay_ms: u32,
    pub win_on_zero_buttons: bool,
    pub button_display: ButtonDisplay,
    /// Colors of the most recently clicked button; painted onto the page
    /// background as a trace of the last click.
    pub last_clicked: Option<ButtonColor>,
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Begin a fresh session. Fully resets any prior one first.
    Start { settings: Settings, now_ms: f64 },
    /// Create one button. Fed by the spawn interval and the initial burst.
    Spawn { color: ButtonColor, now_ms: f64 },
    /// The button with `id` was clicked.
    Click { id: u64 },
    /// Recompute elapsed time and click rates.
    StatsTick { now_ms: f64 },
    /// Tear the session down. Idempotent.
    Stop,
}

impl GameState {
    pub fn idle() -> Self {
        let defaults = Settings::default();
        Self {
            phase: Phase::Idle,
            session: 0,
            created: 0,
            clicked: 0,
            buttons: Vec::new(),
            next_id: 0,
            started_at_ms: 0.0,
            stats: SessionStats::default(),
            initial_count: defaults.initial_count,
            add_delay_ms: defaults.add_delay_ms,
            win_on_zero_buttons: defaults.win_on_zero_buttons,
            button_display: defaults.button_display,
            last_clicked: None,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.created.saturating_sub(self.clicked)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    fn label_for_next(&self, color: &ButtonColor, now_ms: f64) -> String {
        match self.button_display {
            ButtonDisplay::HexColor => color.background.clone(),
            ButtonDisplay::Counter => (self.created + 1).to_string(),
            ButtonDisplay::ElapsedTime => {
                format_duration((now_ms - self.started_at_ms).max(0.0) as u64)
            }
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GameAction::Start { settings, now_ms } => {
                // Full reset guards against re-entrant starts: residual
                // buttons and counters from a prior session are dropped.
                new = GameState::idle();
                new.session = self.session + 1;
                new.next_id = self.next_id;
                new.phase = Phase::Running;
                new.started_at_ms = now_ms;
                new.stats.prev_tick_ms = now_ms;
                new.initial_count = settings.initial_count;
                new.add_delay_ms = settings.add_delay_ms;
                new.win_on_zero_buttons = settings.win_on_zero_buttons;
                new.button_display = settings.button_display;
            }
            GameAction::Spawn { color, now_ms } => {
                if new.phase != Phase::Running {
                    return self;
                }
                let label = new.label_for_next(&color, now_ms);
                let id = new.next_id;
                new.next_id += 1;
                new.buttons.push(ColorButton { id, color, label });
                new.created += 1;
            }
            GameAction::Click { id } => {
                if new.phase != Phase::Running {
                    return self;
                }
                // Exactly-once removal: a click racing a teardown (or a
                // duplicate event for an already-removed id) changes nothing.
                let Some(pos) = new.buttons.iter().position(|b| b.id == id) else {
                    return self;
                };
                let button = new.buttons.remove(pos);
                new.last_clicked = Some(button.color);
                new.clicked += 1;
                // created > 0 prevents a spurious win before the first spawn
                if new.win_on_zero_buttons && new.remaining() == 0 && new.created > 0 {
                    new.phase = Phase::Won;
                }
            }
            GameAction::StatsTick { now_ms } => {
                if new.phase != Phase::Running {
                    return self;
                }
                let dt_ms = now_ms - new.stats.prev_tick_ms;
                let elapsed_ms = now_ms - new.started_at_ms;
                let current = if dt_ms > 0.0 {
                    f64::from(new.clicked - new.stats.prev_clicked) * 1000.0 / dt_ms
                } else {
                    0.0
                };
                let avg = if elapsed_ms > 0.0 {
                    f64::from(new.clicked) * 1000.0 / elapsed_ms
                } else {
                    0.0
                };
                new.stats.elapsed_ms = elapsed_ms.max(0.0);
                new.stats.current_cps = current;
                new.stats.avg_cps = avg;
                new.stats.max_cps = new.stats.max_cps.max(current);
                new.stats.prev_clicked = new.clicked;
                new.stats.prev_tick_ms = now_ms;
            }
            GameAction::Stop => {
                if new.phase == Phase::Idle && new.buttons.is_empty() {
                    return self;
                }
                new.phase = Phase::Idle;
                new.buttons.clear();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::color_from_u24;

    fn dispatch(state: Rc<GameState>, action: GameAction) -> Rc<GameState> {
        state.reduce(action)
    }

    fn started(settings: Settings) -> Rc<GameState> {
        dispatch(
            Rc::new(GameState::idle()),
            GameAction::Start {
                settings,
                now_ms: 10_000.0,
            },
        )
    }

    fn spawn_at(state: Rc<GameState>, now_ms: f64) -> Rc<GameState> {
        dispatch(
            state,
            GameAction::Spawn {
                color: color_from_u24(0x33_66_99),
                now_ms,
            },
        )
    }

    #[test]
    fn start_resets_prior_session() {
        let s = started(Settings::default());
        let s = spawn_at(s, 10_100.0);
        let s = spawn_at(s, 10_200.0);
        let s = dispatch(s, GameAction::Click { id: 0 });
        assert_eq!(s.created, 2);
        assert_eq!(s.clicked, 1);

        let s = dispatch(
            s,
            GameAction::Start {
                settings: Settings::default(),
                now_ms: 20_000.0,
            },
        );
        assert_eq!(s.phase, Phase::Running);
        assert_eq!(s.session, 2);
        assert_eq!((s.created, s.clicked), (0, 0));
        assert!(s.buttons.is_empty());
        assert_eq!(s.stats.max_cps, 0.0);
        // ids keep increasing across sessions so stale clicks can never
        // match a new session's buttons
        let s = spawn_at(s, 20_100.0);
        assert_eq!(s.buttons[0].id, 2);
    }

    #[test]
    fn win_fires_once_when_last_button_clicked() {
        let settings = Settings {
            initial_count: 1,
            add_delay_ms: 3_600_000,
            ..Settings::default()
        };
        let s = started(settings);
        let s = spawn_at(s, 10_050.0);
        assert_eq!(s.remaining(), 1);

        let id = s.buttons[0].id;
        let s = dispatch(s, GameAction::Click { id });
        assert_eq!(s.phase, Phase::Won);
        assert_eq!(s.remaining(), 0);

        // once won, spawn and stats traffic is inert
        let after_spawn = spawn_at(s.clone(), 11_000.0);
        assert_eq!(after_spawn.created, s.created);
        let after_tick = dispatch(s.clone(), GameAction::StatsTick { now_ms: 12_000.0 });
        assert_eq!(after_tick.stats, s.stats);
        let after_click = dispatch(s.clone(), GameAction::Click { id });
        assert_eq!(after_click.clicked, s.clicked);
    }

    #[test]
    fn no_win_before_first_spawn() {
        // remaining == 0 and win enabled, but created == 0
        let s = started(Settings::default());
        let s = dispatch(s, GameAction::StatsTick { now_ms: 11_000.0 });
        assert_eq!(s.phase, Phase::Running);
    }

    #[test]
    fn no_win_when_disabled() {
        let settings = Settings {
            win_on_zero_buttons: false,
            ..Settings::default()
        };
        let mut s = started(settings);
        for i in 0..3 {
            s = spawn_at(s, 10_000.0 + f64::from(i));
        }
        let ids: Vec<u64> = s.buttons.iter().map(|b| b.id).collect();
        for id in ids {
            s = dispatch(s, GameAction::Click { id });
        }
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.phase, Phase::Running);
        // the spawn timer keeps feeding buttons in
        let s = spawn_at(s, 15_000.0);
        assert_eq!(s.buttons.len(), 1);
    }

    #[test]
    fn clicked_never_exceeds_created() {
        let mut s = started(Settings::default());
        for i in 0..5 {
            s = spawn_at(s, 10_000.0 + f64::from(i));
        }
        // duplicate and unknown ids are ignored
        s = dispatch(s, GameAction::Click { id: 0 });
        s = dispatch(s, GameAction::Click { id: 0 });
        s = dispatch(s, GameAction::Click { id: 999 });
        assert_eq!(s.clicked, 1);
        assert!(s.clicked <= s.created);
        assert_eq!(s.buttons.len() as u32, s.remaining());
    }

    #[test]
    fn click_records_last_color() {
        let s = started(Settings::default());
        let s = spawn_at(s, 10_100.0);
        let id = s.buttons[0].id;
        let s = dispatch(s, GameAction::Click { id });
        assert_eq!(s.last_clicked, Some(color_from_u24(0x33_66_99)));
    }

    #[test]
    fn stop_is_idempotent_and_clears_buttons() {
        let never_started = dispatch(Rc::new(GameState::idle()), GameAction::Stop);
        assert_eq!(never_started.phase, Phase::Idle);
        assert!(never_started.buttons.is_empty());

        let s = started(Settings::default());
        let s = spawn_at(s, 10_100.0);
        let s = dispatch(s, GameAction::Stop);
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.buttons.is_empty());
        let s = dispatch(s, GameAction::Stop);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn spawn_after_stop_is_ignored() {
        // covers the one-shot burst timeouts that may still be queued when
        // the session is torn down
        let s = started(Settings::default());
        let s = dispatch(s, GameAction::Stop);
        let s = spawn_at(s, 10_500.0);
        assert_eq!(s.created, 0);
        assert!(s.buttons.is_empty());
    }

    #[test]
    fn labels_follow_display_mode() {
        let hex = started(Settings::default());
        let hex = spawn_at(hex, 10_000.0);
        assert_eq!(hex.buttons[0].label, "#336699");

        let counter = started(Settings {
            button_display: ButtonDisplay::Counter,
            ..Settings::default()
        });
        let counter = spawn_at(counter, 10_000.0);
        let counter = spawn_at(counter, 10_001.0);
        assert_eq!(counter.buttons[0].label, "1");
        assert_eq!(counter.buttons[1].label, "2");

        let elapsed = started(Settings {
            button_display: ButtonDisplay::ElapsedTime,
            ..Settings::default()
        });
        // started at 10s, spawned 61s later
        let elapsed = spawn_at(elapsed, 71_000.0);
        assert_eq!(elapsed.buttons[0].label, "00:01:01");
    }

    #[test]
    fn stats_tick_computes_rates() {
        let mut s = started(Settings::default());
        for i in 0..10 {
            s = spawn_at(s, 10_000.0 + f64::from(i));
        }
        for id in 0..4u64 {
            s = dispatch(s, GameAction::Click { id });
        }
        // 4 clicks in the first second
        let s = dispatch(s, GameAction::StatsTick { now_ms: 11_000.0 });
        assert_eq!(s.stats.current_cps, 4.0);
        assert_eq!(s.stats.avg_cps, 4.0);
        assert_eq!(s.stats.max_cps, 4.0);
        assert_eq!(s.stats.elapsed_ms, 1_000.0);

        // 1 click in the next second: current drops, max holds
        let s = dispatch(s, GameAction::Click { id: 4 });
        let s = dispatch(s, GameAction::StatsTick { now_ms: 12_000.0 });
        assert_eq!(s.stats.current_cps, 1.0);
        assert_eq!(s.stats.avg_cps, 2.5);
        assert_eq!(s.stats.max_cps, 4.0);
    }

    #[test]
    fn stats_tick_with_zero_dt_is_safe() {
        let s = started(Settings::default());
        let s = dispatch(s, GameAction::StatsTick { now_ms: 10_000.0 });
        assert_eq!(s.stats.current_cps, 0.0);
        assert_eq!(s.stats.avg_cps, 0.0);
    }
}
