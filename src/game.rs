//! Game session controller
//!
//! Owns the arena, the live session (between start and stop), the best-time
//! book and the spawn RNG. Every input (tick, key press, clock refresh) goes
//! through [`GameController::dispatch`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::best_time::BestTimeBook;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::Dialogs;
use crate::renderer::{RectCommand, frame};
use crate::sim::{Arena, Event, Session, SurvivalTime};

pub const ALREADY_RUNNING: &str = "Game is already running!";
pub const NOT_RUNNING: &str = "There is no game running!";
pub const CONFIRM_STOP: &str = "Are you sure you want to stop the current game?";
pub const NEW_BEST: &str = "Congratulations, this is your new personal highscore!";

/// Why a game is being stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Stop button; needs a running game and confirmation
    Manual,
    /// Player hit an asteroid; no confirmation. Ignored with
    /// [`StopOutcome::NotRunning`] and no warning when no game is running.
    Collision,
}

/// Result of a stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// No game was running
    NotRunning,
    /// User declined the confirmation; the game continues
    Declined,
    /// Game ended
    Stopped {
        elapsed: SurvivalTime,
        new_best: bool,
    },
}

/// What the driver must repaint after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Nothing,
    /// Entities moved
    Canvas,
    /// Elapsed time changed
    Timer,
}

pub struct GameController {
    config: GameConfig,
    arena: Arena,
    session: Option<Session>,
    best: BestTimeBook,
    rng: Pcg32,
}

impl GameController {
    pub fn new(config: GameConfig, best: BestTimeBook, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::new(config.canvas_width, config.canvas_height);
        Ok(Self {
            config,
            arena,
            session: None,
            best,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn best(&self) -> &BestTimeBook {
        &self.best
    }

    pub fn is_running(&self) -> bool {
        self.arena.is_running()
    }

    /// Spawn a fresh field and start the clock. Returns false (after warning)
    /// if a game is already in progress.
    pub fn start_new_game(&mut self, now_ms: f64, dialogs: &mut dyn Dialogs) -> bool {
        if self.arena.is_running() {
            log::warn!("Start ignored: game already running");
            dialogs.warn(ALREADY_RUNNING);
            return false;
        }

        let session = Session::spawn(&mut self.rng, &self.config);
        log::info!("Game started with {} asteroids", session.asteroid_count());
        self.session = Some(session);
        self.arena.start(now_ms);
        true
    }

    /// End the current game and record its time if it is a new best.
    pub fn stop_current_game(
        &mut self,
        reason: StopReason,
        now_ms: f64,
        dialogs: &mut dyn Dialogs,
    ) -> StopOutcome {
        if !self.arena.is_running() {
            if reason == StopReason::Manual {
                dialogs.warn(NOT_RUNNING);
            }
            log::warn!("Stop ({:?}) ignored: no game running", reason);
            return StopOutcome::NotRunning;
        }

        if reason == StopReason::Manual && !dialogs.confirm(CONFIRM_STOP) {
            return StopOutcome::Declined;
        }

        self.session = None;
        let elapsed = self.arena.stop(now_ms);
        log::info!("Game over ({:?}) after {}", reason, elapsed);

        let new_best = self.best.submit(elapsed);
        if new_best {
            dialogs.warn(NEW_BEST);
        }

        StopOutcome::Stopped { elapsed, new_best }
    }

    /// Consume one event. Movement is ignored unless a game is running.
    pub fn dispatch(&mut self, event: Event) -> Refresh {
        if !self.arena.is_running() {
            return Refresh::Nothing;
        }

        match event {
            Event::Clock { now_ms } => {
                self.arena.refresh_clock(now_ms);
                Refresh::Timer
            }
            Event::Tick | Event::Steer(_) => {
                if self.session.as_mut().is_some_and(|s| s.apply(event)) {
                    Refresh::Canvas
                } else {
                    Refresh::Nothing
                }
            }
        }
    }

    /// Draw list for the current state; empty when no game is running
    pub fn frame(&self) -> Vec<RectCommand<'_>> {
        self.session
            .as_ref()
            .map(|s| frame(s.entities()))
            .unwrap_or_default()
    }

    pub fn timer_text(&self) -> String {
        format!("Current time: {}", self.arena.elapsed())
    }

    pub fn best_time_text(&self) -> String {
        self.best.record().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_time::BestTimeRecord;
    use crate::consts::BEST_TIME_KEY;
    use crate::platform::{MemoryStore, ScriptedDialogs};
    use crate::sim::Direction;
    use glam::Vec2;

    fn controller_with_best(best: BestTimeRecord) -> GameController {
        let json = serde_json::to_string(&best).unwrap();
        let book = BestTimeBook::open(Box::new(MemoryStore::with_item(BEST_TIME_KEY, &json)));
        GameController::new(GameConfig::default(), book, 17).unwrap()
    }

    fn controller() -> GameController {
        GameController::new(GameConfig::default(), BestTimeBook::in_memory(), 17).unwrap()
    }

    #[test]
    fn test_start_spawns_field() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);

        assert!(game.start_new_game(1000.0, &mut dialogs));
        assert!(game.is_running());
        let session = game.session().unwrap();
        assert_eq!(session.asteroid_count(), 10);
        assert_eq!(session.player().unwrap().body.pos, Vec2::new(450.0, 300.0));
        assert_eq!(game.frame().len(), 11);
        assert!(dialogs.warnings.is_empty());
    }

    #[test]
    fn test_start_while_running_warns() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);
        game.start_new_game(0.0, &mut dialogs);
        let first = game.session().unwrap().entities().to_vec();

        assert!(!game.start_new_game(500.0, &mut dialogs));
        assert_eq!(dialogs.warnings, vec![ALREADY_RUNNING.to_string()]);
        // Field and clock untouched
        assert_eq!(game.session().unwrap().entities(), &first[..]);
        assert_eq!(game.arena().started_at_ms(), Some(0.0));
    }

    #[test]
    fn test_manual_stop_when_idle_warns() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);
        assert_eq!(
            game.stop_current_game(StopReason::Manual, 0.0, &mut dialogs),
            StopOutcome::NotRunning
        );
        assert_eq!(dialogs.warnings, vec![NOT_RUNNING.to_string()]);
        assert!(dialogs.questions.is_empty());
    }

    #[test]
    fn test_collision_stop_when_idle_is_silent() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);
        assert_eq!(
            game.stop_current_game(StopReason::Collision, 0.0, &mut dialogs),
            StopOutcome::NotRunning
        );
        assert!(dialogs.warnings.is_empty());
    }

    #[test]
    fn test_declined_stop_keeps_playing() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(false);
        game.start_new_game(0.0, &mut dialogs);

        assert_eq!(
            game.stop_current_game(StopReason::Manual, 30_000.0, &mut dialogs),
            StopOutcome::Declined
        );
        assert_eq!(dialogs.questions, vec![CONFIRM_STOP.to_string()]);
        assert!(game.is_running());
        assert!(game.session().is_some());
    }

    #[test]
    fn test_longer_session_sets_new_best() {
        let mut game = controller_with_best(BestTimeRecord::achieved(SurvivalTime::new(0, 20, 0)));
        let mut dialogs = ScriptedDialogs::new(true);
        game.start_new_game(1000.0, &mut dialogs);

        let outcome = game.stop_current_game(StopReason::Manual, 26_000.0, &mut dialogs);
        assert_eq!(
            outcome,
            StopOutcome::Stopped {
                elapsed: SurvivalTime::new(0, 25, 0),
                new_best: true
            }
        );
        assert_eq!(game.best_time_text(), "Best time: 00:25:000");
        assert_eq!(dialogs.warnings, vec![NEW_BEST.to_string()]);
        assert!(!game.is_running());
        assert!(game.session().is_none());
        assert!(game.frame().is_empty());
    }

    #[test]
    fn test_shorter_session_keeps_best() {
        let mut game = controller_with_best(BestTimeRecord::achieved(SurvivalTime::new(0, 20, 0)));
        let mut dialogs = ScriptedDialogs::new(true);
        game.start_new_game(1000.0, &mut dialogs);

        let outcome = game.stop_current_game(StopReason::Manual, 16_000.0, &mut dialogs);
        assert_eq!(
            outcome,
            StopOutcome::Stopped {
                elapsed: SurvivalTime::new(0, 15, 0),
                new_best: false
            }
        );
        assert_eq!(game.best_time_text(), "Best time: 00:20:000");
        assert!(dialogs.warnings.is_empty());
    }

    #[test]
    fn test_collision_stop_skips_confirmation() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(false);
        game.start_new_game(0.0, &mut dialogs);

        let outcome = game.stop_current_game(StopReason::Collision, 5000.0, &mut dialogs);
        assert!(matches!(outcome, StopOutcome::Stopped { new_best: false, .. }));
        assert!(dialogs.questions.is_empty());
        assert!(!game.is_running());
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);

        // Nothing moves before start
        assert_eq!(game.dispatch(Event::Tick), Refresh::Nothing);

        game.start_new_game(0.0, &mut dialogs);
        let player_before = game.session().unwrap().player().unwrap().body.pos;
        let asteroids_before: Vec<Vec2> = game.session().unwrap().entities()[1..]
            .iter()
            .map(|e| e.body().pos)
            .collect();

        assert_eq!(game.dispatch(Event::Tick), Refresh::Canvas);
        let session = game.session().unwrap();
        assert_eq!(session.player().unwrap().body.pos, player_before);
        let moved = session.entities()[1..]
            .iter()
            .zip(&asteroids_before)
            .all(|(e, before)| e.body().pos != *before);
        assert!(moved, "every asteroid has a nonzero speed");

        assert_eq!(game.dispatch(Event::Steer(Direction::Up)), Refresh::Canvas);
        assert_eq!(
            game.session().unwrap().player().unwrap().body.pos,
            player_before + Vec2::new(0.0, -6.0)
        );

        assert_eq!(game.dispatch(Event::Clock { now_ms: 1234.0 }), Refresh::Timer);
        assert_eq!(game.timer_text(), "Current time: 00:01:234");
    }

    #[test]
    fn test_events_after_stop_are_ignored() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);
        game.start_new_game(0.0, &mut dialogs);
        game.stop_current_game(StopReason::Manual, 3000.0, &mut dialogs);

        assert_eq!(game.dispatch(Event::Tick), Refresh::Nothing);
        assert_eq!(game.dispatch(Event::Steer(Direction::Left)), Refresh::Nothing);
        assert_eq!(game.dispatch(Event::Clock { now_ms: 9000.0 }), Refresh::Nothing);
        assert_eq!(game.timer_text(), "Current time: 00:03:000");
    }

    #[test]
    fn test_new_game_after_stop_gets_fresh_field() {
        let mut game = controller();
        let mut dialogs = ScriptedDialogs::new(true);
        game.start_new_game(0.0, &mut dialogs);
        for _ in 0..50 {
            game.dispatch(Event::Tick);
        }
        game.stop_current_game(StopReason::Manual, 1000.0, &mut dialogs);

        assert!(game.start_new_game(2000.0, &mut dialogs));
        let session = game.session().unwrap();
        assert_eq!(session.asteroid_count(), 10);
        assert_eq!(session.player().unwrap().body.pos, Vec2::new(450.0, 300.0));
        assert_eq!(game.timer_text(), "Current time: 00:00:000");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig::with_canvas(-1.0, 600.0);
        assert!(GameController::new(config, BestTimeBook::in_memory(), 0).is_err());
    }
}
