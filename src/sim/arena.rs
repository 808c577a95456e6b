//! Arena: canvas bounds, run state and survival clock

use glam::Vec2;

use super::clock::SurvivalTime;

/// Whether a game is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Created once per page; toggles between Stopped and Running
#[derive(Debug, Clone)]
pub struct Arena {
    size: Vec2,
    state: RunState,
    /// Wall-clock instant (ms) of the last start
    started_at_ms: Option<f64>,
    /// Last observed elapsed time; frozen at stop
    elapsed: SurvivalTime,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            state: RunState::Stopped,
            started_at_ms: None,
            elapsed: SurvivalTime::ZERO,
        }
    }

    /// Canvas dimensions
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn started_at_ms(&self) -> Option<f64> {
        self.started_at_ms
    }

    pub fn elapsed(&self) -> SurvivalTime {
        self.elapsed
    }

    /// Stopped -> Running. Resets the clock.
    pub fn start(&mut self, now_ms: f64) {
        self.state = RunState::Running;
        self.started_at_ms = Some(now_ms);
        self.elapsed = SurvivalTime::ZERO;
    }

    /// Refresh the elapsed time (timer display). No effect while stopped.
    pub fn refresh_clock(&mut self, now_ms: f64) -> SurvivalTime {
        if let (RunState::Running, Some(start)) = (self.state, self.started_at_ms) {
            self.elapsed = SurvivalTime::between(start, now_ms);
        }
        self.elapsed
    }

    /// Running -> Stopped, freezing and returning the final elapsed time.
    ///
    /// Not guarded: callers check [`Arena::is_running`] first.
    pub fn stop(&mut self, now_ms: f64) -> SurvivalTime {
        let elapsed = self.refresh_clock(now_ms);
        self.state = RunState::Stopped;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut arena = Arena::new(900.0, 600.0);
        assert_eq!(arena.state(), RunState::Stopped);
        assert_eq!(arena.size(), Vec2::new(900.0, 600.0));

        arena.start(10_000.0);
        assert!(arena.is_running());
        assert_eq!(arena.refresh_clock(12_500.0), SurvivalTime::new(0, 2, 500));

        let final_time = arena.stop(75_004.0);
        assert_eq!(final_time, SurvivalTime::new(1, 5, 4));
        assert_eq!(arena.state(), RunState::Stopped);
        assert_eq!(arena.elapsed(), final_time);
    }

    #[test]
    fn test_clock_frozen_while_stopped() {
        let mut arena = Arena::new(900.0, 600.0);
        arena.start(0.0);
        arena.stop(3000.0);
        assert_eq!(arena.refresh_clock(9000.0), SurvivalTime::new(0, 3, 0));
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut arena = Arena::new(900.0, 600.0);
        arena.start(0.0);
        arena.stop(40_000.0);
        arena.start(50_000.0);
        assert_eq!(arena.elapsed(), SurvivalTime::ZERO);
        assert_eq!(arena.refresh_clock(50_020.0), SurvivalTime::new(0, 0, 20));
    }
}
