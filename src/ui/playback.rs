//! Playback cursor over a recorded step list.

use std::time::Duration;

/// Delay between automatic steps at 1x speed
pub const BASE_DELAY: Duration = Duration::from_millis(1000);

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 16.0;

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// At the first frame, not playing
    Stopped,
    /// Advancing one step per delay
    Playing,
    Paused,
    /// Reached the last step
    Finished,
}

/// Playback controller.
///
/// The position counts applied steps: `0` shows the initial state and `total` shows the
/// state after the last step.
#[derive(Debug, Clone)]
pub struct Playback {
    total: usize,
    position: usize,
    state: PlaybackState,
    speed: f64,
}

impl Playback {
    pub fn new(total: usize, speed: f64) -> Self {
        Self {
            total,
            position: 0,
            state: PlaybackState::Stopped,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Number of steps applied so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.total
    }

    /// Index of the most recently applied step
    pub fn current_step(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Start playback, rewinding first if already at the end.
    pub fn play(&mut self) {
        if self.at_end() {
            self.position = 0;
        }
        self.state = if self.total == 0 {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Apply the next step. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            self.state = PlaybackState::Finished;
            return false;
        }
        self.position += 1;
        if self.at_end() {
            self.state = PlaybackState::Finished;
        } else if !self.is_playing() {
            self.state = PlaybackState::Paused;
        }
        true
    }

    /// Undo the last step. Returns false at the start.
    pub fn step_backward(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.position -= 1;
        self.state = if self.at_start() {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        };
        true
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_by(&mut self, n: usize) -> usize {
        let taken = n.min(self.total - self.position);
        for _ in 0..taken {
            self.step_forward();
        }
        taken
    }

    /// Jump to `position`, clamped to the step count
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.total);
        self.state = if self.at_end() && self.total > 0 {
            PlaybackState::Finished
        } else if self.at_start() {
            PlaybackState::Stopped
        } else {
            PlaybackState::Paused
        };
    }

    pub fn seek_start(&mut self) {
        self.seek(0);
    }

    pub fn seek_end(&mut self) {
        self.seek(self.total);
    }

    /// Double the speed, up to [`MAX_SPEED`]
    pub fn faster(&mut self) {
        self.speed = (self.speed * 2.0).min(MAX_SPEED);
    }

    /// Halve the speed, down to [`MIN_SPEED`]
    pub fn slower(&mut self) {
        self.speed = (self.speed / 2.0).max(MIN_SPEED);
    }

    /// Time between automatic steps at the current speed
    pub fn delay(&self) -> Duration {
        BASE_DELAY.div_f64(self.speed)
    }

    /// Fraction of steps applied (0.0 - 1.0)
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.position as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_forward_and_back() {
        let mut playback = Playback::new(3, 1.0);
        assert_eq!(playback.current_step(), None);
        assert!(playback.step_forward());
        assert_eq!(playback.current_step(), Some(0));
        assert_eq!(playback.state(), PlaybackState::Paused);

        assert!(playback.step_backward());
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert!(!playback.step_backward());
    }

    #[test]
    fn test_finishes_at_end_and_play_rewinds() {
        let mut playback = Playback::new(2, 1.0);
        assert_eq!(playback.step_by(5), 2);
        assert!(playback.at_end());
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert!(!playback.step_forward());

        playback.play();
        assert_eq!(playback.position(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_seek_clamps() {
        let mut playback = Playback::new(4, 1.0);
        playback.seek(10);
        assert_eq!(playback.position(), 4);
        playback.seek_start();
        assert_eq!(playback.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_speed_controls_delay() {
        let mut playback = Playback::new(1, 1.0);
        assert_eq!(playback.delay(), Duration::from_millis(1000));
        playback.faster();
        assert_eq!(playback.delay(), Duration::from_millis(500));
        for _ in 0..10 {
            playback.slower();
        }
        assert_eq!(playback.speed(), MIN_SPEED);
        assert_eq!(playback.delay(), Duration::from_millis(4000));
    }
}
