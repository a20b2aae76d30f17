//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Caps the loop at a fixed frame rate by sleeping off the unused part of
/// each frame. Overrunning frames return immediately.
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Target frame duration
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time still to wait when `elapsed` of the frame has been used
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Block until the current frame's slot is over, then start the next one
    pub fn wait(&mut self) {
        if let Some(rest) = self.remaining(self.frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
        self.frame_start = Instant::now();
    }
}

/// Frame time handed to the simulation: stalls (window drags, breakpoints)
/// are capped so nothing tunnels through an obstacle.
#[inline]
pub fn sim_dt(frame_time: f32) -> f32 {
    if frame_time.is_finite() {
        frame_time.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(
            limiter.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(limiter.remaining(Duration::from_millis(20)), None);
        assert_eq!(limiter.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn test_sim_dt_clamps() {
        assert_eq!(sim_dt(0.016), 0.016);
        assert_eq!(sim_dt(2.5), MAX_FRAME_DT);
        assert_eq!(sim_dt(-1.0), 0.0);
        assert_eq!(sim_dt(f32::NAN), 0.0);
    }
}
