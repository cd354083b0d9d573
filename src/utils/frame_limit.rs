use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces a render loop to a maximum frame rate.
pub struct FrameLimiter {
    min_frametime: Duration,
    last_frame: Instant,
    frametime_smoothed: f64,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self {
            min_frametime: Duration::ZERO,
            last_frame: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FrameLimiter {
    /// Smoothed frame rate actually achieved.
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Non-positive or non-finite values remove the limit.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.min_frametime = if max_fps > 0. && max_fps.is_finite() {
            Duration::from_secs_f64(max_fps.recip())
        } else {
            Duration::ZERO
        };
    }

    /// Sleeps until at least the minimal frame time has passed since the previous call.
    pub fn delay(&mut self) {
        let deadline = self.last_frame + self.min_frametime;
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            sleep(remaining);
        }
        let now = Instant::now();
        let frametime = now.duration_since(self.last_frame).as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.last_frame = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_waits_for_target() {
        let mut limiter = FrameLimiter::default();
        limiter.set_max_fps(100.);
        let start = Instant::now();
        limiter.delay();
        limiter.delay();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(limiter.fps() > 0.);
    }

    #[test]
    fn test_unlimited() {
        let mut limiter = FrameLimiter::default();
        limiter.set_max_fps(0.);
        let start = Instant::now();
        limiter.delay();
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
