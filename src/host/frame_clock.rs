use std::time::{Duration, Instant};

/// steps beyond this are dropped after a stall (window drag, debugger) instead of being replayed
const MAX_CATCH_UP_STEPS: u32 = 5;

/// Fixed-rate stepping on top of a repaint-driven host loop.
pub struct FrameClock {
    frame_duration: Duration,
    next_step_time: Instant,
}

impl FrameClock {
    pub fn new(frame_duration: Duration, now: Instant) -> Self {
        Self {
            frame_duration,
            next_step_time: now,
        }
    }

    pub fn from_fps(fps: u32, now: Instant) -> Self {
        Self::new(frame_duration_for(fps), now)
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Number of simulation steps due at `now`.
    pub fn due_steps(&mut self, now: Instant) -> u32 {
        let mut steps = 0;
        while now >= self.next_step_time {
            self.next_step_time += self.frame_duration;
            steps += 1;
            if steps == MAX_CATCH_UP_STEPS {
                if now >= self.next_step_time {
                    log::debug!("frame clock fell behind; skipping to now");
                    self.next_step_time = now + self.frame_duration;
                }
                break;
            }
        }
        steps
    }

    pub fn until_next_step(&self, now: Instant) -> Duration {
        self.next_step_time.saturating_duration_since(now)
    }
}

pub fn frame_duration_for(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn first_step_is_due_immediately() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(100), start);
        assert_eq!(clock.due_steps(start), 1);
        assert_eq!(clock.due_steps(start + Duration::from_millis(50)), 0);
        assert_eq!(clock.due_steps(start + Duration::from_millis(100)), 1);
    }

    #[test]
    fn catches_up_missed_steps_up_to_a_limit() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(10), start);
        assert_eq!(clock.due_steps(start + Duration::from_millis(35)), 4);
        assert_eq!(clock.due_steps(start + Duration::from_secs(10)), MAX_CATCH_UP_STEPS);
        assert_eq!(clock.due_steps(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn fps_maps_to_frame_duration() {
        assert_eq!(frame_duration_for(10), Duration::from_millis(100));
        assert_eq!(frame_duration_for(0), Duration::from_secs(1));
    }
}
