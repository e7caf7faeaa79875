use std::fmt;

/// Whether the round clock runs down from a budget or counts up freely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Countdown,
    Elapsed,
}

impl TimerMode {
    pub const ALL: [TimerMode; 2] = [TimerMode::Countdown, TimerMode::Elapsed];

    pub fn name(&self) -> &'static str {
        match self {
            TimerMode::Countdown => "Regressivo",
            TimerMode::Elapsed => "Cronômetro",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whole-second round clock. The session feeds it one tick per elapsed
/// second; only countdown mode can expire.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    mode: TimerMode,
    budget: u32,
    remaining: u32,
    elapsed: u32,
}

impl RoundTimer {
    pub fn new(mode: TimerMode, budget: u32) -> Self {
        Self {
            mode,
            budget,
            remaining: budget,
            elapsed: 0,
        }
    }

    /// Advance one second. Returns true when a countdown just ran out.
    pub fn tick(&mut self) -> bool {
        match self.mode {
            TimerMode::Countdown => {
                if self.remaining > 0 {
                    self.remaining -= 1;
                }
                self.remaining == 0
            }
            TimerMode::Elapsed => {
                self.elapsed += 1;
                false
            }
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_expired(&self) -> bool {
        self.mode == TimerMode::Countdown && self.remaining == 0
    }

    /// The number the player watches: seconds left or seconds spent
    pub fn display_value(&self) -> u32 {
        match self.mode {
            TimerMode::Countdown => self.remaining,
            TimerMode::Elapsed => self.elapsed,
        }
    }

    /// Seconds actually spent on the round so far
    pub fn time_spent(&self) -> u32 {
        match self.mode {
            TimerMode::Countdown => self.budget - self.remaining,
            TimerMode::Elapsed => self.elapsed,
        }
    }
}

/// Format a second count as MM:SS
pub fn format_mm_ss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_ticks_down_to_expiry() {
        let mut timer = RoundTimer::new(TimerMode::Countdown, 3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(timer.is_expired());
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.time_spent(), 3);
    }

    #[test]
    fn test_elapsed_counts_up_and_never_expires() {
        let mut timer = RoundTimer::new(TimerMode::Elapsed, 120);
        for _ in 0..500 {
            assert!(!timer.tick());
        }
        assert!(!timer.is_expired());
        assert_eq!(timer.elapsed(), 500);
        assert_eq!(timer.time_spent(), 500);
        assert_eq!(timer.display_value(), 500);
    }

    #[test]
    fn test_countdown_display_shows_remaining() {
        let mut timer = RoundTimer::new(TimerMode::Countdown, 60);
        timer.tick();
        timer.tick();
        assert_eq!(timer.display_value(), 58);
        assert_eq!(timer.time_spent(), 2);
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(119), "01:59");
        assert_eq!(format_mm_ss(180), "03:00");
    }
}
