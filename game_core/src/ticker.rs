/// Turns wall-clock time into a whole number of fixed-length simulation ticks.
///
/// Leftover time carries into the next call. A long stall (a hidden tab, a
/// debugger pause) yields at most `max_ticks` ticks and the rest of the
/// backlog is dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    period_ms: f64,
    max_ticks: u32,
    accumulator: f64,
    last_now: Option<f64>,
}

impl FixedTicker {
    pub fn new(period_ms: f64, max_ticks: u32) -> Self {
        Self {
            period_ms,
            max_ticks,
            accumulator: 0.0,
            last_now: None,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Add `elapsed_ms` and return how many ticks are due
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator += elapsed_ms;
        }

        let due = (self.accumulator / self.period_ms).floor();
        if due >= self.max_ticks as f64 {
            self.accumulator %= self.period_ms;
            return self.max_ticks;
        }
        let ticks = due as u32;
        self.accumulator -= ticks as f64 * self.period_ms;
        ticks
    }

    /// Like [`advance`](Self::advance) but from an absolute timestamp; the
    /// first call only records the clock
    pub fn advance_to(&mut self, now_ms: f64) -> u32 {
        let elapsed = match self.last_now.replace(now_ms) {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.advance(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_and_remainder_carry() {
        let mut ticker = FixedTicker::new(10.0, 10);
        assert_eq!(ticker.advance(25.0), 2);
        assert_eq!(ticker.advance(4.0), 0);
        assert_eq!(ticker.advance(1.0), 1, "Carried 5 ms plus 5 ms makes a tick");
    }

    #[test]
    fn test_backlog_is_capped_and_dropped() {
        let mut ticker = FixedTicker::new(10.0, 10);
        assert_eq!(ticker.advance(5_003.0), 10);
        assert_eq!(ticker.advance(7.0), 1, "Only the sub-tick remainder survives");
    }

    #[test]
    fn test_ignores_non_positive_and_nan() {
        let mut ticker = FixedTicker::new(10.0, 10);
        assert_eq!(ticker.advance(-50.0), 0);
        assert_eq!(ticker.advance(f64::NAN), 0);
        assert_eq!(ticker.advance(10.0), 1);
    }

    #[test]
    fn test_advance_to_uses_timestamps() {
        let mut ticker = FixedTicker::new(10.0, 10);
        assert_eq!(ticker.advance_to(1_000.0), 0, "First timestamp only seeds the clock");
        assert_eq!(ticker.advance_to(1_016.0), 1);
        assert_eq!(ticker.advance_to(1_032.0), 2);
        assert_eq!(ticker.period_ms(), 10.0);
    }
}
