//! Per-side countdown clock.
//!
//! Remaining time is kept in whole seconds. Elapsed wall time is accumulated
//! per side, so irregular tick intervals neither lose nor invent time.

use std::time::Duration;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    remaining_secs: [u32; 2],
    carry: [Duration; 2],
}

impl Clock {
    pub fn new(seconds_per_side: u32) -> Self {
        Self {
            remaining_secs: [seconds_per_side; 2],
            carry: [Duration::ZERO; 2],
        }
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> u32 {
        self.remaining_secs[color.index()]
    }

    #[inline]
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining_secs[color.index()] == 0
    }

    /// Charges `elapsed` to `color`, floored at zero. Returns `true` once
    /// that side has run out of time.
    pub fn charge(&mut self, color: Color, elapsed: Duration) -> bool {
        let idx = color.index();
        let total = self.carry[idx] + elapsed;
        let whole = total.as_secs();
        self.carry[idx] = total - Duration::from_secs(whole);

        let whole = u32::try_from(whole).unwrap_or(u32::MAX);
        self.remaining_secs[idx] = self.remaining_secs[idx].saturating_sub(whole);
        self.remaining_secs[idx] == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_are_deducted() {
        let mut clock = Clock::new(10);
        assert!(!clock.charge(Color::White, Duration::from_secs(3)));
        assert_eq!(clock.remaining(Color::White), 7);
        assert_eq!(clock.remaining(Color::Black), 10);
    }

    #[test]
    fn fractions_accumulate_without_drift() {
        let mut clock = Clock::new(10);
        for _ in 0..4 {
            clock.charge(Color::Black, Duration::from_millis(400));
        }
        // 1.6 s charged: one whole second gone, 0.6 s carried.
        assert_eq!(clock.remaining(Color::Black), 9);
        clock.charge(Color::Black, Duration::from_millis(400));
        assert_eq!(clock.remaining(Color::Black), 8);
    }

    #[test]
    fn carry_is_kept_per_side() {
        let mut clock = Clock::new(10);
        clock.charge(Color::White, Duration::from_millis(700));
        clock.charge(Color::Black, Duration::from_millis(700));
        assert_eq!(clock.remaining(Color::White), 10);
        assert_eq!(clock.remaining(Color::Black), 10);
        clock.charge(Color::White, Duration::from_millis(300));
        assert_eq!(clock.remaining(Color::White), 9);
    }

    #[test]
    fn never_goes_negative() {
        let mut clock = Clock::new(5);
        assert!(clock.charge(Color::White, Duration::from_secs(60)));
        assert_eq!(clock.remaining(Color::White), 0);
        assert!(clock.is_flagged(Color::White));
    }
}
