//! Bounded pomodoro counter.
//!
//! Never goes below zero. Invalid input is dropped without complaint.

/// Non-negative counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedCounter(u32);

impl BoundedCounter {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// No-op at zero
    pub fn decrement(&mut self) {
        if self.0 > 0 {
            self.0 -= 1;
        }
    }

    /// Accepts any value that fits; negatives are ignored. Returns whether the
    /// value was taken.
    pub fn set_value(&mut self, n: i64) -> bool {
        match u32::try_from(n) {
            Ok(value) => {
                self.0 = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Raw text from a number input
    pub fn set_from_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<i64>() {
            Ok(n) => self.set_value(n),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut counter = BoundedCounter::new(1);
        counter.decrement();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_increment_has_no_small_ceiling() {
        let mut counter = BoundedCounter::new(0);
        for _ in 0..1000 {
            counter.increment();
        }
        assert_eq!(counter.value(), 1000);

        let mut big = BoundedCounter::new(u32::MAX);
        big.increment();
        assert_eq!(big.value(), u32::MAX);
    }

    #[test]
    fn test_set_value_accepts_non_negative() {
        let mut counter = BoundedCounter::new(3);
        for n in [0i64, 1, 7, 250] {
            assert!(counter.set_value(n));
            assert_eq!(counter.value() as i64, n);
        }
    }

    #[test]
    fn test_set_value_ignores_negative() {
        let mut counter = BoundedCounter::new(3);
        assert!(!counter.set_value(-1));
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_set_from_input() {
        let mut counter = BoundedCounter::new(2);
        assert!(counter.set_from_input("5"));
        assert_eq!(counter.value(), 5);

        for bad in ["", "-2", "abc", "1.5", "4x"] {
            assert!(!counter.set_from_input(bad), "accepted {:?}", bad);
            assert_eq!(counter.value(), 5);
        }
    }
}
