//! Injectable randomness seam for the synthetic provider.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Uniform random source.
///
/// Implementations must be `Send + Sync`; providers share them across calls.
pub trait RandomSource: Send + Sync {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// Default source backed by fastrand's thread-local generator.
#[derive(Debug, Default)]
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn next_unit(&self) -> f64 {
        fastrand::f64()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Lets tests pin the synthetic series to exact values.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// A source that always draws the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastrand_draws_stay_in_unit_interval() {
        let source = FastrandSource;
        for _ in 0..100 {
            let draw = source.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn sequence_replays_and_cycles() {
        let source = SequenceSource::new(vec![0.1, 0.2]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.2);
        assert_eq!(source.next_unit(), 0.1);
    }

    #[test]
    fn empty_sequence_falls_back_to_midpoint() {
        let source = SequenceSource::new(Vec::new());
        assert_eq!(source.next_unit(), 0.5);
    }
}
