//! Uniform performance record shared by every solver.

use std::time::Instant;

/// Performance of one solve call.
///
/// Field names are stable: reporting layers export them verbatim. A record
/// produced by an early guard exit is all zeros ([`Metrics::default`]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Wall-clock duration of the call, in seconds.
    pub runtime: f64,
    /// Number of frontier pops (search) or cell evaluations (planning).
    pub states_expanded: usize,
    /// Largest frontier observed (search) or value table size (planning).
    pub peak_memory_proxy: usize,
    /// Number of cells in the returned path, 0 if none.
    pub path_length: usize,
}

/// Wall-clock timer for filling [`Metrics::runtime`].
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Seconds elapsed since [`start`](Self::start).
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zeroed() {
        let m = Metrics::default();
        assert_eq!(m.runtime, 0.0);
        assert_eq!(m.states_expanded, 0);
        assert_eq!(m.peak_memory_proxy, 0);
        assert_eq!(m.path_length, 0);
    }

    #[test]
    fn stopwatch_is_monotonic() {
        let sw = Stopwatch::start();
        let a = sw.seconds();
        let b = sw.seconds();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
