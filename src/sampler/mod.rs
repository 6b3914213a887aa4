//! CPU utilization sampling.
//!
//! A [`CpuSampler`] reads cumulative tick counters from a [`TickSource`] and
//! converts them into the percentage shares displayed by the panel. The
//! source is injectable so the arithmetic can be tested against synthetic
//! tick data instead of live kernel counters.

mod system;

pub use system::SystemTicks;

use crate::model::{CpuSnapshot, CpuTicks};
use std::fmt;

/// The OS declined or failed to return CPU statistics.
#[derive(Debug)]
pub enum SamplerError {
    Unavailable(String),
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::Unavailable(reason) => {
                write!(f, "cpu statistics unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for SamplerError {}

/// Capability to read cumulative CPU tick counters.
pub trait TickSource {
    fn ticks(&self) -> Result<CpuTicks, SamplerError>;
}

/// Stateless converter from tick counters to percentage shares.
pub struct CpuSampler<S: TickSource> {
    source: S,
}

impl CpuSampler<SystemTicks> {
    /// Sampler over this host's live counters.
    pub fn system() -> Self {
        Self::new(SystemTicks)
    }
}

impl<S: TickSource> CpuSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads the source once and reports each category's share of the total.
    ///
    /// Fails rather than divide by zero when the counters sum to zero.
    pub fn sample(&self) -> Result<CpuSnapshot, SamplerError> {
        let ticks = self.source.ticks()?;
        let total = ticks.total();
        if total == 0 {
            return Err(SamplerError::Unavailable(
                "total tick count is zero".into(),
            ));
        }
        let share = |category: u64| 100.0 * category as f64 / total as f64;
        Ok(CpuSnapshot {
            user: share(ticks.user),
            system: share(ticks.system),
            idle: share(ticks.idle),
            nice: share(ticks.nice),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTicks(CpuTicks);

    impl TickSource for FixedTicks {
        fn ticks(&self) -> Result<CpuTicks, SamplerError> {
            Ok(self.0)
        }
    }

    fn sample(user: u64, nice: u64, system: u64, idle: u64) -> Result<CpuSnapshot, SamplerError> {
        CpuSampler::new(FixedTicks(CpuTicks {
            user,
            nice,
            system,
            idle,
        }))
        .sample()
    }

    #[test]
    fn splits_ticks_into_percentage_shares() {
        let snap = sample(50, 0, 30, 20).unwrap();
        assert!((snap.user - 50.0).abs() < 1e-9);
        assert!((snap.system - 30.0).abs() < 1e-9);
        assert!((snap.idle - 20.0).abs() < 1e-9);
        assert!((snap.nice - 0.0).abs() < 1e-9);
    }

    #[test]
    fn fully_idle_host() {
        let snap = sample(0, 0, 0, 100).unwrap();
        assert_eq!(snap.user, 0.0);
        assert_eq!(snap.system, 0.0);
        assert_eq!(snap.idle, 100.0);
    }

    #[test]
    fn zero_total_fails_instead_of_dividing() {
        let err = sample(0, 0, 0, 0).unwrap_err();
        assert!(matches!(err, SamplerError::Unavailable(_)));
    }

    #[test]
    fn shares_are_bounded_and_sum_to_one_hundred() {
        let cases = [
            (1, 2, 3, 4),
            (123, 0, 456, 789),
            (0, 7, 0, 1),
            (u64::MAX / 4, u64::MAX / 4, u64::MAX / 4, u64::MAX / 4),
        ];
        for (user, nice, system, idle) in cases {
            let snap = sample(user, nice, system, idle).unwrap();
            for pct in [snap.user, snap.nice, snap.system, snap.idle] {
                assert!((0.0..=100.0).contains(&pct), "{} out of range", pct);
            }
            let sum = snap.user + snap.nice + snap.system + snap.idle;
            assert!((sum - 100.0).abs() < 1e-6, "shares sum to {}", sum);
        }
    }

    #[test]
    fn repeated_samples_of_a_fixed_source_are_identical() {
        let sampler = CpuSampler::new(FixedTicks(CpuTicks {
            user: 10,
            nice: 5,
            system: 25,
            idle: 60,
        }));
        let first = sampler.sample().unwrap();
        let second = sampler.sample().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn source_failure_propagates() {
        struct Failing;
        impl TickSource for Failing {
            fn ticks(&self) -> Result<CpuTicks, SamplerError> {
                Err(SamplerError::Unavailable("no kernel counters".into()))
            }
        }
        assert!(CpuSampler::new(Failing).sample().is_err());
    }
}
