use std::collections::VecDeque;

/// Cumulative CPU tick counters since an OS-defined epoch (typically boot).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

impl CpuTicks {
    pub fn total(&self) -> u64 {
        self.user + self.nice + self.system + self.idle
    }
}

/// Point-in-time percentage breakdown of CPU time, each field in [0, 100].
///
/// All four tick categories are reported; `user + system + idle` alone comes
/// to `100 - nice`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpuSnapshot {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
    pub nice: f64,
}

impl CpuSnapshot {
    /// Share of time not spent idle, for the history chart.
    pub fn busy(&self) -> f64 {
        (100.0 - self.idle).clamp(0.0, 100.0)
    }
}

/// One poll's worth of display data for the CPU panel.
pub struct PanelStats {
    pub snapshot: CpuSnapshot,
    pub per_core_usage: Vec<f32>,
    pub core_count: usize,
}

/// Bounded ring of recent busy percentages.
pub struct UsageHistory {
    points: VecDeque<f32>,
    max_points: usize,
}

impl UsageHistory {
    pub fn new(max_points: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_points),
            max_points,
        }
    }

    pub fn push(&mut self, busy_percent: f64) {
        if self.points.len() >= self.max_points {
            self.points.pop_front();
        }
        self.points.push_back(busy_percent as f32);
    }

    pub fn points(&self) -> &VecDeque<f32> {
        &self.points
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_is_complement_of_idle() {
        let snap = CpuSnapshot {
            user: 50.0,
            system: 30.0,
            idle: 20.0,
            nice: 0.0,
        };
        assert!((snap.busy() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn history_drops_oldest_at_capacity() {
        let mut history = UsageHistory::new(3);
        for v in [10.0, 20.0, 30.0, 40.0] {
            history.push(v);
        }
        assert_eq!(history.points().len(), 3);
        assert_eq!(history.points().front().copied(), Some(20.0));
        assert_eq!(history.points().back().copied(), Some(40.0));
    }
}
