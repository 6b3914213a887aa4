use crate::model::PanelStats;
use crate::sampler::{CpuSampler, SamplerError, SystemTicks};
use sysinfo::System;

/// Polls the host for the figures shown by the CPU panel.
pub struct SystemMonitor {
    sys: System,
    sampler: CpuSampler<SystemTicks>,
}

impl SystemMonitor {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        Self {
            sys,
            sampler: CpuSampler::system(),
        }
    }

    /// One poll: tick-derived percentage shares plus per-core usage.
    ///
    /// A failed sample is an ordinary error; whether it ends the display loop
    /// is the caller's decision.
    pub fn poll(&mut self) -> Result<PanelStats, SamplerError> {
        self.sys.refresh_cpu_usage();
        let snapshot = self.sampler.sample()?;
        let cpus = self.sys.cpus();
        Ok(PanelStats {
            snapshot,
            per_core_usage: cpus.iter().map(|c| c.cpu_usage()).collect(),
            core_count: cpus.len(),
        })
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new()
    }
}
