use super::{SamplerError, TickSource};
use crate::model::CpuTicks;

/// Live tick counters for this host.
///
/// Backed by the aggregate `cpu` line of `/proc/stat` on Linux. Platforms
/// without that interface report the counters as unavailable.
pub struct SystemTicks;

impl TickSource for SystemTicks {
    #[cfg(target_os = "linux")]
    fn ticks(&self) -> Result<CpuTicks, SamplerError> {
        let stat = std::fs::read_to_string("/proc/stat")
            .map_err(|e| SamplerError::Unavailable(format!("reading /proc/stat: {}", e)))?;
        parse_proc_stat(&stat)
    }

    #[cfg(not(target_os = "linux"))]
    fn ticks(&self) -> Result<CpuTicks, SamplerError> {
        Err(SamplerError::Unavailable(
            "cpu tick counters are not supported on this platform".into(),
        ))
    }
}

/// Extracts the four standard tick categories from `/proc/stat` contents.
///
/// The aggregate line reads `cpu user nice system idle ...`; trailing fields
/// (iowait, irq, ...) are ignored.
#[cfg(any(target_os = "linux", test))]
fn parse_proc_stat(stat: &str) -> Result<CpuTicks, SamplerError> {
    let line = stat
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| SamplerError::Unavailable("no aggregate cpu line in /proc/stat".into()))?;

    let mut counts = [0u64; 4];
    let mut fields = line.split_whitespace().skip(1);
    for slot in counts.iter_mut() {
        let field = fields
            .next()
            .ok_or_else(|| SamplerError::Unavailable("truncated cpu line in /proc/stat".into()))?;
        *slot = field
            .parse()
            .map_err(|_| SamplerError::Unavailable(format!("malformed tick count {:?}", field)))?;
    }

    let [user, nice, system, idle] = counts;
    Ok(CpuTicks {
        user,
        nice,
        system,
        idle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aggregate_line() {
        let stat = "cpu  8134 52 2091 39012 420 0 13 0 0 0\n\
                    cpu0 4000 30 1000 19500 210 0 7 0 0 0\n\
                    intr 12345\n";
        let ticks = parse_proc_stat(stat).unwrap();
        assert_eq!(
            ticks,
            CpuTicks {
                user: 8134,
                nice: 52,
                system: 2091,
                idle: 39012,
            }
        );
    }

    #[test]
    fn rejects_stat_without_aggregate_line() {
        assert!(parse_proc_stat("intr 12345\nctxt 99\n").is_err());
    }

    #[test]
    fn rejects_malformed_tick_field() {
        assert!(parse_proc_stat("cpu  12 oops 34 56\n").is_err());
    }

    #[test]
    fn rejects_truncated_line() {
        assert!(parse_proc_stat("cpu  12 34\n").is_err());
    }
}
