use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
}

/// Wall-clock timer for a whole run. With stats enabled it also samples the
/// process' CPU and memory at each phase.
pub struct RunMonitor {
    start_time: Instant,
    #[cfg(feature = "cli")]
    sampler: Option<Sampler>,
}

#[cfg(feature = "cli")]
struct Sampler {
    system: Mutex<System>,
    pid: Pid,
    peak_memory_mb: Mutex<u64>,
}

impl RunMonitor {
    pub fn new(stats_enabled: bool) -> Self {
        #[cfg(not(feature = "cli"))]
        let _ = stats_enabled;

        Self {
            start_time: Instant::now(),
            #[cfg(feature = "cli")]
            sampler: stats_enabled.then(Sampler::new).flatten(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn stats_enabled(&self) -> bool {
        #[cfg(feature = "cli")]
        {
            self.sampler.is_some()
        }
        #[cfg(not(feature = "cli"))]
        {
            false
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        #[cfg(feature = "cli")]
        {
            self.sampler.as_ref()?.sample()
        }
        #[cfg(not(feature = "cli"))]
        {
            None
        }
    }

    pub fn log_phase(&self, phase: &str) {
        match self.get_stats() {
            Some(stats) => tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:.2}s",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                self.elapsed().as_secs_f64()
            ),
            None => tracing::debug!("⏱️ {} - {:.2}s", phase, self.elapsed().as_secs_f64()),
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(feature = "cli")]
impl Sampler {
    fn new() -> Option<Self> {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                tracing::warn!("⚠️ System stats unavailable: {}", e);
                return None;
            }
        };

        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        Some(Self {
            system: Mutex::new(system),
            pid,
            peak_memory_mb: Mutex::new(0),
        })
    }

    fn sample(&self) -> Option<SystemStats> {
        let mut system = self.system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);

        let process = system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = self.peak_memory_mb.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(SystemStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: *peak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_still_measures_time() {
        let monitor = RunMonitor::new(false);
        std::thread::sleep(Duration::from_millis(5));

        assert!(!monitor.stats_enabled());
        assert!(monitor.get_stats().is_none());
        assert!(monitor.elapsed() >= Duration::from_millis(5));
    }
}
