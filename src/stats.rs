use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks generation throughput for the status line
pub struct RateRecord {
    gens: u64,
    alive: usize,
    paused: bool,
    gens_in_report: usize,
    last_report: Instant,
}
impl RateRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            paused: false,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    /// Records one frame: the engine's generation counter, the alive count and
    /// whether that frame advanced the grid
    pub fn record(&mut self, gens: u64, alive: usize, stepped: bool, paused: bool) {
        self.gens = gens;
        self.alive = alive;
        self.paused = paused;
        if stepped {
            self.gens_in_report += 1;
        }
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let secs = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if secs > 0.0 {
            self.gens_in_report as f64 / secs
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{} alive:{}{}",
            gens_per_sec,
            self.gens,
            self.alive,
            if self.paused { " [paused]" } else { "" }
        )
    }
}
