//! Simulation report generation.

use serde::Serialize;

/// Outcome of one headless session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub ticks_survived: u64,
    pub pairs_spawned: u64,
    pub flaps: u64,
    /// Still alive when the tick limit was reached
    pub timed_out: bool,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub policy: String,
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub avg_ticks_survived: f64,
    pub min_ticks_survived: u64,
    pub max_ticks_survived: u64,
    pub avg_pairs_spawned: f64,
    pub avg_flaps: f64,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(policy: &str, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = (num_runs as f64).max(1.0);
        let avg = |f: fn(&RunStats) -> u64| runs.iter().map(|r| f(r) as f64).sum::<f64>() / divisor;

        Self {
            policy: policy.to_string(),
            num_runs,
            runs_timed_out: runs.iter().filter(|r| r.timed_out).count() as u32,
            avg_ticks_survived: avg(|r| r.ticks_survived),
            min_ticks_survived: runs.iter().map(|r| r.ticks_survived).min().unwrap_or(0),
            max_ticks_survived: runs.iter().map(|r| r.ticks_survived).max().unwrap_or(0),
            avg_pairs_spawned: avg(|r| r.pairs_spawned),
            avg_flaps: avg(|r| r.flaps),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Policy: {}   Runs: {} total, {} reached the tick limit\n\n",
            self.policy, self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Ticks Survived:  {:.1}  ({:.1}s)\n",
            self.avg_ticks_survived,
            self.avg_ticks_survived / crate::core::constants::TICKS_PER_SECOND as f64
        ));
        report.push_str(&format!(
            "  Min / Max:           {} / {}\n",
            self.min_ticks_survived, self.max_ticks_survived
        ));
        report.push_str(&format!(
            "  Avg Pipe Pairs:      {:.1}\n",
            self.avg_pairs_spawned
        ));
        report.push_str(&format!("  Avg Flaps:           {:.1}\n", self.avg_flaps));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ticks: u64, timed_out: bool) -> RunStats {
        RunStats {
            ticks_survived: ticks,
            pairs_spawned: ticks / 200 + 1,
            flaps: ticks / 10,
            timed_out,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs("idle", vec![run(100, false), run(300, true)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.avg_ticks_survived, 200.0);
        assert_eq!(report.min_ticks_survived, 100);
        assert_eq!(report.max_ticks_survived, 300);
        assert_eq!(report.avg_flaps, 20.0);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs("idle", Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_ticks_survived, 0.0);
        assert_eq!(report.max_ticks_survived, 0);
    }

    #[test]
    fn test_text_and_json() {
        let report = SimReport::from_runs("autopilot", vec![run(600, false)]);
        assert!(report.to_text().contains("autopilot"));
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json()).expect("report json parses");
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["runs"][0]["ticks_survived"], 600);
    }
}
