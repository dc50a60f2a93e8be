//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Counters for one simulated player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub sessions: u64,
    pub completed_sessions: u64,
    pub fights: u64,
    pub victories: u64,
    pub defeats: u64,
    pub escapes: u64,
    pub total_experience: u64,
    pub items_found: u64,
    pub upgrades_equipped: u64,
    pub final_level: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub location: String,
    pub num_runs: u32,

    pub avg_final_level: f64,
    pub avg_experience: f64,
    /// Victories per fight
    pub win_rate: f64,
    /// Sessions ending in defeat
    pub defeat_rate: f64,
    /// Sessions ending in escape
    pub escape_rate: f64,
    /// Items dropped per victory
    pub actual_drop_rate: f64,
    pub avg_upgrades_equipped: f64,

    pub level_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl SimReport {
    pub fn from_runs(location: &str, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u64;
        let sum = |f: fn(&RunStats) -> u64| runs.iter().map(f).sum::<u64>();

        let sessions = sum(|r| r.sessions);
        let fights = sum(|r| r.fights);
        let victories = sum(|r| r.victories);

        let avg_final_level = ratio(sum(|r| r.final_level as u64), num_runs);
        let avg_experience = ratio(sum(|r| r.total_experience), num_runs);
        let defeat_rate = ratio(sum(|r| r.defeats), sessions);
        let escape_rate = ratio(sum(|r| r.escapes), sessions);
        let actual_drop_rate = ratio(sum(|r| r.items_found), victories);
        let avg_upgrades_equipped = ratio(sum(|r| r.upgrades_equipped), num_runs);

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            location: location.to_string(),
            num_runs: num_runs as u32,
            avg_final_level,
            avg_experience,
            win_rate: ratio(victories, fights),
            defeat_rate,
            escape_rate,
            actual_drop_rate,
            avg_upgrades_equipped,
            level_distribution,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Location: {}    Runs: {}\n\n",
            self.location, self.num_runs
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:            {:.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!(
            "  Defeat Rate:         {:.1}% of sessions\n",
            self.defeat_rate * 100.0
        ));
        report.push_str(&format!(
            "  Escape Rate:         {:.1}% of sessions\n\n",
            self.escape_rate * 100.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Experience:      {:.0}\n\n", self.avg_experience));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Drop Rate:           {:.1}% per victory\n",
            self.actual_drop_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Upgrades:        {:.1}\n",
            self.avg_upgrades_equipped
        ));

        report
    }

    pub fn level_curve_text(&self) -> String {
        let mut text = String::from("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let share = ratio(*count as u64, self.num_runs as u64);
            text.push_str(&format!(
                "  Lv {:>3}: {:>5} {}\n",
                level,
                count,
                "█".repeat((share * 40.0).round() as usize)
            ));
        }
        text
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
