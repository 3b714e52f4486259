//! Text rendering for evaluator output.
//!
//! Pure string-returning functions (no I/O) so every report shape is
//! unit-testable without capturing stdout. The computational core stays
//! presentation-free; everything printable is assembled here.

use std::fmt::Write;

use sv_core::{Entity, EntityReport, LogicState, Stability, SweepRecord};
use sv_store::RunSummary;

/// Full sweep table: header block, one row per sample, bucket summary.
pub fn render_sweep_table(record: &SweepRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "model:      {}", record.model.as_str());
    let _ = writeln!(
        out,
        "range:      {} from {} to {} ({} points)",
        record.independent_variable, record.lower, record.upper, record.count
    );
    let _ = writeln!(
        out,
        "constants:  g={:e} s={:e} complexity={:e}",
        record.constants.g, record.constants.s, record.constants.complexity
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>14}  {:>14}  {:>14}  {:>10}  {}",
        record.independent_variable, "reference", "alternative", "ratio", "class"
    );

    let mut low = 0usize;
    let mut transitional = 0usize;
    let mut high = 0usize;
    let mut failed = 0usize;
    for sample in &record.samples {
        match (&sample.evaluation, &sample.error) {
            (Some(e), _) => {
                let _ = writeln!(
                    out,
                    "{:>14.4}  {:>14.6e}  {:>14.6e}  {:>10.4}  {}",
                    e.x,
                    e.reference,
                    e.alternative,
                    e.ratio,
                    e.classification.as_str()
                );
                match e.classification.as_str() {
                    "low" => low += 1,
                    "high" => high += 1,
                    _ => transitional += 1,
                }
            }
            (None, Some(error)) => {
                let _ = writeln!(out, "{:>14.4}  {error}", sample.x);
                failed += 1;
            }
            (None, None) => {}
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "summary: {} ok ({} low, {} transitional, {} high), {} failed",
        record.ok_count(),
        low,
        transitional,
        high,
        failed
    );
    out
}

/// One diagnosis block per entity, in the validator's console shape.
pub fn render_entity(entity: &Entity, report: &EntityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ({}) ---", entity.name, entity.category.as_str());
    let _ = writeln!(
        out,
        "  newtonian gravity: {:.4e} m/s^2",
        report.newtonian_gravity
    );
    let _ = writeln!(
        out,
        "  scaling constant:  {:.4e} m/s^2",
        report.scaling_constant
    );
    if report.ratio.is_infinite() {
        let _ = writeln!(out, "  ratio (S / a_g):   inf");
    } else {
        let _ = writeln!(out, "  ratio (S / a_g):   {:.4e}", report.ratio);
    }
    let _ = writeln!(
        out,
        "  >> {}: {}",
        report.classification.as_str(),
        report.classification.diagnosis()
    );
    out
}

/// Work-resolution verdict for one named system.
pub fn render_resolution(
    name: &str,
    required: f64,
    available: f64,
    state: LogicState,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- resolving: {name} ---");
    let _ = writeln!(out, "  required work:  {required:.2}");
    let _ = writeln!(out, "  available work: {available:.2}");
    let verdict = match state {
        LogicState::Potential => "insufficient work; system remains in potential (0.5)",
        LogicState::Reality => "work invested; system collapses to reality (1.0)",
    };
    let _ = writeln!(out, "  >> {}: {verdict}", state.as_str());
    out
}

/// Price/value stability verdict.
pub fn render_stability(price: f64, value: f64, dp: f64, stability: Stability) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "price:           {price:.2}");
    let _ = writeln!(out, "value:           {value:.2}");
    let _ = writeln!(out, "paradox density: {dp:.4}");
    match stability {
        Stability::Saturated => {
            let _ = writeln!(out, ">> saturated: paradox limit exceeded, correction due");
        }
        Stability::Stable => {
            let _ = writeln!(out, ">> stable: price aligned with value");
        }
    }
    out
}

/// Archive listing, newest first.
pub fn render_run_list(runs: &[RunSummary]) -> String {
    if runs.is_empty() {
        return "(no archived runs)\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<36}  {:<18}  {:>10}  {:>10}  {:>7}  created",
        "id", "model", "lower", "upper", "ok/total"
    );
    for run in runs {
        let _ = writeln!(
            out,
            "{:<36}  {:<18}  {:>10.4}  {:>10.4}  {:>3}/{:<3}  {}",
            run.id, run.model, run.lower, run.upper, run.ok_count, run.count, run.created_at
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::{
        Constants, ScaleCategory, ScaleEvaluator, ScaleModel, Sweep, market_stability,
    };

    fn record(model: ScaleModel, lower: f64, upper: f64, count: usize) -> SweepRecord {
        let evaluator = ScaleEvaluator::new(Constants::default(), model).unwrap();
        let sweep = Sweep::new(lower, upper, count).unwrap();
        SweepRecord::capture(&evaluator, &sweep)
    }

    #[test]
    fn test_sweep_table_has_one_row_per_sample() {
        let record = record(ScaleModel::WideBinary, 1000.0, 20000.0, 5);
        let table = render_sweep_table(&record);
        let data_rows = table
            .lines()
            .filter(|l| l.contains("transitional"))
            .count();
        assert_eq!(data_rows, 5);
        assert!(table.contains("summary: 5 ok (0 low, 5 transitional, 0 high), 0 failed"));
    }

    #[test]
    fn test_sweep_table_shows_failed_points() {
        let record = record(ScaleModel::GalacticRotation, -1.0, 1.0, 3);
        let table = render_sweep_table(&record);
        assert!(table.contains("domain error"));
        assert!(table.contains("1 ok"));
        assert!(table.contains("2 failed"));
    }

    #[test]
    fn test_entity_block_carries_diagnosis() {
        let entity = Entity::new("Planet Earth", 5.97e24, 6.371e6, ScaleCategory::Planetary);
        let report = entity.report(&Constants::default());
        let block = render_entity(&entity, &report);
        assert!(block.contains("Planet Earth (planetary)"));
        assert!(block.contains("physical mass enforces absolute certainty"));
    }

    #[test]
    fn test_stability_rendering() {
        let (dp, stability) = market_stability(185_000.0, 100_000.0).unwrap();
        let text = render_stability(185_000.0, 100_000.0, dp, stability);
        assert!(text.contains("0.8500"));
        assert!(text.contains("saturated"));
    }

    #[test]
    fn test_empty_run_list() {
        assert!(render_run_list(&[]).contains("no archived runs"));
    }
}
