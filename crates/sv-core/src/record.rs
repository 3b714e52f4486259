//! Versioned JSON snapshot of one sweep run.
//!
//! The record is the hand-off format between the evaluator and anything
//! downstream — archival, rendering, plotting. Per-point domain errors are
//! carried as strings so a replayed record shows exactly what the sweep
//! produced.

use serde::{Deserialize, Serialize};

use crate::evaluator::{Constants, Evaluation, ScaleEvaluator};
use crate::model::ScaleModel;
use crate::sweep::Sweep;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub version: u32,
    pub model: ScaleModel,
    pub independent_variable: String,
    pub constants: Constants,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub samples: Vec<RecordedSample>,
}

/// One sweep position: either the evaluation or the domain error it hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedSample {
    pub index: usize,
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SweepRecord {
    /// Run the full sweep through the evaluator and snapshot every outcome.
    pub fn capture(evaluator: &ScaleEvaluator, sweep: &Sweep) -> Self {
        let samples = evaluator
            .sweep(sweep)
            .map(|sample| match sample.result {
                Ok(evaluation) => RecordedSample {
                    index: sample.index,
                    x: sample.x,
                    evaluation: Some(evaluation),
                    error: None,
                },
                Err(e) => RecordedSample {
                    index: sample.index,
                    x: sample.x,
                    evaluation: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        Self {
            version: CURRENT_VERSION,
            model: evaluator.model(),
            independent_variable: evaluator.model().independent_variable().to_string(),
            constants: *evaluator.constants(),
            lower: sweep.lower(),
            upper: sweep.upper(),
            count: sweep.len(),
            samples,
        }
    }

    /// Number of samples that evaluated cleanly.
    pub fn ok_count(&self) -> usize {
        self.samples.iter().filter(|s| s.evaluation.is_some()).count()
    }
}

/// Serialize a record to pretty JSON.
pub fn export_json(record: &SweepRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Parse a record, rejecting versions newer than this crate understands.
pub fn import_json(json: &str) -> Result<SweepRecord, serde_json::Error> {
    use serde::de::Error;

    let record: SweepRecord = serde_json::from_str(json)?;
    if record.version > CURRENT_VERSION {
        return Err(serde_json::Error::custom(format!(
            "unsupported record version {} (current is {CURRENT_VERSION})",
            record.version
        )));
    }
    Ok(record)
}
