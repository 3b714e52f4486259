//! Synthetic-physics scale evaluator.
//!
//! Evaluates paired reference/alternative curves — a conventional baseline
//! formula and the same formula carrying a constant-derived correction —
//! over linear sweeps of one independent variable, and buckets scalar ratios
//! against fixed scale thresholds.
//!
//! Zero I/O — pure math engine with no opinions about storage or rendering.
//! Everything is a deterministic function of an immutable [`Constants`]
//! record plus the arguments of the call.

pub mod classify;
pub mod constants;
pub mod entity;
pub mod error;
pub mod evaluator;
pub mod logic;
pub mod model;
pub mod record;
pub mod sweep;
pub mod work;

pub use classify::{Classification, classify, classify_ratio, ratio};
pub use constants::{
    AU_METERS, BARYONIC_VELOCITY_SCALE, EPSILON, HIGH_RATIO, LOW_RATIO, M_SUN, NEWTON_G,
    S_CONSTANT, SATURATION_LIMIT,
};
pub use entity::{Entity, EntityReport, ScaleCategory, canonical_entities};
pub use error::EvalError;
pub use evaluator::{Constants, Evaluation, ScaleEvaluator};
pub use logic::{paradox_density, synthetic_xor};
pub use model::ScaleModel;
pub use record::{CURRENT_VERSION, RecordedSample, SweepRecord, export_json, import_json};
pub use sweep::{Sweep, SweepPoints, SweepSample};
pub use work::{LogicState, Stability, available_work, market_stability, resolve_work};
