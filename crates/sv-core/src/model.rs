use serde::{Deserialize, Serialize};

use crate::constants::{
    AU_METERS, BARYONIC_VELOCITY_SCALE, FRICTION_RATE, M_SUN, V_GENERAL, V_QUANTUM,
    VELOCITY_REPORT_SCALE, WORK_COUPLING,
};
use crate::error::{EvalError, Result};
use crate::evaluator::Constants;

/// Named formula preset selecting the reference/alternative curve pair.
///
/// Every preset is the same contract — a conventional baseline formula and
/// the same formula carrying a constant-derived correction — over a different
/// independent variable:
///
/// - `GalacticRotation`: rotation velocity vs. galactocentric radius (kpc).
///   Baseline is visible-matter-only `100/√r`; the correction adds the work
///   term `√(dp·r·0.05)` holding the outer disk flat.
/// - `PioneerAnomaly`: anomalous acceleration vs. heliocentric distance (AU).
///   Baseline is the flat empirical acceleration `-S`; the correction grows
///   linearly with distance through the logic-friction rate.
/// - `WideBinary`: orbital velocity vs. stellar separation (AU). Baseline is
///   Keplerian `√(GM/r)`; the correction adds the S floor to the Newtonian
///   acceleration before converting back to a velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleModel {
    GalacticRotation,
    PioneerAnomaly,
    WideBinary,
}

impl ScaleModel {
    pub const ALL: [ScaleModel; 3] = [
        Self::GalacticRotation,
        Self::PioneerAnomaly,
        Self::WideBinary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GalacticRotation => "galactic-rotation",
            Self::PioneerAnomaly => "pioneer-anomaly",
            Self::WideBinary => "wide-binary",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "galactic-rotation" => Some(Self::GalacticRotation),
            "pioneer-anomaly" => Some(Self::PioneerAnomaly),
            "wide-binary" => Some(Self::WideBinary),
            _ => None,
        }
    }

    /// Canonical sweep bounds — the range where each anomaly shows.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            Self::GalacticRotation => (1.0, 50.0),
            Self::PioneerAnomaly => (20.0, 150.0),
            Self::WideBinary => (1000.0, 20000.0),
        }
    }

    /// Label of the independent variable, for reports and serialized runs.
    pub fn independent_variable(&self) -> &'static str {
        match self {
            Self::GalacticRotation => "radius_kpc",
            Self::PioneerAnomaly => "distance_au",
            Self::WideBinary => "separation_au",
        }
    }

    /// Conventional baseline formula at `x`. The caller has already checked
    /// that `x` is finite.
    pub(crate) fn reference(&self, constants: &Constants, x: f64) -> Result<f64> {
        match self {
            Self::GalacticRotation => {
                let r = positive(x, "radius must be positive")?;
                Ok(BARYONIC_VELOCITY_SCALE / r.sqrt())
            }
            // The empirical baseline is flat: the same anomalous acceleration
            // at every distance.
            Self::PioneerAnomaly => Ok(-constants.s),
            Self::WideBinary => {
                // Same expression pipeline as the alternative so a zero
                // correction reproduces the baseline bit for bit
                let r = positive(x, "separation must be positive")? * AU_METERS;
                let a_newton = constants.g * M_SUN / (r * r);
                Ok((a_newton * r).sqrt() * VELOCITY_REPORT_SCALE)
            }
        }
    }

    /// Baseline formula with the constant-derived correction applied.
    pub(crate) fn alternative(&self, constants: &Constants, x: f64) -> Result<f64> {
        let dp = constants.paradox_density();
        match self {
            Self::GalacticRotation => {
                let r = positive(x, "radius must be positive")?;
                let v_baseline = BARYONIC_VELOCITY_SCALE / r.sqrt();
                Ok(v_baseline + (dp * r * WORK_COUPLING).sqrt())
            }
            Self::PioneerAnomaly => {
                let friction = FRICTION_RATE * x;
                Ok(-(V_GENERAL + V_QUANTUM) / dp * friction)
            }
            Self::WideBinary => {
                let r = positive(x, "separation must be positive")? * AU_METERS;
                let a_newton = constants.g * M_SUN / (r * r);
                Ok(((a_newton + constants.s) * r).sqrt() * VELOCITY_REPORT_SCALE)
            }
        }
    }
}

fn positive(x: f64, reason: &'static str) -> Result<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvalError::Domain { value: x, reason })
    }
}
