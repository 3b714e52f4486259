use serde::{Deserialize, Serialize};

use crate::classify::{Classification, classify_ratio};
use crate::constants::{CONFLICT_FACTOR, NEWTON_G, S_CONSTANT};
use crate::error::{EvalError, Result};
use crate::model::ScaleModel;
use crate::sweep::{Sweep, SweepSample};

/// Immutable record of the named constants an evaluator is built from.
///
/// Fixed at construction and shared by every formula the evaluator exposes.
/// Multiple evaluators with different constants can coexist in one process.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    /// Gravitational constant (m³·kg⁻¹·s⁻²)
    pub g: f64,
    /// Empirical scaling constant (m/s²). Zero disables the correction floor.
    pub s: f64,
    /// Information complexity N — proposition count of the system under study
    pub complexity: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            g: NEWTON_G,
            s: S_CONSTANT,
            complexity: 1e12,
        }
    }
}

impl Constants {
    /// Check the record for use as evaluator configuration.
    ///
    /// `g` must be positive (it divides and scales masses), `s` non-negative
    /// (an additive floor), and `complexity` above one so the paradox density
    /// ln(N) stays a positive divisor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("g", self.g), ("s", self.s), ("complexity", self.complexity)] {
            if !value.is_finite() {
                return Err(EvalError::InvalidConfiguration(format!(
                    "constant '{name}' is not finite: {value}"
                )));
            }
        }
        if self.g <= 0.0 {
            return Err(EvalError::InvalidConfiguration(format!(
                "constant 'g' must be positive, got {}",
                self.g
            )));
        }
        if self.s < 0.0 {
            return Err(EvalError::InvalidConfiguration(format!(
                "constant 's' must be non-negative, got {}",
                self.s
            )));
        }
        if self.complexity <= 1.0 {
            return Err(EvalError::InvalidConfiguration(format!(
                "constant 'complexity' must exceed 1, got {}",
                self.complexity
            )));
        }
        Ok(())
    }

    /// Paradox density Dp = conflict · ln(N) at the default conflict factor.
    pub fn paradox_density(&self) -> f64 {
        crate::logic::paradox_density(self.complexity, CONFLICT_FACTOR)
    }
}

/// Both curves evaluated at one sample point, with the alternative/reference
/// ratio already bucketed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub x: f64,
    pub reference: f64,
    pub alternative: f64,
    pub ratio: f64,
    pub classification: Classification,
}

/// Deterministic scalar-field evaluator over one formula preset.
///
/// Holds a validated [`Constants`] record and a [`ScaleModel`]; every method
/// is a pure function of its arguments plus those constants. No state is
/// accumulated between calls, so sweeps are restartable and repeatable.
#[derive(Clone, Copy, Debug)]
pub struct ScaleEvaluator {
    constants: Constants,
    model: ScaleModel,
}

impl ScaleEvaluator {
    /// Build an evaluator, rejecting an unusable constants record up front.
    /// A malformed record is fatal here — it can never fail mid-sweep.
    pub fn new(constants: Constants, model: ScaleModel) -> Result<Self> {
        constants.validate()?;
        Ok(Self { constants, model })
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn model(&self) -> ScaleModel {
        self.model
    }

    /// Conventional baseline formula at `x`.
    pub fn evaluate_reference(&self, x: f64) -> Result<f64> {
        check_sample(x)?;
        self.model.reference(&self.constants, x)
    }

    /// Baseline formula with the constant-derived correction.
    pub fn evaluate_alternative(&self, x: f64) -> Result<f64> {
        check_sample(x)?;
        self.model.alternative(&self.constants, x)
    }

    /// Both curves at `x`, plus the bucketed alternative/reference ratio.
    pub fn evaluate(&self, x: f64) -> Result<Evaluation> {
        let reference = self.evaluate_reference(x)?;
        let alternative = self.evaluate_alternative(x)?;
        let (ratio, classification) = classify_ratio(alternative, reference);
        Ok(Evaluation {
            x,
            reference,
            alternative,
            ratio,
            classification,
        })
    }

    /// Evaluate every point of `sweep` in order.
    ///
    /// A point that violates the formula's domain yields its error in place;
    /// the remaining points still evaluate. The iterator borrows only the
    /// evaluator and can be re-created from the same sweep at will.
    pub fn sweep<'a>(&'a self, sweep: &Sweep) -> impl Iterator<Item = SweepSample> + 'a {
        sweep
            .points()
            .enumerate()
            .map(move |(index, x)| SweepSample {
                index,
                x,
                result: self.evaluate(x),
            })
    }
}

fn check_sample(x: f64) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(EvalError::Domain {
            value: x,
            reason: "sample is not finite",
        })
    }
}
