//! Work-budget resolution: whether a system can collapse out of the half
//! state, and how far a price has drifted from underlying value.

use serde::{Deserialize, Serialize};

use crate::constants::{BANDWIDTH_FACTOR, SATURATION_LIMIT, V_GENERAL, V_QUANTUM};
use crate::error::{EvalError, Result};

/// Resolution state of a system under a work budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicState {
    /// Not enough work available; the system stays at 0.5.
    Potential,
    /// Work invested; the system collapses to 1.0.
    Reality,
}

impl LogicState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Potential => "potential",
            Self::Reality => "reality",
        }
    }

    /// Numeric state value: 0.5 for potential, 1.0 for reality.
    pub fn value(&self) -> f64 {
        match self {
            Self::Potential => V_QUANTUM,
            Self::Reality => V_GENERAL,
        }
    }
}

/// Processing bandwidth available at small scales: S scaled by the
/// bandwidth factor.
pub fn available_work(s: f64) -> f64 {
    s * BANDWIDTH_FACTOR
}

/// Resolve a state against the available work budget.
///
/// A requirement above the budget leaves the system in `Potential`;
/// anything the budget covers collapses to `Reality`.
pub fn resolve_work(required: f64, s: f64) -> LogicState {
    if required > available_work(s) {
        LogicState::Potential
    } else {
        LogicState::Reality
    }
}

/// Stability reading of a price against its underlying value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    /// Paradox density above the saturation limit; a forced correction is due.
    Saturated,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Saturated => "saturated",
        }
    }
}

/// Price paradox density: |price − value| / value.
///
/// Fails with a domain error for a zero value — the gap against nothing is
/// undefined, unlike the ratio classifier which deliberately maps 0 to +∞.
pub fn price_paradox_density(price: f64, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(EvalError::Domain {
            value,
            reason: "underlying value must be non-zero",
        });
    }
    Ok((price - value).abs() / value)
}

/// Bucket a price/value pair against the saturation limit.
pub fn market_stability(price: f64, value: f64) -> Result<(f64, Stability)> {
    let dp = price_paradox_density(price, value)?;
    let stability = if dp > SATURATION_LIMIT {
        Stability::Saturated
    } else {
        Stability::Stable
    };
    Ok((dp, stability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::S_CONSTANT;
    use approx::assert_relative_eq;

    #[test]
    fn test_small_requirement_collapses() {
        // Budget at the default S is 874: a 5000-unit requirement stays potential
        assert_eq!(resolve_work(5000.0, S_CONSTANT), LogicState::Potential);
        assert_eq!(resolve_work(500.0, S_CONSTANT), LogicState::Reality);
    }

    #[test]
    fn test_state_values() {
        assert_eq!(LogicState::Potential.value(), 0.5);
        assert_eq!(LogicState::Reality.value(), 1.0);
    }

    #[test]
    fn test_overpriced_market_saturates() {
        let (dp, stability) = market_stability(185_000.0, 100_000.0).unwrap();
        assert_relative_eq!(dp, 0.85, max_relative = 1e-12);
        assert_eq!(stability, Stability::Saturated);
    }

    #[test]
    fn test_aligned_market_is_stable() {
        let (dp, stability) = market_stability(110_000.0, 100_000.0).unwrap();
        assert!(dp < SATURATION_LIMIT);
        assert_eq!(stability, Stability::Stable);
    }

    #[test]
    fn test_zero_value_is_domain_error() {
        assert!(price_paradox_density(100.0, 0.0).is_err());
    }
}
