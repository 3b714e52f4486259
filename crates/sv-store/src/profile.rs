//! Sweep profiles: TOML files supplying a model, sweep bounds, and constant
//! overrides, so evaluator configuration comes from config rather than code.
//!
//! ```toml
//! model = "wide-binary"
//! lower = 1000.0
//! upper = 20000.0
//! count = 100
//!
//! [constants]
//! complexity = 1.5e3
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sv_core::{Constants, ScaleModel};

use crate::error::{Result, StoreError};

#[derive(Clone, Debug, Deserialize)]
pub struct SweepProfile {
    pub model: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    #[serde(default)]
    pub constants: ConstantOverrides,
}

/// Optional per-profile constant overrides; anything absent keeps its
/// default value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConstantOverrides {
    pub g: Option<f64>,
    pub s: Option<f64>,
    pub complexity: Option<f64>,
}

impl SweepProfile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidData(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| StoreError::InvalidData(format!("invalid profile: {e}")))
    }

    /// Resolve the model name; unknown names list the valid ones.
    pub fn model(&self) -> Result<ScaleModel> {
        ScaleModel::from_name(&self.model).ok_or_else(|| {
            let known: Vec<&str> = ScaleModel::ALL.iter().map(|m| m.as_str()).collect();
            StoreError::InvalidData(format!(
                "unknown model '{}' (expected one of: {})",
                self.model,
                known.join(", ")
            ))
        })
    }

    /// Default constants with this profile's overrides applied. Validation
    /// happens where it always does — at evaluator construction.
    pub fn constants(&self) -> Constants {
        let mut constants = Constants::default();
        if let Some(g) = self.constants.g {
            constants.g = g;
        }
        if let Some(s) = self.constants.s {
            constants.s = s;
        }
        if let Some(complexity) = self.constants.complexity {
            constants.complexity = complexity;
        }
        constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_profile() {
        let profile = SweepProfile::from_toml_str(
            r#"
            model = "galactic-rotation"
            lower = 1.0
            upper = 50.0
            count = 100

            [constants]
            complexity = 1.5e3
            "#,
        )
        .unwrap();

        assert_eq!(profile.model().unwrap(), ScaleModel::GalacticRotation);
        let constants = profile.constants();
        assert_eq!(constants.complexity, 1.5e3);
        // Untouched constants keep their defaults
        assert_eq!(constants.g, Constants::default().g);
    }

    #[test]
    fn test_overrides_default_when_absent() {
        let profile = SweepProfile::from_toml_str(
            r#"
            model = "pioneer-anomaly"
            lower = 20.0
            upper = 150.0
            count = 100
            "#,
        )
        .unwrap();
        assert_eq!(profile.constants(), Constants::default());
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let profile = SweepProfile::from_toml_str(
            r#"
            model = "epicycles"
            lower = 0.0
            upper = 1.0
            count = 10
            "#,
        )
        .unwrap();
        let err = profile.model().unwrap_err();
        assert!(err.to_string().contains("wide-binary"));
    }

    #[test]
    fn test_malformed_toml_is_invalid_data() {
        assert!(matches!(
            SweepProfile::from_toml_str("model = "),
            Err(StoreError::InvalidData(_))
        ));
    }
}
