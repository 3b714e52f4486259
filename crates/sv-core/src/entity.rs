use serde::{Deserialize, Serialize};

use crate::classify::{Classification, classify_ratio};
use crate::constants::{M_SUN, MPC_METERS};
use crate::evaluator::Constants;

/// Rough scale band an entity belongs to, for reporting only — the analysis
/// itself derives everything from mass and radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleCategory {
    Micro,
    Macro,
    Planetary,
    Cosmic,
}

impl ScaleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Macro => "macro",
            Self::Planetary => "planetary",
            Self::Cosmic => "cosmic",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "micro" => Self::Micro,
            "planetary" => Self::Planetary,
            "cosmic" => Self::Cosmic,
            _ => Self::Macro,
        }
    }
}

/// A physical system analyzed on the universal scale axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    pub category: ScaleCategory,
}

/// Where an entity falls between gravity-dominated and information-dominated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    /// Surface gravity G·m/r² (m/s²)
    pub newtonian_gravity: f64,
    /// The evaluator's S constant (m/s²)
    pub scaling_constant: f64,
    /// S / gravity; +∞ when gravity vanishes
    pub ratio: f64,
    pub classification: Classification,
}

impl Entity {
    pub fn new(name: &str, mass_kg: f64, radius_m: f64, category: ScaleCategory) -> Self {
        Self {
            name: name.to_string(),
            mass_kg,
            radius_m,
            category,
        }
    }

    /// Surface gravity G·m/r². A non-positive radius reads as zero gravity,
    /// which the ratio classifier then maps to +∞ / High.
    pub fn surface_gravity(&self, constants: &Constants) -> f64 {
        if self.radius_m > 0.0 {
            constants.g * self.mass_kg / (self.radius_m * self.radius_m)
        } else {
            0.0
        }
    }

    /// Compare the S constant against the entity's own gravity and bucket
    /// the ratio.
    pub fn report(&self, constants: &Constants) -> EntityReport {
        let newtonian_gravity = self.surface_gravity(constants);
        let (ratio, classification) = classify_ratio(constants.s, newtonian_gravity);
        EntityReport {
            newtonian_gravity,
            scaling_constant: constants.s,
            ratio,
            classification,
        }
    }
}

/// The four canonical entities spanning the full range of scales, used by
/// the demo analysis.
pub fn canonical_entities() -> Vec<Entity> {
    vec![
        Entity::new("HIV virus", 1e-18, 60e-9, ScaleCategory::Micro),
        Entity::new("Human being", 70.0, 1.0, ScaleCategory::Macro),
        Entity::new("Planet Earth", 5.97e24, 6.371e6, ScaleCategory::Planetary),
        Entity::new(
            "Coma galaxy cluster",
            1e15 * M_SUN,
            10.0 * MPC_METERS,
            ScaleCategory::Cosmic,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virus_is_information_dominated() {
        let entity = Entity::new("HIV virus", 1e-18, 60e-9, ScaleCategory::Micro);
        let report = entity.report(&Constants::default());
        assert_eq!(report.classification, Classification::High);
    }

    #[test]
    fn test_earth_is_gravity_dominated() {
        let entity = Entity::new("Planet Earth", 5.97e24, 6.371e6, ScaleCategory::Planetary);
        let report = entity.report(&Constants::default());
        assert_eq!(report.classification, Classification::Low);
        assert!(report.newtonian_gravity > 9.0 && report.newtonian_gravity < 10.0);
    }

    #[test]
    fn test_zero_radius_maps_to_high() {
        let entity = Entity::new("point", 1.0, 0.0, ScaleCategory::Micro);
        let report = entity.report(&Constants::default());
        assert_eq!(report.newtonian_gravity, 0.0);
        assert!(report.ratio.is_infinite());
        assert_eq!(report.classification, Classification::High);
    }

    #[test]
    fn test_canonical_set_covers_both_extremes() {
        let constants = Constants::default();
        let reports: Vec<Classification> = canonical_entities()
            .iter()
            .map(|e| e.report(&constants).classification)
            .collect();
        assert!(reports.contains(&Classification::High));
        assert!(reports.contains(&Classification::Low));
    }
}
