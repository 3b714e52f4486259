/// Newtonian gravitational constant (m³·kg⁻¹·s⁻²)
pub const NEWTON_G: f64 = 6.674_30e-11;

/// Empirical scaling constant S (m/s²) — the logical floor acceleration
pub const S_CONSTANT: f64 = 8.74e-10;

/// Certainty state weight (general-relativity side)
pub const V_GENERAL: f64 = 1.0;

/// Uncertainty state weight (quantum-potential side)
pub const V_QUANTUM: f64 = 0.5;

/// Default conflict factor entering the paradox density
pub const CONFLICT_FACTOR: f64 = 0.5;

/// Logic-friction growth rate per AU of distance
pub const FRICTION_RATE: f64 = 1.2e-11;

/// Baryonic rotation-velocity scale: v = 100 / √r (km/s at r in kpc)
pub const BARYONIC_VELOCITY_SCALE: f64 = 100.0;

/// Coupling between paradox density and radius in the rotation correction
pub const WORK_COUPLING: f64 = 0.05;

/// Mass of a typical star (kg)
pub const M_SUN: f64 = 1.989e30;

/// Meters per astronomical unit
pub const AU_METERS: f64 = 1.496e11;

/// Meters per megaparsec
pub const MPC_METERS: f64 = 3.086e22;

/// Orbital velocities are reported at this scale (m/s)
pub const VELOCITY_REPORT_SCALE: f64 = 1000.0;

/// Bandwidth factor: available work is S × this factor
pub const BANDWIDTH_FACTOR: f64 = 1e12;

/// Ratio above which the information term dominates (High)
pub const HIGH_RATIO: f64 = 1000.0;

/// Ratio below which the mass term dominates (Low)
pub const LOW_RATIO: f64 = 0.01;

/// Paradox-density saturation limit — above this the system is unstable
pub const SATURATION_LIMIT: f64 = 0.5;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-12;
