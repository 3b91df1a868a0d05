// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Resonator footprint `[length, width]` in meters.
pub type Dimensions = [f64; 2];

/// Number of scalar constraint outputs produced per evaluation.
pub const N_CONSTRAINTS: usize = 7;

/// Raw constraint values for one dimension vector.
/// Five evaluators, two of which return pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintValues {
    pub wavelength: f64,
    pub length_limit: f64,
    pub width_limit: f64,
    pub coherence_time: f64,
    pub anharmonicity: f64,
    pub conductivity: f64,
    pub loss_tangent: f64,
}

impl ConstraintValues {
    /// Flatten in evaluator order: wavelength, limits, coherence,
    /// anharmonicity, material.
    pub fn to_array(&self) -> [f64; N_CONSTRAINTS] {
        [
            self.wavelength,
            self.length_limit,
            self.width_limit,
            self.coherence_time,
            self.anharmonicity,
            self.conductivity,
            self.loss_tangent,
        ]
    }

    /// True when every value is `>= epsilon`. NaN never satisfies this.
    pub fn all_at_least(&self, epsilon: f64) -> bool {
        self.to_array().iter().all(|&v| v >= epsilon)
    }
}

/// Result of a converged annealing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealOutcome {
    pub dimensions: Dimensions,
    pub constraints: ConstraintValues,
    /// Inner minimizer calls used, including the converging one.
    pub iterations: usize,
    /// Barrier strength of the converging inner call.
    pub barrier_strength: f64,
}
