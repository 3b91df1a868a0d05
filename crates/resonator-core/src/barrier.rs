// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Barrier Composition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Log-barrier composition of objective and constraints.
//!
//! The penalty keeps its nested grouping
//!
//! ```text
//! P = ln(a) · ln( b·ln(c) + ln(d)·ln(e)·ln(f)·ln(g) )
//! ```
//!
//! with a = wavelength, (b, c) = dimension limits, d = coherence,
//! e = anharmonicity, (f, g) = material. A non-positive argument gives
//! NaN or -inf, which is propagated unchanged so the barrier diverges at
//! the feasibility boundary.

use resonator_math::vector::magnitude;
use resonator_types::config::{DesignTargets, ResonatorConfig};
use resonator_types::state::{ConstraintValues, Dimensions};

use crate::constraints::ConstraintModel;

/// A scalar field the inner minimizer can descend, parameterized by
/// barrier strength, plus the raw constraints used for feasibility.
pub trait BarrierProblem {
    fn value(&self, dims: &Dimensions, t: f64) -> f64;
    fn constraints(&self, dims: &Dimensions) -> ConstraintValues;
}

/// Nested log penalty over precomputed constraint values.
pub fn log_penalty(c: &ConstraintValues) -> f64 {
    let material_chain = c.coherence_time.ln()
        * c.anharmonicity.ln()
        * c.conductivity.ln()
        * c.loss_tangent.ln();
    c.wavelength.ln() * (c.length_limit * c.width_limit.ln() + material_chain).ln()
}

/// `objective - t · penalty`.
pub fn barrier_function(
    model: &ConstraintModel,
    targets: &DesignTargets,
    dims: &Dimensions,
    t: f64,
) -> f64 {
    let c = model.evaluate(dims, targets);
    model.objective(dims, targets.snr_target) - t * log_penalty(&c)
}

/// Barrier plus `epsilon · |constraints|` to tilt flat regions.
pub fn perturbed_barrier_function(
    model: &ConstraintModel,
    targets: &DesignTargets,
    dims: &Dimensions,
    t: f64,
    epsilon: f64,
) -> f64 {
    let c = model.evaluate(dims, targets);
    let barrier = model.objective(dims, targets.snr_target) - t * log_penalty(&c);
    barrier + epsilon * magnitude(&c.to_array())
}

/// Perturbed barrier with its targets and constants captured.
#[derive(Debug, Clone, Copy)]
pub struct PerturbedBarrier {
    pub model: ConstraintModel,
    pub targets: DesignTargets,
    pub epsilon: f64,
}

impl PerturbedBarrier {
    pub fn new(model: ConstraintModel, targets: DesignTargets, epsilon: f64) -> Self {
        Self {
            model,
            targets,
            epsilon,
        }
    }

    pub fn from_config(config: &ResonatorConfig) -> Self {
        Self::new(
            ConstraintModel::from_config(config),
            config.targets,
            config.optimizer.perturbation_epsilon,
        )
    }

    /// Unperturbed barrier at the captured targets.
    pub fn barrier(&self, dims: &Dimensions, t: f64) -> f64 {
        barrier_function(&self.model, &self.targets, dims, t)
    }
}

impl BarrierProblem for PerturbedBarrier {
    fn value(&self, dims: &Dimensions, t: f64) -> f64 {
        perturbed_barrier_function(&self.model, &self.targets, dims, t, self.epsilon)
    }

    fn constraints(&self, dims: &Dimensions) -> ConstraintValues {
        self.model.evaluate(dims, &self.targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(v: f64) -> ConstraintValues {
        ConstraintValues {
            wavelength: v,
            length_limit: v,
            width_limit: v,
            coherence_time: v,
            anharmonicity: v,
            conductivity: v,
            loss_tangent: v,
        }
    }

    fn problem() -> PerturbedBarrier {
        PerturbedBarrier::from_config(&ResonatorConfig::default())
    }

    #[test]
    fn test_log_penalty_grouping() {
        let c = ConstraintValues {
            wavelength: 2.0,
            length_limit: 3.0,
            width_limit: 5.0,
            coherence_time: 7.0,
            anharmonicity: 11.0,
            conductivity: 13.0,
            loss_tangent: 17.0,
        };
        let inner = 3.0 * 5f64.ln() + 7f64.ln() * 11f64.ln() * 13f64.ln() * 17f64.ln();
        let expected = 2f64.ln() * inner.ln();
        assert!((log_penalty(&c) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_log_penalty_zero_at_unit_wavelength() {
        // ln(1) = 0 kills the outer factor regardless of the rest.
        let mut c = all(3.0);
        c.wavelength = 1.0;
        assert_eq!(log_penalty(&c), 0.0);
    }

    #[test]
    fn test_log_penalty_nan_on_negative_constraint() {
        let mut c = all(3.0);
        c.wavelength = -0.5;
        assert!(log_penalty(&c).is_nan());
    }

    #[test]
    fn test_barrier_reduces_to_objective_at_zero_strength() {
        let p = problem();
        let dims = [6.0e-5, 1.1e-4];
        let obj = p.model.objective(&dims, p.targets.snr_target);
        assert_eq!(p.barrier(&dims, 0.0), obj);
    }

    #[test]
    fn test_barrier_matches_manual_composition() {
        let p = problem();
        let dims = [1.0e-6, 1.25e-6];
        let c = p.constraints(&dims);
        let expected = p.model.objective(&dims, p.targets.snr_target) - 0.5 * log_penalty(&c);
        assert_eq!(p.barrier(&dims, 0.5), expected);
        assert!(expected.is_finite(), "barrier at initial guess: {expected}");
    }

    #[test]
    fn test_perturbation_adds_scaled_norm() {
        let p = problem();
        let dims = [1.0e-6, 1.25e-6];
        let c = p.constraints(&dims);
        let expected = p.barrier(&dims, 1.0) + p.epsilon * magnitude(&c.to_array());
        assert_eq!(p.value(&dims, 1.0), expected);
    }

    #[test]
    fn test_zero_perturbation_is_plain_barrier() {
        let mut p = problem();
        p.epsilon = 0.0;
        let dims = [1.0e-6, 1.25e-6];
        assert_eq!(p.value(&dims, 1.0), p.barrier(&dims, 1.0));
    }
}
