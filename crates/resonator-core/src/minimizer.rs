// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Inner Minimizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-step, fixed-budget gradient descent on the perturbed barrier.
//!
//! Always runs the full iteration budget; there is no convergence test.
//! The descent works in a transmission-line-normalized frame, so the
//! result is divided by the speed of light before its constraints are
//! evaluated.

use resonator_math::gradient::calculate_gradient;
use resonator_types::config::ResonatorConfig;
use resonator_types::state::{ConstraintValues, Dimensions};

use crate::barrier::BarrierProblem;

#[derive(Debug, Clone, Copy)]
pub struct InnerMinimizer {
    pub iterations: usize,
    pub learning_rate: f64,
    pub gradient_step: f64,
    /// Divisor applied to both components after the descent.
    pub rescale: f64,
}

impl InnerMinimizer {
    /// Learning rate is ħ and the rescale divisor is c.
    pub fn from_config(config: &ResonatorConfig) -> Self {
        Self {
            iterations: config.optimizer.inner_iterations,
            learning_rate: config.physics.reduced_planck,
            gradient_step: config.optimizer.gradient_step,
            rescale: config.physics.speed_of_light,
        }
    }

    /// Descend `problem` at barrier strength `t` from a copy of `x0`.
    ///
    /// Returns the rescaled dimensions and the constraints evaluated there.
    pub fn minimize<P: BarrierProblem + ?Sized>(
        &self,
        problem: &P,
        x0: &Dimensions,
        t: f64,
    ) -> (Dimensions, ConstraintValues) {
        let mut x = *x0;

        for _ in 0..self.iterations {
            let grad = calculate_gradient(
                |d: &Dimensions| problem.value(d, t),
                &x,
                self.gradient_step,
            );
            for (xi, gi) in x.iter_mut().zip(grad.iter()) {
                *xi -= self.learning_rate * gi;
            }
        }

        for xi in x.iter_mut() {
            *xi /= self.rescale;
        }

        let constraints = problem.constraints(&x);
        (x, constraints)
    }
}

impl Default for InnerMinimizer {
    fn default() -> Self {
        Self::from_config(&ResonatorConfig::default())
    }
}

/// One inner minimization with the settings carried by `config`.
pub fn minimize_perturbed_barrier_function<P: BarrierProblem + ?Sized>(
    problem: &P,
    x0: &Dimensions,
    t: f64,
    config: &ResonatorConfig,
) -> (Dimensions, ConstraintValues) {
    InnerMinimizer::from_config(config).minimize(problem, x0, t)
}
