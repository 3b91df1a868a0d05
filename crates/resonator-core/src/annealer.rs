// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Barrier Annealer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Outer loop of the interior-point method.
//!
//! Each anneal step restarts the inner minimizer from the initial guess
//! at the current barrier strength `t`. If every constraint at the result
//! clears the feasibility epsilon the run is converged; otherwise
//! `t ← t/e` and the next step begins. After `max_iterations` steps
//! without success the run is exhausted and reported as an error.

use std::f64::consts::E;

use resonator_types::config::ResonatorConfig;
use resonator_types::error::{ResonatorError, ResonatorResult};
use resonator_types::state::{AnnealOutcome, Dimensions};
use tracing::{debug, info, warn};

use crate::barrier::BarrierProblem;
use crate::minimizer::InnerMinimizer;

/// Smallest positive subnormal `f64`. The schedule holds here once
/// `t/e` rounds to zero, so `t` stays strictly positive.
pub const MIN_BARRIER_STRENGTH: f64 = 5e-324;

/// Lifecycle of one annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealState {
    Annealing,
    Converged,
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
pub struct AnnealConfig {
    pub max_iterations: usize,
    pub epsilon: f64,
    pub initial_barrier_strength: f64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            epsilon: 1e-20,
            initial_barrier_strength: 1.0,
        }
    }
}

impl AnnealConfig {
    pub fn from_config(config: &ResonatorConfig) -> Self {
        Self {
            max_iterations: config.optimizer.max_outer_iterations,
            epsilon: config.optimizer.feasibility_epsilon,
            initial_barrier_strength: config.optimizer.initial_barrier_strength,
        }
    }
}

/// Next barrier strength in the `1/e` schedule.
///
/// Equal to plain `t/e` for every positive result, including subnormals.
pub fn decay_barrier_strength(t: f64) -> f64 {
    let next = t / E;
    if next > 0.0 {
        next
    } else {
        MIN_BARRIER_STRENGTH
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BarrierAnnealer {
    pub minimizer: InnerMinimizer,
    pub config: AnnealConfig,
}

impl BarrierAnnealer {
    pub fn new(minimizer: InnerMinimizer, config: AnnealConfig) -> Self {
        Self { minimizer, config }
    }

    pub fn from_config(config: &ResonatorConfig) -> Self {
        Self::new(
            InnerMinimizer::from_config(config),
            AnnealConfig::from_config(config),
        )
    }

    /// Run the schedule until the constraints are met or the budget is spent.
    pub fn anneal<P: BarrierProblem + ?Sized>(
        &self,
        problem: &P,
        x0: &Dimensions,
    ) -> ResonatorResult<AnnealOutcome> {
        let mut t = self.config.initial_barrier_strength;
        let mut state = AnnealState::Annealing;
        let mut iterations = 0usize;
        let mut result = None;

        while state == AnnealState::Annealing {
            if iterations == self.config.max_iterations {
                state = AnnealState::Exhausted;
                continue;
            }
            if iterations > 0 {
                t = decay_barrier_strength(t);
            }
            iterations += 1;

            let (dims, constraints) = self.minimizer.minimize(problem, x0, t);
            let feasible = constraints.all_at_least(self.config.epsilon);
            debug!(
                iteration = iterations,
                barrier_strength = t,
                length = dims[0],
                width = dims[1],
                feasible,
                "anneal step"
            );

            if feasible {
                state = AnnealState::Converged;
                result = Some(AnnealOutcome {
                    dimensions: dims,
                    constraints,
                    iterations,
                    barrier_strength: t,
                });
            }
        }

        match (state, result) {
            (AnnealState::Converged, Some(outcome)) => {
                info!(
                    iterations = outcome.iterations,
                    barrier_strength = outcome.barrier_strength,
                    length = outcome.dimensions[0],
                    width = outcome.dimensions[1],
                    "barrier annealing converged"
                );
                Ok(outcome)
            }
            _ => {
                warn!(
                    iterations,
                    barrier_strength = t,
                    "barrier annealing exhausted its iteration budget"
                );
                Err(ResonatorError::NotConverged {
                    iterations,
                    barrier_strength: t,
                })
            }
        }
    }
}

/// Anneal `problem` from `x0` and return only the optimized dimensions.
pub fn perform_perturbation_analysis<P: BarrierProblem + ?Sized>(
    problem: &P,
    x0: &Dimensions,
    minimizer: &InnerMinimizer,
    config: &AnnealConfig,
) -> ResonatorResult<Dimensions> {
    BarrierAnnealer::new(*minimizer, *config)
        .anneal(problem, x0)
        .map(|outcome| outcome.dimensions)
}
