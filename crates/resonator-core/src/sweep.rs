// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Initial Guess Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parallel annealing over several initial guesses.
//!
//! Runs are independent and share the optimizer read-only; each run is
//! itself sequential.

use rayon::prelude::*;
use resonator_types::error::ResonatorResult;
use resonator_types::state::{AnnealOutcome, Dimensions};
use tracing::debug;

use crate::optimizer::ResonatorOptimizer;

/// One result per guess, in input order.
pub fn sweep_initial_guesses(
    optimizer: &ResonatorOptimizer,
    guesses: &[Dimensions],
) -> Vec<ResonatorResult<AnnealOutcome>> {
    debug!(
        guesses = guesses.len(),
        threads = rayon::current_num_threads(),
        "sweeping initial guesses"
    );
    guesses
        .par_iter()
        .map(|x0| optimizer.optimize(x0))
        .collect()
}

/// Converged outcome with the smallest footprint, if any run converged.
pub fn best_outcome(results: &[ResonatorResult<AnnealOutcome>]) -> Option<&AnnealOutcome> {
    results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .min_by(|a, b| {
            let area_a = a.dimensions[0] * a.dimensions[1];
            let area_b = b.dimensions[0] * b.dimensions[1];
            area_a.total_cmp(&area_b)
        })
}
