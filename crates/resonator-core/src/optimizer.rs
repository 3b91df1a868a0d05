// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Resonator Optimizer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Configured end-to-end solver: barrier problem, inner minimizer and
//! annealing schedule built from one `ResonatorConfig`.

use resonator_types::config::ResonatorConfig;
use resonator_types::error::ResonatorResult;
use resonator_types::state::{AnnealOutcome, Dimensions};

use crate::annealer::BarrierAnnealer;
use crate::barrier::PerturbedBarrier;

#[derive(Debug, Clone)]
pub struct ResonatorOptimizer {
    config: ResonatorConfig,
    problem: PerturbedBarrier,
    annealer: BarrierAnnealer,
}

impl ResonatorOptimizer {
    /// Validates the solver settings before building.
    pub fn new(config: ResonatorConfig) -> ResonatorResult<Self> {
        config.validate()?;
        let problem = PerturbedBarrier::from_config(&config);
        let annealer = BarrierAnnealer::from_config(&config);
        Ok(Self {
            config,
            problem,
            annealer,
        })
    }

    pub fn from_file(path: &str) -> ResonatorResult<Self> {
        Self::new(ResonatorConfig::from_file(path)?)
    }

    pub fn config(&self) -> &ResonatorConfig {
        &self.config
    }

    pub fn problem(&self) -> &PerturbedBarrier {
        &self.problem
    }

    /// Full annealing run from `x0`.
    pub fn optimize(&self, x0: &Dimensions) -> ResonatorResult<AnnealOutcome> {
        self.annealer.anneal(&self.problem, x0)
    }
}
