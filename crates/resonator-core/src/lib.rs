// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Resonator Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Log-barrier interior-point optimizer for readout resonator dimensions.
//!
//! constraints → barrier → minimizer → annealer, with `optimizer` wiring
//! them from a config and `sweep` fanning runs out over rayon.

pub mod annealer;
pub mod barrier;
pub mod constraints;
pub mod minimizer;
pub mod optimizer;
pub mod sweep;
