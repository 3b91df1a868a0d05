// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Constraint Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Objective and feasibility constraints for a rectangular readout resonator.
//!
//! Every evaluator is a pure function of the dimension vector, the targets
//! passed in, and the physical/material constants captured at construction.
//! Degenerate inputs (zero SNR, zero extent) produce inf/NaN rather than
//! errors.

use std::f64::consts::PI;

use resonator_types::config::{DesignTargets, MaterialParams, PhysicsParams, ResonatorConfig};
use resonator_types::state::{ConstraintValues, Dimensions};

/// Physical and material constants shared by all evaluators.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintModel {
    pub physics: PhysicsParams,
    pub material: MaterialParams,
}

impl ConstraintModel {
    pub fn new(physics: PhysicsParams, material: MaterialParams) -> Self {
        Self { physics, material }
    }

    pub fn from_config(config: &ResonatorConfig) -> Self {
        Self::new(config.physics, config.material)
    }

    /// Footprint per unit SNR, `d0·d1 / snr`. Zero SNR gives +inf.
    pub fn objective(&self, dims: &Dimensions, snr_target: f64) -> f64 {
        dims[0] * dims[1] / snr_target
    }

    /// `|min(d0, d1) - c/f|`: deviation of the short side from one wavelength.
    pub fn wavelength_constraint(&self, dims: &Dimensions, freq_target: f64) -> f64 {
        let wavelength = self.physics.speed_of_light / freq_target;
        (dims[0].min(dims[1]) - wavelength).abs()
    }

    /// `(|d0 - L|, |d1 - W|)`.
    ///
    /// NOTE: symmetric distance, so undershooting a limit is penalized
    /// exactly like exceeding it.
    pub fn dimension_limit_constraint(
        &self,
        dims: &Dimensions,
        length_limit: f64,
        width_limit: f64,
    ) -> (f64, f64) {
        ((dims[0] - length_limit).abs(), (dims[1] - width_limit).abs())
    }

    /// Resonance linewidth implied by the wavelength mismatch over the long side.
    pub fn linewidth(&self, dims: &Dimensions, freq_target: f64) -> f64 {
        self.wavelength_constraint(dims, freq_target) / (PI * dims[0].max(dims[1]))
    }

    /// Implied coherence time `1/(π·linewidth)` minus the required minimum.
    pub fn coherence_time_constraint(
        &self,
        dims: &Dimensions,
        freq_target: f64,
        coherence_time_min: f64,
    ) -> f64 {
        let linewidth = self.linewidth(dims, freq_target);
        1.0 / (PI * linewidth) - coherence_time_min
    }

    /// `(ω12 - ω01)/ħ` minus the required minimum, where the 1→2 transition
    /// sits one linewidth above the readout frequency.
    pub fn anharmonicity_constraint(
        &self,
        dims: &Dimensions,
        freq_target: f64,
        anharmonicity_min: f64,
    ) -> f64 {
        let linewidth = self.linewidth(dims, freq_target);
        let omega_01 = 2.0 * PI * freq_target;
        let omega_12 = 2.0 * PI * (freq_target + linewidth);
        (omega_12 - omega_01) / self.physics.reduced_planck - anharmonicity_min
    }

    /// `(|σ·A - σ_min|, |tanδ_max - tanδ·A|)` with `A = d0·d1`.
    pub fn material_property_constraint(
        &self,
        dims: &Dimensions,
        conductivity_min: f64,
        loss_tangent_max: f64,
    ) -> (f64, f64) {
        let area = dims[0] * dims[1];
        (
            (self.material.conductivity * area - conductivity_min).abs(),
            (loss_tangent_max - self.material.loss_tangent * area).abs(),
        )
    }

    /// All five evaluators against one set of targets.
    pub fn evaluate(&self, dims: &Dimensions, targets: &DesignTargets) -> ConstraintValues {
        let (length_limit, width_limit) =
            self.dimension_limit_constraint(dims, targets.length_limit, targets.width_limit);
        let (conductivity, loss_tangent) = self.material_property_constraint(
            dims,
            targets.conductivity_min,
            targets.loss_tangent_max,
        );
        ConstraintValues {
            wavelength: self.wavelength_constraint(dims, targets.frequency),
            length_limit,
            width_limit,
            coherence_time: self.coherence_time_constraint(
                dims,
                targets.frequency,
                targets.coherence_time_min,
            ),
            anharmonicity: self.anharmonicity_constraint(
                dims,
                targets.frequency,
                targets.anharmonicity_min,
            ),
            conductivity,
            loss_tangent,
        }
    }
}

impl Default for ConstraintModel {
    fn default() -> Self {
        Self::new(PhysicsParams::default(), MaterialParams::default())
    }
}
