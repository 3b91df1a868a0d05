// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ResonatorError, ResonatorResult};

/// Top-level resonator design configuration.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonatorConfig {
    pub design_name: String,
    pub physics: PhysicsParams,
    pub material: MaterialParams,
    pub targets: DesignTargets,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Also the rescale divisor applied after each inner minimization.
    pub speed_of_light: f64,
    /// Also the fixed gradient-descent learning rate.
    pub reduced_planck: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Film conductivity [S/m].
    pub conductivity: f64,
    /// Substrate loss tangent [-].
    pub loss_tangent: f64,
}

/// Feasibility targets the five constraints are measured against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DesignTargets {
    pub snr_target: f64,
    /// Readout frequency [Hz].
    pub frequency: f64,
    /// [m]
    pub length_limit: f64,
    /// [m]
    pub width_limit: f64,
    /// [s]
    pub coherence_time_min: f64,
    pub anharmonicity_min: f64,
    /// [S/m]
    pub conductivity_min: f64,
    pub loss_tangent_max: f64,
}

/// Iteration budgets and numerical knobs for the barrier solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Gradient steps per inner minimization (default: 1000)
    #[serde(default = "default_inner_iterations")]
    pub inner_iterations: usize,
    /// Anneal budget before giving up (default: 10000)
    #[serde(default = "default_max_outer_iterations")]
    pub max_outer_iterations: usize,
    /// Every constraint must be at least this (default: 1e-20)
    #[serde(default = "default_feasibility_epsilon")]
    pub feasibility_epsilon: f64,
    /// Barrier strength of the first anneal step (default: 1.0)
    #[serde(default = "default_initial_barrier_strength")]
    pub initial_barrier_strength: f64,
    /// Weight of the constraint-norm bias term (default: 1e-6)
    #[serde(default = "default_perturbation_epsilon")]
    pub perturbation_epsilon: f64,
    /// Central-difference half width (default: 1e-6)
    #[serde(default = "default_gradient_step")]
    pub gradient_step: f64,
}

fn default_inner_iterations() -> usize {
    1000
}
fn default_max_outer_iterations() -> usize {
    10_000
}
fn default_feasibility_epsilon() -> f64 {
    1e-20
}
fn default_initial_barrier_strength() -> f64 {
    1.0
}
fn default_perturbation_epsilon() -> f64 {
    1e-6
}
fn default_gradient_step() -> f64 {
    1e-6
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            inner_iterations: default_inner_iterations(),
            max_outer_iterations: default_max_outer_iterations(),
            feasibility_epsilon: default_feasibility_epsilon(),
            initial_barrier_strength: default_initial_barrier_strength(),
            perturbation_epsilon: default_perturbation_epsilon(),
            gradient_step: default_gradient_step(),
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        PhysicsParams {
            speed_of_light: SPEED_OF_LIGHT,
            reduced_planck: REDUCED_PLANCK,
        }
    }
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams {
            conductivity: COPPER_CONDUCTIVITY,
            loss_tangent: SUBSTRATE_LOSS_TANGENT,
        }
    }
}

impl Default for DesignTargets {
    fn default() -> Self {
        DesignTargets {
            snr_target: SNR_TARGET,
            frequency: READOUT_FREQUENCY,
            length_limit: LENGTH_LIMIT,
            width_limit: WIDTH_LIMIT,
            coherence_time_min: COHERENCE_TIME_MIN,
            anharmonicity_min: ANHARMONICITY_MIN,
            conductivity_min: CONDUCTIVITY_MIN,
            loss_tangent_max: LOSS_TANGENT_MAX,
        }
    }
}

impl Default for ResonatorConfig {
    fn default() -> Self {
        ResonatorConfig {
            design_name: "transmon-readout-5ghz".to_string(),
            physics: PhysicsParams::default(),
            material: MaterialParams::default(),
            targets: DesignTargets::default(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl ResonatorConfig {
    /// Load from JSON file and validate the solver settings.
    pub fn from_file(path: &str) -> ResonatorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects solver settings that cannot drive a run.
    ///
    /// Design targets are not checked: a zero SNR or an unreachable
    /// minimum surfaces as inf/NaN in the barrier and then as
    /// non-convergence.
    pub fn validate(&self) -> ResonatorResult<()> {
        let c = self.physics.speed_of_light;
        if !c.is_finite() || c == 0.0 {
            return Err(ResonatorError::ConfigError(
                "physics.speed_of_light must be finite and non-zero".to_string(),
            ));
        }
        if !self.physics.reduced_planck.is_finite() {
            return Err(ResonatorError::ConfigError(
                "physics.reduced_planck must be finite".to_string(),
            ));
        }
        self.optimizer.validate()
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> ResonatorResult<()> {
        if self.inner_iterations == 0 {
            return Err(ResonatorError::ConfigError(
                "optimizer.inner_iterations must be >= 1".to_string(),
            ));
        }
        if self.max_outer_iterations == 0 {
            return Err(ResonatorError::ConfigError(
                "optimizer.max_outer_iterations must be >= 1".to_string(),
            ));
        }
        if !self.feasibility_epsilon.is_finite() {
            return Err(ResonatorError::ConfigError(
                "optimizer.feasibility_epsilon must be finite".to_string(),
            ));
        }
        if !self.initial_barrier_strength.is_finite() || self.initial_barrier_strength <= 0.0 {
            return Err(ResonatorError::ConfigError(
                "optimizer.initial_barrier_strength must be finite and > 0".to_string(),
            ));
        }
        if !self.perturbation_epsilon.is_finite() || self.perturbation_epsilon < 0.0 {
            return Err(ResonatorError::ConfigError(
                "optimizer.perturbation_epsilon must be finite and >= 0".to_string(),
            ));
        }
        if !self.gradient_step.is_finite() || self.gradient_step <= 0.0 {
            return Err(ResonatorError::ConfigError(
                "optimizer.gradient_step must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/resonator-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_transmon_readout_config() {
        let cfg =
            ResonatorConfig::from_file(&config_path("configs/transmon_readout.json")).unwrap();
        assert_eq!(cfg.design_name, "transmon-readout-5ghz");
        assert!((cfg.physics.speed_of_light - 3.0e8).abs() < 1e-6);
        assert!((cfg.targets.frequency - 5.0e9).abs() < 1e-3);
        assert!((cfg.targets.snr_target - 1.0e4).abs() < 1e-9);
        assert_eq!(cfg.optimizer.inner_iterations, 1000);
        assert_eq!(cfg.optimizer.max_outer_iterations, 10_000);
    }

    #[test]
    fn test_load_unreachable_anharmonicity_config() {
        let cfg = ResonatorConfig::from_file(&config_path(
            "configs/unreachable_anharmonicity.json",
        ))
        .unwrap();
        assert!(cfg.targets.anharmonicity_min > 1e299);
        assert_eq!(cfg.optimizer.max_outer_iterations, 8);
        // Omitted optimizer fields fall back to defaults.
        assert_eq!(cfg.optimizer.inner_iterations, 1000);
        assert!((cfg.optimizer.gradient_step - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ResonatorConfig::from_file(&config_path("configs/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, ResonatorError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = serde_json::from_str::<ResonatorConfig>("{\"design_name\": 3}").unwrap_err();
        let wrapped: ResonatorError = err.into();
        assert!(matches!(wrapped, ResonatorError::Json(_)));
    }

    #[test]
    fn test_optimizer_section_optional() {
        let json = r#"{
            "design_name": "minimal",
            "physics": { "speed_of_light": 3.0e8, "reduced_planck": 1.0545718e-34 },
            "material": { "conductivity": 5.8e7, "loss_tangent": 1.0e-4 },
            "targets": {
                "snr_target": 1.0e4, "frequency": 5.0e9,
                "length_limit": 1.0e-2, "width_limit": 5.0e-3,
                "coherence_time_min": 1.0e-6, "anharmonicity_min": 2.0e8,
                "conductivity_min": 1.0e6, "loss_tangent_max": 1.0e-3
            }
        }"#;
        let cfg: ResonatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.optimizer.inner_iterations, 1000);
        assert!((cfg.optimizer.initial_barrier_strength - 1.0).abs() < 1e-15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ResonatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_optimizer_settings() {
        let mut cfg = ResonatorConfig::default();
        cfg.optimizer.max_outer_iterations = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ResonatorConfig::default();
        cfg.optimizer.inner_iterations = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ResonatorConfig::default();
        cfg.optimizer.initial_barrier_strength = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = ResonatorConfig::default();
        cfg.optimizer.gradient_step = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = ResonatorConfig::default();
        cfg.physics.speed_of_light = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_degenerate_targets() {
        let mut cfg = ResonatorConfig::default();
        cfg.targets.snr_target = 0.0;
        cfg.targets.anharmonicity_min = 1e300;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = ResonatorConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: ResonatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.design_name, cfg2.design_name);
        assert!((cfg.targets.frequency - cfg2.targets.frequency).abs() < 1e-3);
        assert_eq!(
            cfg.optimizer.max_outer_iterations,
            cfg2.optimizer.max_outer_iterations
        );
    }
}
