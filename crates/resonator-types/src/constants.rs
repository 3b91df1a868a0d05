// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Speed of light in vacuum (m/s), rounded.
/// NOTE: the rounded value keeps c / 3e8 Hz at exactly one meter.
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Reduced Planck constant (J·s). Doubles as the descent learning rate.
pub const REDUCED_PLANCK: f64 = 1.0545718e-34;

/// Conductivity of the resonator film (S/m) - copper.
pub const COPPER_CONDUCTIVITY: f64 = 5.8e7;

/// Dielectric loss tangent of the substrate (-).
pub const SUBSTRATE_LOSS_TANGENT: f64 = 1.0e-4;

/// Readout target frequency (Hz).
pub const READOUT_FREQUENCY: f64 = 5.0e9;

/// Target signal-to-noise ratio for the readout chain.
pub const SNR_TARGET: f64 = 1.0e4;

/// Maximum resonator length (m).
pub const LENGTH_LIMIT: f64 = 1.0e-2;

/// Maximum resonator width (m).
pub const WIDTH_LIMIT: f64 = 5.0e-3;

/// Minimum acceptable coherence time (s).
pub const COHERENCE_TIME_MIN: f64 = 1.0e-6;

/// Minimum acceptable anharmonicity, expressed as Δω/ħ.
pub const ANHARMONICITY_MIN: f64 = 2.0e8;

/// Minimum acceptable film conductivity (S/m).
pub const CONDUCTIVITY_MIN: f64 = 1.0e6;

/// Maximum acceptable substrate loss tangent (-).
pub const LOSS_TANGENT_MAX: f64 = 1.0e-3;

/// Initial guess used by the command-line entry point (m).
pub const DEFAULT_INITIAL_GUESS: [f64; 2] = [1.0e-6, 1.25e-6];
