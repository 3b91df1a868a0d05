// ─────────────────────────────────────────────────────────────────────
// Resonator Optimizer — Finite-Difference Gradient
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Central-difference gradient of a scalar field.
//!
//! No step validation and no NaN screening: whatever `f` returns flows
//! straight into the estimate. When `x_i ± step` rounds back to `x_i`
//! (|x_i| ≫ step) the difference cancels and the component reads 0.0.

/// Default central-difference half width.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Central-difference gradient of `f` at `x`.
///
/// Component `i` is `(f(x + h·e_i) - f(x - h·e_i)) / (2h)`.
pub fn calculate_gradient<F, const N: usize>(f: F, x: &[f64; N], step: f64) -> [f64; N]
where
    F: Fn(&[f64; N]) -> f64,
{
    let mut grad = [0.0; N];
    let mut probe = *x;

    for i in 0..N {
        let orig = probe[i];

        probe[i] = orig + step;
        let f_plus = f(&probe);

        probe[i] = orig - step;
        let f_minus = f(&probe);

        probe[i] = orig;

        grad[i] = (f_plus - f_minus) / (2.0 * step);
    }

    grad
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<const N: usize>(x: &[f64; N]) -> f64 {
        x.iter().sum()
    }

    #[test]
    fn test_gradient_of_sum_is_ones() {
        let g = calculate_gradient(sum::<2>, &[1.0, 2.0], DEFAULT_STEP);
        for gi in g {
            assert!((gi - 1.0).abs() < 0.01, "got {gi}");
        }
    }

    #[test]
    fn test_gradient_of_sum_across_step_sizes() {
        for exp in -12..=6 {
            let step = 10f64.powi(exp);
            for x in [[1.0, 2.0], [0.5, -0.25], [1.0e-6, 1.25e-6]] {
                let g = calculate_gradient(sum::<2>, &x, step);
                for gi in g {
                    assert!(
                        (gi - 1.0).abs() < 0.01,
                        "step={step:e}, x={x:?}: gradient component {gi}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_gradient_collapses_when_step_is_absorbed() {
        // x ± step rounds to x, so both samples agree and the estimate is 0.
        let g = calculate_gradient(sum::<2>, &[1.0e20, -3.0e20], 1e-6);
        assert_eq!(g, [0.0, 0.0]);

        let g = calculate_gradient(sum::<2>, &[1.0e10, 1.0e10], 1e-12);
        assert_eq!(g, [0.0, 0.0]);
    }

    #[test]
    fn test_gradient_of_quadratic() {
        let g = calculate_gradient(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1], &[2.0, 3.0], 1e-6);
        assert!((g[0] - 4.0).abs() < 0.1, "got {}", g[0]);
        assert!((g[1] - 6.0).abs() < 0.1, "got {}", g[1]);
    }

    #[test]
    fn test_gradient_does_not_mutate_input() {
        let x = [0.3, -0.7];
        let _ = calculate_gradient(|p: &[f64; 2]| p[0] * p[1], &x, 1e-3);
        assert_eq!(x, [0.3, -0.7]);
    }

    #[test]
    fn test_gradient_propagates_nan() {
        let g = calculate_gradient(|x: &[f64; 2]| x[0].ln() + x[1], &[-1.0, 1.0], 1e-6);
        assert!(g[0].is_nan());
        assert!(g[1].is_nan());
    }

    #[test]
    fn test_gradient_higher_arity() {
        let g = calculate_gradient(
            |x: &[f64; 3]| 2.0 * x[0] - x[1] + 0.5 * x[2],
            &[1.0, 1.0, 1.0],
            1e-4,
        );
        assert!((g[0] - 2.0).abs() < 1e-6);
        assert!((g[1] + 1.0).abs() < 1e-6);
        assert!((g[2] - 0.5).abs() < 1e-6);
    }
}
