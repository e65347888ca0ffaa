//! Bounded Nelder-Mead minimisation
//!
//! Derivative-free simplex search used to pick smoothing coefficients. Every
//! trial point is projected back into the box bounds, and the run is fully
//! deterministic for a given starting point.

use serde::{Deserialize, Serialize};

/// Settings for [`nelder_mead`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NelderMeadConfig {
    /// Maximum number of simplex iterations
    pub max_iter: usize,
    /// Stop once the spread of simplex values falls below this, relative to the best value
    pub tolerance: f64,
    /// Offset of the initial simplex vertices along each axis
    pub initial_step: f64,
    pub reflection: f64,
    pub expansion: f64,
    pub contraction: f64,
    pub shrink: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tolerance: 1e-10,
            initial_step: 0.1,
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
        }
    }
}

/// Outcome of a minimisation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimal_point: Vec<f64>,
    pub optimal_value: f64,
    pub iterations: usize,
    /// Whether the tolerance was reached before `max_iter`
    pub converged: bool,
    /// Best objective value at the start of each iteration; never increases
    pub trace: Vec<f64>,
}

/// Minimise `objective` starting from `initial`.
///
/// Non-finite objective values are treated as `+inf`, so the search steers
/// away from them.
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: NelderMeadConfig,
) -> OptimizationResult
where
    F: Fn(&[f64]) -> f64,
{
    let dim = initial.len();
    let project = |point: &mut Vec<f64>| {
        if let Some(bounds) = bounds {
            for (x, &(lo, hi)) in point.iter_mut().zip(bounds.iter()) {
                *x = x.clamp(lo, hi);
            }
        }
    };
    let evaluate = |point: &[f64]| {
        let value = objective(point);
        if value.is_finite() {
            value
        } else {
            f64::INFINITY
        }
    };

    let mut start = initial.to_vec();
    project(&mut start);

    if dim == 0 {
        return OptimizationResult {
            optimal_value: evaluate(&start),
            optimal_point: start,
            iterations: 0,
            converged: true,
            trace: Vec::new(),
        };
    }

    let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(dim + 1);
    simplex.push((start.clone(), evaluate(&start)));
    for axis in 0..dim {
        let mut vertex = start.clone();
        vertex[axis] += config.initial_step;
        if let Some(&(_, hi)) = bounds.and_then(|b| b.get(axis)) {
            if vertex[axis] > hi {
                vertex[axis] = start[axis] - config.initial_step;
            }
        }
        project(&mut vertex);
        let value = evaluate(&vertex);
        simplex.push((vertex, value));
    }

    let mut trace = Vec::with_capacity(config.max_iter);
    let mut converged = false;
    let mut iterations = 0;

    while iterations < config.max_iter {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        let best = simplex[0].1;
        let worst = simplex[dim].1;
        trace.push(best);

        if (worst - best).abs() <= config.tolerance * (1.0 + best.abs()) {
            converged = true;
            break;
        }
        iterations += 1;

        let centroid: Vec<f64> = (0..dim)
            .map(|j| simplex[..dim].iter().map(|(p, _)| p[j]).sum::<f64>() / dim as f64)
            .collect();
        let toward = |from: &[f64], scale: f64| -> Vec<f64> {
            let mut point: Vec<f64> = centroid
                .iter()
                .zip(from.iter())
                .map(|(c, x)| c + scale * (x - c))
                .collect();
            project(&mut point);
            point
        };

        let reflected = toward(&simplex[dim].0, -config.reflection);
        let reflected_value = evaluate(&reflected);

        if reflected_value < best {
            let expanded = toward(&reflected, config.expansion);
            let expanded_value = evaluate(&expanded);
            simplex[dim] = if expanded_value < reflected_value {
                (expanded, expanded_value)
            } else {
                (reflected, reflected_value)
            };
            continue;
        }

        if reflected_value < simplex[dim - 1].1 {
            simplex[dim] = (reflected, reflected_value);
            continue;
        }

        let contracted = if reflected_value < worst {
            toward(&reflected, config.contraction)
        } else {
            toward(&simplex[dim].0, config.contraction)
        };
        let contracted_value = evaluate(&contracted);
        if contracted_value < reflected_value.min(worst) {
            simplex[dim] = (contracted, contracted_value);
            continue;
        }

        let anchor = simplex[0].0.clone();
        for (vertex, value) in simplex.iter_mut().skip(1) {
            let mut shrunk: Vec<f64> = anchor
                .iter()
                .zip(vertex.iter())
                .map(|(a, x)| a + config.shrink * (x - a))
                .collect();
            project(&mut shrunk);
            *value = evaluate(&shrunk);
            *vertex = shrunk;
        }
    }

    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    let (optimal_point, optimal_value) = simplex.swap_remove(0);

    OptimizationResult {
        optimal_point,
        optimal_value,
        iterations,
        converged,
        trace,
    }
}
