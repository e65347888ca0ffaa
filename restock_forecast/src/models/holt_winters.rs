//! Additive Holt-Winters (triple exponential smoothing) model
//!
//! ```text
//! fitted:   F_t     = L_{t-1} + T_{t-1} + S_{t-m}
//! level:    L_t     = α (x_t - S_{t-m}) + (1 - α)(L_{t-1} + T_{t-1})
//! trend:    T_t     = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! season:   S_t     = γ (x_t - L_t) + (1 - γ) S_{t-m}
//! forecast: F_{n+h} = L_n + h T_n + S_{n+h-m}
//! ```
//!
//! The initial state comes from the first two seasonal cycles: the level is the
//! first-cycle mean, the trend the average cycle-over-cycle change per period,
//! and the seasonal indices the detrended first-cycle deviations. When no
//! coefficients are supplied, α, β and γ are chosen in `[0, 1]` by minimising the
//! in-sample sum of squared one-step-ahead errors with a bounded Nelder-Mead
//! search from a fixed starting point.

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use crate::optimize::{nelder_mead, NelderMeadConfig, OptimizationResult};
use restock_math::stats::sum_squared_error;
use restock_math::TimeSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Level, trend and seasonal smoothing coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Where the coefficient search starts
pub const INITIAL_PARAMS: SmoothingParams = SmoothingParams {
    alpha: 0.3,
    beta: 0.1,
    gamma: 0.1,
};

const PARAM_BOUNDS: [(f64, f64); 3] = [(0.0, 1.0); 3];

impl SmoothingParams {
    /// Create coefficients, each of which must lie in `[0, 1]`
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(Self { alpha, beta, gamma })
    }

    fn from_point(point: &[f64]) -> Self {
        Self {
            alpha: point[0].clamp(0.0, 1.0),
            beta: point[1].clamp(0.0, 1.0),
            gamma: point[2].clamp(0.0, 1.0),
        }
    }

    fn to_point(self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

/// Final smoothing state after the last observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelState {
    pub level: f64,
    pub trend: f64,
    /// Seasonal index per phase; phase of period `t` is `t % seasonal_periods`
    pub seasonal: Vec<f64>,
    /// Number of observations the state has absorbed
    pub observations: usize,
}

impl ModelState {
    /// Projection `steps` periods (1-based) past the last observation
    pub fn project(&self, steps: usize) -> f64 {
        let m = self.seasonal.len();
        let phase = (self.observations + steps - 1) % m;
        self.level + steps as f64 * self.trend + self.seasonal[phase]
    }
}

#[derive(Debug, Clone)]
struct Smoothed {
    fitted: Vec<f64>,
    state: ModelState,
    sse: f64,
}

/// Initial state estimated from the first two seasonal cycles
fn initial_state(values: &[f64], m: usize) -> ModelState {
    let first_cycle_mean = values[..m].iter().sum::<f64>() / m as f64;
    let trend = (0..m)
        .map(|i| (values[m + i] - values[i]) / m as f64)
        .sum::<f64>()
        / m as f64;

    // First-cycle mean sits at time (m - 1) / 2; step back to time -1.
    let centre = (m as f64 - 1.0) / 2.0;
    let level = first_cycle_mean - trend * (centre + 1.0);
    let seasonal = (0..m)
        .map(|i| values[i] - (first_cycle_mean + trend * (i as f64 - centre)))
        .collect();

    ModelState {
        level,
        trend,
        seasonal,
        observations: 0,
    }
}

/// Run the smoothing recursion over `values`
fn smooth(values: &[f64], m: usize, params: SmoothingParams) -> Smoothed {
    let SmoothingParams { alpha, beta, gamma } = params;
    let mut state = initial_state(values, m);
    let mut fitted = Vec::with_capacity(values.len());

    for (t, &x) in values.iter().enumerate() {
        let phase = t % m;
        let season = state.seasonal[phase];
        let prediction = state.level + state.trend + season;
        fitted.push(prediction);

        let level = alpha * (x - season) + (1.0 - alpha) * (state.level + state.trend);
        state.trend = beta * (level - state.level) + (1.0 - beta) * state.trend;
        state.seasonal[phase] = gamma * (x - level) + (1.0 - gamma) * season;
        state.level = level;
    }
    state.observations = values.len();
    let sse = sum_squared_error(values, &fitted);

    Smoothed { fitted, state, sse }
}

/// Additive-trend, additive-seasonal exponential smoothing model
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Name of the model
    name: String,
    /// Length of one seasonal cycle
    seasonal_periods: usize,
    /// Fixed coefficients; fitted when `None`
    params: Option<SmoothingParams>,
    /// Settings for the coefficient search
    optimizer: NelderMeadConfig,
}

/// Trained Holt-Winters model
#[derive(Debug, Clone)]
pub struct TrainedHoltWinters {
    /// Name of the model
    name: String,
    /// Coefficients the model was fitted with
    params: SmoothingParams,
    /// State after the last training observation
    state: ModelState,
    /// One-step-ahead in-sample predictions
    fitted: Vec<f64>,
    /// Sum of squared in-sample errors
    sse: f64,
    /// Coefficient search diagnostics, when coefficients were fitted
    optimization: Option<OptimizationResult>,
    /// Training series, kept for its date axis
    history: TimeSeries,
}

impl HoltWinters {
    /// Create a new Holt-Winters model for the given cycle length
    pub fn new(seasonal_periods: usize) -> Result<Self> {
        if seasonal_periods == 0 {
            return Err(ForecastError::InvalidParameter(
                "Seasonal periods must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Holt-Winters (additive, m={})", seasonal_periods),
            seasonal_periods,
            params: None,
            optimizer: NelderMeadConfig::default(),
        })
    }

    /// Use fixed coefficients instead of fitting them
    pub fn with_params(mut self, params: SmoothingParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Override the coefficient search settings
    pub fn with_optimizer(mut self, config: NelderMeadConfig) -> Self {
        self.optimizer = config;
        self
    }

    pub fn seasonal_periods(&self) -> usize {
        self.seasonal_periods
    }

    /// Minimum history needed to initialise the model
    pub fn required_observations(&self) -> usize {
        2 * self.seasonal_periods
    }

    /// In-sample sum of squared errors for the given coefficients
    pub fn sum_squared_error(&self, series: &TimeSeries, params: SmoothingParams) -> Result<f64> {
        self.check_length(series)?;
        Ok(smooth(series.values(), self.seasonal_periods, params).sse)
    }

    fn check_length(&self, series: &TimeSeries) -> Result<()> {
        let required = self.required_observations();
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: series.len(),
            });
        }
        Ok(())
    }

    fn fit_params(&self, values: &[f64]) -> OptimizationResult {
        let m = self.seasonal_periods;
        let result = nelder_mead(
            |point| smooth(values, m, SmoothingParams::from_point(point)).sse,
            &INITIAL_PARAMS.to_point(),
            Some(&PARAM_BOUNDS[..]),
            self.optimizer,
        );

        debug!(
            iterations = result.iterations,
            converged = result.converged,
            sse = result.optimal_value,
            "fitted smoothing coefficients"
        );
        result
    }
}

impl ForecastModel for HoltWinters {
    type Trained = TrainedHoltWinters;

    fn train(&self, series: &TimeSeries) -> Result<Self::Trained> {
        self.check_length(series)?;
        let values = series.values();

        let (params, optimization) = match self.params {
            Some(params) => (params, None),
            None => {
                let result = self.fit_params(values);
                (SmoothingParams::from_point(&result.optimal_point), Some(result))
            }
        };

        let Smoothed { fitted, state, sse } = smooth(values, self.seasonal_periods, params);
        debug!(
            model = %self.name,
            observations = values.len(),
            alpha = params.alpha,
            beta = params.beta,
            gamma = params.gamma,
            sse,
            "trained model"
        );

        Ok(TrainedHoltWinters {
            name: self.name.clone(),
            params,
            state,
            fitted,
            sse,
            optimization,
            history: series.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedHoltWinters {
    /// Coefficients the model was fitted with
    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    /// State after the last training observation
    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Sum of squared one-step-ahead errors over the training series
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// Coefficient search diagnostics, if coefficients were fitted
    pub fn optimization(&self) -> Option<&OptimizationResult> {
        self.optimization.as_ref()
    }
}

impl TrainedForecastModel for TrainedHoltWinters {
    fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values: Vec<f64> = (1..=horizon).map(|h| self.state.project(h)).collect();
        let future_dates = self.history.future_dates(horizon)?;

        ForecastResult::new(
            self.history.dates().to_vec(),
            self.fitted.clone(),
            future_dates,
            values,
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}
