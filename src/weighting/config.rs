//! Weight configuration.

/// Optional rescaling applied to the inputs before they are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Normalization {
    /// Use raw gain and benefit values.
    #[default]
    None,

    /// Scale the gain matrix and the benefit vector independently to
    /// `[0, 1]` using their own global minimum and maximum.
    ///
    /// A constant input (max == min) maps to all zeros.
    MinMax,
}

/// Weights for combining benefit and gain.
///
/// `alpha` weights the benefit, `beta` weights the gain. `beta` is derived
/// as `1 - alpha` rounded to `precision` decimal places, which is also the
/// precision used when the weights are written into output file names.
///
/// # Examples
///
/// ```
/// use u_assign::weighting::WeightConfig;
///
/// let config = WeightConfig::new(0.3).with_bid_multiplier(2.0);
/// assert!((config.beta - 0.7).abs() < 1e-12);
/// assert_eq!(config.label(), "alpha0.30_beta0.70");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightConfig {
    /// Weight on the benefit vector, in `[0, 1]`.
    pub alpha: f64,

    /// Weight on the gain matrix, in `[0, 1]`.
    pub beta: f64,

    /// Decimal places for rounding `beta` and for file name labels.
    pub precision: u32,

    /// Factor applied to every benefit before combination.
    pub bid_multiplier: f64,

    /// Input rescaling applied before combination.
    pub normalization: Normalization,
}

/// Highest supported rounding precision.
pub const MAX_PRECISION: u32 = 10;

impl Default for WeightConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl WeightConfig {
    /// Creates weights from `alpha`, deriving `beta = round(1 - alpha, 2)`.
    pub fn new(alpha: f64) -> Self {
        let precision = 2;
        Self {
            alpha,
            beta: round_to(1.0 - alpha, precision),
            precision,
            bid_multiplier: 1.0,
            normalization: Normalization::None,
        }
    }

    /// Sets the rounding precision and re-derives `beta` from `alpha`.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self.beta = round_to(1.0 - self.alpha, precision);
        self
    }

    /// Sets both weights explicitly, bypassing derivation.
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    pub fn with_bid_multiplier(mut self, m: f64) -> Self {
        self.bid_multiplier = m;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Largest deviation of `alpha + beta` from one that still counts as
    /// summing to one at the configured precision.
    pub fn sum_tolerance(&self) -> f64 {
        0.5 * 10f64.powi(-(self.precision as i32)) + 1e-12
    }

    /// Renders the weights as `alpha{a}_beta{b}` with `precision` decimals.
    pub fn label(&self) -> String {
        let p = self.precision as usize;
        format!("alpha{:.*}_beta{:.*}", p, self.alpha, p, self.beta)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            ));
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        if !self.beta.is_finite() || !(0.0..=1.0).contains(&self.beta) {
            return Err(format!("beta must be in [0, 1], got {}", self.beta));
        }
        let sum = self.alpha + self.beta;
        if (sum - 1.0).abs() > self.sum_tolerance() {
            return Err(format!("alpha + beta must equal 1, got {sum}"));
        }
        if !self.bid_multiplier.is_finite() {
            return Err(format!(
                "bid_multiplier must be finite, got {}",
                self.bid_multiplier
            ));
        }
        Ok(())
    }
}

/// Rounds `value` to `precision` decimal places.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
