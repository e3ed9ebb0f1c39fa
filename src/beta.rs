// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The standard Beta distribution on `[0, 1]`.

use core::fmt;
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Distribution as Moments, Mode};

/// The standard Beta distribution with shape parameters `alpha` and `beta`.
///
/// Samples are drawn with [`rand_distr::Beta`]; the density, cumulative
/// distribution and moments are evaluated with [`statrs::distribution::Beta`].
/// Both are built from the same shape parameters, so the sampler and the
/// analytic model always describe the same distribution.
///
/// This is the building block that [`Beta4`] and [`Pert`] rescale onto an
/// arbitrary range.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{Distribution, StandardBeta};
///
/// let beta = StandardBeta::new(2.0, 5.0).unwrap();
/// let v = beta.sample(&mut rand::thread_rng());
/// assert!((0.0..=1.0).contains(&v));
/// ```
///
/// [`Beta4`]: crate::Beta4
/// [`Pert`]: crate::Pert
#[derive(Clone, Debug)]
pub struct StandardBeta {
    alpha: f64,
    beta: f64,
    sampler: rand_distr::Beta<f64>,
    analytic: statrs::distribution::Beta,
}

/// Error type returned from [`StandardBeta::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// `alpha <= 0`, or `alpha` is infinite or NaN.
    AlphaInvalid,
    /// `beta <= 0`, or `beta` is infinite or NaN.
    BetaInvalid,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeError::AlphaInvalid => "alpha is not a positive finite number in beta distribution",
            ShapeError::BetaInvalid => "beta is not a positive finite number in beta distribution",
        })
    }
}

impl std::error::Error for ShapeError {}

impl StandardBeta {
    /// Construct the `Beta(alpha, beta)` distribution.
    pub fn new(alpha: f64, beta: f64) -> Result<StandardBeta, ShapeError> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(ShapeError::AlphaInvalid);
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(ShapeError::BetaInvalid);
        }
        let sampler = rand_distr::Beta::new(alpha, beta).map_err(|e| match e {
            rand_distr::BetaError::BetaTooSmall => ShapeError::BetaInvalid,
            _ => ShapeError::AlphaInvalid,
        })?;
        let analytic =
            statrs::distribution::Beta::new(alpha, beta).map_err(|_| ShapeError::AlphaInvalid)?;
        Ok(StandardBeta { alpha, beta, sampler, analytic })
    }

    /// The first shape parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The second shape parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Cumulative distribution function at `x`; `0` below the support and
    /// `1` above it.
    pub fn cdf(&self, x: f64) -> f64 {
        self.analytic.cdf(x)
    }

    /// Probability density function at `x`; `0` outside `[0, 1]`.
    pub fn pdf(&self, x: f64) -> f64 {
        self.analytic.pdf(x)
    }

    /// `alpha / (alpha + beta)`.
    pub fn mean(&self) -> f64 {
        self.analytic.mean().unwrap_or(f64::NAN)
    }

    /// `(alpha - 1) / (alpha + beta - 2)`, or NaN when either shape parameter
    /// is `<= 1` and the mode is not unique.
    pub fn mode(&self) -> f64 {
        if self.alpha <= 1.0 || self.beta <= 1.0 {
            return f64::NAN;
        }
        self.analytic.mode().unwrap_or(f64::NAN)
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// `alpha * beta / ((alpha + beta)^2 * (alpha + beta + 1))`.
    pub fn variance(&self) -> f64 {
        self.analytic.variance().unwrap_or(f64::NAN)
    }
}

impl Distribution<f64> for StandardBeta {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}
