// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The PERT distribution.

use crate::{Fixed, StandardBeta, Univariate};
use core::fmt;
use rand::distributions::Distribution;
use rand::Rng;

/// The PERT distribution.
///
/// A [`Beta4`] distribution parameterised by a range and a mode (most likely
/// value) within that range. The shape parameters are derived so that the
/// mean is `(min + 4 * mode + max) / 6`:
///
/// ```text
/// alpha = 1 + 4 * (mode - min) / (max - min)
/// beta  = 1 + 4 * (max - mode) / (max - min)
/// ```
///
/// As with [`Beta4`], [`Univariate::cdf`] is divided by `max - min`.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{Distribution, Pert, Univariate};
///
/// let d = Pert::new(0., 10., 5.).unwrap();
/// assert_eq!(d.mean(), 5.);
/// let v = d.sample(&mut rand::thread_rng());
/// println!("{} is from a PERT distribution", v);
/// ```
///
/// [`Beta4`]: crate::Beta4
#[derive(Clone, Debug)]
pub struct Pert {
    min: f64,
    max: f64,
    mode: f64,
    beta: StandardBeta,
}

/// Error type returned from [`Pert`] constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PertError {
    /// `max <= min` or `min` or `max` is NaN.
    RangeTooSmall,
    /// `mode < min` or `mode` is NaN.
    ModeBelowMin,
    /// `mode > max`.
    ModeAboveMax,
}

impl fmt::Display for PertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PertError::RangeTooSmall => "requirement min < max is not met in PERT distribution",
            PertError::ModeBelowMin => "requirement min <= mode is not met in PERT distribution",
            PertError::ModeAboveMax => "requirement mode <= max is not met in PERT distribution",
        })
    }
}

impl std::error::Error for PertError {}

impl Pert {
    /// Set up the PERT distribution with defined `min`, `max` and `mode`.
    ///
    /// The constraints are checked in the order `min < max`, `min <= mode`,
    /// `mode <= max`; the first one violated is reported.
    pub fn new(min: f64, max: f64, mode: f64) -> Result<Pert, PertError> {
        if !(max > min) {
            debug!("Pert: rejected range min={} max={}", min, max);
            return Err(PertError::RangeTooSmall);
        }
        if !(mode >= min) {
            debug!("Pert: rejected mode={} below min={}", mode, min);
            return Err(PertError::ModeBelowMin);
        }
        if mode > max {
            debug!("Pert: rejected mode={} above max={}", mode, max);
            return Err(PertError::ModeAboveMax);
        }

        let range = max - min;
        let alpha = 1. + 4. * (mode - min) / range;
        let beta = 1. + 4. * (max - mode) / range;
        // Only an infinite range can make the derived shapes invalid.
        let beta = StandardBeta::new(alpha, beta).map_err(|_| PertError::RangeTooSmall)?;
        Ok(Pert { min, max, mode, beta })
    }

    /// Set up a PERT distribution, draw a single sample from it and return
    /// that sample as a [`Fixed`] distribution.
    pub fn new_one<R: Rng + ?Sized>(
        min: f64, max: f64, mode: f64, rng: &mut R,
    ) -> Result<Fixed, PertError> {
        let distr = Pert::new(min, max, mode)?;
        Ok(Fixed::from_sample(&distr, rng))
    }

    /// The derived first shape parameter.
    pub fn alpha(&self) -> f64 {
        self.beta.alpha()
    }

    /// The derived second shape parameter.
    pub fn beta(&self) -> f64 {
        self.beta.beta()
    }

    /// Lower bound of the range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    fn scale(&self) -> f64 {
        self.max - self.min
    }
}

impl Distribution<f64> for Pert {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.beta.sample(rng) * self.scale() + self.min
    }
}

impl Univariate for Pert {
    fn cdf(&self, y: f64) -> f64 {
        let x = (y - self.min) / self.scale();
        self.beta.cdf(x) / self.scale()
    }

    fn prob(&self, y: f64) -> f64 {
        let x = (y - self.min) / self.scale();
        self.beta.pdf(x) / self.scale()
    }

    fn mean(&self) -> f64 {
        (self.min + 4. * self.mode + self.max) / 6.
    }

    fn mode(&self) -> f64 {
        self.mode
    }

    fn std_dev(&self) -> f64 {
        self.beta.std_dev() * self.scale()
    }

    fn variance(&self) -> f64 {
        self.beta.variance() * self.scale() * self.scale()
    }

    fn num_parameters(&self) -> usize {
        3
    }
}
