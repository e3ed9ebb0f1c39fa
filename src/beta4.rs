// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The four-parameter Beta distribution.

use crate::{Fixed, ShapeError, StandardBeta, Univariate};
use core::fmt;
use rand::distributions::Distribution;
use rand::Rng;

/// The four-parameter Beta distribution.
///
/// This is the two-parameter Beta distribution with shape parameters `alpha`
/// and `beta`, stretched from `[0, 1]` onto `[min, max]`. Every query is the
/// corresponding query of the standard Beta distribution under the affine map
/// `y = x * (max - min) + min`.
///
/// Note that [`Univariate::cdf`] divides the standard cumulative distribution
/// by `max - min`, so it only reaches `1` on the unit range. Existing callers
/// depend on this scaling.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{Beta4, Distribution, Univariate};
///
/// let d = Beta4::new(2.0, 2.0, 5.0, 10.0).unwrap();
/// assert_eq!(d.mean(), 7.5);
/// let v = d.sample(&mut rand::thread_rng());
/// assert!((5.0..=10.0).contains(&v));
/// ```
#[derive(Clone, Debug)]
pub struct Beta4 {
    min: f64,
    max: f64,
    beta: StandardBeta,
}

/// Error type returned from [`Beta4`] constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Beta4Error {
    /// `max <= min` or `min` or `max` is NaN.
    RangeTooSmall,
    /// `alpha <= 0`, or `alpha` is infinite or NaN.
    AlphaTooSmall,
    /// `beta <= 0`, or `beta` is infinite or NaN.
    BetaTooSmall,
}

impl fmt::Display for Beta4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Beta4Error::RangeTooSmall => "requirement min < max is not met in Beta4 distribution",
            Beta4Error::AlphaTooSmall => "alpha is not a positive finite number in Beta4 distribution",
            Beta4Error::BetaTooSmall => "beta is not a positive finite number in Beta4 distribution",
        })
    }
}

impl std::error::Error for Beta4Error {}

impl From<ShapeError> for Beta4Error {
    fn from(e: ShapeError) -> Self {
        match e {
            ShapeError::AlphaInvalid => Beta4Error::AlphaTooSmall,
            ShapeError::BetaInvalid => Beta4Error::BetaTooSmall,
        }
    }
}

impl Beta4 {
    /// Set up the Beta4 distribution with shape parameters `alpha` and
    /// `beta` on the range `[min, max]`.
    pub fn new(alpha: f64, beta: f64, min: f64, max: f64) -> Result<Beta4, Beta4Error> {
        if !(max > min) {
            debug!("Beta4: rejected range min={} max={}", min, max);
            return Err(Beta4Error::RangeTooSmall);
        }
        let beta = StandardBeta::new(alpha, beta).map_err(|e| {
            debug!("Beta4: rejected shape alpha={} beta={}: {}", alpha, beta, e);
            Beta4Error::from(e)
        })?;
        Ok(Beta4 { min, max, beta })
    }

    /// Set up a Beta4 distribution, draw a single sample from it and return
    /// that sample as a [`Fixed`] distribution.
    ///
    /// Useful when one variable must hold steady across Monte-Carlo trials
    /// while the others vary.
    pub fn new_one<R: Rng + ?Sized>(
        alpha: f64, beta: f64, min: f64, max: f64, rng: &mut R,
    ) -> Result<Fixed, Beta4Error> {
        let distr = Beta4::new(alpha, beta, min, max)?;
        Ok(Fixed::from_sample(&distr, rng))
    }

    /// The first shape parameter.
    pub fn alpha(&self) -> f64 {
        self.beta.alpha()
    }

    /// The second shape parameter.
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

    #[inline]
    fn normalize(&self, y: f64) -> f64 {
        (y - self.min) / self.scale()
    }
}

impl Distribution<f64> for Beta4 {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.beta.sample(rng) * self.scale() + self.min
    }
}

impl Univariate for Beta4 {
    fn cdf(&self, y: f64) -> f64 {
        self.beta.cdf(self.normalize(y)) / self.scale()
    }

    fn prob(&self, y: f64) -> f64 {
        self.beta.pdf(self.normalize(y)) / self.scale()
    }

    fn mean(&self) -> f64 {
        self.beta.mean() * self.scale() + self.min
    }

    /// Mode of the distribution.
    ///
    /// When a shape parameter is `<= 1` the density is unbounded at that end
    /// of the unit range, and the result is not rescaled:
    ///
    /// | alpha | beta | mode |
    /// |---|---|---|
    /// | `<= 1` | `<= 1` | NaN |
    /// | `<= 1` | `> 1` | `0.0` |
    /// | `> 1` | `<= 1` | `1.0` |
    /// | `> 1` | `> 1` | `(alpha-1)/(alpha+beta-2) * (max-min) + min` |
    fn mode(&self) -> f64 {
        let (alpha, beta) = (self.beta.alpha(), self.beta.beta());
        if alpha <= 1.0 && beta <= 1.0 {
            f64::NAN
        } else if alpha <= 1.0 {
            0.0
        } else if beta <= 1.0 {
            1.0
        } else {
            self.beta.mode() * self.scale() + self.min
        }
    }

    fn std_dev(&self) -> f64 {
        self.beta.std_dev() * self.scale()
    }

    fn variance(&self) -> f64 {
        let scale = self.scale();
        self.beta.variance() * scale * scale
    }

    fn num_parameters(&self) -> usize {
        4
    }
}
