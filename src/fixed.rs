// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fixed-value distribution.

use crate::Univariate;
use rand::distributions::Distribution;
use rand::Rng;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// A distribution that always yields the same value.
///
/// Sampling never consumes randomness. Statistically `Fixed` is a point mass
/// at its value: the mean and mode equal the value, the variance is zero and
/// the cumulative distribution steps from `0` to `1` at the value.
///
/// `Fixed` is also what the one-shot constructors ([`Beta4::new_one`],
/// [`Pert::new_one`], [`triangle_one`]) return: a value drawn once and then
/// held steady for a whole run.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{Distribution, Fixed};
///
/// let d = Fixed::new(3.5);
/// assert_eq!(d.sample(&mut rand::thread_rng()), 3.5);
/// ```
///
/// [`Beta4::new_one`]: crate::Beta4::new_one
/// [`Pert::new_one`]: crate::Pert::new_one
/// [`triangle_one`]: crate::triangle_one
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Fixed {
    value: f64,
}

impl Fixed {
    /// Construct a distribution yielding `value`.
    #[inline]
    pub fn new(value: f64) -> Fixed {
        Fixed { value }
    }

    /// Draw exactly one sample from `distr` and freeze it.
    pub fn from_sample<D, R>(distr: &D, rng: &mut R) -> Fixed
    where
        D: Distribution<f64> + ?Sized,
        R: Rng + ?Sized,
    {
        let value = distr.sample(rng);
        trace!("Fixed: froze one-shot sample {}", value);
        Fixed { value }
    }

    /// The held value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl From<f64> for Fixed {
    fn from(value: f64) -> Fixed {
        Fixed::new(value)
    }
}

impl Distribution<f64> for Fixed {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        self.value
    }
}

impl Univariate for Fixed {
    fn cdf(&self, y: f64) -> f64 {
        if y < self.value {
            0.0
        } else {
            1.0
        }
    }

    fn prob(&self, _y: f64) -> f64 {
        0.0
    }

    fn mean(&self) -> f64 {
        self.value
    }

    fn mode(&self) -> f64 {
        self.value
    }

    fn std_dev(&self) -> f64 {
        0.0
    }

    fn variance(&self) -> f64 {
        0.0
    }

    fn num_parameters(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_fixed() {
        let mut rng = crate::test::rng(212);
        for &value in &[1.0, 10.0, 100.0, -2.5, 0.0] {
            let d = Fixed::new(value);
            assert_eq!(d.value(), value);
            for _ in 0..5 {
                assert_eq!(d.sample(&mut rng), value);
            }
        }
    }

    #[test]
    fn test_fixed_consumes_no_randomness() {
        let mut a = crate::test::rng(212);
        let mut b = crate::test::rng(212);
        let d = Fixed::new(7.0);
        for _ in 0..10 {
            d.sample(&mut a);
        }
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_fixed_point_mass() {
        let d = Fixed::from(4.0);
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.mode(), 4.0);
        assert_eq!(d.variance(), 0.0);
        assert_eq!(d.std_dev(), 0.0);
        assert_eq!(d.cdf(3.999), 0.0);
        assert_eq!(d.cdf(4.0), 1.0);
        assert_eq!(d.cdf(10.0), 1.0);
        assert_eq!(d.prob(4.0), 0.0);
        assert_eq!(d.num_parameters(), 1);
    }

    #[test]
    fn test_from_sample() {
        let mut rng = crate::test::rng(213);
        let frozen = Fixed::from_sample(&rand::distributions::Standard, &mut rng);
        let first = frozen.sample(&mut rng);
        assert!((0.0..1.0).contains(&first));
        for _ in 0..5 {
            assert_eq!(frozen.sample(&mut rng), first);
        }
    }
}
