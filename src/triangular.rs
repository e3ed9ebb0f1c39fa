// Copyright 2026 Developers of the rand_estimate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-shot sampling of the triangular distribution.

use crate::Fixed;
use rand::Rng;
use rand_distr::{Triangular, TriangularError};

/// Draw a single sample from the triangular distribution on `[low, high]`
/// with the given `mode`, and return it as a [`Fixed`] distribution.
///
/// Parameter validation is that of [`rand_distr::Triangular::new`], whose
/// error is passed through unchanged.
///
/// # Example
///
/// ```rust
/// use rand_estimate::{triangle_one, Distribution};
///
/// let mut rng = rand::thread_rng();
/// let d = triangle_one(0., 5., 2.5, &mut rng).unwrap();
/// assert_eq!(d.sample(&mut rng), d.sample(&mut rng));
/// ```
pub fn triangle_one<R: Rng + ?Sized>(
    low: f64, high: f64, mode: f64, rng: &mut R,
) -> Result<Fixed, TriangularError> {
    let distr = Triangular::new(low, high, mode).map_err(|e| {
        debug!("triangle_one: rejected low={} high={} mode={}: {}", low, high, mode, e);
        e
    })?;
    Ok(Fixed::from_sample(&distr, rng))
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::distributions::Distribution;

    #[test]
    fn test_triangle_one() {
        for &(low, high, mode) in &[
            (-1., 1., 0.),
            (1., 2., 1.),
            (5., 25., 25.),
            (0., 1., 0.9),
        ] {
            let mut rng = crate::test::rng(404);
            let one = triangle_one(low, high, mode, &mut rng).unwrap();
            let first = one.sample(&mut rng);
            assert!(first >= low && first <= high);
            for _ in 0..5 {
                assert_eq!(one.sample(&mut rng), first);
            }
        }
    }

    #[test]
    fn test_triangle_one_invalid() {
        let mut rng = crate::test::rng(405);
        assert_eq!(
            triangle_one(-1., 1., 2., &mut rng).unwrap_err(),
            TriangularError::ModeRange
        );
        assert_eq!(
            triangle_one(2., 1., 1., &mut rng).unwrap_err(),
            TriangularError::RangeTooSmall
        );
    }
}
