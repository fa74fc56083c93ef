//! Box constraints shared read-only by every particle of a swarm.

use crate::{PSOError, Result};
use ndarray::{Array1, Zip};
use rand::Rng;

/// Search box used by the run shell: x1 in [0, 10], x2 in [-10, 10], x3 in [-5, 5].
pub const DEFAULT_BOUNDS: [(f64, f64); 3] = [(0.0, 10.0), (-10.0, 10.0), (-5.0, 5.0)];

/// Per-dimension inclusive `[lower, upper]` ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl Bounds {
    /// Creates bounds from separate lower and upper arrays.
    ///
    /// # Errors
    ///
    /// Returns `PSOError::BoundsMismatch` if `lower` and `upper` have different lengths.
    /// Returns `PSOError::InvalidBounds` if any lower bound exceeds its corresponding upper bound.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(PSOError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }

        for i in 0..lower.len() {
            if lower[i] > upper[i] {
                return Err(PSOError::InvalidBounds {
                    index: i,
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }

        Ok(Self { lower, upper })
    }

    /// Creates bounds from `(lower, upper)` pairs, one per dimension.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let lower = pairs.iter().map(|&(lo, _)| lo).collect();
        let upper = pairs.iter().map(|&(_, hi)| hi).collect();
        Self::new(lower, upper)
    }

    /// The fixed search box of the run shell, see [`DEFAULT_BOUNDS`].
    pub fn default_search_box() -> Self {
        Self {
            lower: DEFAULT_BOUNDS.iter().map(|&(lo, _)| lo).collect(),
            upper: DEFAULT_BOUNDS.iter().map(|&(_, hi)| hi).collect(),
        }
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Lower bound of every dimension.
    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    /// Upper bound of every dimension.
    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Returns `true` if every coordinate of `x` lies inside its range, inclusive.
    pub fn contains(&self, x: &Array1<f64>) -> bool {
        x.len() == self.dim()
            && Zip::from(x)
                .and(&self.lower)
                .and(&self.upper)
                .all(|&v, &lo, &hi| lo <= v && v <= hi)
    }

    /// Hard-clamps each coordinate of `x` into its range.
    pub fn clamp(&self, x: &mut Array1<f64>) {
        Zip::from(x)
            .and(&self.lower)
            .and(&self.upper)
            .for_each(|v, &lo, &hi| *v = v.clamp(lo, hi));
    }

    /// Draws a point uniformly at random, independently per dimension.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        let mut x = Array1::<f64>::zeros(self.dim());
        for j in 0..self.dim() {
            let u: f64 = rng.random::<f64>();
            x[j] = self.lower[j] + u * (self.upper[j] - self.lower[j]);
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_search_box() {
        let b = Bounds::default_search_box();
        assert_eq!(b.dim(), 3);
        assert_eq!(b.lower(), &array![0.0, -10.0, -5.0]);
        assert_eq!(b.upper(), &array![10.0, 10.0, 5.0]);
        assert_eq!(Bounds::from_pairs(&DEFAULT_BOUNDS).unwrap(), b);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = Bounds::new(array![0.0, 0.0], array![1.0]).unwrap_err();
        assert!(matches!(
            err,
            PSOError::BoundsMismatch {
                lower_len: 2,
                upper_len: 1
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = Bounds::from_pairs(&[(0.0, 1.0), (3.0, -3.0)]).unwrap_err();
        assert!(matches!(err, PSOError::InvalidBounds { index: 1, .. }));
    }

    #[test]
    fn test_degenerate_range_is_allowed() {
        let b = Bounds::from_pairs(&[(2.0, 2.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(b.sample(&mut rng), array![2.0]);
    }

    #[test]
    fn test_clamp_is_hard() {
        let b = Bounds::default_search_box();
        let mut x = array![-3.0, 25.0, 0.25];
        b.clamp(&mut x);
        assert_eq!(x, array![0.0, 10.0, 0.25]);
        assert!(b.contains(&x));
    }

    #[test]
    fn test_samples_stay_inside() {
        let b = Bounds::default_search_box();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = b.sample(&mut rng);
            assert!(b.contains(&x), "sample {:?} escaped the box", x);
        }
    }
}
