//! Random distributions shared by the generator and the network.

use rand::Rng;
use rand_distr::Distribution;

/// A coin flip between `0.0` and `1.0`.
///
/// A uniform real is drawn from `[0, 1)` and mapped to `1.0` when it is at least `0.5`. Both the
/// optional entries of a generated sample and the initial weights of a network come from here, so
/// the two start out on the same footing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOne;

impl Distribution<f64> for ZeroOne {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if rng.gen::<f64>() >= 0.5 {
            1.0
        } else {
            0.0
        }
    }
}
