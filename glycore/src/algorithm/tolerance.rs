use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A mass tolerance in parts per million.
///
/// The absolute tolerance scales linearly with m/z, so ten ppm corresponds to
/// 0.01 Dalton at m/z 1000 and 0.02 Dalton at m/z 2000.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PpmTolerance {
    pub ppm: f64,
}

impl PpmTolerance {
    pub fn new(ppm: f64) -> Self {
        PpmTolerance { ppm }
    }

    /// Absolute tolerance in Dalton at the given m/z.
    ///
    /// # Example
    ///
    /// ```
    /// use glycore::algorithm::tolerance::PpmTolerance;
    ///
    /// let tolerance = PpmTolerance::new(10.0);
    /// assert_eq!(tolerance.tolerance(1000.0), 0.01);
    /// ```
    pub fn tolerance(&self, mz: f64) -> f64 {
        self.ppm * mz / 1e6
    }

    /// Elementwise tolerances for a sequence of m/z values, in input order.
    pub fn tolerance_batch(&self, mz_values: &[f64]) -> Vec<f64> {
        mz_values.iter().map(|mz| self.tolerance(*mz)).collect()
    }

    /// The inclusive m/z window spanned by the tolerance around a center.
    pub fn window(&self, mz: f64) -> RangeInclusive<f64> {
        let tolerance = self.tolerance(mz);
        (mz - tolerance)..=(mz + tolerance)
    }
}

impl Display for PpmTolerance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ppm", self.ppm)
    }
}
