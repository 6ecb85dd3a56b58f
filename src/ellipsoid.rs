use lazy_static::lazy_static;

use crate::constants::{WGS84_A, WGS84_F_INV};

lazy_static! {
    /// The WGS84 reference ellipsoid, with its derived parameters computed once.
    pub static ref WGS84: Ellipsoid = Ellipsoid::from_inverse_flattening(WGS84_A, WGS84_F_INV);
}

/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub(crate) a: f64,
    /// Flattening
    pub(crate) f: f64,
    /// First eccentricity
    pub(crate) e: f64,
    /// First eccentricity squared
    pub(crate) e2: f64,
}

impl Ellipsoid {
    pub(crate) fn from_inverse_flattening(a: f64, f_inv: f64) -> Ellipsoid {
        let f = 1. / f_inv;
        let e = (1. - (1. - f) * (1. - f)).sqrt();

        Self {
            a,
            f,
            e,
            e2: e * e,
        }
    }

    /// Returns the semi-major axis in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    /// Returns the flattening.
    #[inline]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Returns the first eccentricity `sqrt(1 - (1 - f)^2)`.
    ///
    /// # Example
    /// ```
    /// use utmconvert::WGS84;
    ///
    /// assert!((WGS84.eccentricity() - 0.081_819_190_842_622).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    /// Radius of curvature in the prime vertical at latitude `lat` (radians).
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        let sin_lat = lat.sin();
        self.a / (1. - self.e2 * sin_lat * sin_lat).sqrt()
    }

    /// Distance in meters along the meridian from the equator to latitude
    /// `lat` (radians), using the series to third order in `e^2`.
    pub fn meridional_arc(&self, lat: f64) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.a * (
            (1. - e2 / 4. - 3. * e4 / 64. - 5. * e6 / 256.) * lat
            - (3. * e2 / 8. + 3. * e4 / 32. + 45. * e6 / 1024.) * (2. * lat).sin()
            + (15. * e4 / 256. + 45. * e6 / 1024.) * (4. * lat).sin()
            - (35. * e6 / 3072.) * (6. * lat).sin()
        )
    }
}
