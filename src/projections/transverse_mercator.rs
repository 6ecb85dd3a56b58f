use crate::{constants::UTM_K0, ellipsoid::{Ellipsoid, WGS84}};

/// Transverse Mercator in the series form used for UTM (powers of the
/// longitude offset up to the sixth).
pub(crate) struct TransverseMercator {
    ellipsoid: Ellipsoid,
    k0: f64,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        Self {
            ellipsoid: *WGS84,
            k0: UTM_K0,
        }
    }

    /// Project latitude `lat` (degrees) lying `dlam` radians east of the
    /// central meridian. Returns `(x, y)` without false easting or northing.
    pub fn from_latlon(&self, dlam: f64, lat: f64) -> (f64, f64) {
        let phi = lat.to_radians();

        let e2 = self.ellipsoid.e2;
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = self.ellipsoid.prime_vertical_radius(phi);
        let t = tan_phi * tan_phi;
        let c = e2 * cos_phi * cos_phi;
        let a = cos_phi * dlam;
        let m = self.ellipsoid.meridional_arc(phi);

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = self.k0 * n * (
            a
            + (1. - t + c) * a3 / 6.
            + (5. - 18. * t + t * t + 72. * c - 58. * e2) * a5 / 120.
        );

        let y = self.k0 * (
            m + n * tan_phi * (
                a2 / 2.
                + (5. - t + 9. * c + 4. * c * c) * a4 / 24.
                + (61. - 58. * t + t * t + 600. * c - 330. * e2) * a6 / 720.
            )
        );

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn central_meridian_at_equator_is_origin() {
        let (x, y) = TransverseMercator::utm().from_latlon(0., 0.);
        assert_relative_eq!(x, 0., epsilon = 1e-9);
        assert_relative_eq!(y, 0., epsilon = 1e-9);
    }

    #[test]
    fn central_meridian_northing_is_scaled_arc() {
        let tm = TransverseMercator::utm();
        let (x, y) = tm.from_latlon(0., 45.);
        assert_relative_eq!(x, 0., epsilon = 1e-9);
        assert_relative_eq!(y, UTM_K0 * WGS84.meridional_arc(45_f64.to_radians()), epsilon = 1e-6);
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let tm = TransverseMercator::utm();
        let (x_east, y_east) = tm.from_latlon(2_f64.to_radians(), 40.);
        let (x_west, y_west) = tm.from_latlon(-(2_f64.to_radians()), 40.);
        assert_relative_eq!(x_east, -x_west, epsilon = 1e-6);
        assert_relative_eq!(y_east, y_west, epsilon = 1e-6);
    }
}
