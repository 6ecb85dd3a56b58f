use num::Integer;

use crate::{constants::{ZONE_ORIGIN, ZONE_WIDTH}, utility::{dms, GeoMath}};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: i32 = 1;
    pub(crate) const MAXUTMZONE: i32 = 60;
}

/// How a longitude is assigned to a UTM zone and which central meridian that
/// zone projects about.
///
/// [`ZoneRule::Legacy`] is the default and reproduces the historical formula,
/// which divides the longitude in *radians* by the zone width in *degrees*.
/// Every longitude in `[-180, 180]` lands in zone 1 or 2 under it, and zone 1
/// is centred on -183°. [`ZoneRule::Reference`] shares that zoning and also
/// keeps the historical second mismatch: the central meridian is subtracted in
/// *degrees* from the longitude in *radians*, which reproduces the original
/// program's output to within rounding but is far from any real grid.
/// [`ZoneRule::Standard`] is the usual 6° UTM zoning.
///
/// # Usage
///
/// ```
/// use utmconvert::ZoneRule;
///
/// assert_eq!(ZoneRule::Legacy.zone(119.3169481), 1);
/// assert_eq!(ZoneRule::Standard.zone(119.3169481), 50);
///
/// assert_eq!(ZoneRule::Legacy.central_meridian(1), -183.0);
/// assert_eq!(ZoneRule::Standard.central_meridian(50), 117.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneRule {
    #[default]
    Legacy,
    Reference,
    Standard,
}

impl ZoneRule {
    /// Zone number for a longitude in degrees.
    ///
    /// Non-finite or wildly out of range longitudes do not panic: the float to
    /// integer conversion saturates (NaN maps to zone 1 under
    /// [`ZoneRule::Legacy`]).
    #[allow(clippy::cast_possible_truncation)]
    pub fn zone(self, lon: f64) -> i32 {
        match self {
            ZoneRule::Legacy | ZoneRule::Reference => {
                let offset = (lon.to_radians() - ZONE_ORIGIN.to_radians()) / ZONE_WIDTH;
                (offset.floor() as i32).saturating_add(1)
            }
            ZoneRule::Standard => {
                let mut lon_int = lon.ang_normalize().floor() as i32;
                if lon_int == dms::HD {
                    lon_int = -dms::HD;
                }

                Integer::div_floor(&(lon_int + 186), &6)
            }
        }
    }

    /// Central meridian of `zone` in degrees.
    pub fn central_meridian(self, zone: i32) -> f64 {
        match self {
            ZoneRule::Legacy | ZoneRule::Reference => ZONE_ORIGIN + (f64::from(zone) - 1.) * ZONE_WIDTH,
            ZoneRule::Standard => ZONE_WIDTH * f64::from(zone) - 183.,
        }
    }

    /// Longitude of `lon` (degrees) relative to the central meridian of
    /// `zone`, in radians, as fed to the projection series.
    pub(crate) fn longitude_offset(self, lon: f64, zone: i32) -> f64 {
        let lon0 = self.central_meridian(zone);
        match self {
            ZoneRule::Legacy => lon.to_radians() - lon0.to_radians(),
            ZoneRule::Reference => lon.to_radians() - lon0,
            // Zone 1 also holds 180°, which must come out as -180°
            ZoneRule::Standard => (lon - lon0).ang_normalize().to_radians(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_zone_only_reaches_two() {
        assert_eq!(ZoneRule::Legacy.zone(-180.), 1);
        assert_eq!(ZoneRule::Legacy.zone(0.), 1);
        assert_eq!(ZoneRule::Legacy.zone(119.3169481), 1);
        // (lon_rad + 3.194) / 6 crosses 1 near 160.78°
        assert_eq!(ZoneRule::Legacy.zone(160.), 1);
        assert_eq!(ZoneRule::Legacy.zone(161.), 2);
        assert_eq!(ZoneRule::Legacy.zone(180.), 2);
    }

    #[test]
    fn legacy_zone_saturates() {
        assert_eq!(ZoneRule::Legacy.zone(f64::NAN), 1);
        assert_eq!(ZoneRule::Legacy.zone(f64::INFINITY), i32::MAX);
        assert_eq!(ZoneRule::Legacy.zone(f64::NEG_INFINITY), i32::MIN + 1);
    }

    #[test]
    fn standard_zone_edges() {
        assert_eq!(ZoneRule::Standard.zone(-180.), zonespec::MINUTMZONE);
        assert_eq!(ZoneRule::Standard.zone(-174.0001), 1);
        assert_eq!(ZoneRule::Standard.zone(-174.), 2);
        assert_eq!(ZoneRule::Standard.zone(0.), 31);
        assert_eq!(ZoneRule::Standard.zone(-0.5), 30);
        assert_eq!(ZoneRule::Standard.zone(-73.985278), 18);
        assert_eq!(ZoneRule::Standard.zone(179.9999), zonespec::MAXUTMZONE);
        // 180 wraps around to the start of zone 1
        assert_eq!(ZoneRule::Standard.zone(180.), 1);
    }

    #[test]
    fn standard_zone_contains_its_meridian() {
        for zone in zonespec::MINUTMZONE..=zonespec::MAXUTMZONE {
            let lon0 = ZoneRule::Standard.central_meridian(zone);
            assert_eq!(ZoneRule::Standard.zone(lon0), zone);
            assert_eq!(ZoneRule::Standard.zone(lon0 - 2.9), zone);
            assert_eq!(ZoneRule::Standard.zone(lon0 + 2.9), zone);
        }
    }

    #[test]
    fn reference_zones_match_legacy() {
        for lon in [-180., -73.985278, 0., 119.3169481, 161., 180.] {
            assert_eq!(ZoneRule::Reference.zone(lon), ZoneRule::Legacy.zone(lon));
        }
    }

    #[test]
    fn longitude_offsets() {
        let lon = 119.3169481;
        assert_eq!(ZoneRule::Legacy.longitude_offset(lon, 1), lon.to_radians() - (-183_f64).to_radians());
        // Degrees subtracted from radians
        assert_eq!(ZoneRule::Reference.longitude_offset(lon, 1), lon.to_radians() + 183.);
        assert!((ZoneRule::Standard.longitude_offset(lon, 50) - 2.3169481_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn standard_offset_wraps_antimeridian() {
        let east = ZoneRule::Standard.longitude_offset(180., ZoneRule::Standard.zone(180.));
        let west = ZoneRule::Standard.longitude_offset(-180., ZoneRule::Standard.zone(-180.));
        assert_eq!(east, west);
        assert!((east - (-3_f64).to_radians()).abs() < 1e-15);
    }

    #[test]
    fn central_meridians() {
        assert_eq!(ZoneRule::Reference.central_meridian(1), -183.);
        assert_eq!(ZoneRule::Legacy.central_meridian(1), -183.);
        assert_eq!(ZoneRule::Legacy.central_meridian(2), -177.);
        assert_eq!(ZoneRule::Standard.central_meridian(1), -177.);
        assert_eq!(ZoneRule::Standard.central_meridian(31), 3.);
        assert_eq!(ZoneRule::Standard.central_meridian(60), 177.);
    }
}
