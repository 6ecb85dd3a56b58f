// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F_INV: f64 = 298.257223563;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

/// Width of a UTM zone in degrees
pub(crate) const ZONE_WIDTH: f64 = 6.;
/// Longitude, in degrees, the zone numbering counts from
pub(crate) const ZONE_ORIGIN: f64 = -183.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
/// Added to the northing of points south of the equator
pub(crate) const FALSE_NORTHING_SOUTH: f64 = 10_000_000.;
