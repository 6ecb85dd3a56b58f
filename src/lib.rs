#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Projects WGS84 latitude/longitude onto the Universal Transverse Mercator
//! grid.
//!
//! ```
//! let utm = utmconvert::project(42.3309794, 119.3169481);
//!
//! assert_eq!(utm.zone(), 1);
//! assert!(utm.easting().is_finite());
//! assert!(utm.northing().is_finite());
//! ```

use thiserror::Error;

pub mod ellipsoid;
pub mod latlon;
pub mod utm;
pub mod zone;
pub(crate) mod utility;

pub use ellipsoid::{Ellipsoid, WGS84};
pub use latlon::LatLon;
pub use utm::Utm;
pub use zone::ZoneRule;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("Coordinate string is invalid: {0}")]
    ParseCoord(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Projects `lat`/`lon` (decimal degrees) to UTM with the default
/// [`ZoneRule::Legacy`] zoning.
///
/// Input is not validated. Out-of-range, polar or anti-meridian input is
/// projected as-is and may give meaningless (but never panicking) output; use
/// [`try_project`] to reject it instead.
pub fn project(lat: f64, lon: f64) -> Utm {
    Utm::from_latlon(&LatLon::new(lat, lon))
}

/// Same as [`project`] but with an explicit [`ZoneRule`].
///
/// ```
/// use utmconvert::{project_with, ZoneRule};
///
/// let utm = project_with(42.3309794, 119.3169481, ZoneRule::Standard);
/// assert_eq!(utm.zone(), 50);
/// assert!((utm.easting() - 690_891.494).abs() < 1e-3);
/// assert!((utm.northing() - 4_689_125.449).abs() < 1e-3);
/// ```
pub fn project_with(lat: f64, lon: f64, rule: ZoneRule) -> Utm {
    Utm::from_latlon_with(&LatLon::new(lat, lon), rule)
}

/// Validating variant of [`project`].
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if latitude is outside `[-90, 90]`,
/// longitude is outside `[-180, 180]`, or either is NaN/infinite.
///
/// ```
/// use utmconvert::{try_project, Error};
///
/// assert!(try_project(42.3309794, 119.3169481).is_ok());
/// assert!(matches!(try_project(91.0, 0.0), Err(Error::InvalidCoord(_))));
/// ```
pub fn try_project(lat: f64, lon: f64) -> Result<Utm, Error> {
    let coord = LatLon::create(lat, lon).map_err(|err| {
        tracing::debug!(lat, lon, "rejected: {err}");
        err
    })?;

    Ok(coord.to_utm())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
