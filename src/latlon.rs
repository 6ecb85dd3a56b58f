use std::fmt::Display;

use crate::{Error, ParseCoord, utm::Utm, zone::ZoneRule};

/// Representation of a WGS84 Latitude/Longitude point in decimal degrees.
/// Can be projected to [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a point without checking the bounds of lat/lon. Projecting an
    /// out-of-range point is allowed and yields whatever the series produces.
    pub fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// NaN and infinite values are never valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(42.3309794, 119.3169481);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 42.3309794);
    /// assert_eq!(coord.longitude(), 119.3169481);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    ///
    /// let invalid_coord_nan = LatLon::create(f64::NAN, 0.0);
    /// assert!(invalid_coord_nan.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is north of the equator. The
    /// equator itself counts as north, and so does anything that is not
    /// below it (`-0.0`, NaN). This decides the false northing in [`Utm`].
    ///
    /// # Example
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// assert!(LatLon::new(42.3309794, 119.3169481).is_north());
    /// assert!(LatLon::new(0.0, 0.0).is_north());
    /// assert!(!LatLon::new(-42.3309794, 119.3169481).is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        !self.is_south()
    }

    fn is_south(&self) -> bool {
        self.latitude < 0.
    }

    /// Projects to [`Utm`] using the default [`ZoneRule::Legacy`] zoning.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(42.3309794, 119.3169481).unwrap();
    /// let converted = coord.to_utm();
    ///
    /// assert_eq!(converted.zone(), 1);
    /// assert!(converted.is_north());
    /// ```
    pub fn to_utm(&self) -> Utm {
        Utm::from_latlon(self)
    }

    /// Projects to [`Utm`] using the given [`ZoneRule`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, ZoneRule};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let converted = coord.to_utm_with(ZoneRule::Standard);
    ///
    /// assert_eq!(converted.zone(), 18);
    /// // Accurate to the millimeter against GeographicLib
    /// assert!((converted.easting() - 585664.121).abs() < 1e-3);
    /// assert!((converted.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn to_utm_with(&self, rule: ZoneRule) -> Utm {
        Utm::from_latlon_with(self, rule)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"` or `"<lat>,<lon>"`, then checks the range as
    /// [`LatLon::create`] does.
    fn parse_coord(value: &str) -> Result<LatLon, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let (Some(lat), Some(lon), None) = (pieces.next(), pieces.next(), pieces.next()) else {
            return Err(Error::ParseCoord(format!("Expected \"<lat> <lon>\", got \"{value}\"")));
        };

        let lat = lat
            .parse::<f64>()
            .map_err(|err| Error::ParseCoord(format!("Latitude \"{lat}\": {err}")))?;
        let lon = lon
            .parse::<f64>()
            .map_err(|err| Error::ParseCoord(format!("Longitude \"{lon}\": {err}")))?;

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
