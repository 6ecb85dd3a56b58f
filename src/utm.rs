use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING_SOUTH},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    zone::{zonespec, ZoneRule},
    Error, ThisOrThat,
};

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: zone number, easting and northing in meters. Points south of the
/// equator carry a false northing of 10,000,000 m.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north"))]
    pub(crate) northp: bool,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidUtmCoords`] if easting or northing is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Utm;
    ///
    /// let coord = Utm::create(50, true, 690891.494, 4689125.449);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 50);
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::create(0, true, 690891.494, 4689125.449).is_err());
    /// assert!(Utm::create(61, true, 690891.494, 4689125.449).is_err());
    /// assert!(Utm::create(50, true, f64::NAN, 4689125.449).is_err());
    /// ```
    pub fn create(zone: i32, northp: bool, easting: f64, northing: f64) -> Result<Utm, Error> {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        if !easting.is_finite() {
            return Err(Error::InvalidUtmCoords(format!("Easting {easting} is not finite")));
        }
        if !northing.is_finite() {
            return Err(Error::InvalidUtmCoords(format!("Northing {northing} is not finite")));
        }

        Ok(Self {
            zone,
            northp,
            easting,
            northing,
        })
    }

    /// Returns the UTM zone.
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns whether the coordinate is in the northern hemisphere, i.e.
    /// whether it was projected without the southern false northing.
    pub fn is_north(&self) -> bool {
        self.northp
    }

    /// Returns the UTM easting.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`] using [`ZoneRule::Legacy`].
    pub fn from_latlon(value: &LatLon) -> Utm {
        Utm::from_latlon_with(value, ZoneRule::Legacy)
    }

    /// Converts from [`LatLon`] to [`Utm`], choosing the zone and its central
    /// meridian with `rule`. Never fails; out-of-range or degenerate input
    /// produces whatever the series yields.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, Utm, ZoneRule};
    ///
    /// let coord = LatLon::new(-33.8568, 151.2153);
    /// let converted = Utm::from_latlon_with(&coord, ZoneRule::Standard);
    ///
    /// assert_eq!(converted.zone(), 56);
    /// assert!(!converted.is_north());
    /// assert!((converted.easting() - 334_900.570).abs() < 1e-3);
    /// assert!((converted.northing() - 6_252_288.753).abs() < 1e-3);
    /// ```
    pub fn from_latlon_with(value: &LatLon, rule: ZoneRule) -> Utm {
        let northp = value.is_north();
        let zone = rule.zone(value.longitude);
        let dlam = rule.longitude_offset(value.longitude, zone);

        let (mut x, mut y) = TransverseMercator::utm().from_latlon(dlam, value.latitude);

        x += FALSE_EASTING;
        y += northp.ternary(0., FALSE_NORTHING_SOUTH);

        tracing::trace!(?rule, zone, easting = x, northing = y, "projected {value}");

        Utm {
            zone,
            northp,
            easting: x,
            northing: y,
        }
    }

    /// Writes the three-line report printed by the `utmconvert` binary.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Utm;
    ///
    /// let coord = Utm::create(50, true, 690891.5, 4689125.25).unwrap();
    /// let mut out = Vec::new();
    /// coord.write_report(&mut out).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "UTM Zone: 50\nEasting: 690891.5 meters\nNorthing: 4689125.25 meters\n",
    /// );
    /// ```
    pub fn write_report<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "UTM Zone: {}", self.zone)?;
        writeln!(out, "Easting: {} meters", self.easting)?;
        writeln!(out, "Northing: {} meters", self.northing)
    }
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{}{} {easting} {northing}",
            self.zone,
            self.northp.ternary("n", "s"),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn false_northing_only_south() {
        let north = Utm::from_latlon_with(&LatLon::new(10., 3.), ZoneRule::Standard);
        let south = Utm::from_latlon_with(&LatLon::new(-10., 3.), ZoneRule::Standard);

        assert!(north.is_north());
        assert!(!south.is_north());
        assert_relative_eq!(north.easting(), 500_000., epsilon = 1e-6);
        assert_relative_eq!(south.easting(), 500_000., epsilon = 1e-6);
        assert_relative_eq!(south.northing(), FALSE_NORTHING_SOUTH - north.northing(), epsilon = 1e-6);
    }

    #[test]
    fn negative_zero_latitude_is_north() {
        let coord = Utm::from_latlon(&LatLon::new(-0.0, 0.));
        assert!(coord.is_north());
        assert_relative_eq!(coord.northing(), 0., epsilon = 1e-9);
    }

    #[test]
    fn display() {
        let coord = Utm::create(50, true, 690_891.5, 4_689_125.25).unwrap();
        assert_eq!(coord.to_string(), "50n 690891.5 4689125.25");

        let coord = Utm::create(1, false, 500_000., 2_046.0).unwrap();
        assert_eq!(coord.to_string(), "1s 500000.0 2046.0");
    }

    #[test]
    fn report_lines() {
        let coord = Utm::from_latlon(&LatLon::new(42.3309794, 119.3169481));
        let mut out = Vec::new();
        coord.write_report(&mut out).unwrap();
        let report = String::from_utf8(out).unwrap();
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "UTM Zone: 1");
        assert_eq!(lines[1], format!("Easting: {} meters", coord.easting()));
        assert_eq!(lines[2], format!("Northing: {} meters", coord.northing()));
        assert!(lines[1].starts_with("Easting: -413958983.74"));
        assert!(lines[2].starts_with("Northing: 670277922.00"));
    }

    #[test]
    fn create_rejects() {
        assert!(matches!(Utm::create(-3, true, 0., 0.), Err(Error::InvalidZone(-3))));
        assert!(matches!(Utm::create(3, true, 0., f64::INFINITY), Err(Error::InvalidUtmCoords(_))));
    }
}
