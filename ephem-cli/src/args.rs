use clap::ValueEnum;
use ephemeris::julian::julian_date;
use ephemeris::query::DisplayUnits;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parse an instant given as a Julian Date ("2451545.0"), an RFC 3339
/// timestamp ("2024-06-01T12:00:00Z") or a calendar date ("2024-06-01",
/// midnight UTC)
fn parse_instant(s: &str) -> Result<f64, String> {
    let s = s.trim();

    if let Ok(jd) = s.parse::<f64>() {
        if !jd.is_finite() {
            return Err(format!("Invalid Julian Date: {}", s));
        }
        return Ok(jd);
    }

    if let Ok(datetime) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(julian_date(datetime));
    }

    let date = Date::parse(s, format_description!("[year]-[month]-[day]")).map_err(|_| {
        format!(
            "Invalid date '{}': expected a Julian Date, YYYY-MM-DD or an RFC 3339 timestamp",
            s
        )
    })?;
    Ok(julian_date(date.midnight().assume_utc()))
}

/// Instant on the command line, stored as a Julian Date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantArg(pub f64);

impl std::str::FromStr for InstantArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instant(s).map(InstantArg)
    }
}

impl std::fmt::Display for InstantArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.5}", self.0)
    }
}

/// Output units for positions and velocities
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    /// Meters and m/s
    Meters,
    /// Astronomical units and AU/day
    Au,
}

impl std::fmt::Display for UnitsArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitsArg::Meters => write!(f, "meters"),
            UnitsArg::Au => write!(f, "au"),
        }
    }
}

impl From<UnitsArg> for DisplayUnits {
    fn from(units: UnitsArg) -> Self {
        match units {
            UnitsArg::Meters => DisplayUnits::Meters,
            UnitsArg::Au => DisplayUnits::AstronomicalUnits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ephemeris::constants::J2000;

    #[test]
    fn test_parse_julian_date() {
        assert_eq!("2451545.0".parse::<InstantArg>().unwrap().0, J2000);
        assert_eq!(" 2460000.5 ".parse::<InstantArg>().unwrap().0, 2_460_000.5);
        assert!("NaN".parse::<InstantArg>().is_err());
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!("2000-01-01".parse::<InstantArg>().unwrap().0, 2_451_544.5);
        assert_eq!(
            "2000-01-01T12:00:00Z".parse::<InstantArg>().unwrap().0,
            J2000
        );
        assert_eq!(
            "2000-01-01T14:00:00+02:00".parse::<InstantArg>().unwrap().0,
            J2000
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "next tuesday".parse::<InstantArg>().unwrap_err();
        assert!(err.contains("next tuesday"));
        assert!("2000-13-01".parse::<InstantArg>().is_err());
    }

    #[test]
    fn test_units_map_to_display_units() {
        assert_eq!(DisplayUnits::from(UnitsArg::Au), DisplayUnits::AstronomicalUnits);
        assert_eq!(DisplayUnits::from(UnitsArg::Meters), DisplayUnits::Meters);
        assert_eq!(UnitsArg::Au.to_string(), "au");
    }
}
