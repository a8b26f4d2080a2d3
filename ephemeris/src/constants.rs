//! Physical constants and unit conversions shared by the catalog and its consumers.

/// Seconds in one day of Julian Date
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// IAU 2012 astronomical unit in meters
pub const AU_METERS: f64 = 149_597_870_700.0;

/// Heliocentric gravitational constant GM☉ (m³/s²)
pub const SUN_GM: f64 = 1.327_124_400_18e20;

/// Convert a distance in meters to astronomical units of `au_meters` each
pub fn meters_to_au(meters: f64, au_meters: f64) -> f64 {
    meters / au_meters
}

/// Convert a speed in m/s to AU/day, with an AU of `au_meters`
pub fn mps_to_au_per_day(meters_per_second: f64, au_meters: f64) -> f64 {
    meters_per_second * SECONDS_PER_DAY / au_meters
}
