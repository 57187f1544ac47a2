//! Core data types for sunrise/sunset calculations.

use crate::Result;
use crate::error::{check_coordinates, check_zenith_angle};
use crate::math::{floor, normalize_hours_0_to_24, round};

/// Zenith angle of the standard sunrise/sunset event in degrees.
///
/// 90° plus 0.8333° for standard atmospheric refraction and the radius of the solar disk.
pub const BASE_ZENITH: f64 = 90.8333;

/// Offset for standard sunrise/sunset (sun's upper limb on the horizon).
pub const HORIZON: f64 = 0.0;

/// Offset for civil twilight (sun 6° below the horizon).
pub const CIVIL: f64 = 6.0;

/// Offset for nautical twilight (sun 12° below the horizon).
pub const NAUTICAL: f64 = 12.0;

/// Offset for astronomical twilight (sun 18° below the horizon).
pub const ASTRONOMICAL: f64 = 18.0;

/// Observer position on Earth's surface.
///
/// # Example
/// ```
/// # use suntime::Location;
/// let madrid = Location::new(40.416775, -3.703790).unwrap();
/// assert_eq!(madrid.latitude(), 40.416775);
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Longitude expressed in hours east of Greenwich (15° per hour).
    #[must_use]
    pub fn longitude_hours(&self) -> f64 {
        self.longitude / 15.0
    }
}

/// Named zenith offsets selecting which "below horizon" crossing counts as the event.
///
/// Offsets are added to a base zenith angle ([`BASE_ZENITH`] unless the calculator was
/// built with a different one).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Standard sunrise/sunset (offset 0)
    #[default]
    SunriseSunset,
    /// Civil twilight (offset 6°)
    CivilTwilight,
    /// Nautical twilight (offset 12°)
    NauticalTwilight,
    /// Astronomical twilight (offset 18°)
    AstronomicalTwilight,
    /// Custom offset in degrees below the base zenith
    Custom(f64),
}

impl Horizon {
    /// All named twilight presets, from the horizon outwards.
    pub const PRESETS: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Gets the offset in degrees relative to the base zenith angle.
    #[must_use]
    pub const fn offset_degrees(&self) -> f64 {
        match self {
            Self::SunriseSunset => HORIZON,
            Self::CivilTwilight => CIVIL,
            Self::NauticalTwilight => NAUTICAL,
            Self::AstronomicalTwilight => ASTRONOMICAL,
            Self::Custom(offset) => *offset,
        }
    }

    /// Gets the absolute zenith angle for this horizon on top of [`BASE_ZENITH`].
    ///
    /// # Example
    /// ```
    /// # use suntime::Horizon;
    /// assert_eq!(Horizon::SunriseSunset.zenith_angle(), 90.8333);
    /// assert!((Horizon::CivilTwilight.zenith_angle() - 96.8333).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        self.zenith_angle_from(BASE_ZENITH)
    }

    /// Gets the absolute zenith angle for this horizon on top of `base_zenith`.
    #[must_use]
    pub fn zenith_angle_from(&self, base_zenith: f64) -> f64 {
        base_zenith + self.offset_degrees()
    }

    /// Creates a custom horizon `offset` degrees below the standard sunrise/sunset zenith.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the resulting zenith is outside 0 to 180 degrees.
    pub fn custom(offset: f64) -> Result<Self> {
        check_zenith_angle(BASE_ZENITH + offset)?;
        Ok(Self::Custom(offset))
    }
}

/// Which crossing of the zenith angle to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing, sun rising
    Sunrise,
    /// Evening crossing, sun setting
    Sunset,
}

impl SolarEvent {
    /// Local hour used as the first guess of when the event happens.
    #[must_use]
    pub const fn approximate_local_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;
const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Fractional hour of the day in UTC, always within [0, 24).
///
/// # Example
/// ```
/// # use suntime::HoursUtc;
/// let time = HoursUtc::new(25.5);
/// assert_eq!(time.hours(), 1.5);
///
/// let (hour, minute, second) = HoursUtc::new(6.755).hms();
/// assert_eq!((hour, minute), (6, 45));
/// assert!((second - 18.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc`, wrapping the value into [0, 24).
    #[must_use]
    pub fn new(hours: f64) -> Self {
        Self(normalize_hours_0_to_24(hours))
    }

    /// Gets the hours since midnight UTC.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into whole hours, whole minutes and fractional seconds.
    #[must_use]
    pub fn hms(&self) -> (u32, u32, f64) {
        let hour = floor(self.0);
        let minutes = (self.0 - hour) * 60.0;
        let minute = floor(minutes);
        let second = (minutes - minute) * 60.0;
        (hour as u32, minute as u32, second)
    }

    /// Rounds to the nearest minute.
    ///
    /// Returns `(day_offset, hour, minute)`; `day_offset` is 1 when rounding carried the
    /// time past midnight (23:59:45 becomes 00:00 of the next day) and 0 otherwise.
    ///
    /// # Example
    /// ```
    /// # use suntime::HoursUtc;
    /// assert_eq!(HoursUtc::new(4.747).rounded_to_minute(), (0, 4, 45));
    /// assert_eq!(HoursUtc::new(23.999).rounded_to_minute(), (1, 0, 0));
    /// ```
    #[must_use]
    pub fn rounded_to_minute(&self) -> (i32, u32, u32) {
        let total_minutes = round(self.0 * 60.0) as u32;
        if total_minutes >= 24 * 60 {
            (1, 0, total_minutes - 24 * 60)
        } else {
            (0, total_minutes / 60, total_minutes % 60)
        }
    }

    /// Milliseconds since midnight UTC, rounded to the nearest millisecond.
    ///
    /// Never reaches a full day: times within half a millisecond of midnight are clamped to
    /// 23:59:59.999 so they stay on the same UTC day.
    #[must_use]
    pub fn milliseconds(&self) -> i64 {
        (round(self.0 * MILLISECONDS_PER_HOUR) as i64).min(MILLISECONDS_PER_DAY - 1)
    }
}

/// Outcome of a single sunrise or sunset calculation.
///
/// Polar day and polar night are regular outcomes, not errors: callers branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult<T = HoursUtc> {
    /// The sun crosses the requested zenith angle at this time
    Occurs(T),
    /// The sun stays above the zenith angle all day (polar day, never sets)
    AlwaysUp,
    /// The sun stays below the zenith angle all day (polar night, never rises)
    AlwaysDown,
}

impl<T> EventResult<T> {
    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Consumes the result, returning the event time if the event occurs.
    pub fn into_time(self) -> Option<T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if the event occurs on this date.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Maps the event time, keeping polar outcomes unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventResult<U> {
        match self {
            Self::Occurs(time) => EventResult::Occurs(f(time)),
            Self::AlwaysUp => EventResult::AlwaysUp,
            Self::AlwaysDown => EventResult::AlwaysDown,
        }
    }
}

/// Sunrise and sunset for the same date and horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes<T = HoursUtc> {
    /// Sunrise (or dawn for twilight horizons)
    pub sunrise: EventResult<T>,
    /// Sunset (or dusk for twilight horizons)
    pub sunset: EventResult<T>,
}

impl SunTimes<HoursUtc> {
    /// Hours between sunrise and sunset.
    ///
    /// Polar day yields 24 and polar night 0. Returns `None` when only one of the two
    /// events occurs, which can happen on the first or last day of a polar period.
    #[must_use]
    pub fn daylight_hours(&self) -> Option<f64> {
        match (self.sunrise, self.sunset) {
            (EventResult::Occurs(rise), EventResult::Occurs(set)) => {
                Some(normalize_hours_0_to_24(set.hours() - rise.hours()))
            }
            (EventResult::AlwaysUp, EventResult::AlwaysUp) => Some(24.0),
            (EventResult::AlwaysDown, EventResult::AlwaysDown) => Some(0.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        let location = Location::new(40.416775, -3.703790).unwrap();
        assert_eq!(location.latitude(), 40.416775);
        assert_eq!(location.longitude(), -3.703790);
        assert!((location.longitude_hours() - -0.246_919_333).abs() < 1e-9);

        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.5, 0.0).is_err());
        assert!(Location::new(0.0, 180.5).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_horizon_offsets() {
        assert_eq!(Horizon::SunriseSunset.offset_degrees(), 0.0);
        assert_eq!(Horizon::CivilTwilight.offset_degrees(), 6.0);
        assert_eq!(Horizon::NauticalTwilight.offset_degrees(), 12.0);
        assert_eq!(Horizon::AstronomicalTwilight.offset_degrees(), 18.0);
        assert_eq!(Horizon::default(), Horizon::SunriseSunset);
    }

    #[test]
    fn test_horizon_zenith_angles() {
        assert_eq!(Horizon::SunriseSunset.zenith_angle(), BASE_ZENITH);
        assert_eq!(Horizon::NauticalTwilight.zenith_angle(), BASE_ZENITH + 12.0);
        assert!((Horizon::AstronomicalTwilight.zenith_angle_from(90.8) - 108.8).abs() < 1e-9);

        let custom = Horizon::custom(3.0).unwrap();
        assert_eq!(custom.zenith_angle(), BASE_ZENITH + 3.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
        assert!(Horizon::custom(f64::NAN).is_err());
    }

    #[test]
    fn test_presets_widen_outwards() {
        let zeniths = Horizon::PRESETS.map(|h| h.zenith_angle());
        assert!(zeniths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hours_utc_wraps() {
        assert_eq!(HoursUtc::new(12.25).hours(), 12.25);
        assert_eq!(HoursUtc::new(24.0).hours(), 0.0);
        assert_eq!(HoursUtc::new(-0.5).hours(), 23.5);
    }

    #[test]
    fn test_hours_utc_hms() {
        let (hour, minute, second) = HoursUtc::new(19.809_680_126).hms();
        assert_eq!(hour, 19);
        assert_eq!(minute, 48);
        assert!((second - 34.848).abs() < 0.01);
    }

    #[test]
    fn test_rounded_to_minute_carries_over_midnight() {
        assert_eq!(HoursUtc::new(12.0).rounded_to_minute(), (0, 12, 0));
        assert_eq!(HoursUtc::new(12.0 + 59.6 / 60.0).rounded_to_minute(), (0, 13, 0));
        assert_eq!(HoursUtc::new(23.0 + 59.7 / 60.0).rounded_to_minute(), (1, 0, 0));
    }

    #[test]
    fn test_milliseconds() {
        assert_eq!(HoursUtc::new(1.5).milliseconds(), 5_400_000);
        assert_eq!(HoursUtc::new(0.0).milliseconds(), 0);
    }

    #[test]
    fn test_milliseconds_stay_within_the_day() {
        assert_eq!(HoursUtc::new(24.0 - 1e-10).milliseconds(), 86_399_999);
        assert_eq!(HoursUtc::new(23.999_999_9).milliseconds(), 86_399_999);
        assert_eq!(HoursUtc::new(24.0 - 1.0 / 3600.0).milliseconds(), 86_399_000);
    }

    #[test]
    fn test_event_result_accessors() {
        let occurs = EventResult::Occurs(HoursUtc::new(6.0));
        assert!(occurs.occurs());
        assert!(!occurs.is_polar_day());
        assert_eq!(occurs.time(), Some(&HoursUtc::new(6.0)));
        assert_eq!(occurs.map(|h| h.hours() * 2.0), EventResult::Occurs(12.0));

        let up: EventResult = EventResult::AlwaysUp;
        assert!(up.is_polar_day());
        assert!(!up.occurs());
        assert_eq!(up.time(), None);
        assert_eq!(up.map(|h| h.hours()), EventResult::AlwaysUp);

        let down: EventResult = EventResult::AlwaysDown;
        assert!(down.is_polar_night());
        assert_eq!(down.into_time(), None);
    }

    #[test]
    fn test_daylight_hours() {
        let regular = SunTimes {
            sunrise: EventResult::Occurs(HoursUtc::new(4.75)),
            sunset: EventResult::Occurs(HoursUtc::new(19.8)),
        };
        assert!((regular.daylight_hours().unwrap() - 15.05).abs() < 1e-9);

        // Sunset falls on the next UTC day east of Greenwich.
        let wrapped = SunTimes {
            sunrise: EventResult::Occurs(HoursUtc::new(19.0)),
            sunset: EventResult::Occurs(HoursUtc::new(9.0)),
        };
        assert!((wrapped.daylight_hours().unwrap() - 14.0).abs() < 1e-9);

        let polar_day: SunTimes = SunTimes {
            sunrise: EventResult::AlwaysUp,
            sunset: EventResult::AlwaysUp,
        };
        assert_eq!(polar_day.daylight_hours(), Some(24.0));

        let polar_night: SunTimes = SunTimes {
            sunrise: EventResult::AlwaysDown,
            sunset: EventResult::AlwaysDown,
        };
        assert_eq!(polar_night.daylight_hours(), Some(0.0));

        let mixed = SunTimes {
            sunrise: EventResult::Occurs(HoursUtc::new(11.0)),
            sunset: EventResult::AlwaysDown,
        };
        assert_eq!(mixed.daylight_hours(), None);
    }
}
