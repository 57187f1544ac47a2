//! Approximate sunrise/sunset algorithm.
//!
//! Implements the classic hour-angle formula from the *Almanac for Computers* (1990,
//! Nautical Almanac Office, U.S. Naval Observatory): the sun's mean anomaly, true
//! longitude, right ascension and declination are estimated for a first-guess time of
//! 06:00 (sunrise) or 18:00 (sunset) local mean time, and the hour angle at which the sun
//! reaches the requested zenith angle gives the event time.
//!
//! Accuracy is in the order of a minute for mid latitudes. Refraction is only accounted
//! for through the fixed 0.8333° in [`BASE_ZENITH`](crate::BASE_ZENITH).

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::unreadable_literal)]

use crate::error::check_zenith_angle;
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, sin, tan,
};
use crate::time::CalendarDate;
use crate::{
    BASE_ZENITH, Error, EventResult, Horizon, HoursUtc, Location, Result, SolarEvent, SunTimes,
};

#[cfg(feature = "chrono")]
use crate::time::Clock;
#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Sun's mean motion in degrees per day.
const MEAN_MOTION: f64 = 0.9856;

/// Mean anomaly at day 0 of the formula's time scale, in degrees.
const MEAN_ANOMALY_EPOCH: f64 = 3.289;

/// Longitude of perihelion plus 180°, in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// cos(ε) for the obliquity of the ecliptic ε ≈ 23.44°.
const COS_OBLIQUITY: f64 = 0.91764;

/// sin(ε) for the obliquity of the ecliptic ε ≈ 23.44°.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Sidereal correction applied to the approximate time, in hours per day.
const SIDEREAL_RATE: f64 = 0.06571;

/// Offset converting to local mean time, in hours.
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Computes the UTC time of day at which the sun crosses `zenith_angle` on `date`.
///
/// This is the pure core of the crate: no state, no clock, no time zone. Times are
/// hours since midnight UTC of `date`, wrapped into [0, 24); an event that belongs to the
/// neighbouring UTC day is reported at its time of day regardless.
///
/// # Arguments
/// * `location` - Observer location
/// * `date` - Calendar date (day-of-year drives the sun's orbital position)
/// * `zenith_angle` - Absolute zenith angle in degrees (90.8333 for standard sunrise/sunset)
/// * `event` - Sunrise or sunset
///
/// # Returns
/// `EventResult::Occurs` with the UTC time, or `AlwaysUp`/`AlwaysDown` when the sun does not
/// cross the zenith angle that day.
///
/// # Errors
/// Returns `InvalidZenithAngle` for a zenith outside 0 to 180 degrees, and `Computation`
/// if the hour angle cannot be evaluated.
///
/// # Example
/// ```
/// use suntime::{calculator, Location, SolarEvent, time::CalendarDate};
///
/// let madrid = Location::new(40.416775, -3.703790).unwrap();
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
///
/// let sunrise = calculator::compute(&madrid, date, 90.8333, SolarEvent::Sunrise).unwrap();
/// let hours = sunrise.time().unwrap().hours();
/// assert!((hours - 4.747).abs() < 1.0 / 60.0); // 04:45 UTC
/// ```
pub fn compute(
    location: &Location,
    date: CalendarDate,
    zenith_angle: f64,
    event: SolarEvent,
) -> Result<EventResult<HoursUtc>> {
    check_zenith_angle(zenith_angle)?;

    let lng_hour = location.longitude_hours();
    let t = approximate_time(date, lng_hour, event);

    let mean_anomaly = MEAN_MOTION * t - MEAN_ANOMALY_EPOCH;
    let true_longitude = sun_true_longitude(mean_anomaly);
    let right_ascension = sun_right_ascension_hours(true_longitude);
    let (sin_dec, cos_dec) = sun_declination(true_longitude);

    let cos_h = cos_local_hour_angle(location.latitude(), zenith_angle, sin_dec, cos_dec);
    if cos_h.is_nan() {
        return Err(Error::computation("cosine of the hour angle is not a number"));
    }
    if cos_h > 1.0 {
        return Ok(EventResult::AlwaysDown);
    }
    if cos_h < -1.0 {
        return Ok(EventResult::AlwaysUp);
    }

    let hour_angle = local_hour_angle_hours(cos_h, event);
    let local_mean_time = hour_angle + right_ascension - SIDEREAL_RATE * t - LOCAL_MEAN_TIME_OFFSET;

    Ok(EventResult::Occurs(HoursUtc::new(local_mean_time - lng_hour)))
}

/// Day-of-year plus the fraction of the day at which the event is first guessed.
fn approximate_time(date: CalendarDate, lng_hour: f64, event: SolarEvent) -> f64 {
    f64::from(date.day_of_year()) + (event.approximate_local_hour() - lng_hour) / 24.0
}

/// Sun's true longitude in degrees, [0, 360).
fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    normalize_degrees_0_to_360(
        mean_anomaly + 1.916 * sin(m) + 0.020 * sin(2.0 * m) + PERIHELION_LONGITUDE,
    )
}

/// Sun's right ascension in hours, placed in the same quadrant as the true longitude.
fn sun_right_ascension_hours(true_longitude: f64) -> f64 {
    let ra = normalize_degrees_0_to_360(radians_to_degrees(atan(
        COS_OBLIQUITY * tan(degrees_to_radians(true_longitude)),
    )));

    let l_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;

    (ra + l_quadrant - ra_quadrant) / 15.0
}

/// Sine and cosine of the sun's declination.
fn sun_declination(true_longitude: f64) -> (f64, f64) {
    let sin_dec = SIN_OBLIQUITY * sin(degrees_to_radians(true_longitude));
    (sin_dec, cos(asin(sin_dec)))
}

fn cos_local_hour_angle(latitude: f64, zenith_angle: f64, sin_dec: f64, cos_dec: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    (cos(degrees_to_radians(zenith_angle)) - sin_dec * sin(phi)) / (cos_dec * cos(phi))
}

/// Local hour angle in hours for a cosine already known to lie within [-1, 1].
fn local_hour_angle_hours(cos_h: f64, event: SolarEvent) -> f64 {
    let h = radians_to_degrees(acos(cos_h));
    let hour_angle = match event {
        SolarEvent::Sunrise => 360.0 - h,
        SolarEvent::Sunset => h,
    };
    hour_angle / 15.0
}

/// Sunrise/sunset calculator bound to one location.
///
/// Stateless apart from its configuration, `Copy`, and safe to share across threads.
///
/// # Example
/// ```
/// use suntime::{Horizon, SolarCalculator};
///
/// let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap(); // Madrid
///
/// let sunrise = calculator.sunrise_utc_ymd(2024, 6, 21, Horizon::SunriseSunset).unwrap();
/// let dawn = calculator.sunrise_utc_ymd(2024, 6, 21, Horizon::CivilTwilight).unwrap();
/// assert!(dawn.time().unwrap().hours() < sunrise.time().unwrap().hours());
///
/// assert!(calculator.sunrise_utc_ymd(2024, 2, 30, Horizon::SunriseSunset).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    location: Location,
    base_zenith: f64,
}

impl SolarCalculator {
    /// Creates a calculator for a latitude/longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self::from_location(Location::new(latitude, longitude)?))
    }

    /// Creates a calculator with a custom base zenith angle instead of [`BASE_ZENITH`].
    ///
    /// Horizon offsets are added to `base_zenith`; 90.8 reproduces the common
    /// rounded refraction value.
    ///
    /// # Errors
    /// Returns coordinate errors, or `InvalidZenithAngle` if `base_zenith` is outside
    /// 0 to 180 degrees.
    pub fn with_base_zenith(latitude: f64, longitude: f64, base_zenith: f64) -> Result<Self> {
        let location = Location::new(latitude, longitude)?;
        Ok(Self {
            location,
            base_zenith: check_zenith_angle(base_zenith)?,
        })
    }

    /// Creates a calculator for an already validated location.
    #[must_use]
    pub const fn from_location(location: Location) -> Self {
        Self {
            location,
            base_zenith: BASE_ZENITH,
        }
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Gets the base zenith angle that horizon offsets are added to.
    #[must_use]
    pub const fn base_zenith(&self) -> f64 {
        self.base_zenith
    }

    /// Computes sunrise or sunset for `date` as hours since midnight UTC.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the horizon offset pushes the zenith out of range.
    pub fn event_time_utc(
        &self,
        date: CalendarDate,
        horizon: Horizon,
        event: SolarEvent,
    ) -> Result<EventResult<HoursUtc>> {
        compute(
            &self.location,
            date,
            horizon.zenith_angle_from(self.base_zenith),
            event,
        )
    }

    /// Computes the sunrise (or dawn, for twilight horizons) in UTC hours.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the horizon offset pushes the zenith out of range.
    pub fn sunrise_time_utc(
        &self,
        date: CalendarDate,
        horizon: Horizon,
    ) -> Result<EventResult<HoursUtc>> {
        self.event_time_utc(date, horizon, SolarEvent::Sunrise)
    }

    /// Computes the sunset (or dusk, for twilight horizons) in UTC hours.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the horizon offset pushes the zenith out of range.
    pub fn sunset_time_utc(
        &self,
        date: CalendarDate,
        horizon: Horizon,
    ) -> Result<EventResult<HoursUtc>> {
        self.event_time_utc(date, horizon, SolarEvent::Sunset)
    }

    /// Computes both sunrise and sunset for `date` in UTC hours.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the horizon offset pushes the zenith out of range.
    pub fn sun_times_utc(&self, date: CalendarDate, horizon: Horizon) -> Result<SunTimes> {
        Ok(SunTimes {
            sunrise: self.sunrise_time_utc(date, horizon)?,
            sunset: self.sunset_time_utc(date, horizon)?,
        })
    }

    /// Computes the sunrise from raw year/month/day components.
    ///
    /// # Errors
    /// Returns `InvalidDate` for a non-existent date.
    pub fn sunrise_utc_ymd(
        &self,
        year: i32,
        month: u32,
        day: u32,
        horizon: Horizon,
    ) -> Result<EventResult<HoursUtc>> {
        self.sunrise_time_utc(CalendarDate::new(year, month, day)?, horizon)
    }

    /// Computes the sunset from raw year/month/day components.
    ///
    /// # Errors
    /// Returns `InvalidDate` for a non-existent date.
    pub fn sunset_utc_ymd(
        &self,
        year: i32,
        month: u32,
        day: u32,
        horizon: Horizon,
    ) -> Result<EventResult<HoursUtc>> {
        self.sunset_time_utc(CalendarDate::new(year, month, day)?, horizon)
    }

    /// Computes sunrise or sunset as a UTC timestamp on the UTC calendar day `date`.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` for an out-of-range horizon, or `InvalidDate` if the
    /// timestamp cannot be represented.
    #[cfg(feature = "chrono")]
    pub fn event_utc(
        &self,
        date: NaiveDate,
        horizon: Horizon,
        event: SolarEvent,
    ) -> Result<EventResult<DateTime<Utc>>> {
        match self.event_time_utc(CalendarDate::from(date), horizon, event)? {
            EventResult::Occurs(hours) => Ok(EventResult::Occurs(utc_instant(date, hours)?)),
            EventResult::AlwaysUp => Ok(EventResult::AlwaysUp),
            EventResult::AlwaysDown => Ok(EventResult::AlwaysDown),
        }
    }

    /// Computes the sunrise as a UTC timestamp.
    ///
    /// # Errors
    /// See [`event_utc`](Self::event_utc).
    ///
    /// # Example
    /// ```
    /// use chrono::{NaiveDate, Timelike};
    /// use suntime::{Horizon, SolarCalculator};
    ///
    /// let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let sunrise = calculator.sunrise_utc(date, Horizon::SunriseSunset).unwrap();
    ///
    /// let sunrise = sunrise.time().unwrap();
    /// assert_eq!((sunrise.hour(), sunrise.minute()), (4, 44));
    /// ```
    #[cfg(feature = "chrono")]
    pub fn sunrise_utc(
        &self,
        date: NaiveDate,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Utc>>> {
        self.event_utc(date, horizon, SolarEvent::Sunrise)
    }

    /// Computes the sunset as a UTC timestamp.
    ///
    /// # Errors
    /// See [`event_utc`](Self::event_utc).
    #[cfg(feature = "chrono")]
    pub fn sunset_utc(
        &self,
        date: NaiveDate,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Utc>>> {
        self.event_utc(date, horizon, SolarEvent::Sunset)
    }

    /// Computes sunrise or sunset on the local calendar day `date` in time zone `tz`.
    ///
    /// The formula yields a time of day wrapped into [0, 24) UTC, so the UTC day the event
    /// belongs to is ambiguous near midnight. The time computed for the UTC day `date` is
    /// tried on that day and on both neighbouring UTC days; if none of these instants falls
    /// on `date` in `tz`, the calculation is repeated for the previous and next UTC days.
    /// The first instant that lies on `date` locally is returned.
    ///
    /// If no candidate lands on `date` (the local day has no such crossing), the time
    /// computed for the UTC day `date` is returned on that UTC day.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` for an out-of-range horizon, or `InvalidDate` at the
    /// edges of chrono's date range.
    ///
    /// # Example
    /// ```
    /// use chrono::{FixedOffset, NaiveDate};
    /// use suntime::{Horizon, SolarCalculator, SolarEvent};
    ///
    /// let sydney = SolarCalculator::new(-33.8688, 151.2093).unwrap();
    /// let aedt = FixedOffset::east_opt(11 * 3600).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    ///
    /// let sunrise = sydney
    ///     .local_event(date, &aedt, Horizon::SunriseSunset, SolarEvent::Sunrise)
    ///     .unwrap();
    /// assert_eq!(sunrise.time().unwrap().date_naive(), date);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn local_event<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
        horizon: Horizon,
        event: SolarEvent,
    ) -> Result<EventResult<DateTime<Tz>>> {
        let hours = match self.event_time_utc(CalendarDate::from(date), horizon, event)? {
            EventResult::Occurs(hours) => hours,
            EventResult::AlwaysUp => return Ok(EventResult::AlwaysUp),
            EventResult::AlwaysDown => return Ok(EventResult::AlwaysDown),
        };
        if let Some(instant) = instant_on_local_date(date, hours, date, tz)? {
            return Ok(EventResult::Occurs(instant));
        }

        for neighbour in [date.pred_opt(), date.succ_opt()].into_iter().flatten() {
            let computed = self.event_time_utc(CalendarDate::from(neighbour), horizon, event)?;
            let EventResult::Occurs(neighbour_hours) = computed else {
                continue;
            };
            if let Some(instant) = instant_on_local_date(neighbour, neighbour_hours, date, tz)? {
                return Ok(EventResult::Occurs(instant));
            }
        }

        Ok(EventResult::Occurs(utc_instant(date, hours)?.with_timezone(tz)))
    }

    /// Computes the sunrise on the local calendar day `date` in time zone `tz`.
    ///
    /// # Errors
    /// See [`local_event`](Self::local_event).
    #[cfg(feature = "chrono")]
    pub fn local_sunrise<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Tz>>> {
        self.local_event(date, tz, horizon, SolarEvent::Sunrise)
    }

    /// Computes the sunset on the local calendar day `date` in time zone `tz`.
    ///
    /// # Errors
    /// See [`local_event`](Self::local_event).
    #[cfg(feature = "chrono")]
    pub fn local_sunset<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Tz>>> {
        self.local_event(date, tz, horizon, SolarEvent::Sunset)
    }

    /// Computes sunrise and sunset on the local calendar day `date` in time zone `tz`.
    ///
    /// # Errors
    /// See [`local_event`](Self::local_event).
    #[cfg(feature = "chrono")]
    pub fn local_sun_times<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
        horizon: Horizon,
    ) -> Result<SunTimes<DateTime<Tz>>> {
        Ok(SunTimes {
            sunrise: self.local_sunrise(date, tz, horizon)?,
            sunset: self.local_sunset(date, tz, horizon)?,
        })
    }

    /// Computes today's sunrise in `tz`, with "today" taken from `clock`.
    ///
    /// # Errors
    /// See [`local_event`](Self::local_event).
    #[cfg(feature = "chrono")]
    pub fn local_sunrise_today<C: Clock + ?Sized, Tz: TimeZone>(
        &self,
        clock: &C,
        tz: &Tz,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Tz>>> {
        self.local_sunrise(today(clock, tz), tz, horizon)
    }

    /// Computes today's sunset in `tz`, with "today" taken from `clock`.
    ///
    /// # Errors
    /// See [`local_event`](Self::local_event).
    #[cfg(feature = "chrono")]
    pub fn local_sunset_today<C: Clock + ?Sized, Tz: TimeZone>(
        &self,
        clock: &C,
        tz: &Tz,
        horizon: Horizon,
    ) -> Result<EventResult<DateTime<Tz>>> {
        self.local_sunset(today(clock, tz), tz, horizon)
    }
}

#[cfg(feature = "chrono")]
fn today<C: Clock + ?Sized, Tz: TimeZone>(clock: &C, tz: &Tz) -> NaiveDate {
    clock.now().with_timezone(tz).date_naive()
}

/// Places `hours` computed for `utc_date` on that UTC day or an adjacent one, returning
/// the first instant that falls on `local_date` in `tz`.
#[cfg(feature = "chrono")]
fn instant_on_local_date<Tz: TimeZone>(
    utc_date: NaiveDate,
    hours: HoursUtc,
    local_date: NaiveDate,
    tz: &Tz,
) -> Result<Option<DateTime<Tz>>> {
    for day in [Some(utc_date), utc_date.pred_opt(), utc_date.succ_opt()]
        .into_iter()
        .flatten()
    {
        let instant = utc_instant(day, hours)?.with_timezone(tz);
        if instant.date_naive() == local_date {
            return Ok(Some(instant));
        }
    }
    Ok(None)
}

#[cfg(feature = "chrono")]
fn utc_instant(date: NaiveDate, hours: HoursUtc) -> Result<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(chrono::Duration::milliseconds(hours.milliseconds()))
        .ok_or_else(|| Error::invalid_date("event time is outside the supported chrono range"))
}
