//! # Sunrise and sunset times
//!
//! Approximate sunrise, sunset and twilight times for any location and date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation follows the classic hour-angle formula published in the *Almanac for
//! Computers*: a handful of closed-form trigonometric steps estimate where the sun is on
//! a given day and when it crosses a chosen zenith angle. Accuracy is about a minute at
//! mid latitudes, which is plenty for scheduling, lighting and photography use cases; use a
//! full ephemeris (e.g. NREL SPA) if you need more.
//!
//! ## Features
//!
//! - Sunrise/sunset plus civil, nautical and astronomical twilight, or any custom offset
//! - Polar day and polar night reported as results ([`EventResult::AlwaysUp`],
//!   [`EventResult::AlwaysDown`]) rather than errors
//! - Pure core: no hidden clock or time-zone reads; "today" comes from a [`time::Clock`]
//! - Thread-safe: stateless, `Copy` data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable UTC and time-zone aware `DateTime` results
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! suntime = "0.1"
//!
//! # no_std, numeric API only
//! suntime = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Fractional UTC hours (no chrono)
//! ```rust
//! use suntime::{EventResult, Horizon, SolarCalculator};
//!
//! // Madrid
//! let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap();
//!
//! match calculator.sunrise_utc_ymd(2024, 6, 21, Horizon::SunriseSunset).unwrap() {
//!     EventResult::Occurs(time) => {
//!         let (hour, minute, _) = time.hms();
//!         assert_eq!((hour, minute), (4, 44));
//!     }
//!     EventResult::AlwaysUp => println!("Sun never sets"),
//!     EventResult::AlwaysDown => println!("Sun never rises"),
//! }
//! ```
//!
//! ### Local time (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{FixedOffset, NaiveDate, Timelike};
//! use suntime::{Horizon, SolarCalculator};
//!
//! let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap();
//! let cest = FixedOffset::east_opt(2 * 3600).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//!
//! let sunset = calculator.local_sunset(date, &cest, Horizon::SunriseSunset).unwrap();
//! let sunset = sunset.time().unwrap();
//! assert_eq!((sunset.hour(), sunset.minute()), (21, 48));
//!
//! let dusk = calculator.local_sunset(date, &cest, Horizon::CivilTwilight).unwrap();
//! assert!(dusk.time().unwrap() > sunset);
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north (-90° to +90°)
//! - **Longitude**: degrees, positive east (-180° to +180°)
//! - **Zenith angle**: 0° = directly overhead, 90° = geometric horizon; standard sunrise
//!   uses 90.8333° to allow for refraction and the solar disk's radius

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of formula constants in tests
)]

// Public API exports
pub use crate::calculator::{SolarCalculator, compute};
pub use crate::error::{Error, Result};
pub use crate::types::{
    ASTRONOMICAL, BASE_ZENITH, CIVIL, EventResult, HORIZON, Horizon, HoursUtc, Location,
    NAUTICAL, SolarEvent, SunTimes,
};

// Algorithm module
pub mod calculator;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_local_and_utc_agree_on_the_instant() {
        let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();

        let utc = calculator
            .sunrise_utc(date, Horizon::SunriseSunset)
            .unwrap();
        let local = calculator
            .local_sunrise(date, &cest, Horizon::SunriseSunset)
            .unwrap();

        let utc = *utc.time().unwrap();
        let local = *local.time().unwrap();
        assert_eq!(utc, local.with_timezone(&Utc));
        assert_eq!(local.offset(), &cest);
    }

    #[test]
    fn test_utc_timestamp_matches_fractional_hours() {
        let calculator = SolarCalculator::new(51.5074, -0.1278).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let hours = calculator
            .sunset_utc_ymd(2024, 1, 15, Horizon::NauticalTwilight)
            .unwrap();
        let instant = calculator
            .sunset_utc(date, Horizon::NauticalTwilight)
            .unwrap();

        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let elapsed = instant.time().unwrap().signed_duration_since(midnight);
        let expected_ms = hours.time().unwrap().milliseconds();
        assert_eq!(elapsed.num_milliseconds(), expected_ms);
    }
}
