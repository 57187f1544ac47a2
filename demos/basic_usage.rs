//! Basic sunrise/sunset calculation example.

use chrono::{FixedOffset, NaiveDate};
use suntime::{EventResult, Horizon, SolarCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = SolarCalculator::new(37.7749, -122.4194)?; // San Francisco
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;

    // UTC instants on the UTC day
    let times = calculator.sun_times_utc(date.into(), Horizon::SunriseSunset)?;
    println!("San Francisco, June 21, 2024 (UTC hours):");
    println!("  Sunrise: {:?}", times.sunrise.time().map(|t| t.hms()));
    println!("  Sunset:  {:?}", times.sunset.time().map(|t| t.hms()));

    // Local wall-clock times on the local day (PDT)
    let pdt = FixedOffset::west_opt(7 * 3600).ok_or("invalid offset")?;
    let local = calculator.local_sun_times(date, &pdt, Horizon::SunriseSunset)?;

    println!("\nSame day in local time (UTC-07:00):");
    for (name, result) in [("Sunrise", local.sunrise), ("Sunset", local.sunset)] {
        match result {
            EventResult::Occurs(time) => println!("  {name}: {}", time.format("%Y-%m-%d %H:%M")),
            EventResult::AlwaysUp => println!("  {name}: sun stays up all day"),
            EventResult::AlwaysDown => println!("  {name}: sun stays down all day"),
        }
    }

    // Polar regions produce sentinel results instead of times
    let svalbard = SolarCalculator::new(78.2232, 15.6267)?;
    let winter = svalbard.sunrise_time_utc(
        NaiveDate::from_ymd_opt(2024, 12, 21).ok_or("invalid date")?.into(),
        Horizon::SunriseSunset,
    )?;
    println!("\nSvalbard, December 21: polar night = {}", winter.is_polar_night());

    Ok(())
}
