//! Twilight times for the named horizons and a custom offset.

use chrono::NaiveDate;
use chrono_tz::Europe;
use suntime::{EventResult, Horizon, SolarCalculator};

fn describe<T: std::fmt::Display>(result: &EventResult<T>) -> String {
    match result {
        EventResult::Occurs(time) => time.to_string(),
        EventResult::AlwaysUp => "never (sun above)".to_string(),
        EventResult::AlwaysDown => "never (sun below)".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tromso = SolarCalculator::new(69.6492, 18.9553)?;
    let date = NaiveDate::from_ymd_opt(2024, 12, 21).ok_or("invalid date")?;

    println!("Tromsø, December 21, 2024 (Europe/Oslo):");
    for horizon in Horizon::PRESETS.into_iter().chain([Horizon::custom(3.0)?]) {
        let times = tromso.local_sun_times(date, &Europe::Oslo, horizon)?;
        println!(
            "  {:<22} dawn: {:<32} dusk: {}",
            format!("{horizon:?}"),
            describe(&times.sunrise),
            describe(&times.sunset)
        );
    }

    Ok(())
}
