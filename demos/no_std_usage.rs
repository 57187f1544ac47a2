//! Example demonstrating usage without std/chrono dependencies.
//!
//! Only the numeric API is used: dates come in as year/month/day and results come back
//! as fractional hours since midnight UTC.
//!
//! Run with `cargo run --example no_std_usage --no-default-features --features libm`.

use suntime::{EventResult, Horizon, SolarCalculator};

fn main() {
    // Vienna: 48.21°N, 16.37°E
    let calculator = SolarCalculator::new(48.21, 16.37).expect("valid coordinates");

    println!("Sunrise/sunset without std/chrono dependencies\n");

    for horizon in Horizon::PRESETS {
        let sunrise = calculator
            .sunrise_utc_ymd(2024, 6, 21, horizon)
            .expect("valid date");
        let sunset = calculator
            .sunset_utc_ymd(2024, 6, 21, horizon)
            .expect("valid date");

        match (sunrise, sunset) {
            (EventResult::Occurs(rise), EventResult::Occurs(set)) => {
                let (rise_h, rise_m, _) = rise.hms();
                let (set_h, set_m, _) = set.hms();
                println!("{horizon:?}: {rise_h:02}:{rise_m:02} to {set_h:02}:{set_m:02} UTC");
            }
            (EventResult::AlwaysUp, _) | (_, EventResult::AlwaysUp) => {
                println!("{horizon:?}: sun never gets that low");
            }
            _ => println!("{horizon:?}: sun never gets that high"),
        }
    }

    // The raw formula is available as a free function
    let location = suntime::Location::new(48.21, 16.37).expect("valid coordinates");
    let date = suntime::time::CalendarDate::new(2024, 12, 21).expect("valid date");
    let result = suntime::compute(&location, date, 96.8333, suntime::SolarEvent::Sunrise)
        .expect("valid zenith");
    if let Some(time) = result.time() {
        println!("\nCivil dawn, December 21: {:.3} hours UTC", time.hours());
    }
}
