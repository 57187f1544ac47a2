//! Sunrise/sunset times checked against values derived from the formula itself.
//!
//! Reference values were produced with an independent evaluation of the same
//! approximate algorithm in double precision; results must agree within a minute.

use suntime::{EventResult, Horizon, SolarCalculator, time::CalendarDate};

const ONE_MINUTE: f64 = 1.0 / 60.0;

struct Case {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    date: (i32, u32, u32),
    horizon: Horizon,
    sunrise: f64,
    sunset: f64,
}

const CASES: &[Case] = &[
    Case {
        name: "Madrid, June solstice",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 6, 21),
        horizon: Horizon::SunriseSunset,
        sunrise: 4.747058,
        sunset: 19.809680,
    },
    Case {
        name: "Madrid, June solstice, civil",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 6, 21),
        horizon: Horizon::CivilTwilight,
        sunrise: 4.100634,
        sunset: 20.456071,
    },
    Case {
        name: "Madrid, June solstice, nautical",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 6, 21),
        horizon: Horizon::NauticalTwilight,
        sunrise: 3.383578,
        sunset: 21.173075,
    },
    Case {
        name: "Madrid, June solstice, astronomical",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 6, 21),
        horizon: Horizon::AstronomicalTwilight,
        sunrise: 2.528208,
        sunset: 22.028335,
    },
    Case {
        name: "Madrid, December solstice",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 12, 21),
        horizon: Horizon::SunriseSunset,
        sunrise: 7.579071,
        sunset: 16.864474,
    },
    Case {
        name: "Madrid, March equinox",
        latitude: 40.416775,
        longitude: -3.703790,
        date: (2024, 3, 20),
        horizon: Horizon::SunriseSunset,
        sunrise: 6.290264,
        sunset: 18.459241,
    },
    Case {
        name: "London, January",
        latitude: 51.5074,
        longitude: -0.1278,
        date: (2024, 1, 15),
        horizon: Horizon::SunriseSunset,
        sunrise: 7.998996,
        sunset: 16.342569,
    },
    Case {
        name: "London, January, astronomical",
        latitude: 51.5074,
        longitude: -0.1278,
        date: (2024, 1, 15),
        horizon: Horizon::AstronomicalTwilight,
        sunrise: 5.900226,
        sunset: 18.438985,
    },
    // Sunrise belongs to the previous UTC evening, sunset to the UTC morning.
    Case {
        name: "Sydney, January",
        latitude: -33.8688,
        longitude: 151.2093,
        date: (2024, 1, 15),
        horizon: Horizon::SunriseSunset,
        sunrise: 18.989465,
        sunset: 9.154039,
    },
    Case {
        name: "San Francisco, June solstice",
        latitude: 37.7749,
        longitude: -122.4194,
        date: (2024, 6, 21),
        horizon: Horizon::SunriseSunset,
        sunrise: 12.802614,
        sunset: 3.585189,
    },
    Case {
        name: "Tromsø, December solstice, civil",
        latitude: 69.6492,
        longitude: 18.9553,
        date: (2024, 12, 21),
        horizon: Horizon::CivilTwilight,
        sunrise: 8.225834,
        sunset: 13.195697,
    },
];

fn occurs(result: EventResult, case: &Case, what: &str) -> f64 {
    match result {
        EventResult::Occurs(time) => time.hours(),
        other => panic!("{}: expected {what} to occur, got {other:?}", case.name),
    }
}

#[test]
fn reference_values_within_one_minute() {
    for case in CASES {
        let calculator = SolarCalculator::new(case.latitude, case.longitude).unwrap();
        let (year, month, day) = case.date;
        let date = CalendarDate::new(year, month, day).unwrap();

        let sunrise = occurs(
            calculator.sunrise_time_utc(date, case.horizon).unwrap(),
            case,
            "sunrise",
        );
        let sunset = occurs(
            calculator.sunset_time_utc(date, case.horizon).unwrap(),
            case,
            "sunset",
        );

        assert!(
            (sunrise - case.sunrise).abs() < ONE_MINUTE,
            "{}: sunrise {sunrise} vs expected {}",
            case.name,
            case.sunrise
        );
        assert!(
            (sunset - case.sunset).abs() < ONE_MINUTE,
            "{}: sunset {sunset} vs expected {}",
            case.name,
            case.sunset
        );
    }
}

#[test]
fn results_are_fractional_hours_of_one_day() {
    for case in CASES {
        let calculator = SolarCalculator::new(case.latitude, case.longitude).unwrap();
        let (year, month, day) = case.date;
        let times = calculator
            .sun_times_utc(CalendarDate::new(year, month, day).unwrap(), case.horizon)
            .unwrap();

        for result in [times.sunrise, times.sunset] {
            let hours = result.time().unwrap().hours();
            assert!((0.0..24.0).contains(&hours), "{}: {hours}", case.name);
        }
    }
}

#[test]
fn minute_rounding_matches_clock_reading() {
    // Madrid 2024-06-21: sunrise 04:44:49 UTC, sunset 19:48:35 UTC.
    let calculator = SolarCalculator::new(40.416775, -3.703790).unwrap();
    let date = CalendarDate::new(2024, 6, 21).unwrap();

    let sunrise = calculator
        .sunrise_time_utc(date, Horizon::SunriseSunset)
        .unwrap();
    let sunset = calculator
        .sunset_time_utc(date, Horizon::SunriseSunset)
        .unwrap();

    assert_eq!(sunrise.time().unwrap().rounded_to_minute(), (0, 4, 45));
    assert_eq!(sunset.time().unwrap().rounded_to_minute(), (0, 19, 49));
}
