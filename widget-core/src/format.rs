//! Presentation formatters: pure, total functions turning raw weather data
//! into the widget's display sentences.

use chrono::{Local, Timelike};

/// Hour at which "during the day" flips to "at night".
const NIGHT_START_HOUR: u32 = 18;
/// Hour at which "at night" flips back to "during the day".
const NIGHT_END_HOUR: u32 = 6;

/// Banded message for Celsius temperatures; any other unit code falls back
/// to a bare `"{value}°{unit}"` reading.
pub fn temperature_message(value: f64, unit: char) -> String {
    if unit != 'C' {
        return format!("{value}°{unit}");
    }

    if value < 0.0 {
        format!("It's freezing at {value}°C! Bundle up!")
    } else if value < 10.0 {
        format!("It's quite cold at {value}°C. Wear warm clothes.")
    } else if value < 20.0 {
        format!("The temperature is {value}°C. Comfortable for a light jacket.")
    } else if value < 30.0 {
        format!("It's {value}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {value}°C. Stay hydrated!")
    }
}

/// Canned sentence for a known condition string; anything unrecognized is
/// echoed back verbatim. The lookup is case-sensitive.
pub fn condition_message(condition: &str) -> String {
    match condition {
        "sunny" => "It's a beautiful sunny day!",
        "partly cloudy" => "Expect some clouds and sunshine.",
        "cloudy" => "It's cloudy today.",
        "overcast" => "The sky is overcast.",
        "rain" => "Don't forget your umbrella! It's raining.",
        "thunderstorm" => "Thunderstorms are expected today.",
        "snow" => "Bundle up! It's snowing.",
        "mist" => "It's misty outside.",
        "fog" => "It's foggy! Be careful.",
        other => other,
    }
    .to_string()
}

/// Appends a day/night suffix to the location label for the given
/// wall-clock hour (0–23).
pub fn location_message(location: &str, hour: u32) -> String {
    let is_night = hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR;
    let suffix = if is_night { "at night" } else { "during the day" };
    format!("{location} {suffix}")
}

/// [`location_message`] with the current local hour.
pub fn location_message_now(location: &str) -> String {
    location_message(location, Local::now().hour())
}
