//! Rendering of the widget's three display lines.

use widget_core::{
    SearchError, WeatherReport,
    format::{condition_message, location_message_now, temperature_message},
};

/// Print the three-line summary for a successful lookup.
pub fn render_report(report: &WeatherReport) {
    println!("  {}", temperature_message(report.temperature, report.unit));
    println!("  {}", condition_message(&report.condition));
    println!("  {}", location_message_now(&report.location));
}

pub fn render_error(error: SearchError) {
    eprintln!("  {error}");
}
