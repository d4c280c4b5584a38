/// What a provider yields for a lookup, before the controller attaches the
/// unit code and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub condition: String,
}

/// The most recent successful lookup, as held by the widget.
///
/// Replaced wholesale on every new search; absent while an error is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,
    pub condition: String,
    /// Single-character unit code. Always `'C'` for reports produced by the
    /// search controller.
    pub unit: char,
    /// Display label, taken from the user's trimmed query.
    pub location: String,
}

impl WeatherReport {
    pub fn from_conditions(conditions: CurrentConditions, location: String) -> Self {
        Self {
            temperature: conditions.temperature_c,
            condition: conditions.condition,
            unit: 'C',
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_from_conditions_is_celsius() {
        let report = WeatherReport::from_conditions(
            CurrentConditions { temperature_c: 21.5, condition: "sunny".into() },
            "Odesa".into(),
        );

        assert_eq!(report.unit, 'C');
        assert_eq!(report.temperature, 21.5);
        assert_eq!(report.condition, "sunny");
        assert_eq!(report.location, "Odesa");
    }
}
