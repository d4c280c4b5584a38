//! The search controller: owns the widget's input text, loading flag,
//! last error and last successful result, and runs the submit flow.

use tracing::debug;

use crate::{
    model::WeatherReport,
    provider::WeatherProvider,
};

/// User-visible failure kinds. The `Display` strings are exactly what the
/// widget shows; everything the provider can go wrong with collapses into
/// [`SearchError::LookupFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a valid location")]
    EmptyInput,
    #[error("Location not found, please try again")]
    LookupFailed,
}

/// Per-widget search state, mutated by [`SearchController::submit`].
///
/// Result and error are mutually exclusive: a successful lookup clears the
/// error, a failed or empty submission clears the result.
#[derive(Debug, Default)]
pub struct SearchController {
    input: String,
    loading: bool,
    error: Option<SearchError>,
    result: Option<WeatherReport>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub fn result(&self) -> Option<&WeatherReport> {
        self.result.as_ref()
    }

    /// Run one search attempt against the current input.
    ///
    /// A trimmed-empty input sets [`SearchError::EmptyInput`] without
    /// touching the provider. Otherwise exactly one provider call is made;
    /// any provider failure becomes [`SearchError::LookupFailed`]. The
    /// loading flag is cleared on every path that set it.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.error = Some(SearchError::EmptyInput);
            self.result = None;
            return;
        }

        self.loading = true;
        self.error = None;

        match provider.current(&query).await {
            Ok(conditions) => {
                self.result = Some(WeatherReport::from_conditions(conditions, query));
            }
            Err(err) => {
                debug!(error = %err, "lookup failed");
                self.error = Some(SearchError::LookupFailed);
                self.result = None;
            }
        }

        self.loading = false;
    }
}
