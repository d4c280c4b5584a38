use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::CurrentConditions;

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }

    async fn fetch_current(&self, query: &str) -> Result<CurrentConditions> {
        debug!(query, "requesting current conditions from WeatherAPI.com");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: WaResponse =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI current JSON")?;

        debug!(temp_c = parsed.current.temp_c, condition = %parsed.current.condition.text, "lookup succeeded");

        Ok(CurrentConditions {
            temperature_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<CurrentConditions> {
        self.fetch_current(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Never cut inside a multibyte character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_response_body() {
        let body = r#"{
            "location": { "name": "Lviv", "country": "Ukraine" },
            "current": {
                "temp_c": -3.5,
                "condition": { "text": "Light snow" }
            }
        }"#;

        let parsed: WaResponse = serde_json::from_str(body).expect("sample body must parse");
        assert_eq!(parsed.current.temp_c, -3.5);
        assert_eq!(parsed.current.condition.text, "Light snow");
    }

    #[test]
    fn parse_fails_without_current_block() {
        let body = r#"{ "error": { "code": 1006, "message": "No matching location found." } }"#;
        assert!(serde_json::from_str::<WaResponse>(body).is_err());
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncate_body_respects_multibyte_boundaries() {
        // Three bytes per character, so the 200-byte cap lands mid-character.
        let long = "€".repeat(100);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.trim_end_matches("..."), "€".repeat(66));
    }
}
