//! HTTP client for the weather provider.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::WeatherError;

/// Production endpoint. Tests point the client at a mock server via
/// [`WeatherClient::with_base_url`].
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Country code appended to every city query.
const COUNTRY_CODE: &str = "CO";

/// The municipalities the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Municipality {
    Bogota,
    Medellin,
    Cali,
    Barranquilla,
}

impl Municipality {
    pub const ALL: [Municipality; 4] = [
        Municipality::Bogota,
        Municipality::Medellin,
        Municipality::Cali,
        Municipality::Barranquilla,
    ];

    /// City name as sent to the provider (and shown in the menu).
    pub fn name(&self) -> &'static str {
        match self {
            Municipality::Bogota => "Bogotá",
            Municipality::Medellin => "Medellín",
            Municipality::Cali => "Cali",
            Municipality::Barranquilla => "Barranquilla",
        }
    }
}

/// A current-conditions reading.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    /// Provider's free-text condition description, e.g. "light rain".
    pub condition: String,
}

impl WeatherReading {
    /// Heavy-rain advisory: raised whenever the condition text
    /// mentions rain.
    pub fn rain_advisory(&self) -> bool {
        self.condition.contains("rain")
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: MainSection,
    weather: Vec<ConditionSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    description: String,
}

/// Client for the weather provider.
///
/// One bare best-effort GET per fetch: no retry, no backoff, no
/// timeout. A slow provider stalls the calling interaction.
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENWEATHER_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch current conditions for a municipality.
    pub async fn fetch(&self, municipality: Municipality) -> Result<WeatherReading, WeatherError> {
        let city = municipality.name();
        debug!(city, "fetching current weather");

        let response = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", format!("{city},{COUNTRY_CODE}")),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Malformed(e.to_string()))?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Malformed("empty weather array".into()))?
            .description;

        Ok(WeatherReading {
            temperature_c: body.main.temp,
            humidity_pct: body.main.humidity,
            condition,
        })
    }
}
