use agri_store::schema::{
    WEATHER_CONDITION,
    WEATHER_HUMIDITY,
    WEATHER_PRECIPITATION_CHANCE,
    WEATHER_TEMPERATURE,
    WEATHER_WIND_SPEED,
};
use agri_store::{WeatherReport, WeatherRequest};
use tracing::debug;

use super::AdvisorControlPlane;
use crate::clock::Clock;

impl<K: Clock> AdvisorControlPlane<K> {
    /// Returns current conditions for agricultural planning.
    ///
    /// The location is not validated; every location gets the same mock
    /// observation until a real weather provider is wired in.
    pub fn lookup_weather(&self, request: &WeatherRequest) -> WeatherReport {
        debug!(location = %request.location, "weather lookup");
        WeatherReport {
            condition: WEATHER_CONDITION.to_string(),
            temperature: WEATHER_TEMPERATURE,
            humidity: WEATHER_HUMIDITY.to_string(),
            precipitation_chance: WEATHER_PRECIPITATION_CHANCE.to_string(),
            wind_speed: WEATHER_WIND_SPEED.to_string(),
        }
    }
}
