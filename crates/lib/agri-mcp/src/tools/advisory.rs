use agri_core::clock::Clock;
use agri_core::services::ToolName;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::AgriMcp;

/// Parameters for looking up weather.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeatherParams {
    /// Town, region or farm location the farmer asked about.
    pub location: String,
}

/// Parameters for crop recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CropRecommendationParams {
    /// Soil category: clay, sandy, loam, silt or peat. Anything else is treated as loam.
    pub soil_type: String,
    pub region: Option<String>,
    pub season: Option<String>,
}

/// Parameters for plant disease identification.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DiseaseParams {
    /// Free-text description of what the farmer sees on the plants.
    pub symptoms: String,
    /// Crop name, e.g. tomato, corn or wheat.
    pub crop_type: String,
}

/// Parameters for the farming calendar.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CalendarParams {
    pub crop_type: String,
    pub region: Option<String>,
}

/// Parameters for sustainable practices.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PracticesParams {
    /// Farming style: conventional, organic or hydroponics.
    pub farming_type: String,
    /// Optional challenge: water conservation, soil erosion or pest management.
    pub challenge: Option<String>,
}

#[tool_router(router = tool_router_advisory, vis = "pub")]
impl<K: Clock> AgriMcp<K> {
    #[tool(description = "Used to look up weather information for agricultural planning.")]
    async fn lookup_weather(
        &self,
        Parameters(params): Parameters<WeatherParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(ToolName::LookupWeather, &params)
    }

    #[tool(description = "Recommends suitable crops based on soil type, region, and current season.")]
    async fn get_crop_recommendations(
        &self,
        Parameters(params): Parameters<CropRecommendationParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(ToolName::CropRecommendations, &params)
    }

    #[tool(description = "Identifies potential plant diseases based on symptoms and crop type.")]
    async fn identify_plant_disease(
        &self,
        Parameters(params): Parameters<DiseaseParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(ToolName::IdentifyPlantDisease, &params)
    }

    #[tool(description = "Provides a seasonal calendar for planting, maintenance, and harvesting of specific crops.")]
    async fn get_farming_calendar(
        &self,
        Parameters(params): Parameters<CalendarParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(ToolName::FarmingCalendar, &params)
    }

    #[tool(description = "Provides sustainable farming practices and solutions to common challenges.")]
    async fn get_sustainable_practices(
        &self,
        Parameters(params): Parameters<PracticesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(ToolName::SustainablePractices, &params)
    }
}
