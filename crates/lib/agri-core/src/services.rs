use std::error::Error;
use std::fmt;
use std::str::FromStr;

use agri_store::schema::{
    TOOL_CROP_RECOMMENDATIONS,
    TOOL_FARMING_CALENDAR,
    TOOL_IDENTIFY_PLANT_DISEASE,
    TOOL_LOOKUP_WEATHER,
    TOOL_SUSTAINABLE_PRACTICES,
};
use agri_store::{
    CalendarRequest,
    CropRecommendationRequest,
    DiseaseRequest,
    PracticesRequest,
    WeatherRequest,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::clock::Clock;
use crate::control::AdvisorControlPlane;

/// Every tool the advisor exposes to an orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    LookupWeather,
    CropRecommendations,
    IdentifyPlantDisease,
    FarmingCalendar,
    SustainablePractices,
}

impl ToolName {
    pub const ALL: [Self; 5] = [
        Self::LookupWeather,
        Self::CropRecommendations,
        Self::IdentifyPlantDisease,
        Self::FarmingCalendar,
        Self::SustainablePractices,
    ];

    /// Wire name used by the tool-calling convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LookupWeather => TOOL_LOOKUP_WEATHER,
            Self::CropRecommendations => TOOL_CROP_RECOMMENDATIONS,
            Self::IdentifyPlantDisease => TOOL_IDENTIFY_PLANT_DISEASE,
            Self::FarmingCalendar => TOOL_FARMING_CALENDAR,
            Self::SustainablePractices => TOOL_SUSTAINABLE_PRACTICES,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LookupWeather => "Used to look up weather information for agricultural planning.",
            Self::CropRecommendations => {
                "Recommends suitable crops based on soil type, region, and current season."
            }
            Self::IdentifyPlantDisease => {
                "Identifies potential plant diseases based on symptoms and crop type."
            }
            Self::FarmingCalendar => {
                "Provides a seasonal calendar for planting, maintenance, and harvesting of specific crops."
            }
            Self::SustainablePractices => {
                "Provides sustainable farming practices and solutions to common challenges."
            }
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// Name and description of a registered tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

impl From<ToolName> for ToolDescriptor {
    fn from(tool: ToolName) -> Self {
        Self {
            name: tool.as_str().to_string(),
            description: tool.description().to_string(),
        }
    }
}

/// Failures at the dispatch boundary. The advisory operations themselves
/// always answer.
#[derive(Debug)]
pub enum ToolError {
    UnknownTool(String),
    InvalidArguments { tool: ToolName, message: String },
    Serialize(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::InvalidArguments { tool, message } => {
                write!(f, "invalid arguments for {tool}: {message}")
            }
            Self::Serialize(message) => write!(f, "failed to serialize tool result: {message}"),
        }
    }
}

impl Error for ToolError {}

/// Dispatches tool calls by name to the typed advisory operations.
#[derive(Debug, Clone)]
pub struct ToolRegistry<K: Clock> {
    control: AdvisorControlPlane<K>,
}

impl<K: Clock> ToolRegistry<K> {
    pub const fn new(control: AdvisorControlPlane<K>) -> Self {
        Self { control }
    }

    pub const fn control(&self) -> &AdvisorControlPlane<K> {
        &self.control
    }

    /// Lists every registered tool in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        ToolName::ALL.into_iter().map(ToolDescriptor::from).collect()
    }

    /// Resolves a tool by wire name and invokes it.
    ///
    /// # Errors
    /// Returns `ToolError` if the name is unknown, the arguments do not match
    /// the tool's parameters, or the result cannot be serialized.
    pub fn call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = name.parse::<ToolName>()?;
        self.call_tool(tool, arguments)
    }

    /// Invokes a known tool with JSON arguments. `null` counts as no arguments.
    ///
    /// # Errors
    /// Returns `ToolError` if the arguments do not match the tool's
    /// parameters or the result cannot be serialized.
    pub fn call_tool(&self, tool: ToolName, arguments: Value) -> Result<Value, ToolError> {
        debug!(%tool, "dispatching tool call");
        match tool {
            ToolName::LookupWeather => {
                let request: WeatherRequest = parse_arguments(tool, arguments)?;
                to_result(&self.control.lookup_weather(&request))
            }
            ToolName::CropRecommendations => {
                let request: CropRecommendationRequest = parse_arguments(tool, arguments)?;
                to_result(&self.control.recommend_crops(&request))
            }
            ToolName::IdentifyPlantDisease => {
                let request: DiseaseRequest = parse_arguments(tool, arguments)?;
                to_result(&self.control.identify_disease(&request))
            }
            ToolName::FarmingCalendar => {
                let request: CalendarRequest = parse_arguments(tool, arguments)?;
                to_result(&self.control.farming_calendar(&request))
            }
            ToolName::SustainablePractices => {
                let request: PracticesRequest = parse_arguments(tool, arguments)?;
                to_result(&self.control.sustainable_practices(&request))
            }
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|err| ToolError::InvalidArguments {
        tool,
        message: err.to_string(),
    })
}

fn to_result<T: Serialize>(report: &T) -> Result<Value, ToolError> {
    serde_json::to_value(report).map_err(|err| ToolError::Serialize(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use serde_json::json;

    fn registry() -> ToolRegistry<FixedClock> {
        ToolRegistry::new(AdvisorControlPlane::new(FixedClock::new(7)))
    }

    #[test]
    fn wire_names_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().ok(), Some(tool));
        }
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = registry()
            .call("plant_trees", json!({}))
            .expect_err("unknown tool should fail");
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "plant_trees"));
    }

    #[test]
    fn missing_required_argument_is_rejected() {
        let err = registry()
            .call("identify_plant_disease", json!({ "crop_type": "tomato" }))
            .expect_err("missing symptoms should fail");
        assert!(matches!(
            err,
            ToolError::InvalidArguments {
                tool: ToolName::IdentifyPlantDisease,
                ..
            }
        ));
    }

    #[test]
    fn null_arguments_only_fail_when_fields_are_required() {
        let err = registry()
            .call("lookup_weather", Value::Null)
            .expect_err("location is required");
        assert!(err.to_string().contains("lookup_weather"));
    }

    #[test]
    fn descriptors_follow_registration_order() {
        let names: Vec<_> = registry()
            .descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect();
        assert_eq!(
            names,
            [
                "lookup_weather",
                "get_crop_recommendations",
                "identify_plant_disease",
                "get_farming_calendar",
                "get_sustainable_practices",
            ]
        );
    }
}
