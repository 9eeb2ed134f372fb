use serde::{Deserialize, Serialize};

/// Arguments for the weather lookup tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
}

/// Arguments for the crop recommendation tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropRecommendationRequest {
    pub soil_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

/// Arguments for the plant disease identification tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseRequest {
    pub symptoms: String,
    pub crop_type: String,
}

/// Arguments for the farming calendar tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarRequest {
    pub crop_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Arguments for the sustainable practices tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticesRequest {
    pub farming_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
}

/// Current conditions for agricultural planning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherReport {
    pub condition: String,
    pub temperature: i32,
    pub humidity: String,
    pub precipitation_chance: String,
    pub wind_speed: String,
}

/// Crops suited to a soil category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropRecommendation {
    pub soil_type: String,
    pub recommended_crops: Vec<String>,
    pub planting_season: String,
    pub region: String,
}

/// Result of a disease lookup for a known crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseDiagnosis {
    pub crop: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub treatment_recommendations: String,
}

/// Guidance returned when the crop has no disease table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnknownCropGuidance {
    pub diagnosis: String,
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DiseaseReport {
    Diagnosed(DiseaseDiagnosis),
    UnknownCrop(UnknownCropGuidance),
}

impl DiseaseReport {
    #[must_use]
    pub fn diagnosis(&self) -> &str {
        match self {
            Self::Diagnosed(found) => &found.diagnosis,
            Self::UnknownCrop(guidance) => &guidance.diagnosis,
        }
    }
}

/// Seasonal schedule for a known crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropSchedule {
    pub crop: String,
    pub planting_time: String,
    pub maintenance: String,
    pub harvest_time: String,
    pub current_season: String,
    pub current_task: String,
    pub region: String,
}

/// Returned when the crop has no calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarUnavailable {
    pub crop: String,
    pub note: String,
    pub general_advice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CalendarReport {
    Scheduled(CropSchedule),
    Unavailable(CalendarUnavailable),
}

/// Solutions for a recognized farming challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeAdvice {
    pub challenge: String,
    pub specific_solutions: Vec<String>,
}

/// Sustainable practices for a farming style, with optional challenge advice.
///
/// When `advice` is `None` neither `challenge` nor `specific_solutions` is
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticesReport {
    pub farming_type: String,
    pub sustainable_practices: Vec<String>,
    #[serde(flatten)]
    pub advice: Option<ChallengeAdvice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn practices_without_advice_omits_challenge_fields() {
        let report = PracticesReport {
            farming_type: "organic".to_string(),
            sustainable_practices: vec!["Use mulch".to_string()],
            advice: None,
        };
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(
            value,
            json!({ "farming_type": "organic", "sustainable_practices": ["Use mulch"] })
        );
    }

    #[test]
    fn disease_report_serializes_without_variant_tag() {
        let report = DiseaseReport::UnknownCrop(UnknownCropGuidance {
            diagnosis: "unknown".to_string(),
            recommendations: "lab".to_string(),
        });
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value, json!({ "diagnosis": "unknown", "recommendations": "lab" }));

        let parsed: DiseaseReport = serde_json::from_value(value).expect("report should parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn optional_request_fields_default_to_none() {
        let request: CropRecommendationRequest =
            serde_json::from_value(json!({ "soil_type": "clay" })).expect("request should parse");
        assert_eq!(request.region, None);
        assert_eq!(request.season, None);
    }
}
