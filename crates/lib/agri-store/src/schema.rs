pub const TOOL_LOOKUP_WEATHER: &str = "lookup_weather";
pub const TOOL_CROP_RECOMMENDATIONS: &str = "get_crop_recommendations";
pub const TOOL_IDENTIFY_PLANT_DISEASE: &str = "identify_plant_disease";
pub const TOOL_FARMING_CALENDAR: &str = "get_farming_calendar";
pub const TOOL_SUSTAINABLE_PRACTICES: &str = "get_sustainable_practices";

pub const DEFAULT_PLANTING_SEASON: &str = "current";
pub const DEFAULT_REGION: &str = "general recommendations";
pub const UNKNOWN_SEASON: &str = "unknown";

pub const WEATHER_CONDITION: &str = "sunny";
pub const WEATHER_TEMPERATURE: i32 = 70;
pub const WEATHER_HUMIDITY: &str = "65%";
pub const WEATHER_PRECIPITATION_CHANCE: &str = "10%";
pub const WEATHER_WIND_SPEED: &str = "8 mph";

pub const UNKNOWN_CROP_DIAGNOSIS: &str =
    "Unknown crop type. Please provide more details or contact a local agricultural extension.";
pub const UNKNOWN_CROP_RECOMMENDATIONS: &str =
    "Consider sending a sample to a plant pathology lab for accurate diagnosis.";
pub const UNKNOWN_DISEASE_DIAGNOSIS: &str = "Unknown disease. Please provide more symptom details.";
pub const TREATMENT_RECOMMENDATIONS: &str =
    "Consult with a local agricultural extension for specific treatment recommendations.";

pub const CALENDAR_UNAVAILABLE_NOTE: &str = "Specific calendar not available for this crop. Contact your local agricultural extension for guidance.";
pub const CALENDAR_GENERAL_ADVICE: &str =
    "Follow seasonal planting guides appropriate for your local climate.";
pub const DEFAULT_CURRENT_TASK: &str = "Plan for the upcoming growing season";

