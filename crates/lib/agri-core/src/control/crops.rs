use agri_store::schema::{DEFAULT_PLANTING_SEASON, DEFAULT_REGION};
use agri_store::{CropRecommendation, CropRecommendationRequest, SoilType};
use tracing::debug;

use super::{AdvisorControlPlane, echo_or, normalize_key, owned};
use crate::clock::Clock;

impl<K: Clock> AdvisorControlPlane<K> {
    /// Recommends crops for a soil type, falling back to loam for unknown soils.
    pub fn recommend_crops(&self, request: &CropRecommendationRequest) -> CropRecommendation {
        let soil = SoilType::from_key(&normalize_key(&request.soil_type))
            .unwrap_or(SoilType::FALLBACK);
        debug!(
            requested = %request.soil_type,
            resolved = soil.as_str(),
            "crop recommendation"
        );

        CropRecommendation {
            soil_type: soil.as_str().to_string(),
            recommended_crops: owned(soil.recommended_crops()),
            planting_season: echo_or(request.season.as_deref(), DEFAULT_PLANTING_SEASON),
            region: echo_or(request.region.as_deref(), DEFAULT_REGION),
        }
    }
}
