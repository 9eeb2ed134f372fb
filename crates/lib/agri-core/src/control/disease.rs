use agri_store::schema::{
    TREATMENT_RECOMMENDATIONS,
    UNKNOWN_CROP_DIAGNOSIS,
    UNKNOWN_CROP_RECOMMENDATIONS,
    UNKNOWN_DISEASE_DIAGNOSIS,
};
use agri_store::{
    Crop,
    DiseaseDiagnosis,
    DiseaseReport,
    DiseaseRequest,
    SymptomDiagnosis,
    UnknownCropGuidance,
};
use tracing::debug;

use super::{AdvisorControlPlane, normalize_key};
use crate::clock::Clock;

impl<K: Clock> AdvisorControlPlane<K> {
    /// Matches a free-text symptom description against the crop's disease table.
    ///
    /// The first table entry whose phrase occurs anywhere in the description
    /// wins. Unknown crops get a fixed guidance record regardless of symptoms.
    pub fn identify_disease(&self, request: &DiseaseRequest) -> DiseaseReport {
        let crop_key = normalize_key(&request.crop_type);
        let Some(crop) = Crop::from_key(&crop_key) else {
            debug!(crop = %crop_key, "disease lookup for unknown crop");
            return DiseaseReport::UnknownCrop(UnknownCropGuidance {
                diagnosis: UNKNOWN_CROP_DIAGNOSIS.to_string(),
                recommendations: UNKNOWN_CROP_RECOMMENDATIONS.to_string(),
            });
        };

        let diagnosis = match_symptoms(crop, &request.symptoms)
            .map_or(UNKNOWN_DISEASE_DIAGNOSIS, |entry| entry.diagnosis);
        debug!(crop = %crop_key, diagnosis, "disease lookup");

        DiseaseReport::Diagnosed(DiseaseDiagnosis {
            crop: crop_key,
            symptoms: request.symptoms.clone(),
            diagnosis: diagnosis.to_string(),
            treatment_recommendations: TREATMENT_RECOMMENDATIONS.to_string(),
        })
    }
}

fn match_symptoms(crop: Crop, symptoms: &str) -> Option<&'static SymptomDiagnosis> {
    let symptoms = symptoms.to_lowercase();
    crop.diseases()
        .iter()
        .find(|entry| symptoms.contains(&entry.symptom.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_entry_wins() {
        // "black spots" precedes "wilting" in the wheat table.
        let entry = match_symptoms(Crop::Wheat, "wilting plants with black spots")
            .expect("symptoms should match");
        assert_eq!(entry.diagnosis, "Black point or smut");
    }

    #[test]
    fn no_phrase_means_no_match() {
        assert!(match_symptoms(Crop::Tomato, "leaves look fine").is_none());
        assert!(match_symptoms(Crop::Tomato, "").is_none());
    }
}
