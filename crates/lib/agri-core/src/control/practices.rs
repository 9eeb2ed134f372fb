use agri_store::{Challenge, ChallengeAdvice, FarmingType, PracticesReport, PracticesRequest};
use tracing::debug;

use super::{AdvisorControlPlane, normalize_key, owned};
use crate::clock::Clock;

impl<K: Clock> AdvisorControlPlane<K> {
    /// Lists sustainable practices for a farming style, plus solutions when
    /// the challenge is one the table knows.
    pub fn sustainable_practices(&self, request: &PracticesRequest) -> PracticesReport {
        let farming_type = FarmingType::from_key(&normalize_key(&request.farming_type))
            .unwrap_or(FarmingType::FALLBACK);

        let advice = request
            .challenge
            .as_deref()
            .filter(|challenge| !challenge.is_empty())
            .and_then(|challenge| {
                Challenge::from_key(&normalize_key(challenge)).map(|known| ChallengeAdvice {
                    challenge: challenge.to_string(),
                    specific_solutions: owned(known.solutions()),
                })
            });
        debug!(
            farming_type = farming_type.as_str(),
            with_advice = advice.is_some(),
            "sustainable practices"
        );

        PracticesReport {
            farming_type: farming_type.as_str().to_string(),
            sustainable_practices: owned(farming_type.practices()),
            advice,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::control::AdvisorControlPlane;
    use agri_store::PracticesRequest;

    #[test]
    fn unknown_style_and_challenge_fall_back_quietly() {
        let control = AdvisorControlPlane::new(FixedClock::new(1));
        let report = control.sustainable_practices(&PracticesRequest {
            farming_type: "biodynamic".to_string(),
            challenge: Some("frost".to_string()),
        });
        assert_eq!(report.farming_type, "conventional");
        assert_eq!(report.sustainable_practices.len(), 5);
        assert!(report.advice.is_none());
    }

    #[test]
    fn challenge_is_echoed_as_supplied() {
        let control = AdvisorControlPlane::new(FixedClock::new(1));
        let report = control.sustainable_practices(&PracticesRequest {
            farming_type: "Hydroponics".to_string(),
            challenge: Some("Pest Management".to_string()),
        });
        assert_eq!(report.farming_type, "hydroponics");
        let advice = report.advice.expect("pest management should be recognized");
        assert_eq!(advice.challenge, "Pest Management");
        assert_eq!(
            advice.specific_solutions[0],
            "Encourage biodiversity to support beneficial insects"
        );
    }
}
