use agri_store::schema::{
    CALENDAR_GENERAL_ADVICE,
    CALENDAR_UNAVAILABLE_NOTE,
    DEFAULT_CURRENT_TASK,
    DEFAULT_REGION,
    UNKNOWN_SEASON,
};
use agri_store::{CalendarReport, CalendarRequest, CalendarUnavailable, Crop, CropSchedule, Season};
use tracing::debug;

use super::{AdvisorControlPlane, echo_or, normalize_key};
use crate::clock::Clock;

impl<K: Clock> AdvisorControlPlane<K> {
    /// Builds the seasonal calendar for a crop, including the task for the
    /// current season.
    pub fn farming_calendar(&self, request: &CalendarRequest) -> CalendarReport {
        let season = self.current_season();
        let crop_key = normalize_key(&request.crop_type);
        let Some(crop) = Crop::from_key(&crop_key) else {
            debug!(crop = %crop_key, "calendar lookup for unknown crop");
            return CalendarReport::Unavailable(CalendarUnavailable {
                crop: crop_key,
                note: CALENDAR_UNAVAILABLE_NOTE.to_string(),
                general_advice: CALENDAR_GENERAL_ADVICE.to_string(),
            });
        };

        let calendar = crop.calendar();
        let current_task = season
            .and_then(|season| calendar.task_for(season))
            .unwrap_or(DEFAULT_CURRENT_TASK);
        let current_season = season.map_or(UNKNOWN_SEASON, Season::as_str);
        debug!(crop = %crop_key, current_season, "calendar lookup");

        CalendarReport::Scheduled(CropSchedule {
            crop: crop_key,
            planting_time: calendar.planting_time.to_string(),
            maintenance: calendar.maintenance.to_string(),
            harvest_time: calendar.harvest_time.to_string(),
            current_season: current_season.to_string(),
            current_task: current_task.to_string(),
            region: echo_or(request.region.as_deref(), DEFAULT_REGION),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::control::AdvisorControlPlane;
    use agri_store::{CalendarReport, CalendarRequest};

    #[test]
    fn out_of_range_month_uses_defaults() {
        let control = AdvisorControlPlane::new(FixedClock::new(13));
        let report = control.farming_calendar(&CalendarRequest {
            crop_type: "Corn".to_string(),
            region: None,
        });
        let CalendarReport::Scheduled(schedule) = report else {
            panic!("corn should have a calendar");
        };
        assert_eq!(schedule.crop, "corn");
        assert_eq!(schedule.current_season, "unknown");
        assert_eq!(schedule.current_task, "Plan for the upcoming growing season");
    }
}
