//! Upcoming-event windows over festivals and phase timelines.

use coligny_time::CalendarDate;

use coligny_moon::PhaseSample;

use crate::festival::Festival;

/// An event falling inside the notification window.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub date: CalendarDate,
    /// Whole days from `today` to the event (always in 1..=days_ahead).
    pub days_until: i64,
}

/// Events strictly after `today` and within `days_ahead` days, across the
/// supplied festivals and phase samples.
///
/// Output is sorted ascending by date explicitly; with equal dates,
/// festivals come before phase entries.
pub fn upcoming_events(
    today: CalendarDate,
    days_ahead: i64,
    festivals: &[Festival],
    phases: &[PhaseSample],
) -> Vec<UpcomingEvent> {
    let in_window = |date: &CalendarDate| {
        let days_until = today.days_until(date);
        (days_until > 0 && days_until <= days_ahead).then_some(days_until)
    };

    let mut events: Vec<UpcomingEvent> = festivals
        .iter()
        .filter_map(|f| {
            in_window(&f.date).map(|days_until| UpcomingEvent {
                name: f.name.clone(),
                kind: f.kind.clone(),
                description: f.description.clone(),
                date: f.date,
                days_until,
            })
        })
        .collect();

    events.extend(phases.iter().filter_map(|sample| {
        in_window(&sample.date).map(|days_until| UpcomingEvent {
            name: sample.phase.name().to_string(),
            kind: "Lunar Phase".to_string(),
            description: sample.description(),
            date: sample.date,
            days_until,
        })
    }));

    events.sort_by_key(|event| event.date);
    events
}
