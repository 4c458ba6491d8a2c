// =====================================================================================
// SCHEDULING HELPERS - TIME SLOTS, CALENDAR GRID, SESSION OPTIONS
// =====================================================================================

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::{SessionDate, SessionError, SessionMode, TimePeriod, TimeSlotGroup};

/// 12-hour slot labels such as `02:00 PM`.
pub const SLOT_TIME_FORMAT: &str = "%I:%M %p";

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            TimePeriod::Morning => &["08:00 AM", "09:00 AM", "10:00 AM", "11:00 AM"],
            TimePeriod::Afternoon => &["12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM"],
            TimePeriod::Evening => &["04:00 PM", "05:00 PM", "06:00 PM", "07:00 PM"],
            TimePeriod::Night => &["08:00 PM", "09:00 PM", "10:00 PM"],
        }
    }
}

pub fn parse_slot_time(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label.trim(), SLOT_TIME_FORMAT).ok()
}

/// Bookable hourly slots for `date`, grouped by period.
///
/// For today only slots starting after the current hour remain; past dates
/// have none. Periods left without slots are dropped.
pub fn time_slots(date: SessionDate, now: NaiveDateTime) -> Vec<TimeSlotGroup> {
    let today = now.date();
    if date.date() < today {
        return Vec::new();
    }
    let is_today = date.date() == today;
    let current_hour = now.hour();

    TimePeriod::ALL
        .iter()
        .map(|period| TimeSlotGroup {
            period: *period,
            slots: period
                .slots()
                .iter()
                .filter(|label| {
                    !is_today
                        || parse_slot_time(label).is_some_and(|t| t.hour() > current_hour)
                })
                .map(|label| label.to_string())
                .collect(),
        })
        .filter(|group| !group.slots.is_empty())
        .collect()
}

/// Sunday-first month grid. Leading cells before the 1st and days before
/// `today` are `None`.
pub fn calendar_month(
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Vec<Option<SessionDate>>, SessionError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(SessionError::InvalidMonth { year, month })?;

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<SessionDate>> = vec![None; leading];

    let mut day = first;
    while day.month() == month {
        cells.push((day >= today).then(|| SessionDate::new(day)));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(cells)
}

/// Modes a doctor's session-mode descriptor allows booking in.
pub fn available_modes(doctor_session_mode: &str) -> Vec<SessionMode> {
    let modes = doctor_session_mode.to_lowercase();
    let in_person = modes.contains("in-person");
    let online = modes.contains("online");

    match (in_person, online) {
        (true, true) => vec![SessionMode::InPerson, SessionMode::Online],
        (_, true) => vec![SessionMode::Online],
        _ => vec![SessionMode::InPerson],
    }
}

/// Session types offered for a doctor's expertise in the given mode.
pub fn session_type_options(expertise: &str, mode: SessionMode) -> Vec<&'static str> {
    let expertise = expertise.to_lowercase();
    let in_person = mode == SessionMode::InPerson;

    if expertise.contains("psychologist") || expertise.contains("psychiatrist") {
        if in_person {
            vec!["Counselling", "Therapy Session", "Consultation"]
        } else {
            vec!["Counselling", "Online Therapy", "Video Consultation"]
        }
    } else if expertise.contains("gynecology") || expertise.contains("ivf") {
        if in_person {
            vec!["Consultation", "Check-up", "Treatment"]
        } else {
            vec!["Online Consultation", "Medical Advice"]
        }
    } else if in_person {
        vec!["Consultation", "Check-up"]
    } else {
        vec!["Online Consultation", "Medical Advice"]
    }
}
