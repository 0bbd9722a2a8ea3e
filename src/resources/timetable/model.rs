use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum!(
    /// ISO numbering, Monday first.
    DayOfWeek {
        Monday = 1,
        Tuesday = 2,
        Wednesday = 3,
        Thursday = 4,
        Friday = 5,
        Saturday = 6,
        Sunday = 7,
    }
);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: Uuid,
    pub name: String,
    /// `HH:mm`
    pub start_time: String,
    pub end_time: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: Uuid,
    pub class_section_id: Uuid,
    pub class_section_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub staff_id: Uuid,
    pub staff_name: String,
    pub time_slot_id: Uuid,
    pub time_slot_name: String,
    pub day_of_week: DayOfWeek,
    pub academic_year_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSlotRequest {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimetableEntryRequest {
    pub class_section_id: Uuid,
    pub subject_id: Uuid,
    pub staff_id: Uuid,
    pub time_slot_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub academic_year_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimetableEntryRequest {
    pub id: Uuid,
    pub class_section_id: Uuid,
    pub subject_id: Uuid,
    pub staff_id: Uuid,
    pub time_slot_id: Uuid,
    pub day_of_week: DayOfWeek,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ClassQuery {
    pub class_section_id: Uuid,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TeacherQuery {
    pub staff_id: Uuid,
    pub academic_year_id: Uuid,
}

/// Lays entries out as `(day, slot) -> entry` for a weekly grid.
/// A later entry in the same cell replaces an earlier one.
pub fn week_grid(entries: &[TimetableEntry]) -> BTreeMap<(u8, Uuid), &TimetableEntry> {
    entries
        .iter()
        .map(|e| ((u8::from(e.day_of_week), e.time_slot_id), e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: DayOfWeek, slot: Uuid, subject: &str) -> TimetableEntry {
        TimetableEntry {
            id: Uuid::new_v4(),
            class_section_id: Uuid::nil(),
            class_section_name: "Grade 3 - A".into(),
            subject_id: Uuid::new_v4(),
            subject_name: subject.into(),
            staff_id: Uuid::nil(),
            staff_name: "R. Iyer".into(),
            time_slot_id: slot,
            time_slot_name: "Period 1".into(),
            day_of_week: day,
            academic_year_id: Uuid::nil(),
            room: None,
        }
    }

    #[test]
    fn grid_is_ordered_by_day() {
        let slot = Uuid::new_v4();
        let entries = vec![
            entry(DayOfWeek::Friday, slot, "Art"),
            entry(DayOfWeek::Monday, slot, "Maths"),
        ];

        let grid = week_grid(&entries);
        let subjects: Vec<_> = grid.values().map(|e| e.subject_name.as_str()).collect();
        assert_eq!(subjects, vec!["Maths", "Art"]);
        assert_eq!(grid[&(1, slot)].subject_name, "Maths");
    }

    #[test]
    fn day_zero_is_rejected() {
        assert!(serde_json::from_str::<DayOfWeek>("0").is_err());
        assert_eq!(serde_json::from_str::<DayOfWeek>("7").unwrap(), DayOfWeek::Sunday);
    }
}
