use super::model::{
    ClassQuery, CreateTimeSlotRequest, CreateTimetableEntryRequest, TeacherQuery, TimeSlot,
    TimetableEntry, UpdateTimetableEntryRequest,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::resources::Created;
use uuid::Uuid;

const TIME_SLOTS: &str = "timetable/time-slots";
const ENTRIES: &str = "timetable/entries";
const BY_CLASS: &str = "timetable/by-class";
const BY_TEACHER: &str = "timetable/by-teacher";

#[derive(Clone)]
pub struct TimetableService {
    api: ApiClient,
}

impl TimetableService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_time_slot(
        &self,
        request: &CreateTimeSlotRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(TIME_SLOTS, request).await
    }

    pub async fn list_time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.api.get(TIME_SLOTS).await
    }

    pub async fn create_entry(
        &self,
        request: &CreateTimetableEntryRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(ENTRIES, request).await
    }

    pub async fn update_entry(
        &self,
        id: Uuid,
        request: &UpdateTimetableEntryRequest,
    ) -> Result<(), ApiError> {
        self.api.put(&format!("{}/{}", ENTRIES, id), request).await
    }

    pub async fn delete_entry(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", ENTRIES, id)).await
    }

    pub async fn by_class(
        &self,
        class_section_id: Uuid,
        academic_year_id: Uuid,
    ) -> Result<Vec<TimetableEntry>, ApiError> {
        let query = ClassQuery {
            class_section_id,
            academic_year_id,
        };
        self.api.get_with(BY_CLASS, &query).await
    }

    pub async fn by_teacher(
        &self,
        staff_id: Uuid,
        academic_year_id: Uuid,
    ) -> Result<Vec<TimetableEntry>, ApiError> {
        let query = TeacherQuery {
            staff_id,
            academic_year_id,
        };
        self.api.get_with(BY_TEACHER, &query).await
    }
}
