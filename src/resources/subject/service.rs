use super::model::{
    CreateSubjectRequest, MapSubjectTeacherRequest, MappingFilter, Subject, SubjectTeacherMapping,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::resources::Created;

const ENDPOINT: &str = "subjects";
const TEACHER_MAPPINGS: &str = "subjects/teacher-mappings";

#[derive(Clone)]
pub struct SubjectService {
    api: ApiClient,
}

impl SubjectService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreateSubjectRequest) -> Result<Created, ApiError> {
        self.api.post(ENDPOINT, request).await
    }

    pub async fn list(&self) -> Result<Vec<Subject>, ApiError> {
        self.api.get(ENDPOINT).await
    }

    pub async fn map_teacher(
        &self,
        request: &MapSubjectTeacherRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(TEACHER_MAPPINGS, request).await
    }

    pub async fn list_mappings(
        &self,
        filter: &MappingFilter,
    ) -> Result<Vec<SubjectTeacherMapping>, ApiError> {
        self.api.get_with(TEACHER_MAPPINGS, filter).await
    }
}
