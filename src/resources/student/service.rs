use super::model::{
    AdmitStudentRequest, LinkGuardianRequest, LinkedGuardian, Student, StudentFilter,
    UpdateStudentRequest,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use uuid::Uuid;

const ENDPOINT: &str = "students";

#[derive(Clone)]
pub struct StudentService {
    api: ApiClient,
}

impl StudentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn admit(&self, request: &AdmitStudentRequest) -> Result<Student, ApiError> {
        self.api.post(ENDPOINT, request).await
    }

    pub async fn update(&self, id: Uuid, request: &UpdateStudentRequest) -> Result<(), ApiError> {
        self.api.put(&format!("{}/{}", ENDPOINT, id), request).await
    }

    /// Soft delete on the server side.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", ENDPOINT, id)).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Student, ApiError> {
        self.api.get(&format!("{}/{}", ENDPOINT, id)).await
    }

    pub async fn list(&self, filter: &StudentFilter) -> Result<Vec<Student>, ApiError> {
        self.api.get_with(ENDPOINT, filter).await
    }

    pub async fn link_guardian(
        &self,
        request: &LinkGuardianRequest,
    ) -> Result<LinkedGuardian, ApiError> {
        self.api
            .post(&format!("{}/{}/guardians", ENDPOINT, request.student_id), request)
            .await
    }
}
