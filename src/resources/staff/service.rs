use super::model::{
    AssignStaffRoleRequest, AssignedRole, OnboardStaffRequest, Staff, StaffFilter,
    UpdateStaffRequest,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use uuid::Uuid;

const ENDPOINT: &str = "staff";

#[derive(Clone)]
pub struct StaffService {
    api: ApiClient,
}

impl StaffService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn onboard(&self, request: &OnboardStaffRequest) -> Result<Staff, ApiError> {
        self.api.post(ENDPOINT, request).await
    }

    pub async fn update(&self, id: Uuid, request: &UpdateStaffRequest) -> Result<(), ApiError> {
        self.api.put(&format!("{}/{}", ENDPOINT, id), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", ENDPOINT, id)).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Staff, ApiError> {
        self.api.get(&format!("{}/{}", ENDPOINT, id)).await
    }

    pub async fn list(&self, filter: &StaffFilter) -> Result<Vec<Staff>, ApiError> {
        self.api.get_with(ENDPOINT, filter).await
    }

    pub async fn assign_role(
        &self,
        request: &AssignStaffRoleRequest,
    ) -> Result<AssignedRole, ApiError> {
        self.api
            .post(&format!("{}/{}/roles", ENDPOINT, request.staff_id), request)
            .await
    }
}
