use super::model::{
    Class, ClassSection, ClassSectionQuery, CreateClassRequest, CreateClassSectionRequest,
    CreateSectionRequest, Section,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::resources::Created;
use uuid::Uuid;

const ENDPOINT: &str = "classes";
const SECTIONS: &str = "classes/sections";
const CLASS_SECTIONS: &str = "classes/class-sections";

#[derive(Clone)]
pub struct ClassService {
    api: ApiClient,
}

impl ClassService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_class(&self, request: &CreateClassRequest) -> Result<Created, ApiError> {
        self.api.post(ENDPOINT, request).await
    }

    pub async fn list_classes(&self) -> Result<Vec<Class>, ApiError> {
        self.api.get(ENDPOINT).await
    }

    pub async fn create_section(
        &self,
        request: &CreateSectionRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(SECTIONS, request).await
    }

    pub async fn list_sections(&self) -> Result<Vec<Section>, ApiError> {
        self.api.get(SECTIONS).await
    }

    pub async fn create_class_section(
        &self,
        request: &CreateClassSectionRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(CLASS_SECTIONS, request).await
    }

    /// All class sections, or only those of `class_id`.
    pub async fn list_class_sections(
        &self,
        class_id: Option<Uuid>,
    ) -> Result<Vec<ClassSection>, ApiError> {
        self.api
            .get_with(CLASS_SECTIONS, &ClassSectionQuery { class_id })
            .await
    }
}
