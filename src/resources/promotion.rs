//! Year-end promotion of a class section's students into the next one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::ApiError;

const BULK: &str = "promotions/bulk";
const PREVIEW: &str = "promotions/preview";

/// Per-student eligibility; `id` is the student id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPreview {
    pub id: Uuid,
    pub student_name: String,
    pub roll_number: String,
    pub current_class_section: String,
    pub is_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPromoteRequest {
    pub from_class_section_id: Uuid,
    pub to_class_section_id: Uuid,
    pub from_academic_year_id: Uuid,
    pub to_academic_year_id: Uuid,
    pub student_ids: Vec<Uuid>,
}

impl BulkPromoteRequest {
    /// Request covering every eligible student of a preview.
    pub fn eligible_from(
        preview: &[PromotionPreview],
        from_class_section_id: Uuid,
        to_class_section_id: Uuid,
        from_academic_year_id: Uuid,
        to_academic_year_id: Uuid,
    ) -> Self {
        Self {
            from_class_section_id,
            to_class_section_id,
            from_academic_year_id,
            to_academic_year_id,
            student_ids: preview.iter().filter(|p| p.is_eligible).map(|p| p.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPromoteResponse {
    pub promoted_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewQuery {
    from_class_section_id: Uuid,
    academic_year_id: Uuid,
}

#[derive(Clone)]
pub struct PromotionService {
    api: ApiClient,
}

impl PromotionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn bulk_promote(
        &self,
        request: &BulkPromoteRequest,
    ) -> Result<BulkPromoteResponse, ApiError> {
        self.api.post(BULK, request).await
    }

    pub async fn preview(
        &self,
        from_class_section_id: Uuid,
        academic_year_id: Uuid,
    ) -> Result<Vec<PromotionPreview>, ApiError> {
        let query = PreviewQuery {
            from_class_section_id,
            academic_year_id,
        };
        self.api.get_with(PREVIEW, &query).await
    }
}
