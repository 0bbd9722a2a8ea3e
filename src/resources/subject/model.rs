use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Who teaches a subject to a class section in a given year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTeacherMapping {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub staff_id: Uuid,
    pub staff_name: String,
    pub class_section_id: Uuid,
    pub class_section_name: String,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSubjectTeacherRequest {
    pub subject_id: Uuid,
    pub staff_id: Uuid,
    pub class_section_id: Uuid,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_section_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year_id: Option<Uuid>,
}
