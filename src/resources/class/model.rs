use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sort_order: i32,
    #[serde(default)]
    pub sections: Vec<ClassSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    pub sort_order: i32,
}

/// A section of a class in one academic year ("Grade 5 / A, 2025-26").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    pub id: Uuid,
    pub class_id: Uuid,
    pub class_name: String,
    pub section_id: Uuid,
    pub section_name: String,
    pub academic_year_id: Uuid,
    pub capacity: u32,
    pub student_count: u32,
}

impl ClassSection {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.class_name, self.section_name)
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.student_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: Uuid,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub name: String,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassSectionRequest {
    pub class_id: Uuid,
    pub section_id: Uuid,
    pub academic_year_id: Uuid,
    pub capacity: u32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ClassSectionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Uuid>,
}
