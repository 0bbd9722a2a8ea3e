use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum!(StaffType {
    Teacher = 0,
    Admin = 1,
    Support = 2,
});

wire_enum!(StaffRoleType {
    ClassTeacher = 0,
    Hod = 1,
    Admin = 2,
    SubjectTeacher = 3,
    Principal = 4,
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub joining_date: String,
    pub staff_type: StaffType,
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<StaffRole>,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRole {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub role: StaffRoleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_section_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_section_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardStaffRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub qualification: String,
    pub joining_date: String,
    pub staff_type: StaffType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub staff_type: StaffType,
    pub is_active: bool,
}

/// Class-scoped roles (class teacher) carry the class section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStaffRoleRequest {
    pub staff_id: Uuid,
    pub role: StaffRoleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_section_id: Option<Uuid>,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedRole {
    pub role_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_type: Option<StaffType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_and_type_travel_as_numbers() {
        let request = AssignStaffRoleRequest {
            staff_id: Uuid::nil(),
            role: StaffRoleType::Hod,
            class_section_id: None,
            academic_year_id: Uuid::nil(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role"], json!(1));
        assert!(value.get("classSectionId").is_none());
        assert_eq!(value["academicYearId"], json!(Uuid::nil().to_string()));
    }

    #[test]
    fn staff_without_roles_decodes() {
        let staff: Staff = serde_json::from_value(json!({
            "id": Uuid::nil(),
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@school.example.com",
            "phone": "555-0100",
            "qualification": "M.Sc",
            "joiningDate": "2024-06-01",
            "staffType": 0,
            "isActive": true
        }))
        .unwrap();

        assert_eq!(staff.staff_type, StaffType::Teacher);
        assert!(staff.roles.is_empty());
        assert_eq!(staff.full_name(), "Asha Rao");
    }
}
