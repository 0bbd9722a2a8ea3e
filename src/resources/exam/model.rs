use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum!(ExamTermType {
    MidTerm = 0,
    Final = 1,
    Quarterly = 2,
    HalfYearly = 3,
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamTerm {
    pub id: Uuid,
    pub name: String,
    pub term_type: ExamTermType,
    pub start_date: String,
    pub end_date: String,
    pub academic_year_id: Uuid,
}

/// Percentage band mapped to a grade label, e.g. 90..=100 -> "A+".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDefinition {
    pub id: Uuid,
    pub label: String,
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub grade_point: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub academic_year_id: Uuid,
}

impl GradeDefinition {
    pub fn covers(&self, percentage: f64) -> bool {
        percentage >= self.min_percentage && percentage <= self.max_percentage
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: Uuid,
    pub exam_term_id: Uuid,
    pub exam_term_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub class_section_id: Uuid,
    pub class_section_name: String,
    pub exam_date: String,
    /// Minutes.
    pub duration: u32,
    pub total_marks: f64,
    pub passing_marks: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: String,
    pub is_passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardTemplate {
    pub id: Uuid,
    pub name: String,
    pub template_content: String,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub student_id: Uuid,
    pub student_name: String,
    pub admission_id: String,
    pub class_section_name: String,
    pub exam_term_name: String,
    #[serde(default)]
    pub results: Vec<ExamResult>,
    pub total_marks_obtained: f64,
    pub total_max_marks: f64,
    pub overall_percentage: f64,
    pub overall_grade: String,
}

impl ReportCard {
    pub fn failed_subjects(&self) -> impl Iterator<Item = &ExamResult> {
        self.results.iter().filter(|r| !r.is_passed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamTermRequest {
    pub name: String,
    pub term_type: ExamTermType,
    pub start_date: String,
    pub end_date: String,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeDefinitionRequest {
    pub label: String,
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub grade_point: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    pub exam_term_id: Uuid,
    pub subject_id: Uuid,
    pub class_section_id: Uuid,
    pub exam_date: String,
    pub duration: u32,
    pub total_marks: f64,
    pub passing_marks: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordExamResultRequest {
    pub exam_id: Uuid,
    pub student_id: Uuid,
    pub marks_obtained: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportCardTemplateRequest {
    pub name: String,
    pub template_content: String,
    pub academic_year_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_term_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_section_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_term_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AcademicYearQuery {
    pub academic_year_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExamTermQuery {
    pub exam_term_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grade_band_is_inclusive() {
        let grade = GradeDefinition {
            id: Uuid::nil(),
            label: "A".into(),
            min_percentage: 80.0,
            max_percentage: 89.99,
            grade_point: 9.0,
            description: None,
            academic_year_id: Uuid::nil(),
        };

        assert!(grade.covers(80.0));
        assert!(grade.covers(89.99));
        assert!(!grade.covers(90.0));
        assert!(!grade.covers(79.5));
    }

    #[test]
    fn report_card_lists_failed_subjects() {
        let card: ReportCard = serde_json::from_value(json!({
            "studentId": Uuid::nil(),
            "studentName": "Ravi Kumar",
            "admissionId": "ADM-2025-014",
            "classSectionName": "Grade 7 - B",
            "examTermName": "Mid Term",
            "results": [
                {
                    "id": Uuid::nil(), "examId": Uuid::nil(), "studentId": Uuid::nil(),
                    "studentName": "Ravi Kumar", "marksObtained": 72, "totalMarks": 100,
                    "percentage": 72.0, "grade": "B", "isPassed": true
                },
                {
                    "id": Uuid::nil(), "examId": Uuid::nil(), "studentId": Uuid::nil(),
                    "studentName": "Ravi Kumar", "marksObtained": 21, "totalMarks": 100,
                    "percentage": 21.0, "grade": "F", "isPassed": false, "remarks": "Absent twice"
                }
            ],
            "totalMarksObtained": 93,
            "totalMaxMarks": 200,
            "overallPercentage": 46.5,
            "overallGrade": "D"
        }))
        .unwrap();

        let failed: Vec<_> = card.failed_subjects().map(|r| r.grade.as_str()).collect();
        assert_eq!(failed, vec!["F"]);
    }
}
