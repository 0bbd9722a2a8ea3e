use super::model::{
    AcademicYearQuery, CreateExamRequest, CreateExamTermRequest, CreateGradeDefinitionRequest,
    CreateReportCardTemplateRequest, Exam, ExamFilter, ExamResult, ExamTerm, ExamTermQuery,
    GradeDefinition, RecordExamResultRequest, ReportCard, ResultFilter,
};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::resources::Created;
use uuid::Uuid;

const ENDPOINT: &str = "exams";
const TERMS: &str = "exams/terms";
const GRADES: &str = "exams/grades";
const RESULTS: &str = "exams/results";
const REPORT_CARD_TEMPLATES: &str = "exams/report-card-templates";

#[derive(Clone)]
pub struct ExamService {
    api: ApiClient,
}

impl ExamService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // terms

    pub async fn create_term(&self, request: &CreateExamTermRequest) -> Result<Created, ApiError> {
        self.api.post(TERMS, request).await
    }

    pub async fn list_terms(&self, academic_year_id: Uuid) -> Result<Vec<ExamTerm>, ApiError> {
        self.api
            .get_with(TERMS, &AcademicYearQuery { academic_year_id })
            .await
    }

    // grading scale

    pub async fn create_grade(
        &self,
        request: &CreateGradeDefinitionRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(GRADES, request).await
    }

    pub async fn list_grades(
        &self,
        academic_year_id: Uuid,
    ) -> Result<Vec<GradeDefinition>, ApiError> {
        self.api
            .get_with(GRADES, &AcademicYearQuery { academic_year_id })
            .await
    }

    // exams

    pub async fn create(&self, request: &CreateExamRequest) -> Result<Created, ApiError> {
        self.api.post(ENDPOINT, request).await
    }

    pub async fn list(&self, filter: &ExamFilter) -> Result<Vec<Exam>, ApiError> {
        self.api.get_with(ENDPOINT, filter).await
    }

    // results

    pub async fn record_result(
        &self,
        request: &RecordExamResultRequest,
    ) -> Result<ExamResult, ApiError> {
        self.api.post(RESULTS, request).await
    }

    pub async fn list_results(&self, filter: &ResultFilter) -> Result<Vec<ExamResult>, ApiError> {
        self.api.get_with(RESULTS, filter).await
    }

    // report cards

    pub async fn create_report_card_template(
        &self,
        request: &CreateReportCardTemplateRequest,
    ) -> Result<Created, ApiError> {
        self.api.post(REPORT_CARD_TEMPLATES, request).await
    }

    pub async fn report_card(
        &self,
        student_id: Uuid,
        exam_term_id: Uuid,
    ) -> Result<ReportCard, ApiError> {
        self.api
            .get_with(
                &format!("{}/report-card/{}", ENDPOINT, student_id),
                &ExamTermQuery { exam_term_id },
            )
            .await
    }
}
