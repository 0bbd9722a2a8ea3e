mod model;
mod service;

pub use model::{
    CreateExamRequest, CreateExamTermRequest, CreateGradeDefinitionRequest,
    CreateReportCardTemplateRequest, Exam, ExamFilter, ExamResult, ExamTerm, ExamTermType,
    GradeDefinition, RecordExamResultRequest, ReportCard, ReportCardTemplate, ResultFilter,
};
pub use service::ExamService;
