mod model;
mod service;

pub use model::{
    AdmitStudentRequest, DocumentType, Gender, Guardian, GuardianRelationship, LinkGuardianRequest,
    LinkedGuardian, Student, StudentDocument, StudentFilter, UpdateStudentRequest,
};
pub use service::StudentService;
