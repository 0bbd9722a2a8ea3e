mod model;
mod service;

pub use model::{
    CreateSubjectRequest, MapSubjectTeacherRequest, MappingFilter, Subject, SubjectTeacherMapping,
};
pub use service::SubjectService;
