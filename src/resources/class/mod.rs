mod model;
mod service;

pub use model::{
    AcademicYear, Class, ClassSection, CreateClassRequest, CreateClassSectionRequest,
    CreateSectionRequest, Section,
};
pub use service::ClassService;
