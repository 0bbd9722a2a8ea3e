mod model;
mod service;

pub use model::{
    AssignStaffRoleRequest, AssignedRole, OnboardStaffRequest, Staff, StaffFilter, StaffRole,
    StaffRoleType, StaffType, UpdateStaffRequest,
};
pub use service::StaffService;
