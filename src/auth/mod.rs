//! Credential exchange against the identity endpoint.

mod model;
mod service;

pub use model::{
    ChangePasswordRequest, LoginRequest, LoginResponse, LogoutRequest, ResetPasswordRequest,
};
pub use service::AuthService;

pub const LOGIN_PATH: &str = "auth/login";
pub const LOGOUT_PATH: &str = "auth/logout";
pub const CHANGE_PASSWORD_PATH: &str = "auth/change-password";
pub const RESET_PASSWORD_PATH: &str = "auth/reset-password";
