pub mod resume;
pub mod user;

pub use resume::{ImportResumeResponse, PrintResumeResponse};
pub use user::{AuthenticatedResponse, AuthenticatedUser, LoginResponse, LogoutResponse, SignupResponse};
