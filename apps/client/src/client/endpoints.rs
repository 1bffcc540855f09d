// Paths are relative to the client's base URL.

pub const REGISTER: &str = "/api/auth/register";
pub const LOGIN: &str = "/api/auth/login";
pub const LOGOUT: &str = "/api/auth/logout";
pub const IMPORT_RESUME: &str = "/api/resume/import";

/// Locale sent with every signup. Login never sends one.
pub const SIGNUP_LOCALE: &str = "en-US";

pub fn print_resume(resume_id: &str) -> String {
    format!("/api/resume/print/{resume_id}")
}

pub fn resume(resume_id: &str) -> String {
    format!("/api/resume/{resume_id}")
}
