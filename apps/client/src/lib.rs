//! Client library for a Reactive Resume server: authenticate, import resumes,
//! render them to PDF server-side, and download the result.
//!
//! ```no_run
//! use reactive_resume::ResumeClient;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), reactive_resume::ResumeError> {
//! let client = ResumeClient::new("http://localhost:3000")?;
//! client.login("ada", "pw123!")?;
//! let resume = json!({"basics": {"name": "Ada Lovelace"}});
//! client.resume_json_to_pdf(&resume, "ada.pdf", true)?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
mod session;

pub use client::ResumeClient;
pub use config::ClientConfig;
pub use errors::{ResumeError, Result};
pub use models::{
    AuthenticatedResponse, AuthenticatedUser, ImportResumeResponse, LoginResponse, LogoutResponse,
    PrintResumeResponse, SignupResponse,
};
pub use session::Ownership;
