//! Blocking client for the Reactive Resume HTTP API.
//!
//! One method per endpoint, each a single request: check the status, decode the
//! JSON body, hand it back. No retries, no caching, no translation of failures.
use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ResumeError, Result};
use crate::models::resume::import_body;
use crate::models::{
    ImportResumeResponse, LoginResponse, LogoutResponse, PrintResumeResponse, SignupResponse,
};
use crate::session::{build_session, Ownership, Session};

pub mod endpoints;

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    username: &'a str,
    locale: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

/// Handle to a Reactive Resume server.
///
/// Dropping the client closes it, so a binding's scope is also the lifetime of
/// an owned session. A caller-supplied session outlives the client untouched.
#[derive(Debug)]
pub struct ResumeClient {
    base_url: String,
    session: Session,
}

impl ResumeClient {
    /// Client with its own session and default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let http = build_session(&config)?;
        info!("Reactive Resume client ready for {base_url}");

        Ok(Self {
            base_url,
            session: Session::owned(http),
        })
    }

    /// Client over a session the caller configured and keeps responsibility for.
    pub fn with_session(base_url: impl Into<String>, http: Client) -> Result<Self> {
        let base_url = ClientConfig::new(base_url).normalized_base_url()?;
        info!("Reactive Resume client ready for {base_url} (caller-supplied session)");

        Ok(Self {
            base_url,
            session: Session::shared(http),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP session.
    pub fn http(&self) -> Result<&Client> {
        self.session.get()
    }

    pub fn owns_session(&self) -> bool {
        self.session.ownership() == Ownership::Owned
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    /// Releases the session if this client built it. Idempotent.
    /// Later calls on a closed owned client fail with [`ResumeError::Closed`].
    pub fn close(&mut self) {
        self.session.close();
    }

    /// POST /api/auth/register
    pub fn signup(
        &self,
        name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResponse> {
        let body = SignupRequest {
            name,
            email,
            username,
            locale: endpoints::SIGNUP_LOCALE,
            password,
        };
        let request = self.request(Method::POST, endpoints::REGISTER)?.json(&body);
        let response: SignupResponse = self.send_json(request)?;

        info!("Signed up as {} (user {})", response.user.username, response.user.id);
        Ok(response)
    }

    /// POST /api/auth/login
    pub fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            identifier,
            password,
        };
        let request = self.request(Method::POST, endpoints::LOGIN)?.json(&body);
        let response: LoginResponse = self.send_json(request)?;

        info!("Logged in as {} (user {})", response.user.username, response.user.id);
        Ok(response)
    }

    /// POST /api/auth/logout
    pub fn logout(&self) -> Result<LogoutResponse> {
        let request = self.request(Method::POST, endpoints::LOGOUT)?;
        self.send_json(request)
    }

    /// POST /api/resume/import
    ///
    /// The resume is sent under a `data` key unless it already has one.
    pub fn import_resume<T: Serialize + ?Sized>(&self, resume: &T) -> Result<ImportResumeResponse> {
        let body = import_body(resume)?;
        let request = self.request(Method::POST, endpoints::IMPORT_RESUME)?.json(&body);
        let imported: ImportResumeResponse = self.send_json(request)?;

        info!("Imported resume '{}' as {}", imported.title, imported.id);
        Ok(imported)
    }

    /// Reads a JSON resume from disk and imports it.
    pub fn import_resume_from_path(&self, path: impl AsRef<Path>) -> Result<ImportResumeResponse> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(ResumeError::io(path))?;
        let resume: Value = serde_json::from_str(&text)?;
        debug!("Loaded resume JSON from {}", path.display());

        self.import_resume(&resume)
    }

    /// GET /api/resume/print/{id}
    pub fn print_resume(&self, resume_id: &str) -> Result<PrintResumeResponse> {
        let request = self.request(Method::GET, &endpoints::print_resume(resume_id))?;
        self.send_json(request)
    }

    /// DELETE /api/resume/{id}
    pub fn delete_resume(&self, resume_id: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &endpoints::resume(resume_id))?;
        self.send(request)?;

        info!("Deleted resume {resume_id}");
        Ok(())
    }

    /// Imports the resume file at `resume_path`, prints it, and returns the PDF URL.
    pub fn export_resume(&self, resume_path: impl AsRef<Path>) -> Result<String> {
        let imported = self.import_resume_from_path(resume_path)?;
        self.export_resume_id(&imported.id)
    }

    /// Prints an already-imported resume and returns the PDF URL.
    pub fn export_resume_id(&self, resume_id: &str) -> Result<String> {
        let printed = self.print_resume(resume_id)?;
        debug!("Resume {resume_id} printed to {}", printed.url);
        Ok(printed.url)
    }

    /// Fetches the rendered PDF. Relative URLs resolve against the base URL.
    pub fn fetch_pdf(&self, url: &str) -> Result<Bytes> {
        let target = self.resolve(url)?;
        let http = self.http()?;
        debug!("GET {target}");

        let response = self.send(http.get(target))?;
        Ok(response.bytes()?)
    }

    /// Downloads the PDF at `url` to `destination`, overwriting any existing file.
    pub fn download_pdf(&self, url: &str, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref();
        let pdf = self.fetch_pdf(url)?;
        fs::write(destination, &pdf).map_err(ResumeError::io(destination))?;

        info!("Wrote {} bytes to {}", pdf.len(), destination.display());
        Ok(destination.to_path_buf())
    }

    /// Import, print, download, and (when `cleanup` is set) delete the server copy.
    ///
    /// The imported id is printed directly; the resume is imported exactly once.
    /// A failing step stops the pipeline and leaves earlier side effects in place,
    /// including the imported resume.
    pub fn resume_json_to_pdf<T: Serialize + ?Sized>(
        &self,
        resume_json: &T,
        resume_path: impl AsRef<Path>,
        cleanup: bool,
    ) -> Result<PathBuf> {
        let imported = self.import_resume(resume_json)?;
        let url = self.export_resume_id(&imported.id)?;
        let destination = self.download_pdf(&url, resume_path)?;

        if cleanup {
            self.delete_resume(&imported.id)?;
        }

        Ok(destination)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let http = self.http()?;
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        Ok(http.request(method, url))
    }

    /// Sends the request and rejects any non-2xx status before the body is read as JSON.
    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();

        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().unwrap_or_default();
            warn!("Reactive Resume returned {status} for {url}: {body}");
            return Err(ResumeError::from_status(status, url, body));
        }

        Ok(response)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request)?;
        let body = response.bytes()?;
        debug!("Decoding {} byte response", body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    /// Absolute URLs pass through. Relative ones append to the base URL's path.
    fn resolve(&self, url: &str) -> Result<Url> {
        let invalid = |source| ResumeError::InvalidUrl {
            url: url.to_string(),
            source,
        };

        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(&format!("{}/", self.base_url)).map_err(invalid)?;
                base.join(url.trim_start_matches('/')).map_err(invalid)
            }
            Err(source) => Err(invalid(source)),
        }
    }
}

impl Drop for ResumeClient {
    fn drop(&mut self) {
        self.close();
    }
}
