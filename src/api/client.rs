//! HTTP transport for the Skyclerk API
//!
//! Every request goes through one of the verb helpers on [`Client`], which set
//! the standard headers and hand off to `do_request` for status handling.
//! Responses come back as raw bytes; the resource modules decode them.

use std::error::Error as _;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::RequestBuilder;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::mask_string;
use crate::error::{SkyclerkError, SkyclerkResult};

/// Timeout applied to every request unless the builder overrides it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Versioned prefix for account-scoped resources
pub const API_PREFIX: &str = "/api/v3";

const JSON: &str = "application/json";

/// Query parameters as ordered key/value pairs
pub type Params<'a> = [(&'a str, &'a str)];

/// Authenticated client for one API host and one account
pub struct Client {
    base_url: String,
    access_token: String,
    account_id: u64,
    http: reqwest::blocking::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("access_token", &mask_string(&self.access_token))
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Client {
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Create a client with the default timeout
    ///
    /// No network I/O happens here.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        account_id: u64,
    ) -> SkyclerkResult<Self> {
        Self::builder(base_url)
            .access_token(access_token)
            .account_id(account_id)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Point the client at another host (tests, staging)
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = normalize_base_url(base_url.into());
    }

    /// Switch the account used by account-scoped paths
    pub fn set_account_id(&mut self, account_id: u64) {
        self.account_id = account_id;
    }

    /// `/api/v3/{account_id}{suffix}`
    pub fn account_path(&self, suffix: &str) -> String {
        format!("{}/{}{}", API_PREFIX, self.account_id, suffix)
    }

    /// Join base URL and path, appending every parameter whose value is non-empty
    pub fn build_url(&self, path: &str, params: &Params<'_>) -> SkyclerkResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| SkyclerkError::InvalidUrl(e.to_string()))?;

        let mut present = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .peekable();
        if present.peek().is_some() {
            url.query_pairs_mut().extend_pairs(present);
        }

        Ok(url)
    }

    /// Authenticated GET
    pub fn get(&self, path: &str, params: &Params<'_>) -> SkyclerkResult<Vec<u8>> {
        let url = self.build_url(path, params)?;
        let request = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, JSON);

        self.do_request(request)
    }

    /// Authenticated POST with a JSON body
    pub fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> SkyclerkResult<Vec<u8>> {
        let url = self.build_url(path, &[])?;
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(marshal(body)?);

        self.do_request(request)
    }

    /// POST with a JSON body and no `Authorization` header (token exchange)
    pub fn post_no_auth<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> SkyclerkResult<Vec<u8>> {
        let url = self.build_url(path, &[])?;
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(marshal(body)?);

        self.do_request(request)
    }

    /// Authenticated PUT with a JSON body
    pub fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> SkyclerkResult<Vec<u8>> {
        let url = self.build_url(path, &[])?;
        let request = self
            .http
            .put(url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(marshal(body)?);

        self.do_request(request)
    }

    /// Authenticated DELETE
    pub fn delete(&self, path: &str) -> SkyclerkResult<Vec<u8>> {
        let url = self.build_url(path, &[])?;
        let request = self
            .http
            .delete(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, JSON);

        self.do_request(request)
    }

    /// Authenticated multipart POST carrying `fields` plus the file as `file`
    ///
    /// The file is read and closed before the request is sent.
    pub fn upload_file(
        &self,
        path: &str,
        file_path: impl AsRef<Path>,
        fields: &Params<'_>,
    ) -> SkyclerkResult<Vec<u8>> {
        let file_path = file_path.as_ref();

        let contents = {
            let mut file = std::fs::File::open(file_path).map_err(|e| {
                SkyclerkError::LocalFile(format!("{}: {}", file_path.display(), e))
            })?;
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).map_err(|e| {
                SkyclerkError::LocalFile(format!("{}: {}", file_path.display(), e))
            })?;
            contents
        };

        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut form = Form::new();
        for (key, value) in fields {
            form = form.text(key.to_string(), value.to_string());
        }
        form = form.part("file", Part::bytes(contents).file_name(file_name));

        let url = self.build_url(path, &[])?;
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, JSON)
            .multipart(form);

        self.do_request(request)
    }

    fn do_request(&self, request: RequestBuilder) -> SkyclerkResult<Vec<u8>> {
        let request = request
            .build()
            .map_err(|e| SkyclerkError::Request(describe(e)))?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        let started = Instant::now();
        tracing::debug!(%method, %path, "sending request");

        let response = self
            .http
            .execute(request)
            .map_err(|e| SkyclerkError::Transport(describe(e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| SkyclerkError::ResponseBody(describe(e)))?;

        tracing::debug!(
            %method,
            %path,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );

        if !status.is_success() {
            return Err(SkyclerkError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    base_url: String,
    access_token: String,
    account_id: u64,
    timeout: Duration,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            access_token: String::new(),
            account_id: 0,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    pub fn account_id(mut self, account_id: u64) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SkyclerkResult<Client> {
        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("skyclerk-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkyclerkError::Config(format!("unable to build HTTP client: {}", e)))?;

        Ok(Client {
            base_url: self.base_url,
            access_token: self.access_token,
            account_id: self.account_id,
            http,
        })
    }
}

/// Decode a response body, naming the payload in the error
pub(crate) fn decode<T: DeserializeOwned>(data: &[u8], what: &str) -> SkyclerkResult<T> {
    serde_json::from_slice(data)
        .map_err(|e| SkyclerkError::Json(format!("unable to parse {} response: {}", what, e)))
}

fn marshal<T: Serialize + ?Sized>(body: &T) -> SkyclerkResult<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| SkyclerkError::Json(format!("unable to marshal request body: {}", e)))
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

// The URL may carry the access token (logout), so it is dropped from the message.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
