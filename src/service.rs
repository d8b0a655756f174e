//! Remote test-execution provider
//!
//! The provider is an external collaborator behind a single-operation
//! trait. The concrete client here speaks JSON over HTTP with basic
//! authentication; the endpoint is the configured server URL with the
//! fixed service path appended.

use async_trait::async_trait;
use serde::Serialize;

use crate::common::{Error, Result};
use crate::config::{Configuration, PropertyKey};
use crate::result::TestResult;

/// Fixed service path appended to the configured server URL.
const SERVICE_PATH: &str = "/ws/unittestcase/RunTest";

/// Username used when the configuration does not set one.
const DEFAULT_USERNAME: &str = "su";

/// Password used when the configuration does not set one.
const DEFAULT_PASSWORD: &str = "gw";

/// Resolved address and credentials of the test-execution service.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Full service URL
    pub url: reqwest::Url,
    /// Username for the invocation
    pub username: String,
    /// Password for the invocation
    pub password: String,
    /// Timeout property, forwarded opaquely; never enforced locally
    pub timeout: Option<String>,
}

impl Endpoint {
    /// Build the endpoint from the resolved configuration.
    ///
    /// A missing `url` property is fatal, as is a value that does not
    /// parse as a URL once the service path is appended.
    pub fn from_config(config: &Configuration) -> Result<Endpoint> {
        let server = config.get(PropertyKey::Url).ok_or(Error::UrlNotSet)?;
        let url = reqwest::Url::parse(&format!("{server}{SERVICE_PATH}"))
            .map_err(|_| Error::BadServerUrl {
                url: server.to_string(),
            })?;
        Ok(Endpoint {
            url,
            username: config
                .get(PropertyKey::Username)
                .unwrap_or(DEFAULT_USERNAME)
                .to_string(),
            password: config
                .get(PropertyKey::Password)
                .unwrap_or(DEFAULT_PASSWORD)
                .to_string(),
            timeout: config.get(PropertyKey::Timeout).map(str::to_string),
        })
    }
}

/// The external test-execution provider's single operation.
#[async_trait]
pub trait TestService: Send + Sync {
    /// Run the named test suite on the server, writing reports to the
    /// given destination, and return the aggregate result.
    async fn run_test(
        &self,
        endpoint: &Endpoint,
        testsuite: &str,
        reports: &str,
    ) -> Result<TestResult>;
}

/// Request payload for the service invocation.
#[derive(Debug, Serialize)]
struct RunTestRequest<'a> {
    testsuite: &'a str,
    reports: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<&'a str>,
}

/// HTTP client for the test-execution service.
pub struct HttpTestService {
    client: reqwest::Client,
}

impl HttpTestService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTestService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestService for HttpTestService {
    async fn run_test(
        &self,
        endpoint: &Endpoint,
        testsuite: &str,
        reports: &str,
    ) -> Result<TestResult> {
        let request = RunTestRequest {
            testsuite,
            reports,
            timeout: endpoint.timeout.as_deref(),
        };

        tracing::debug!(url = %endpoint.url, testsuite, "invoking remote test run");

        let response = self
            .client
            .post(endpoint.url.clone())
            .basic_auth(&endpoint.username, Some(&endpoint.password))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::RemoteRejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<TestResult>().await?)
    }
}
