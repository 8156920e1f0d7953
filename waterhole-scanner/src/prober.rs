use crate::error::Result;
use crate::result::{ErrorKind, ErrorRow, ProbeOutcome, ProbeReport, ResultRow};
use crate::target::{ProbeTarget, build_targets};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(usize, &ProbeOutcome) + Send + Sync>;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP settings shared by every request of a run
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

impl ProbeConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

/// Issues one GET per target, one at a time, and sorts each outcome into a
/// response row or an error row.
pub struct Prober {
    client: Client,
    config: ProbeConfig,
    progress_callback: Option<ProgressCallback>,
}

impl Prober {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        // A limit of zero records the 3xx itself instead of failing on it
        let redirect_policy = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects)
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(redirect_policy)
            .build()?;

        Ok(Self {
            client,
            config,
            progress_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe every path on every domain. Paths are the outer loop.
    pub async fn run(&self, paths: &[String], domains: &[String]) -> ProbeReport {
        let targets = build_targets(paths, domains);
        info!(
            "Probing {} targets ({} paths x {} domains)",
            targets.len(),
            paths.len(),
            domains.len()
        );

        let mut report = ProbeReport::new();
        for (idx, target) in targets.iter().enumerate() {
            let outcome = self.probe(target).await;

            if let Some(ref callback) = self.progress_callback {
                callback(idx, &outcome);
            }

            report.record(outcome);
        }

        info!(
            "Probe complete. {} responses, {} errors",
            report.results.len(),
            report.errors.len()
        );
        report
    }

    /// Probe a single target. Never fails: request errors become error rows.
    pub async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        let website = target.url();

        let url = match target.parse_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("Not probing {}: {}", website, e);
                return ProbeOutcome::Failure(ErrorRow {
                    error_type: ErrorKind::Other,
                    website,
                });
            }
        };

        debug!("Probing {}", url);

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("{} -> {}", website, status);
                ProbeOutcome::Response(ResultRow {
                    http_response: status,
                    website,
                })
            }
            Err(e) => {
                let error_type = classify_error(&e);
                warn!("{} failed ({}): {}", website, error_type, e);
                ProbeOutcome::Failure(ErrorRow { error_type, website })
            }
        }
    }
}

/// Map a request error onto the error taxonomy.
///
/// Timeouts win over connect errors, so a connect timeout is a `Timeout`.
pub fn classify_error(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_connect() {
        ErrorKind::ConnectionError
    } else {
        ErrorKind::Other
    }
}
