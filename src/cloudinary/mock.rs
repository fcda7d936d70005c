//! Mock Admin API transport for testing (in-memory, counts calls)

use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::admin::{AdminTransport, UpstreamResponse};
use crate::error::SiteError;

/// One outbound request as the mock saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    /// Form body for the signed POST flow
    pub form: Option<BTreeMap<String, String>>,
    /// (username, password) for the basic-auth GET flow
    pub basic_auth: Option<(String, String)>,
}

/// Transport double that replays queued responses and records requests
pub struct MockTransport {
    responses: Mutex<VecDeque<UpstreamResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue the next upstream reply
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(UpstreamResponse {
            status,
            body: body.to_string(),
        });
    }

    /// Number of outbound calls performed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent outbound request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn record(&self, request: RecordedRequest) -> Result<UpstreamResponse, SiteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SiteError::transport("no mock response queued"))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminTransport for MockTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<UpstreamResponse, SiteError> {
        self.record(RecordedRequest {
            url: url.to_string(),
            form: Some(form.clone()),
            basic_auth: None,
        })
    }

    async fn get_basic(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<UpstreamResponse, SiteError> {
        self.record(RecordedRequest {
            url: url.to_string(),
            form: None,
            basic_auth: Some((username.to_string(), password.to_string())),
        })
    }
}
