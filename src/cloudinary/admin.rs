//! Signed Resource Query Proxy core
//!
//! Maps a browser-facing action (`list_resources`, `search`, `tags`) onto the
//! matching Admin API endpoint, signs the parameter set, performs one awaited
//! outbound call, and reshapes the JSON for the browser. Stateless per
//! request; no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::signing::api_signature;
use crate::config::CloudinaryConfig;
use crate::constants::{ADMIN_API_BASE, DEFAULT_MAX_RESULTS};
use crate::error::SiteError;

/// Result cap for the unsigned listing variant, matching the live contract
const SIMPLE_LIST_MAX_RESULTS: u32 = 500;

/// Recognized actions on the signed proxy endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    ListResources,
    Search,
    Tags,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListResources => "list_resources",
            Self::Search => "search",
            Self::Tags => "tags",
        }
    }
}

impl FromStr for AdminAction {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list_resources" => Ok(Self::ListResources),
            "search" => Ok(Self::Search),
            "tags" => Ok(Self::Tags),
            _ => Err(SiteError::validation(
                "action",
                format!("unknown action: {}", s),
            )),
        }
    }
}

/// Actions on the unsigned (basic auth) sibling endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleAction {
    List,
    Tags,
}

impl FromStr for SimpleAction {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "tags" => Ok(Self::Tags),
            _ => Err(SiteError::validation(
                "action",
                format!("unknown action: {}", s),
            )),
        }
    }
}

/// A browser request against the signed proxy
#[derive(Debug, Clone)]
pub struct ResourceQuery {
    pub action: AdminAction,
    pub tag: Option<String>,
    pub folder: String,
}

/// Endpoint path plus the parameter set to be signed and sent
///
/// The returned map holds every parameter that will travel in the form body
/// except `signature`; signing anything else, or forgetting one of these,
/// fails authentication upstream.
fn build_request(
    query: &ResourceQuery,
    api_key: &str,
    timestamp: u64,
) -> Result<(&'static str, BTreeMap<String, String>), SiteError> {
    let mut params = BTreeMap::new();
    params.insert("api_key".to_string(), api_key.to_string());
    params.insert("timestamp".to_string(), timestamp.to_string());

    let path = match query.action {
        AdminAction::ListResources => {
            params.insert("type".to_string(), "upload".to_string());
            params.insert("prefix".to_string(), query.folder.clone());
            params.insert("max_results".to_string(), DEFAULT_MAX_RESULTS.to_string());
            params.insert("tags".to_string(), "true".to_string());
            params.insert("context".to_string(), "true".to_string());
            "/resources/image"
        }
        AdminAction::Search => {
            let tag = query.tag.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| {
                SiteError::validation("tag", "the 'search' action requires a tag")
            })?;
            params.insert("expression".to_string(), format!("tags={}", tag));
            params.insert("max_results".to_string(), DEFAULT_MAX_RESULTS.to_string());
            "/resources/search"
        }
        AdminAction::Tags => {
            params.insert("max_results".to_string(), DEFAULT_MAX_RESULTS.to_string());
            "/tags/image"
        }
    };

    Ok((path, params))
}

/// Raw upstream reply: status plus verbatim body text
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Outbound HTTP seam, mockable in tests
#[async_trait]
pub trait AdminTransport: Send + Sync {
    /// Form-encoded POST used by the signed proxy
    async fn post_form(
        &self,
        url: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<UpstreamResponse, SiteError>;

    /// Basic-auth GET used by the unsigned sibling variant
    async fn get_basic(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<UpstreamResponse, SiteError>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<UpstreamResponse, SiteError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| SiteError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SiteError::transport(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }

    async fn get_basic(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<UpstreamResponse, SiteError> {
        let response = self
            .client
            .get(url)
            .basic_auth(username, Some(password))
            .send()
            .await
            .map_err(|e| SiteError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SiteError::transport(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}

/// A single image as returned to the browser
///
/// Lossless projection of the upstream resource; nothing here is invented
/// or computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub public_id: String,
    pub tags: Vec<String>,
    pub context: Value,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub bytes: u64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    public_id: String,
    #[serde(default)]
    tags: Vec<String>,
    context: Option<Value>,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    format: String,
    #[serde(default)]
    bytes: u64,
    #[serde(default)]
    created_at: String,
    folder: Option<String>,
    #[serde(default)]
    secure_url: String,
}

impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        Resource {
            public_id: raw.public_id,
            tags: raw.tags,
            context: raw.context.unwrap_or_else(|| Value::Object(Default::default())),
            width: raw.width,
            height: raw.height,
            format: raw.format,
            bytes: raw.bytes,
            created_at: raw.created_at,
            folder: raw.folder,
            url: raw.secure_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawResourceList {
    #[serde(default)]
    resources: Vec<RawResource>,
    total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawTagList {
    #[serde(default)]
    tags: Vec<String>,
}

/// `{tags, total}` reply for tag-listing actions
#[derive(Debug, Clone, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<String>,
    pub total: usize,
}

/// `{resources, groupedByTags, total}` reply for resource-listing actions
#[derive(Debug, Clone, Serialize)]
pub struct ResourceListResponse {
    pub resources: Vec<Resource>,
    #[serde(rename = "groupedByTags")]
    pub grouped_by_tags: BTreeMap<String, Vec<Resource>>,
    pub total: u64,
}

/// Reply from either proxy variant
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AdminResponse {
    Tags(TagListResponse),
    Resources(ResourceListResponse),
}

/// Index resources under each of their tags
///
/// A resource carrying N tags appears in N buckets. `BTreeMap` keeps the
/// serialized key order stable.
pub fn group_by_tags(resources: &[Resource]) -> BTreeMap<String, Vec<Resource>> {
    let mut grouped: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
    for resource in resources {
        for tag in &resource.tags {
            grouped.entry(tag.clone()).or_default().push(resource.clone());
        }
    }
    grouped
}

fn reshape_tags(body: &str) -> Result<AdminResponse, SiteError> {
    let raw: RawTagList =
        serde_json::from_str(body).map_err(|e| SiteError::parse(e.to_string()))?;
    let total = raw.tags.len();
    Ok(AdminResponse::Tags(TagListResponse {
        tags: raw.tags,
        total,
    }))
}

fn reshape_resources(body: &str) -> Result<AdminResponse, SiteError> {
    let raw: RawResourceList =
        serde_json::from_str(body).map_err(|e| SiteError::parse(e.to_string()))?;
    let resources: Vec<Resource> = raw.resources.into_iter().map(Resource::from).collect();
    let total = raw.total_count.unwrap_or(resources.len() as u64);
    let grouped_by_tags = group_by_tags(&resources);
    Ok(AdminResponse::Resources(ResourceListResponse {
        resources,
        grouped_by_tags,
        total,
    }))
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Client for the Admin API, generic over the outbound transport
pub struct AdminClient {
    transport: Arc<dyn AdminTransport>,
}

impl AdminClient {
    pub fn new(transport: Arc<dyn AdminTransport>) -> Self {
        Self { transport }
    }

    /// Signed query flow: credentials check, parameter build, sign, POST,
    /// reshape
    pub async fn query(
        &self,
        cloudinary: &CloudinaryConfig,
        query: &ResourceQuery,
    ) -> Result<AdminResponse, SiteError> {
        let (cloud_name, api_key, api_secret) = cloudinary.credentials()?;

        let (path, mut params) = build_request(query, api_key, unix_timestamp())?;
        let signature = api_signature(&params, api_secret);
        params.insert("signature".to_string(), signature);

        let url = format!("{}/{}{}", ADMIN_API_BASE, cloud_name, path);
        tracing::debug!(action = query.action.as_str(), url = %url, "Querying Admin API");

        let response = self.transport.post_form(&url, &params).await?;
        if !response.is_success() {
            return Err(SiteError::upstream(response.status, response.body));
        }

        match query.action {
            AdminAction::Tags => reshape_tags(&response.body),
            AdminAction::ListResources | AdminAction::Search => {
                reshape_resources(&response.body)
            }
        }
    }

    /// Unsigned sibling flow: basic auth GET, same reshape
    pub async fn query_simple(
        &self,
        cloudinary: &CloudinaryConfig,
        action: SimpleAction,
        folder: &str,
    ) -> Result<AdminResponse, SiteError> {
        let (cloud_name, api_key, api_secret) = cloudinary.credentials()?;

        let url = match action {
            SimpleAction::List => format!(
                "{}/{}/resources/image?type=upload&max_results={}&tags=true&prefix={}",
                ADMIN_API_BASE, cloud_name, SIMPLE_LIST_MAX_RESULTS, folder
            ),
            SimpleAction::Tags => format!(
                "{}/{}/tags/image?max_results={}",
                ADMIN_API_BASE, cloud_name, DEFAULT_MAX_RESULTS
            ),
        };

        let response = self.transport.get_basic(&url, api_key, api_secret).await?;
        if !response.is_success() {
            return Err(SiteError::upstream(response.status, response.body));
        }

        match action {
            SimpleAction::Tags => reshape_tags(&response.body),
            SimpleAction::List => reshape_resources(&response.body),
        }
    }
}
