//! HTTP handlers
//!
//! Every fault is converted to the uniform `{error, details}` JSON envelope
//! at this boundary; nothing below it touches the transport layer.

use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::brand;
use crate::cloudinary::{AdminAction, AdminResponse, ResourceQuery, SimpleAction};
use crate::error::SiteError;
use crate::seo;
use crate::sitemap;

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    action: Option<String>,
    tag: Option<String>,
    folder: Option<String>,
}

/// Signed Admin API proxy: list resources, search by tag, list tags
#[get("/api/cloudinary/tags")]
pub async fn cloudinary_tags(
    query: web::Query<ProxyQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    match signed_query(&state, query.into_inner()).await {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(err) => error_response(&err),
    }
}

async fn signed_query(state: &AppState, query: ProxyQuery) -> Result<AdminResponse, SiteError> {
    let action: AdminAction = query
        .action
        .as_deref()
        .unwrap_or(AdminAction::ListResources.as_str())
        .parse()?;

    let folder = query
        .folder
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| state.config.site.default_folder.clone());

    let resource_query = ResourceQuery {
        action,
        tag: query.tag,
        folder,
    };

    state
        .admin
        .query(&state.config.cloudinary, &resource_query)
        .await
}

/// Unsigned sibling variant: basic-auth listing with tag grouping
#[get("/api/cloudinary/simple")]
pub async fn cloudinary_simple(
    query: web::Query<ProxyQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    match simple_query(&state, query.into_inner()).await {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(err) => error_response(&err),
    }
}

async fn simple_query(state: &AppState, query: ProxyQuery) -> Result<AdminResponse, SiteError> {
    let action: SimpleAction = query.action.as_deref().unwrap_or("list").parse()?;

    let folder = query
        .folder
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| state.config.site.default_folder.clone());

    state
        .admin
        .query_simple(&state.config.cloudinary, action, &folder)
        .await
}

/// Generated sitemap, stamped with today's date
#[get("/sitemap.xml")]
pub async fn sitemap_xml(state: web::Data<AppState>) -> HttpResponse {
    let xml = sitemap::render(&state.config.site.base_url, Utc::now().date_naive());
    HttpResponse::Ok()
        .content_type("application/xml")
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(xml)
}

/// Brand design tokens for the front-end
#[get("/api/brand")]
pub async fn brand_tokens() -> HttpResponse {
    HttpResponse::Ok().json(brand::tokens())
}

/// JSON-LD LodgingBusiness document embedded by the pages
#[get("/api/seo/schema")]
pub async fn seo_schema(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(seo::local_business_schema(&state.config.site.base_url))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// Uniform `{error, details}` envelope with the mapped status code
fn error_response(err: &SiteError) -> HttpResponse {
    let status = StatusCode::from_u16(err.to_http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let (error, details) = match err {
        SiteError::Config(msg) => ("Missing Cloudinary credentials".to_string(), msg.clone()),
        SiteError::Validation { .. } => ("Invalid request".to_string(), err.to_string()),
        SiteError::Upstream { status, body } => {
            (format!("Cloudinary API error: {}", status), body.clone())
        }
        SiteError::Transport(msg) | SiteError::Parse(msg) | SiteError::Internal(msg) => {
            ("Failed to fetch Cloudinary data".to_string(), msg.clone())
        }
    };

    if status.is_server_error() {
        tracing::error!(kind = err.kind(), %err, "Request failed");
    } else {
        tracing::warn!(kind = err.kind(), %err, "Request rejected");
    }

    HttpResponse::build(status).json(json!({
        "error": error,
        "details": details,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_maps_status() {
        let response = error_response(&SiteError::validation("action", "unknown action: x"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&SiteError::upstream(403, "denied"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = error_response(&SiteError::config("missing key"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
