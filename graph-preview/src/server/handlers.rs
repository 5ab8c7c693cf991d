// HTTP request handlers
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::config::EnvironmentReport;
use crate::fetch::{fetch_with_retry, FetchOutcome};
use crate::graph::GraphFailure;
use crate::renderers::{render_content_page, render_not_found_page, HtmlRenderer, ReportRenderer};
use crate::report::PreviewReport;
use crate::server::state::AppState;
use crate::traits::ContentSource;
use crate::types::PreviewParams;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Preview server is running")
}

/// Masked view of the configuration the server is running with
pub async fn debug_environment<S>(State(state): State<AppState<S>>) -> Json<EnvironmentReport>
where
    S: ContentSource + 'static,
{
    Json(EnvironmentReport::from_config(&state.config))
}

/// Preview endpoint opened by the CMS editor
pub async fn preview_handler<S>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String>
where
    S: ContentSource + 'static,
{
    let params = PreviewParams::from_pairs(pairs);
    info!(
        "Preview requested for key {:?} (ver {:?}, loc {:?}, ctx {:?})",
        params.key, params.ver, params.loc, params.ctx
    );

    match fetch_with_retry(state.source.as_ref(), &params, state.retry_policy).await {
        FetchOutcome::Success(content) => {
            Html(render_content_page(&content, &params, state.cms_url()))
        }
        FetchOutcome::Failure(failure) => Html(render_report(&failure, &params)),
    }
}

/// Published content resolved by URL path
pub async fn content_by_path_handler<S>(
    State(state): State<AppState<S>>,
    Path(path): Path<String>,
) -> Response
where
    S: ContentSource + 'static,
{
    render_path(&state, &path).await
}

/// Published content for the site root
pub async fn root_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: ContentSource + 'static,
{
    render_path(&state, "").await
}

async fn render_path<S>(state: &AppState<S>, path: &str) -> Response
where
    S: ContentSource + 'static,
{
    let params = PreviewParams::default();

    match state.source.get_content_by_path(path).await {
        Ok(items) => match items.into_iter().next() {
            Some(content) => {
                Html(render_content_page(&content, &params, state.cms_url())).into_response()
            }
            None => {
                info!("No content found for path /{}", path.trim_start_matches('/'));
                (StatusCode::NOT_FOUND, Html(render_not_found_page())).into_response()
            }
        },
        Err(failure) => Html(render_report(&failure, &params)).into_response(),
    }
}

fn render_report(failure: &GraphFailure, params: &PreviewParams) -> String {
    warn!("Rendering error report for {}", failure);
    HtmlRenderer::new().render(&PreviewReport::build(failure, params))
}
