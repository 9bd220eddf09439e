//! HTTP surface for the swatch renderer.
//!
//! Every route accepts any method and always answers `200 image/svg+xml`.

use crate::error::Result;
use crate::query::QueryParams;
use crate::svg::SVG_CONTENT_TYPE;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;
use log::{debug, info, warn};
use tokio::net::TcpListener;

/// Build the router serving `/`, `/api` and `/api/:color`.
pub fn app() -> Router {
    Router::new()
        .route("/", any(swatch_from_query))
        .route("/api", any(swatch_from_query))
        .route("/api/:color", any(swatch_from_path))
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("swatch server listening on {}", listener.local_addr()?);
    axum::serve(listener, app()).await?;
    Ok(())
}

async fn swatch_from_query(RawQuery(query): RawQuery) -> impl IntoResponse {
    respond(params_from_query(query.as_deref(), None))
}

// The path segment is the first `color` occurrence, so it wins over `?color=`.
// A segment that is not valid UTF-8 still renders, as an unrecognized color.
async fn swatch_from_path(
    color: std::result::Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let color = match color {
        Ok(Path(color)) => color,
        Err(e) => {
            warn!("ignoring undecodable color segment: {}", e);
            String::new()
        }
    };
    respond(params_from_query(query.as_deref(), Some(color)))
}

fn params_from_query(query: Option<&str>, color: Option<String>) -> QueryParams {
    let parsed = match query {
        Some(query) => QueryParams::from_query_str(query).unwrap_or_else(|e| {
            warn!("ignoring undecodable query {:?}: {}", query, e);
            QueryParams::new()
        }),
        None => QueryParams::new(),
    };

    match color {
        Some(color) => {
            let mut params = QueryParams::from_pairs([("color", color)]);
            params.extend(parsed);
            params
        }
        None => parsed,
    }
}

fn respond(params: QueryParams) -> impl IntoResponse {
    let svg = crate::render(&params);
    debug!("rendered swatch for {:?} ({} bytes)", params, svg.len());
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg)
}
