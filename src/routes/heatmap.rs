//! Heatmap image delivery.
//!
//! GET /heatmap?heatmap_data=<base64>
//!
//! Decodes the string produced by /fetch back into PNG bytes. The server
//! stores nothing; whatever the client sends is decoded and returned.

use axum::{
    extract::Query,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::heatmap::EncodedImage;

pub fn routes() -> Router {
    Router::new().route("/heatmap", get(get_heatmap))
}

#[derive(Debug, Deserialize)]
struct HeatmapQuery {
    heatmap_data: EncodedImage,
}

async fn get_heatmap(Query(query): Query<HeatmapQuery>) -> Result<impl IntoResponse> {
    let png = query.heatmap_data.decode()?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
