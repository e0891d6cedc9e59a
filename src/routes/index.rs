use axum::{response::Html, routing::get, Router};

use crate::views;

pub fn routes() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<String> {
    Html(views::index_page(None))
}
