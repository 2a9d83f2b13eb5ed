//! Demo origin serving a product page with edge-deferred fragments, and the
//! JSON documents those fragments are hydrated from.

use crate::{Config, context::EdgestashContext, error::Error, middleware::with_edgestash};
use anyhow::{Context as _, Result};
use askama::Template;
use axum::{
    Json, Router as AxumRouter,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Serialize;
use std::sync::LazyLock;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, instrument};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Product {
    pub(crate) name: String,
    pub(crate) price: String,
    pub(crate) stock: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct User {
    pub(crate) name: String,
    pub(crate) cart_items: u32,
}

static PRODUCT: LazyLock<Product> = LazyLock::new(|| Product {
    name: "Trail Runner 2".into(),
    price: "129.00".into(),
    stock: 12,
});

static GUEST: LazyLock<User> = LazyLock::new(|| User {
    name: "Guest".into(),
    cart_items: 0,
});

#[derive(Template)]
#[template(path = "product.html")]
struct ProductPage<'a> {
    edge: EdgestashContext,
    product: &'a Product,
    user: &'a User,
}

#[instrument(skip_all)]
async fn product_page_handler(edge: EdgestashContext) -> Result<impl IntoResponse, Error> {
    let page = ProductPage {
        edge,
        product: &PRODUCT,
        user: &GUEST,
    };

    Ok(Html(page.render()?))
}

async fn product_json_handler() -> impl IntoResponse {
    Json(PRODUCT.clone())
}

async fn user_json_handler() -> impl IntoResponse {
    Json(GUEST.clone())
}

pub fn build_router(config: &Config) -> AxumRouter {
    // the JSON documents are fetched by the edge itself and don't take part
    // in the negotiation.
    with_edgestash(AxumRouter::new().route("/", get(product_page_handler)))
        .route("/product.json", get(product_json_handler))
        .route("/user.json", get(user_json_handler))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: Config) -> Result<()> {
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!(addr = %config.server_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
