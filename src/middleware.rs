use crate::context::EdgestashContext;
use axum::{
    Router as AxumRouter,
    extract::Request as AxumHttpRequest,
    middleware::{self, Next},
    response::Response as AxumResponse,
};
use tracing::instrument;

/// Negotiate edgestash support, run the inner service with an
/// [`EdgestashContext`] in the request extensions, and add the edgestash
/// headers to its response.
#[instrument(skip_all, fields(uri = %request.uri()))]
pub async fn edgestash_middleware(mut request: AxumHttpRequest, next: Next) -> AxumResponse {
    let context = EdgestashContext::negotiate(request.headers());
    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;

    context.finalize(response.headers_mut());
    response
}

/// install [`edgestash_middleware`] for every route of `router`.
pub fn with_edgestash<S>(router: AxumRouter<S>) -> AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(edgestash_middleware))
}
