use anyhow::Result;
use axum::{Router as AxumRouter, body::Body, response::Response as AxumResponse};
use http::{HeaderMap, Request};
use http_body_util::BodyExt as _;
use tower::ServiceExt as _;

pub(crate) trait AxumRouterTestExt {
    async fn get_with_headers<F>(&self, path: &str, f: F) -> Result<AxumResponse>
    where
        F: FnOnce(&mut HeaderMap);

    async fn get(&self, path: &str) -> Result<AxumResponse> {
        self.get_with_headers(path, |_| {}).await
    }
}

impl AxumRouterTestExt for AxumRouter {
    async fn get_with_headers<F>(&self, path: &str, f: F) -> Result<AxumResponse>
    where
        F: FnOnce(&mut HeaderMap),
    {
        let mut request = Request::builder().uri(path).body(Body::empty())?;
        f(request.headers_mut());

        Ok(self.clone().oneshot(request).await?)
    }
}

pub(crate) trait AxumResponseTestExt {
    async fn text(self) -> Result<String>;
}

impl AxumResponseTestExt for AxumResponse {
    async fn text(self) -> Result<String> {
        let body = self.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }
}
