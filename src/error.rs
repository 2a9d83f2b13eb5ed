use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// a handler asked for the edgestash context, but the middleware isn't
    /// installed on its route.
    #[error("edgestash middleware is not installed for this route")]
    MissingContext,

    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> AxumResponse {
        error!(err = %self, "internal error while handling request");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::AxumResponseTestExt as _;

    #[tokio::test]
    async fn missing_context_is_internal_server_error() -> anyhow::Result<()> {
        let response = Error::MissingContext.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text().await?, "internal server error");

        Ok(())
    }
}
