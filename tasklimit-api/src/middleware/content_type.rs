//! JSON content-type middleware
//!
//! Every response from this API is JSON, including error bodies and the
//! router's built-in 404/405 responses. This layer stamps
//! `Content-Type: application/json` on all of them so clients can rely on
//! the header regardless of which code path produced the response.
//!
//! # Example
//!
//! ```no_run
//! use axum::Router;
//! use tasklimit_api::middleware::content_type::JsonContentTypeLayer;
//!
//! let app: Router = Router::new()
//!     .layer(JsonContentTypeLayer);
//! ```

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    response::Response,
};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Layer that forces `Content-Type: application/json` on every response
#[derive(Clone, Copy, Default)]
pub struct JsonContentTypeLayer;

impl<S> Layer<S> for JsonContentTypeLayer {
    type Service = JsonContentTypeMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JsonContentTypeMiddleware { inner }
    }
}

/// Service that applies the JSON content-type header
#[derive(Clone)]
pub struct JsonContentTypeMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for JsonContentTypeMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let future = self.inner.call(request);

        Box::pin(async move {
            let mut response = future.await?;

            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );

            Ok(response)
        })
    }
}
