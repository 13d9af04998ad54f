use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Redirect, Response};
use tower::{Layer, Service};

use portico_core::Principal;

use crate::policy::{GateDecision, Gatekeeper};

/// Tower layer that adds the gatekeeping middleware.
#[derive(Clone)]
pub struct GateLayer {
    gatekeeper: Arc<Gatekeeper>,
}

impl GateLayer {
    pub fn new(gatekeeper: Arc<Gatekeeper>) -> Self {
        Self { gatekeeper }
    }
}

impl<S> Layer<S> for GateLayer {
    type Service = GateMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GateMiddleware {
            inner,
            gatekeeper: self.gatekeeper.clone(),
        }
    }
}

/// Tower service that gates requests before any handler runs.
///
/// Passed requests always carry a [`Principal`] extension (the anonymous
/// principal for exempt and public paths), so handlers never re-read raw
/// cookies or headers for identity.
#[derive(Clone)]
pub struct GateMiddleware<S> {
    inner: S,
    gatekeeper: Arc<Gatekeeper>,
}

impl<S> Service<Request<Body>> for GateMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let gatekeeper = self.gatekeeper.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let decision = gatekeeper.evaluate(req.uri().path(), req.headers());

            match decision {
                GateDecision::Exempt | GateDecision::PassPublic => {
                    req.extensions_mut().insert(Principal::anonymous());
                    inner.call(req).await
                }
                GateDecision::PassPrivate { principal } => {
                    req.extensions_mut().insert(principal);
                    inner.call(req).await
                }
                GateDecision::Redirect { location } => {
                    Ok(Redirect::to(&location).into_response())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Extension;
    use axum::http::{HeaderValue, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;

    use crate::builder::GatekeeperBuilder;

    async fn whoami(Extension(principal): Extension<Principal>) -> String {
        format!("{}:{}", principal.actor_id, principal.source)
    }

    fn app() -> Router {
        let gatekeeper = Arc::new(GatekeeperBuilder::new().build().unwrap());
        Router::new()
            .route("/auth/login", get(whoami))
            .route("/publications", get(whoami))
            .layer(GateLayer::new(gatekeeper))
    }

    fn request(path: &str, cookie: Option<&str>, user_id: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, HeaderValue::from_str(c).unwrap());
        }
        if let Some(id) = user_id {
            builder = builder.header("x-user-id", HeaderValue::from_str(id).unwrap());
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn public_path_reaches_handler_as_anonymous() {
        let response = app()
            .oneshot(request("/auth/login", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "0:none");
    }

    #[tokio::test]
    async fn private_path_without_credential_redirects_to_landing() {
        let response = app()
            .oneshot(request("/publications", Some("uid=7"), Some("9")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/homepublic"
        );
    }

    #[tokio::test]
    async fn private_path_with_credential_carries_principal() {
        let response = app()
            .oneshot(request("/publications", Some("dev_auth=1; uid=7"), Some("9")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "7:cookie");
    }

    #[tokio::test]
    async fn anonymous_private_request_still_proceeds() {
        let response = app()
            .oneshot(request("/publications", Some("dev_auth=1"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "0:none");
    }
}
