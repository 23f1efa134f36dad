// Standard library
use std::future::Future;
use std::sync::Arc;

// 3rd party crates
use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

// Project imports
use crate::checker::Snapshot;

// Current module imports
use super::page::render_index;
use super::types::{AddressesResponse, AppState, Ipv4Response, Ipv6Response};

/// Builds the router. Every handler reads the checker's published snapshot.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/json", get(addresses))
        .route("/json/v4", get(ipv4))
        .route("/json/v6", get(ipv6))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot: Arc<Snapshot> = state.checker.snapshot();
    Html(render_index(&snapshot, state.refresh_secs))
}

async fn addresses(State(state): State<AppState>) -> Json<AddressesResponse> {
    let snapshot: Arc<Snapshot> = state.checker.snapshot();
    Json(AddressesResponse {
        ipv4_address: snapshot.v4.address.clone(),
        ipv6_address: snapshot.v6.address.clone(),
        ipv4_status: snapshot.v4.status,
        ipv6_status: snapshot.v6.status,
    })
}

async fn ipv4(State(state): State<AppState>) -> Json<Ipv4Response> {
    let snapshot: Arc<Snapshot> = state.checker.snapshot();
    Json(Ipv4Response {
        ipv4_address: snapshot.v4.address.clone(),
        ipv4_status: snapshot.v4.status,
    })
}

async fn ipv6(State(state): State<AppState>) -> Json<Ipv6Response> {
    let snapshot: Arc<Snapshot> = state.checker.snapshot();
    Json(Ipv6Response {
        ipv6_address: snapshot.v6.address.clone(),
        ipv6_status: snapshot.v6.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Checker;
    use crate::utility::ip_fetcher::{
        AddressFamily, AddressFetcher, FetchError, FetchOutcome, Outage,
    };
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    /// IPv4 answers, IPv6 is unreachable.
    struct V4Only;

    #[async_trait]
    impl AddressFetcher for V4Only {
        async fn fetch(&self, family: AddressFamily) -> Result<FetchOutcome, FetchError> {
            Ok(match family {
                AddressFamily::V4 => FetchOutcome::Success("203.0.113.5".into()),
                AddressFamily::V6 => FetchOutcome::Down(Outage::NetworkUnreachable),
            })
        }
    }

    async fn app(cycles: usize) -> Router {
        let checker = Arc::new(Checker::new(Arc::new(V4Only), Duration::from_secs(15)));
        for _ in 0..cycles {
            checker.check().await;
        }
        router(AppState {
            checker,
            refresh_secs: 15,
        })
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, body) = get_body(app, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn json_reports_both_families() {
        let body = get_json(app(3).await, "/json").await;
        assert_eq!(
            body,
            json!({
                "ipv4Address": "203.0.113.5",
                "ipv6Address": null,
                "ipv4Status": "ok",
                "ipv6Status": "error",
            })
        );
    }

    #[tokio::test]
    async fn json_before_first_cycle_is_unconfirmed() {
        let body = get_json(app(0).await, "/json").await;
        assert_eq!(
            body,
            json!({
                "ipv4Address": null,
                "ipv6Address": null,
                "ipv4Status": "warning",
                "ipv6Status": "warning",
            })
        );
    }

    #[tokio::test]
    async fn single_family_endpoints() {
        let v4 = get_json(app(1).await, "/json/v4").await;
        assert_eq!(
            v4,
            json!({ "ipv4Address": "203.0.113.5", "ipv4Status": "ok" })
        );

        let v6 = get_json(app(1).await, "/json/v6").await;
        assert_eq!(v6, json!({ "ipv6Address": null, "ipv6Status": "warning" }));
    }

    #[tokio::test]
    async fn index_renders_html() {
        let (status, body) = get_body(app(1).await, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("203.0.113.5"));
        assert!(body.contains("IPv6 Address Not Found"));
        assert!(body.contains(r#"content="15""#));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _) = get_body(app(0).await, "/json/v5").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
