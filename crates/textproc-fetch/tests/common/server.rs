//! Local axum server used by integration tests.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Root path the TextService routes are mounted under.
pub const SERVICE_PATH: &str = "/text-processing/rest/TextService";

/// Spawn the test server on an ephemeral port and return its origin.
pub async fn spawn() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router())
            .await
            .expect("Test server failed");
    });

    format!("http://{addr}")
}

/// An origin nothing is listening on.
pub async fn unused_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind placeholder listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Spawn a raw server that answers every request with `status_line`, a
/// `Content-Length: 100` header and a few body bytes, then closes.
#[allow(dead_code)]
pub async fn spawn_truncated(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind truncating server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            // Drain the request head so the close is not seen as a reset
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{{\"err"
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{addr}")
}

fn router() -> Router {
    let service = Router::new()
        .route("/pattern/:count", post(pattern))
        .route("/:kind/:count", get(generate));

    Router::new()
        .route("/json", get(|| async { Json(json!({"a": 1})) }))
        .route("/empty", get(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route("/not-json", get(|| async { "hello" }))
        .route("/echo", post(echo))
        .nest(SERVICE_PATH, service)
}

/// Echo back what the client sent.
async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "accept": header_value(header::ACCEPT.as_str()),
        "content_type": header_value(header::CONTENT_TYPE.as_str()),
        "custom": header_value("x-custom"),
        "body": body,
    }))
}

/// Stand-in generator: `{kind}-{n}` for each item, with query params echoed
/// into the first entry. Unknown kinds get 204 like the real service's null.
async fn generate(
    Path((kind, count)): Path<(String, u32)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<String>>, StatusCode> {
    if !matches!(
        kind.as_str(),
        "bands" | "drugNames" | "firstNames" | "insults" | "fortune" | "madlib" | "poem"
    ) {
        return Err(StatusCode::NO_CONTENT);
    }

    let mut lines: Vec<String> = (1..=count).map(|n| format!("{kind}-{n}")).collect();
    if !params.is_empty() {
        let mut pairs: Vec<_> = params.into_iter().map(|(k, v)| format!("{k}={v}")).collect();
        pairs.sort();
        lines.insert(0, pairs.join("&"));
    }
    Ok(Json(lines))
}

async fn pattern(
    Path(count): Path<u32>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Vec<String>>, StatusCode> {
    let is_text = headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"text/plain"));
    if !is_text {
        return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
    Ok(Json((0..count).map(|_| body.to_uppercase()).collect()))
}
