use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every 4xx/5xx response together with its request id.
/// Server errors are logged at error level, client errors at warn.
pub async fn error_handling_middleware(request: Request, next: Next) -> Response {
    let request_id = super::request_id::get_request_id(&request).map(|id| id.to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            status = %status,
            method = %method,
            path = %path,
            request_id = ?request_id,
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            status = %status,
            method = %method,
            path = %path,
            request_id = ?request_id,
            "Request rejected"
        );
    }

    response
}
