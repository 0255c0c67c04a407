//! Copies the request id into error bodies.

use super::REQUEST_ID_HEADER;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use folio_core::ErrorResponse;

/// Sets `trace_id` on any [`ErrorResponse`] produced further in.
///
/// Bodies are found through the response extensions, where
/// [`error_response`](crate::responses::error_response) leaves a copy.
pub async fn trace_id_middleware(request: Request<Body>, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;

    let Some(trace_id) = trace_id else {
        return response;
    };
    let Some(body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };
    (response.status(), Json(body.with_trace_id(trace_id))).into_response()
}
