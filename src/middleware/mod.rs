// ABOUTME: HTTP middleware for request tracing and correlation
// ABOUTME: Provides request ID generation and the per-request tracing span

/// Request ID extension, middleware and span helpers
pub mod request_id;

pub use request_id::{create_request_span, request_id_middleware, RequestId, REQUEST_ID_HEADER};
