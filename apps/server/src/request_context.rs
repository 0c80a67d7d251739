//! Per-request context made available to handlers via request extensions.

/// Attached by the request-id middleware.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}
