//! Mapping of handler outcomes to HTTP responses.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domains::jrd::{EncodedDescriptor, JRD_CONTENT_TYPE};

/// Every way a discovery request can fail, and the response it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerFailure {
    /// The request did not use GET.
    MethodNotAllowed,

    /// The query was malformed, or `resource` was missing or empty.
    BadRequest,

    /// The resolver found no such resource. Carries its message.
    NotFound(String),

    /// The resolver failed. Its message is logged, not returned.
    ResolverFailed,

    /// The encoder failed. Carries its message.
    EncodeFailed(String),
}

impl HandlerFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ResolverFailed | Self::EncodeFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Plain-text response body.
    pub fn body(&self) -> String {
        match self {
            Self::MethodNotAllowed => "method not allowed".to_string(),
            Self::BadRequest => "bad request".to_string(),
            Self::ResolverFailed => "bad gateway".to_string(),
            Self::NotFound(message) | Self::EncodeFailed(message) => message.clone(),
        }
    }
}

impl IntoResponse for HandlerFailure {
    fn into_response(self) -> Response {
        let mut response = (self.status(), self.body()).into_response();
        if self == Self::MethodNotAllowed {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET"));
        }
        response
    }
}

/// A successfully encoded descriptor, written as a 200.
pub struct DescriptorResponse(pub EncodedDescriptor);

impl IntoResponse for DescriptorResponse {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(self.0.content_type())
            .unwrap_or_else(|_| HeaderValue::from_static(JRD_CONTENT_TYPE));
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            self.0.into_body(),
        )
            .into_response()
    }
}
