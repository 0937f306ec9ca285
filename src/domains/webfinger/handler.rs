//! The discovery request handler.
//!
//! Runs a request through a fixed pipeline, stopping at the first failure:
//!
//! 1. method check (GET only)
//! 2. query parsing and `resource` extraction
//! 3. resolution through the [`Resolver`]
//! 4. optional `rel` filtering of the resolved links
//! 5. encoding through the [`DescriptorEncoder`]
//!
//! Each failure maps to exactly one [`HandlerFailure`], which fixes the
//! status code and body. The handler holds no mutable state.

use axum::{
    http::Method,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::query::ResourceQuery;
use super::response::{DescriptorResponse, HandlerFailure};
use crate::domains::jrd::{DescriptorEncoder, EncodedDescriptor};
use crate::domains::resources::{ResolveError, Resolver};

/// Answers discovery requests by delegating to a resolver and an encoder.
#[derive(Clone)]
pub struct ResourceHandler {
    resolver: Arc<dyn Resolver>,
    encoder: Arc<dyn DescriptorEncoder>,
    rel_filter: bool,
}

impl ResourceHandler {
    /// Create a handler. `rel` filtering is on by default.
    pub fn new(resolver: Arc<dyn Resolver>, encoder: Arc<dyn DescriptorEncoder>) -> Self {
        Self {
            resolver,
            encoder,
            rel_filter: true,
        }
    }

    /// Enable or disable filtering links by the `rel` query parameter.
    pub fn with_rel_filter(mut self, enabled: bool) -> Self {
        self.rel_filter = enabled;
        self
    }

    pub fn rel_filter(&self) -> bool {
        self.rel_filter
    }

    /// Handle one request and produce the response to write.
    pub async fn handle(&self, method: &Method, raw_query: Option<&str>) -> Response {
        match self.process(method, raw_query).await {
            Ok(descriptor) => DescriptorResponse(descriptor).into_response(),
            Err(failure) => failure.into_response(),
        }
    }

    #[instrument(skip_all, fields(resource))]
    async fn process(
        &self,
        method: &Method,
        raw_query: Option<&str>,
    ) -> Result<EncodedDescriptor, HandlerFailure> {
        if method != Method::GET {
            info!("Rejected {} request", method);
            return Err(HandlerFailure::MethodNotAllowed);
        }

        let query = ResourceQuery::parse(raw_query).map_err(|e| {
            if e.is_malformed() {
                info!("Invalid query params: {}", e);
            } else {
                info!("Received blank resource request: {}", e);
            }
            HandlerFailure::BadRequest
        })?;

        tracing::Span::current().record("resource", query.resource.as_str());
        info!("Received request for resource {}", query.resource);

        let resource = self
            .resolver
            .resolve(&query.resource)
            .await
            .map_err(|e| match e {
                ResolveError::NotFound { .. } => {
                    warn!("Resource {} not found: {}", query.resource, e);
                    HandlerFailure::NotFound(e.to_string())
                }
                ResolveError::Other { .. } => {
                    error!("Error retrieving resource {}: {}", query.resource, e);
                    HandlerFailure::ResolverFailed
                }
            })?;

        let resource = if self.rel_filter {
            resource.with_rels(&query.rels)
        } else {
            resource
        };

        self.encoder.encode(&resource).map_err(|e| {
            error!("Unable to encode resource {}: {}", query.resource, e);
            HandlerFailure::EncodeFailed(e.to_string())
        })
    }
}
