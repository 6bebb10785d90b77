use async_trait::async_trait;
use docket_core::{DocketId, Regulation};
use std::sync::Arc;

use crate::error::GatewayResult;

/// Read-only access to the regulations API
///
/// Implements Dependency Inversion - the search view depends on this
/// abstraction, adapters (HTTP, in-memory) implement it.
#[async_trait]
pub trait RegulationGateway: Send + Sync {
    /// List every regulation
    async fn fetch_all(&self) -> GatewayResult<Vec<Regulation>>;

    /// Regulations matching `term`. Any text is accepted, including the
    /// empty string; implementations must escape it for transmission.
    async fn search(&self, term: &str) -> GatewayResult<Vec<Regulation>>;

    /// A single regulation. Fails with `GatewayError::NotFound` on a miss.
    async fn fetch_one(&self, id: DocketId) -> GatewayResult<Regulation>;
}

#[async_trait]
impl<T: RegulationGateway + ?Sized> RegulationGateway for Arc<T> {
    async fn fetch_all(&self) -> GatewayResult<Vec<Regulation>> {
        (**self).fetch_all().await
    }

    async fn search(&self, term: &str) -> GatewayResult<Vec<Regulation>> {
        (**self).search(term).await
    }

    async fn fetch_one(&self, id: DocketId) -> GatewayResult<Regulation> {
        (**self).fetch_one(id).await
    }
}
