use std::sync::Arc;
use crate::llm::{GenerateRequest, GenerateResult};
use futures::future::BoxFuture;

/// Convert a concrete G into an `Arc<dyn Generator>`.
pub fn generator_to_arc_dyn<G>(generator: G) -> Arc<dyn Generator>
where
    G: 'static + Generator,
{
    Arc::new(generator)
}

/// The text-generation collaborator: one request in, one raw response out.
///
/// Implementations own transport concerns, including honouring
/// `request.timeout`; an elapsed timeout must surface as an error.
pub trait Generator: Send + Sync {
    fn generate<'a>(&'a self, request: &'a GenerateRequest) -> BoxFuture<'a, GenerateResult>;
}
