use futures::future::BoxFuture;

use super::types::{AssistantSpec, RegistrarResult, CreatedAssistant};

/// A service that can create a hosted assistant from an `AssistantSpec`.
///
/// The returned future may borrow from `spec`; implementations forward the
/// name, model, instructions and tool set exactly as given.
pub trait Registrar: Send + Sync {
    fn register<'a>(&'a self, spec: &'a AssistantSpec) -> BoxFuture<'a, RegistrarResult<CreatedAssistant>>;
}
