// Port Layer - seams for external collaborators

pub mod authorizer;
pub mod handler;

// Re-exports
pub use authorizer::Authorizer;
pub use handler::{MethodHandler, RequestContext};
