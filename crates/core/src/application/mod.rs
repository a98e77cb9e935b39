// Application Layer - registry and dispatch engine

pub mod dispatcher;
pub mod registry;

pub use dispatcher::RpcDispatcher;
pub use registry::MethodRegistry;
