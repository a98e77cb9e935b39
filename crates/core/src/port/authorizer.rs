// Authorization Port
//
// The dispatch core carries this capability through the request context
// without ever calling it; permission policy belongs to the handlers and
// the embedding application.

/// Authorization capability injected into the request context.
#[cfg_attr(test, mockall::automock)]
pub trait Authorizer: Send + Sync {
    /// Whether `user` may invoke `method`.
    fn allow(&self, user: &str, method: &str) -> bool;
}
