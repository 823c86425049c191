//! The capability a modal keymap engine exposes to the interpreter

use crate::directive::{BindingRequest, Mode, Operation};

/// A modal keymap engine that owns the actual key-dispatch table
///
/// `mode: None` is the engine's own default-scope call shape; the interpreter
/// never sends a literal "global" mode.
pub trait KeymapBackend {
    /// Bind `lhs` to `rhs`, replacing any existing binding for the same keys
    fn bind(&mut self, lhs: &str, rhs: &str, mode: Option<Mode>);

    /// Remove a binding; no-op if `lhs` is not bound
    fn unbind(&mut self, lhs: &str, mode: Option<Mode>);

    /// Drop every binding this engine received
    fn clear_all(&mut self);
}

impl<B: KeymapBackend + ?Sized> KeymapBackend for &mut B {
    fn bind(&mut self, lhs: &str, rhs: &str, mode: Option<Mode>) {
        (**self).bind(lhs, rhs, mode);
    }

    fn unbind(&mut self, lhs: &str, mode: Option<Mode>) {
        (**self).unbind(lhs, mode);
    }

    fn clear_all(&mut self) {
        (**self).clear_all();
    }
}

/// Forward one request to the backend
///
/// Returns false if the request could not be applied (a bind without a rhs).
pub fn apply_request<B: KeymapBackend + ?Sized>(
    backend: &mut B,
    request: &BindingRequest,
) -> bool {
    let mode = request.scope.mode();
    match (request.operation, request.rhs.as_deref()) {
        (Operation::Bind, Some(rhs)) => {
            backend.bind(&request.lhs, rhs, mode);
            tracing::debug!("Bound {} -> {} in {} scope", request.lhs, rhs, request.scope);
            true
        }
        (Operation::Bind, None) => {
            tracing::warn!("Refusing to bind {} without a right-hand side", request.lhs);
            false
        }
        (Operation::Unbind, _) => {
            backend.unbind(&request.lhs, mode);
            tracing::debug!("Unbound {} in {} scope", request.lhs, request.scope);
            true
        }
    }
}

/// Forward requests strictly in order, returning how many were applied
pub fn apply_requests<B: KeymapBackend + ?Sized>(
    backend: &mut B,
    requests: &[BindingRequest],
) -> usize {
    requests
        .iter()
        .filter(|request| apply_request(backend, request))
        .count()
}
