//! The contract every grid plugin satisfies.

use std::any::Any;

use crate::error::GetterError;
use crate::getters::Getters;
use crate::template::Templates;

/// Type-erased access to a plugin for typed lookups on the host.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A grid feature.
///
/// Plugins contribute in two ways:
///
/// - **Templates**, once, when the plugin is added to the host
///   ([`register`](Plugin::register)). Templates registered later take
///   precedence over earlier ones whose predicate also matches.
/// - **Getters**, on every resolution ([`compute`](Plugin::compute)). The host
///   calls `compute` in registration order; a plugin reads what earlier
///   plugins left in [`Getters`] and replaces it with its own derivation.
///
/// `compute` must be pure: given the same getters and plugin state it yields
/// the same values.
pub trait Plugin<R, N>: AsAny + Send + Sync {
    /// Plugin name, used for dependency checks and diagnostics.
    fn name(&self) -> &'static str;

    /// Names of plugins that must be registered before this one.
    fn dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether at most one instance may be registered.
    fn singleton(&self) -> bool {
        true
    }

    /// Register templates and formatters.
    fn register(&self, templates: &mut Templates<R, N>) {
        let _ = templates;
    }

    /// Derive getters from the ones provided by earlier plugins.
    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        let _ = getters;
        Ok(())
    }
}
