//! Error types of the plugin host.
//!
//! The computeds themselves never fail; errors only arise from wiring
//! plugins together in an order that cannot be resolved.

use thiserror::Error;

use crate::getters::GetterName;

/// A plugin asked for a getter no earlier plugin provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetterError {
    /// The getter has not been set by any plugin registered so far.
    #[error("getter '{0}' has not been provided by any earlier plugin")]
    Unresolved(GetterName),
}

/// Errors raised while registering plugins or resolving getters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// A plugin was added before a plugin it depends on.
    #[error("the {plugin} plugin requires '{dependency}' to be defined before it")]
    MissingDependency {
        /// The plugin being added.
        plugin: &'static str,
        /// The plugin it depends on.
        dependency: &'static str,
    },

    /// A single-instance plugin was added twice.
    #[error("the {0} plugin is already registered")]
    Duplicate(&'static str),

    /// A plugin could not compute its getters.
    #[error("the {plugin} plugin failed to compute its getters")]
    Compute {
        /// The failing plugin.
        plugin: &'static str,
        /// The underlying getter failure.
        #[source]
        source: GetterError,
    },
}
