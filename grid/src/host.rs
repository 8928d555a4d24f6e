//! The plugin host: registration, getter resolution and rendering.

use std::sync::Arc;

use log::{debug, trace};

use crate::error::PluginError;
use crate::getters::Getters;
use crate::layout::LayoutArgs;
use crate::plugin::Plugin;
use crate::template::{TemplateContext, Templates};

/// Composes an ordered list of plugins into one resolved view model.
///
/// Getters are resolved by folding every plugin's [`compute`](Plugin::compute)
/// over a fresh [`Getters`] in registration order, so plugin N always sees the
/// complete output of plugins `0..N`. The result is cached until the plugin
/// list or a plugin's state changes.
pub struct PluginHost<R, N> {
    plugins: Vec<Box<dyn Plugin<R, N>>>,
    templates: Templates<R, N>,
    resolved: Option<Arc<Getters<R>>>,
}

impl<R, N> Default for PluginHost<R, N> {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
            templates: Templates::default(),
            resolved: None,
        }
    }
}

impl<R: 'static, N: 'static> PluginHost<R, N> {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin, returning the host for chaining.
    pub fn with(mut self, plugin: impl Plugin<R, N>) -> Result<Self, PluginError> {
        self.add(plugin)?;
        Ok(self)
    }

    /// Add a plugin after the ones already registered.
    ///
    /// Fails if a dependency is not registered yet or if a single-instance
    /// plugin is added twice. The plugin's templates are registered here,
    /// once; its getters join the chain from the next resolution on.
    pub fn add(&mut self, plugin: impl Plugin<R, N>) -> Result<(), PluginError> {
        let name = plugin.name();

        if let Some(dependency) = plugin
            .dependencies()
            .iter()
            .copied()
            .find(|dependency| !self.contains(dependency))
        {
            return Err(PluginError::MissingDependency {
                plugin: name,
                dependency,
            });
        }

        if plugin.singleton() && self.contains(name) {
            return Err(PluginError::Duplicate(name));
        }

        debug!("Registering plugin '{}' at position {}", name, self.plugins.len());
        plugin.register(&mut self.templates);
        self.plugins.push(Box::new(plugin));
        self.invalidate();
        Ok(())
    }

    /// Whether a plugin with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }

    /// Names of the registered plugins, in registration order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// The first registered plugin of type `P`.
    pub fn plugin<P: Plugin<R, N>>(&self) -> Option<&P> {
        self.plugins
            .iter()
            .find_map(|plugin| (**plugin).as_any().downcast_ref::<P>())
    }

    /// Mutable access to the first registered plugin of type `P`.
    ///
    /// Plugin state may change through the returned reference, so the cached
    /// getters are dropped.
    pub fn plugin_mut<P: Plugin<R, N>>(&mut self) -> Option<&mut P> {
        self.invalidate();
        self.plugins
            .iter_mut()
            .find_map(|plugin| (**plugin).as_any_mut().downcast_mut::<P>())
    }

    /// Registered templates and formatters.
    pub fn templates(&self) -> &Templates<R, N> {
        &self.templates
    }

    /// Drop the cached getters so the next resolution recomputes them.
    pub fn invalidate(&mut self) {
        if self.resolved.take().is_some() {
            debug!("Getter cache invalidated");
        }
    }

    /// Resolve all getters, reusing the cached result when nothing changed.
    pub fn resolve(&mut self) -> Result<Arc<Getters<R>>, PluginError> {
        if let Some(getters) = &self.resolved {
            return Ok(Arc::clone(getters));
        }

        let getters = Arc::new(self.compute()?);
        self.resolved = Some(Arc::clone(&getters));
        Ok(getters)
    }

    fn compute(&self) -> Result<Getters<R>, PluginError> {
        let mut getters = Getters::new();
        for plugin in &self.plugins {
            trace!("Computing getters of plugin '{}'", plugin.name());
            plugin
                .compute(&mut getters)
                .map_err(|source| PluginError::Compute {
                    plugin: plugin.name(),
                    source,
                })?;
        }
        Ok(getters)
    }

    /// Resolve the getters and hand them, with the template dispatchers, to
    /// `layout`.
    ///
    /// Fails if the table getters (`tableColumns`, `tableBodyRows`,
    /// `tableHeaderRows`) are not provided by the registered plugins.
    pub fn render<T>(&mut self, layout: impl FnOnce(&LayoutArgs<'_, R, N>) -> T) -> Result<T, PluginError> {
        let getters = self.resolve()?;
        let cx = TemplateContext {
            getters: &getters,
            templates: &self.templates,
        };
        let args = LayoutArgs::new(cx).map_err(|source| PluginError::Compute {
            plugin: "PluginHost",
            source,
        })?;
        Ok(layout(&args))
    }
}
