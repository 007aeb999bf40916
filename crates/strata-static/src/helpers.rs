//! Template helper registry.
//!
//! Hosts register helper functions here before the template engine is
//! constructed; helpers whose name carries the `strata_` prefix become
//! global template functions under the prefix-stripped name. Names without
//! the prefix are ignored, so a registered module can carry private
//! support functions alongside its exported helpers.

use minijinja::functions::Function;
use minijinja::value::{FunctionArgs, FunctionResult, Value};
use minijinja::Environment;

/// Naming prefix a helper must carry to be exposed to templates.
pub const HELPER_PREFIX: &str = "strata_";

/// An ordered collection of template helper functions.
///
/// Later registrations win when two helpers strip to the same name.
#[derive(Default)]
pub struct HelperRegistry {
    helpers: Vec<(String, Value)>,
}

impl HelperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a helper under its declared name.
    ///
    /// The function is exposed to templates only if `name` starts with
    /// [`HELPER_PREFIX`]; the prefix is stripped on installation.
    pub fn register<F, Rv, Args>(&mut self, name: impl Into<String>, f: F)
    where
        F: Function<Rv, Args> + Send + Sync + 'static,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.helpers.push((name.into(), Value::from_function(f)));
    }

    /// Number of registered entries, exposed or not.
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Whether no helpers have been registered.
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Install the prefixed helpers into a template environment as globals,
    /// stripped of their prefix.
    pub(crate) fn install(&self, env: &mut Environment<'_>) {
        for (name, value) in &self.helpers {
            if let Some(stripped) = name.strip_prefix(HELPER_PREFIX) {
                env.add_global(stripped.to_string(), value.clone());
            }
        }
    }
}

impl std::fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helpers", &self.helpers.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}
