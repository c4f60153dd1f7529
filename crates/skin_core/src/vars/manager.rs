use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use shared::error::SkinError;

use super::{downcast_var, VarText, Variable, VariablePtr};

#[derive(Default)]
struct Registry {
    named: HashMap<String, VariablePtr>,
    order: Vec<String>,
    anonymous: Vec<VariablePtr>,
    constants: HashMap<String, String>,
}

/// Names the variables of one interface instance and keeps anonymous ones
/// alive for as long as the interface runs.
pub struct VarManager {
    tooltip_text: Arc<VarText>,
    help_text: Arc<VarText>,
    registry: RwLock<Registry>,
}

impl VarManager {
    pub fn new() -> Self {
        Self {
            tooltip_text: Arc::new(VarText::new()),
            help_text: Arc::new(VarText::new()),
            registry: RwLock::new(Registry::default()),
        }
    }

    /// Registers `var` under `name`, replacing any previous holder of the name.
    pub fn register_var(&self, var: VariablePtr, name: impl Into<String>) {
        let name = name.into();
        let mut registry = self.registry.write();
        if registry.named.insert(name.clone(), var).is_none() {
            registry.order.push(name);
        }
    }

    pub fn register_anonymous(&self, var: VariablePtr) {
        self.registry.write().anonymous.push(var);
    }

    pub fn get_var(&self, name: &str) -> Option<VariablePtr> {
        self.registry.read().named.get(name).cloned()
    }

    pub fn lookup(&self, name: &str, expected: &str) -> Result<VariablePtr, SkinError> {
        let var = self
            .get_var(name)
            .ok_or_else(|| SkinError::UnknownVariable(name.to_string()))?;
        if var.var_type() != expected {
            return Err(SkinError::TypeMismatch {
                name: name.to_string(),
                expected: expected.to_string(),
                actual: var.var_type().to_string(),
            });
        }
        Ok(var)
    }

    /// Like [`Self::lookup`], logging instead of returning the failure.
    pub fn get_var_typed(&self, name: &str, expected: &str) -> Option<VariablePtr> {
        match self.lookup(name, expected) {
            Ok(var) => Some(var),
            Err(err) => {
                tracing::warn!(variable = name, "{err}");
                None
            }
        }
    }

    /// Typed access to a registered variable.
    pub fn get<T: Variable>(&self, name: &str) -> Option<Arc<T>> {
        self.get_var(name).and_then(downcast_var::<T>)
    }

    pub fn tooltip_text(&self) -> &Arc<VarText> {
        &self.tooltip_text
    }

    pub fn help_text(&self) -> &Arc<VarText> {
        &self.help_text
    }

    pub fn register_const(&self, name: impl Into<String>, value: impl Into<String>) {
        self.registry
            .write()
            .constants
            .insert(name.into(), value.into());
    }

    /// Returns the constant, or an empty string when it was never registered.
    pub fn get_const(&self, name: &str) -> String {
        self.registry
            .read()
            .constants
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn names(&self) -> Vec<String> {
        self.registry.read().order.clone()
    }
}

impl Default for VarManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VarManager {
    fn drop(&mut self) {
        // Release named variables newest first, then anonymous ones.
        let registry = self.registry.get_mut();
        while let Some(name) = registry.order.pop() {
            registry.named.remove(&name);
        }
        while registry.anonymous.pop().is_some() {}
    }
}

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod tests;
