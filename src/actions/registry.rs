// src/actions/registry.rs
use super::action::Action;
use super::builtin;
use std::collections::HashMap;

pub struct ActionRegistry {
    actions: Vec<Box<dyn Action>>,
    name_map: HashMap<String, usize>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    /// The seven globals the page markup calls.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(builtin::ToggleMobileMenu)
            .register(builtin::SwitchTab)
            .register(builtin::SwitchRequirementsTab)
            .register(builtin::SwitchInstallTab)
            .register(builtin::SwitchLanguage)
            .register(builtin::CopyBitcoinAddress)
            .register(builtin::CopyOneliner);
        registry
    }

    /// Registering a name twice replaces the earlier action.
    pub fn register<T: Action>(&mut self, action: T) -> &mut Self {
        self.register_boxed(Box::new(action))
    }

    pub fn register_boxed(&mut self, action: Box<dyn Action>) -> &mut Self {
        let name = action.name().to_string();
        match self.name_map.get(&name) {
            Some(&index) => self.actions[index] = action,
            None => {
                self.name_map.insert(name, self.actions.len());
                self.actions.push(action);
            }
        }
        self
    }

    /// Exact, case-sensitive lookup, like a global in the page scope.
    pub fn find(&self, name: &str) -> Option<&dyn Action> {
        self.name_map
            .get(name.trim())
            .and_then(|&index| self.actions.get(index))
            .map(|action| action.as_ref())
    }

    pub fn list_actions(&self) -> Vec<(&str, &str)> {
        self.actions
            .iter()
            .map(|a| (a.name(), a.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

crate::impl_default!(ActionRegistry, Self::with_builtins());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_every_page_global() {
        let registry = ActionRegistry::with_builtins();
        for name in [
            "toggleMobileMenu",
            "switchTab",
            "switchRequirementsTab",
            "switchInstallTab",
            "switchLanguage",
            "copyBitcoinAddress",
            "copyOneliner",
        ] {
            assert!(registry.find(name).is_some(), "{} missing", name);
        }
        assert_eq!(registry.len(), 7);
        assert!(registry.find("switchtab").is_none());
    }

    #[test]
    fn listing_names_every_action_with_a_description() {
        let registry = ActionRegistry::with_builtins();
        let listed = registry.list_actions();
        assert_eq!(listed.len(), registry.len());
        assert!(listed.iter().any(|(name, _)| *name == "copyOneliner"));
        assert!(listed.iter().all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn re_registering_replaces() {
        let mut registry = ActionRegistry::with_builtins();
        registry.register(builtin::SwitchTab);
        assert_eq!(registry.len(), 7);
    }
}
