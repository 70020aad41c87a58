//! Command registry - Maps command names and aliases to definitions

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::CommandDefinition;

#[derive(Default)]
struct Entries {
    /// Lowercased name or alias -> shared definition
    by_key: HashMap<String, Arc<CommandDefinition>>,
    /// Every definition ever registered, oldest first
    registered: Vec<Arc<CommandDefinition>>,
    /// Canonical names in order of first registration
    names: Vec<String>,
}

/// Registry of chat commands, shared between the dispatcher and handlers
#[derive(Default)]
pub struct CommandRegistry {
    entries: RwLock<Entries>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and every alias
    ///
    /// A key that already exists is rebound to the new definition. Other keys
    /// of the previous definition keep pointing at it.
    pub fn register(&self, command: CommandDefinition) {
        let command = Arc::new(command);
        let mut entries = self.write();

        for key in command.keys() {
            let key = key.to_lowercase();
            if let Some(previous) = entries.by_key.insert(key.clone(), Arc::clone(&command)) {
                tracing::warn!(
                    "Command key '{}' rebound from '{}' to '{}'",
                    key,
                    previous.name,
                    command.name
                );
            }
        }

        if !entries.names.contains(&command.name) {
            entries.names.push(command.name.clone());
        }
        entries.registered.push(Arc::clone(&command));

        tracing::info!("Registered command: {}", command.name);
    }

    /// Register commands in order; later entries win on key collision
    pub fn register_all(&self, commands: impl IntoIterator<Item = CommandDefinition>) {
        for command in commands {
            self.register(command);
        }
    }

    /// Case-insensitive lookup by name or alias
    pub fn resolve(&self, name: &str) -> Option<Arc<CommandDefinition>> {
        self.read().by_key.get(&name.to_lowercase()).cloned()
    }

    /// Distinct reachable definitions in registration order
    ///
    /// When several reachable definitions share a canonical name, the most
    /// recently registered one is listed.
    pub fn list(&self) -> Vec<Arc<CommandDefinition>> {
        let entries = self.read();
        let mut latest: HashMap<&str, &Arc<CommandDefinition>> = HashMap::new();

        for command in &entries.registered {
            let reachable = entries.by_key.values().any(|c| Arc::ptr_eq(c, command));
            if reachable {
                latest.insert(command.name.as_str(), command);
            }
        }

        entries
            .names
            .iter()
            .filter_map(|name| latest.get(name.as_str()).map(|c| Arc::clone(*c)))
            .collect()
    }

    /// Number of distinct commands
    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().by_key.is_empty()
    }

    // A panicking registrant cannot leave the maps half-written, so poisoning
    // is safe to ignore.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
