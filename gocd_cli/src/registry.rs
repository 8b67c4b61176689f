//! Lookup of command descriptors by invocation name.
//!
//! Help output needs to find a command's documentation from the token the
//! user typed (`gocd help retrigger-pipeline`). The registry holds the
//! [`CommandInfo`] of every known command type for that purpose. It never
//! runs commands.

use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::command::{Command, CommandInfo};

/// Registered command descriptors, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<(String, CommandInfo)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the command type `C`.
    ///
    /// A later registration under the same invocation name replaces the
    /// earlier one in place.
    pub fn register<C: Command>(&mut self) -> &mut Self {
        self.insert(C::info())
    }

    /// Register an already built descriptor.
    pub fn insert(&mut self, info: CommandInfo) -> &mut Self {
        let name = info.invocation_name();

        if let Some(slot) = self.commands.iter_mut().find(|(key, _)| *key == name) {
            warn!(
                "command '{}' registered twice ({} replaces {})",
                name,
                info.name(),
                slot.1.name()
            );
            slot.1 = info;
        } else {
            debug!("registered command '{}' ({})", name, info.name());
            self.commands.push((name, info));
        }

        self
    }

    /// Find a command by invocation name.
    pub fn find(&self, name: &str) -> Option<&CommandInfo> {
        self.commands
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, info)| info)
    }

    /// Invocation names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Full usage text of the named command.
    ///
    /// Unknown names fail with a plain message; missing documentation keeps
    /// its [`crate::CommandError`] so callers can downcast it.
    pub fn usage_for(&self, name: &str) -> Result<String> {
        let Some(info) = self.find(name) else {
            debug!("usage requested for unknown command '{}'", name);
            bail!("Unknown command: {}", name);
        };

        Ok(info.usage()?)
    }
}
