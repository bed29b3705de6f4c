//! Named command tables.
//!
//! An [`ActionSet`] is an ordinary name-to-callable mapping with help text,
//! suitable for simple command-line style front ends. It carries no dispatch
//! logic of its own; an action body is free to call into a [`Registry`]
//! (see `examples/dispatch_demo.rs`).
//!
//! [`Registry`]: polyfn_dispatch::Registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Signature for registered actions: whitespace-split arguments in, rendered
/// output back.
pub type ActionFn = Arc<dyn Fn(&[&str]) -> String + Send + Sync>;

/// Error type for action lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action `{0}`")]
    Unknown(String),
}

/// One named action with its help text.
#[derive(Clone)]
pub struct Action {
    name: Arc<str>,
    help: Arc<str>,
    func: ActionFn,
}

impl Action {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn invoke(&self, args: &[&str]) -> String {
        (self.func)(args)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish()
    }
}

/// A set of actions keyed by name, kept in registration order.
///
/// More than one set may exist at a time. If a prefix is configured, it is
/// stripped once from the front of registered names, so a set built from
/// `action_help`-style function names exposes plain `help` commands.
#[derive(Debug, Default)]
pub struct ActionSet {
    prefix: Option<String>,
    actions: Vec<Action>,
    indices: HashMap<Arc<str>, usize>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Registers an action. A name registered twice overwrites the earlier
    /// action in place, keeping its original position.
    pub fn add(
        &mut self,
        name: &str,
        help: &str,
        func: impl Fn(&[&str]) -> String + Send + Sync + 'static,
    ) {
        let name = match &self.prefix {
            Some(prefix) => name.strip_prefix(prefix.as_str()).unwrap_or(name),
            None => name,
        };
        let action = Action {
            name: Arc::from(name),
            help: Arc::from(help),
            func: Arc::new(func),
        };
        match self.indices.get(name) {
            Some(&idx) => self.actions[idx] = action,
            None => {
                self.indices.insert(Arc::clone(&action.name), self.actions.len());
                self.actions.push(action);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.indices.get(name).map(|&idx| &self.actions[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Action names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.name())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Performs an action from a command line: the first whitespace-split
    /// token names the action, the rest become its arguments. A blank line
    /// is a no-op.
    pub fn perform(&self, line: &str) -> Result<Option<String>, ActionError> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();
        match self.get(command) {
            Some(action) => Ok(Some(action.invoke(&args))),
            None => Err(ActionError::Unknown(command.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ActionSet {
        let mut actions = ActionSet::with_prefix("action_");
        actions.add("action_verify", "Confirm access", |_| {
            "Authentication valid".to_string()
        });
        actions.add("say", "Say a message", |args| args.join(" "));
        actions
    }

    #[test]
    fn test_prefix_is_stripped_once() {
        let actions = sample_set();
        assert!(actions.contains("verify"));
        assert!(!actions.contains("action_verify"));
        assert_eq!(actions.get("verify").unwrap().help(), "Confirm access");
    }

    #[test]
    fn test_perform_splits_command_line() {
        let actions = sample_set();
        assert_eq!(
            actions.perform("say hello world").unwrap(),
            Some("hello world".to_string())
        );
        assert_eq!(actions.perform("   ").unwrap(), None);
        assert_eq!(
            actions.perform("launch now").unwrap_err(),
            ActionError::Unknown("launch".to_string())
        );
    }

    #[test]
    fn test_re_adding_overwrites_in_place() {
        let mut actions = sample_set();
        actions.add("say", "Say it louder", |args| args.join(" ").to_uppercase());
        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions.perform("say hi").unwrap(),
            Some("HI".to_string())
        );
        let names: Vec<&str> = actions.names().collect();
        assert_eq!(names, ["verify", "say"]);
    }
}
