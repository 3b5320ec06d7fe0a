//! Listeners notified of every matched command.

use crate::command::CommandInstance;

/// Receives command instances in the order they were matched.
///
/// Closures taking `&CommandInstance` are listeners too:
///
/// ```
/// use argspec::{CmdLine, CommandInstance};
///
/// let mut names = Vec::new();
/// let mut cmdline = CmdLine::new();
/// cmdline.define(&["help"]).unwrap();
/// cmdline
///     .parse_with(&["help"], &mut |c: &CommandInstance| names.push(c.name().to_string()))
///     .unwrap();
/// assert_eq!(names, vec!["help"]);
/// ```
pub trait CommandListener {
    /// Called once per matched command.
    fn handle(&mut self, command: &CommandInstance);
}

impl<F> CommandListener for F
where
    F: FnMut(&CommandInstance),
{
    fn handle(&mut self, command: &CommandInstance) {
        self(command)
    }
}

/// A listener that keeps every command it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingListener {
    commands: Vec<CommandInstance>,
}

impl CollectingListener {
    /// Creates an empty listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> &[CommandInstance] {
        &self.commands
    }

    /// The most recent command received under `name`.
    pub fn command(&self, name: &str) -> Option<&CommandInstance> {
        self.commands.iter().rev().find(|c| c.name() == name)
    }

    /// Number of commands received.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was received.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Hands over the received commands, leaving the listener empty.
    pub fn take(&mut self) -> Vec<CommandInstance> {
        std::mem::take(&mut self.commands)
    }
}

impl CommandListener for CollectingListener {
    fn handle(&mut self, command: &CommandInstance) {
        self.commands.push(command.clone());
    }
}
