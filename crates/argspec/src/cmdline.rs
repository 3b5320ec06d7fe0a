//! The command-line facade.
//!
//! [`CmdLine`] ties a [`Registry`] to the listeners interested in its
//! results and renders a usage summary of everything registered.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::command::CommandInstance;
use crate::error::Result;
use crate::listener::CommandListener;
use crate::registry::Registry;
use crate::settings::Settings;
use crate::spec::CommandSpecification;
use crate::tokenizer;

/// Commands, listeners and application metadata for one program.
///
/// # Example
///
/// ```
/// use argspec::{CmdLine, CollectingListener};
///
/// let mut cmdline = CmdLine::new().application_name("todo").version("1.0");
/// cmdline.define(&["-f, --file, !fileName, #Load a file"]).unwrap();
/// cmdline.define(&["-l, --list, #List entries"]).unwrap();
///
/// let mut listener = CollectingListener::new();
/// cmdline.parse_with(&["--file=notes.txt", "-l"], &mut listener).unwrap();
///
/// assert_eq!(listener.len(), 2);
/// assert_eq!(listener.commands()[0].value("fileName"), Some("notes.txt"));
/// ```
#[derive(Default)]
pub struct CmdLine {
    registry: Registry,
    listeners: Vec<Box<dyn CommandListener>>,
    application_name: Option<String>,
    version: Option<String>,
}

impl CmdLine {
    /// Creates an empty command line with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty command line with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        CmdLine {
            registry: Registry::with_settings(settings),
            ..Self::default()
        }
    }

    /// Sets the name shown in the usage header.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Sets the version shown in the usage header.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The application name, if set.
    pub fn name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    /// The application version, if set.
    pub fn app_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a command. See [`Registry::register`].
    pub fn define<S: AsRef<str>>(&mut self, definition: &[S]) -> Result<Arc<CommandSpecification>> {
        self.registry.register(definition)
    }

    /// Adds a listener notified by [`CmdLine::parse`].
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: CommandListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Parses `args` and notifies every registered listener.
    ///
    /// Listeners hear about commands only once the whole vector has matched;
    /// a failed parse notifies nobody.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<Vec<CommandInstance>> {
        let commands = self.registry.parse(args)?;
        for command in &commands {
            for listener in &mut self.listeners {
                listener.handle(command);
            }
        }
        debug!(
            commands = commands.len(),
            listeners = self.listeners.len(),
            "notified listeners"
        );
        Ok(commands)
    }

    /// Parses `args`, notifying `listener` after the registered listeners.
    pub fn parse_with<S: AsRef<str>>(
        &mut self,
        args: &[S],
        listener: &mut dyn CommandListener,
    ) -> Result<Vec<CommandInstance>> {
        let commands = self.parse(args)?;
        for command in &commands {
            listener.handle(command);
        }
        Ok(commands)
    }

    /// Drops every definition and listener. Name and version are kept.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.listeners.clear();
    }

    /// Splits `args` into runtime tokens without matching them.
    pub fn tokenize<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        tokenizer::tokenize(args)
    }

    /// Usage summary: a header line, then one line per command in
    /// registration order.
    pub fn usage(&self) -> String {
        let header = match (&self.application_name, &self.version) {
            (Some(name), Some(version)) => format!("{name} {version}"),
            (Some(name), None) => name.clone(),
            (None, Some(version)) => version.clone(),
            (None, None) => String::new(),
        };

        let mut out = String::new();
        if !header.is_empty() {
            out.push_str(&header);
            out.push('\n');
        }
        for spec in self.registry.specifications() {
            out.push_str("  ");
            out.push_str(&spec.usage());
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for CmdLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdLine")
            .field("registry", &self.registry)
            .field("listeners", &self.listeners.len())
            .field("application_name", &self.application_name)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::listener::CollectingListener;

    fn shared_names() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&CommandInstance) + 'static) {
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&names);
        (names, move |c: &CommandInstance| {
            sink.borrow_mut().push(c.name().to_string())
        })
    }

    #[test]
    fn listeners_hear_every_command() {
        let mut cmdline = CmdLine::new();
        cmdline.define(&["-f, !name"]).unwrap();
        cmdline.define(&["-l"]).unwrap();

        let (first, listener) = shared_names();
        cmdline.add_listener(listener);
        let (second, listener) = shared_names();
        cmdline.add_listener(listener);

        let commands = cmdline.parse(&["-f=a", "-l"]).unwrap();

        assert_eq!(commands.len(), 2);
        assert_eq!(*first.borrow(), vec!["-f", "-l"]);
        assert_eq!(*second.borrow(), vec!["-f", "-l"]);
    }

    #[test]
    fn failed_parse_notifies_nobody() {
        let mut cmdline = CmdLine::new();
        cmdline.define(&["-f, !name"]).unwrap();
        let (names, listener) = shared_names();
        cmdline.add_listener(listener);

        let err = cmdline.parse(&["-f=a", "-f"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Missing);
        assert!(names.borrow().is_empty());
    }

    #[test]
    fn parse_with_adds_one_listener() {
        let mut cmdline = CmdLine::new();
        cmdline.define(&["help"]).unwrap();
        let (registered, listener) = shared_names();
        cmdline.add_listener(listener);

        let mut collected = CollectingListener::new();
        cmdline.parse_with(&["help", "help"], &mut collected).unwrap();

        assert_eq!(collected.len(), 2);
        assert_eq!(*registered.borrow(), vec!["help", "help"]);

        // The extra listener is not kept.
        cmdline.parse(&["help"]).unwrap();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn clear_drops_definitions_and_listeners() {
        let mut cmdline = CmdLine::new().application_name("app");
        cmdline.define(&["help"]).unwrap();
        let (names, listener) = shared_names();
        cmdline.add_listener(listener);

        cmdline.clear();

        assert!(cmdline.registry().is_empty());
        assert_eq!(cmdline.name(), Some("app"));
        assert!(matches!(
            cmdline.parse(&["help"]),
            Err(Error::UnknownToken { .. })
        ));

        cmdline.define(&["help"]).unwrap();
        cmdline.parse(&["help"]).unwrap();
        assert!(names.borrow().is_empty());
    }

    #[test]
    fn usage_lists_commands_in_order() {
        let mut cmdline = CmdLine::new().application_name("files").version("0.3");
        cmdline.define(&["-f, --file, !name, ?more..., #Load files"]).unwrap();
        cmdline.define(&["-q, --quit"]).unwrap();

        assert_eq!(
            cmdline.usage(),
            "files 0.3\n  -f, --file <name> [more...]    Load files\n  -q, --quit\n"
        );
    }

    #[test]
    fn usage_without_metadata() {
        let mut cmdline = CmdLine::new();
        cmdline.define(&["help"]).unwrap();
        assert_eq!(cmdline.usage(), "  help\n");
        assert_eq!(cmdline.name(), None);
        assert_eq!(cmdline.app_version(), None);
    }

    #[test]
    fn tokenize_passthrough() {
        let cmdline = CmdLine::new();
        assert_eq!(
            cmdline.tokenize(&["-f=a,b", "c"]),
            vec!["-f", "a", "b", "c"]
        );
    }

    #[test]
    fn settings_reach_the_registry() {
        let cmdline = CmdLine::with_settings(Settings::default().implicit_properties(false));
        assert!(!cmdline.registry().settings().implicit_properties);
    }
}
