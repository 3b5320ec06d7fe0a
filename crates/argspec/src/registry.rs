//! The registry of command specifications.
//!
//! A [`Registry`] owns every registered [`CommandSpecification`], the alias
//! index pointing at them, and the suggestion trie holding every alias. It is
//! populated by [`Registry::register`], read by [`Registry::parse`], and
//! emptied by [`Registry::clear`].

use std::collections::HashMap;
use std::sync::Arc;

use argspec_trie::Trie;
use tracing::debug;

use crate::command::CommandInstance;
use crate::definition::tokenize_definition;
use crate::error::{Error, Result};
use crate::matcher::Matcher;
use crate::settings::Settings;
use crate::spec::CommandSpecification;
use crate::tokenizer::tokenize;

/// Registered command specifications, indexed by alias.
///
/// # Example
///
/// ```
/// use argspec::Registry;
///
/// let mut registry = Registry::new();
/// registry.register(&[r"file, !fileName1, :file\d.txt, #Load a file"]).unwrap();
///
/// let commands = registry.parse(&["file=file1.txt"]).unwrap();
/// assert_eq!(commands.len(), 1);
/// assert_eq!(commands[0].name(), "file");
/// assert_eq!(commands[0].value("fileName1"), Some("file1.txt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    settings: Settings,
    by_alias: HashMap<String, Arc<CommandSpecification>>,
    specifications: Vec<Arc<CommandSpecification>>,
    suggestions: Trie,
}

impl Registry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Registry {
            settings,
            ..Self::default()
        }
    }

    /// The settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registers one command from its definition strings.
    ///
    /// All strings together form a single definition, so
    /// `&["-f", "--file", "!name"]` and `&["-f, --file, !name"]` are the same.
    /// Nothing is registered if any rule fails.
    pub fn register<S: AsRef<str>>(&mut self, definition: &[S]) -> Result<Arc<CommandSpecification>> {
        if definition.iter().all(|d| d.as_ref().is_empty()) {
            return Err(Error::EmptyDefinition);
        }

        let tokens = tokenize_definition(definition, self.settings.max_token_length)?;
        if tokens.is_empty() {
            let raw: Vec<&str> = definition.iter().map(AsRef::as_ref).collect();
            return Err(Error::UndelimitedDefinition(raw.join(" ")));
        }

        let spec = Arc::new(CommandSpecification::from_tokens(&tokens, |alias| {
            self.by_alias.contains_key(alias)
        })?);

        for alias in spec.aliases() {
            self.suggestions.add(alias)?;
        }
        for alias in spec.aliases() {
            self.by_alias.insert(alias.clone(), Arc::clone(&spec));
        }
        self.specifications.push(Arc::clone(&spec));

        debug!(
            aliases = ?spec.aliases(),
            parameters = spec.parameters().len(),
            "registered command"
        );
        Ok(spec)
    }

    /// The specification registered under `alias`.
    pub fn get(&self, alias: &str) -> Option<&Arc<CommandSpecification>> {
        self.by_alias.get(alias)
    }

    /// Returns true if `alias` is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.by_alias.contains_key(alias)
    }

    /// Specifications in registration order.
    pub fn specifications(&self) -> &[Arc<CommandSpecification>] {
        &self.specifications
    }

    /// Number of registered specifications.
    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }

    /// Every registered alias, in trie order.
    pub fn aliases(&self) -> Vec<String> {
        self.suggestions.words()
    }

    /// Aliases `token` may have been meant as.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        self.suggestions.suggest(token)
    }

    /// Drops every specification and every indexed alias.
    pub fn clear(&mut self) {
        self.by_alias.clear();
        self.specifications.clear();
        self.suggestions.clear();
        debug!("cleared registry");
    }

    /// Matches an argument vector against the registered commands.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<CommandInstance>> {
        let tokens = tokenize(args);
        debug!(tokens = tokens.len(), "parsing arguments");
        let commands = Matcher::new(self, &tokens).run()?;
        debug!(commands = commands.len(), "parsed arguments");
        Ok(commands)
    }
}
