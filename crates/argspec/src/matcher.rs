//! Matching runtime tokens against registered commands.
//!
//! The matcher makes a single forward pass over the token stream:
//!
//! ```text
//! Scanning ──alias──────────▶ ConsumingParameters ──▶ Scanning
//! Scanning ──-D<key> value──▶ Scanning
//! Scanning ──anything else──▶ Failed(UnknownToken + suggestions)
//! ```
//!
//! Parameters are filled in declaration order. A token that is itself an
//! alias or an implicit property never becomes a parameter value; it starts
//! the next command instead. Values rejected by the command's validator are
//! treated as absent. An implicit property always takes the token after it.

use tracing::trace;

use crate::command::CommandInstance;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::spec::{CommandSpecification, ParameterSpec};

/// Prefix marking an implicit property command.
pub const PROPERTY_PREFIX: &str = "-D";

/// Returns the key of an implicit property token (`-D<key>`), if `token` is
/// one.
///
/// ```
/// use argspec::property_key;
///
/// assert_eq!(property_key("-Dorg.x.debug"), Some("org.x.debug"));
/// assert_eq!(property_key("-D"), None);
/// assert_eq!(property_key("--debug"), None);
/// ```
pub fn property_key(token: &str) -> Option<&str> {
    token
        .strip_prefix(PROPERTY_PREFIX)
        .filter(|key| !key.is_empty())
}

pub(crate) struct Matcher<'a> {
    registry: &'a Registry,
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(registry: &'a Registry, tokens: &'a [String]) -> Self {
        Matcher {
            registry,
            tokens,
            pos: 0,
        }
    }

    pub(crate) fn run(mut self) -> Result<Vec<CommandInstance>> {
        let mut commands = Vec::new();

        while let Some(token) = self.next_token() {
            if let Some(spec) = self.registry.get(token) {
                trace!(alias = token, "matched command");
                commands.push(self.consume_parameters(token, spec)?);
            } else if let Some(key) = self.implicit_key(token) {
                trace!(key, "matched implicit property");
                commands.push(self.consume_property(token, key)?);
            } else {
                return Err(Error::UnknownToken {
                    token: token.to_string(),
                    suggestions: self.registry.suggest(token),
                });
            }
        }

        Ok(commands)
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    fn implicit_key<'t>(&self, token: &'t str) -> Option<&'t str> {
        if self.registry.settings().implicit_properties {
            property_key(token)
        } else {
            None
        }
    }

    /// Tokens that start a command and therefore end the previous one.
    fn is_boundary(&self, token: &str) -> bool {
        self.registry.contains(token) || self.implicit_key(token).is_some()
    }

    /// Takes the next token if it can serve as a value.
    fn next_value<F>(&mut self, accepts: F) -> Option<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        let token = self.tokens.get(self.pos)?.as_str();
        if self.is_boundary(token) || !accepts(token) {
            return None;
        }
        self.pos += 1;
        Some(token)
    }

    fn consume_parameters(
        &mut self,
        alias: &str,
        spec: &CommandSpecification,
    ) -> Result<CommandInstance> {
        let mut instance = CommandInstance::new(alias);

        for parameter in spec.parameters() {
            let values = if parameter.is_list() {
                self.consume_list(spec)
            } else {
                self.next_value(|v| spec.accepts(v))
                    .map(|v| vec![v.to_string()])
                    .unwrap_or_default()
            };

            if values.is_empty() {
                check_optional(alias, parameter)?;
                continue;
            }
            trace!(parameter = parameter.name(), count = values.len(), "consumed values");
            instance.insert(parameter.name(), values);
        }

        Ok(instance)
    }

    fn consume_list(&mut self, spec: &CommandSpecification) -> Vec<String> {
        let mut values = Vec::new();
        while let Some(value) = self.next_value(|v| spec.accepts(v)) {
            values.push(value.to_string());
        }
        values
    }

    /// Property values are taken verbatim, whatever they look like.
    fn consume_property(&mut self, name: &str, key: &str) -> Result<CommandInstance> {
        match self.next_token() {
            Some(value) => Ok(CommandInstance::property(name, key, value.to_string())),
            None => Err(Error::missing_value(name, key)),
        }
    }
}

fn check_optional(alias: &str, parameter: &ParameterSpec) -> Result<()> {
    if parameter.is_required() {
        Err(Error::missing_value(alias, parameter.name()))
    } else {
        Ok(())
    }
}
