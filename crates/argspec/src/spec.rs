//! Command specifications and the rules that build them.
//!
//! A [`CommandSpecification`] is built from a definition's tokens once every
//! rule below holds; it never changes afterwards.
//!
//! | Rule | Error |
//! |---|---|
//! | at least one alias | [`Error::MissingAlias`] |
//! | names contain no whitespace | [`Error::UndelimitedDefinition`] |
//! | aliases unique, here and in the registry | [`Error::DuplicateAlias`] |
//! | at most one description | [`Error::DuplicateDescription`] |
//! | at most one validator | [`Error::DuplicateValidator`] |
//! | parameter names unique | [`Error::DuplicateParameter`] |
//! | required parameters before optional ones | [`Error::RequiredAfterOptional`] |
//! | at most one list parameter | [`Error::MultipleLists`] |
//! | validator compiles | [`Error::InvalidValidator`] |

use std::collections::HashSet;

use regex::Regex;

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// A declared parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    name: String,
    required: bool,
    list: bool,
}

impl ParameterSpec {
    /// Creates a parameter.
    pub fn new(name: impl Into<String>, required: bool, list: bool) -> Self {
        ParameterSpec {
            name: name.into(),
            required,
            list,
        }
    }

    /// The name values are recorded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the parameter must receive a value.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the parameter takes a variable number of values.
    pub fn is_list(&self) -> bool {
        self.list
    }

    /// Usage notation: `<name>`, `[name]`, `<name...>` or `[name...]`.
    pub fn usage(&self) -> String {
        let dots = if self.list { "..." } else { "" };
        if self.required {
            format!("<{}{}>", self.name, dots)
        } else {
            format!("[{}{}]", self.name, dots)
        }
    }
}

/// The immutable description of one command.
#[derive(Debug, Clone)]
pub struct CommandSpecification {
    aliases: Vec<String>,
    parameters: Vec<ParameterSpec>,
    description: Option<String>,
    validator: Option<Regex>,
}

impl CommandSpecification {
    /// Builds a specification from definition tokens.
    ///
    /// `is_registered` reports aliases already claimed by other
    /// specifications.
    pub fn from_tokens<F>(tokens: &[Token], is_registered: F) -> Result<Self>
    where
        F: Fn(&str) -> bool,
    {
        if !tokens.iter().any(|t| t.kind == TokenKind::Alias) {
            return Err(Error::MissingAlias);
        }

        let mut aliases: Vec<String> = Vec::new();
        let mut parameters: Vec<ParameterSpec> = Vec::new();
        let mut description = None;
        let mut pattern = None;

        for token in tokens {
            match token.kind {
                TokenKind::Alias => {
                    ensure_delimited(&token.text)?;
                    if aliases.contains(&token.text) || is_registered(&token.text) {
                        return Err(Error::DuplicateAlias(token.text.clone()));
                    }
                    aliases.push(token.text.clone());
                }
                TokenKind::Description => {
                    if description.replace(token.text.clone()).is_some() {
                        return Err(Error::DuplicateDescription);
                    }
                }
                TokenKind::RegexValidator => {
                    if pattern.replace(token.text.as_str()).is_some() {
                        return Err(Error::DuplicateValidator);
                    }
                }
                kind => {
                    ensure_delimited(&token.text)?;
                    parameters.push(ParameterSpec::new(
                        token.text.clone(),
                        kind.is_required(),
                        kind.is_list(),
                    ));
                }
            }
        }

        check_parameters(&parameters)?;

        let validator = pattern.map(anchored).transpose()?;

        Ok(CommandSpecification {
            aliases,
            parameters,
            description,
            validator,
        })
    }

    /// Every name this command answers to, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The first declared alias.
    pub fn name(&self) -> &str {
        // from_tokens guarantees at least one alias
        self.aliases.first().map(String::as_str).unwrap_or_default()
    }

    /// Declared parameters, in order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Looks a parameter up by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// The description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The validator every value must match, if one was given.
    pub fn validator(&self) -> Option<&Regex> {
        self.validator.as_ref()
    }

    /// Returns true if `value` satisfies the validator (always true without
    /// one).
    pub fn accepts(&self, value: &str) -> bool {
        self.validator.as_ref().map_or(true, |re| re.is_match(value))
    }

    /// Usage line: aliases, parameter notation, description.
    pub fn usage(&self) -> String {
        let mut line = self.aliases.join(", ");
        for parameter in &self.parameters {
            line.push(' ');
            line.push_str(&parameter.usage());
        }
        if let Some(description) = &self.description {
            line.push_str("    ");
            line.push_str(description);
        }
        line
    }
}

fn ensure_delimited(name: &str) -> Result<()> {
    if name.chars().any(char::is_whitespace) {
        return Err(Error::UndelimitedDefinition(name.to_string()));
    }
    Ok(())
}

fn check_parameters(parameters: &[ParameterSpec]) -> Result<()> {
    let mut names = HashSet::new();
    let mut seen_optional = false;
    let mut seen_list = false;

    for parameter in parameters {
        if !names.insert(parameter.name.as_str()) {
            return Err(Error::DuplicateParameter(parameter.name.clone()));
        }
        if parameter.required && seen_optional {
            return Err(Error::RequiredAfterOptional(parameter.name.clone()));
        }
        if parameter.list && seen_list {
            return Err(Error::MultipleLists(parameter.name.clone()));
        }
        seen_optional |= !parameter.required;
        seen_list |= parameter.list;
    }
    Ok(())
}

/// Compiles `pattern` so that it must match a whole value.
fn anchored(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{pattern})$"))?)
}
