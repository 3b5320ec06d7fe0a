//! Declarative command-line definitions with typo-tolerant matching.
//!
//! Commands are declared in a small definition language, one definition per
//! command, and argument vectors are matched against them in a single pass:
//!
//! - **Definitions**: aliases, parameters, a value validator and a
//!   description, written as comma separated tokens
//! - **Matching**: each argument token either starts a registered command,
//!   is an implicit `-D<key>=<value>` property, or is rejected
//! - **Suggestions**: rejected tokens come back with the registered aliases
//!   they most likely meant
//!
//! # Quick Start
//!
//! ```rust
//! use argspec::{CmdLine, ErrorKind};
//!
//! let mut cmdline = CmdLine::new().application_name("pkg").version("1.2");
//! cmdline.define(&["install, !package, ?extras..., #Install a package"]).unwrap();
//! cmdline.define(&["info, !package, #Show package details"]).unwrap();
//!
//! let commands = cmdline.parse(&["install=serde,derive,std"]).unwrap();
//! assert_eq!(commands[0].value("package"), Some("serde"));
//! assert_eq!(commands[0].values("extras").unwrap(), ["derive", "std"]);
//!
//! let err = cmdline.parse(&["instal", "serde"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unsupported);
//! assert_eq!(err.suggestions(), ["install"]);
//! ```
//!
//! # Definition Language
//!
//! ```text
//! file           alias
//! !name          required value        !name...   required list
//! ?name          optional value        ?name...   optional list
//! :pattern       regex every value must match
//! #text          description
//! ```
//!
//! Tokens are separated by `,` or `=`. Required parameters come before
//! optional ones and a command has at most one list.

mod cmdline;
mod command;
mod definition;
mod error;
mod listener;
mod matcher;
mod registry;
mod settings;
mod spec;
mod token;
mod tokenizer;

pub use cmdline::CmdLine;
pub use command::CommandInstance;
pub use definition::tokenize_definition;
pub use error::{Error, ErrorKind, Result};
pub use listener::{CollectingListener, CommandListener};
pub use matcher::{property_key, PROPERTY_PREFIX};
pub use registry::Registry;
pub use settings::{Settings, DEFAULT_MAX_TOKEN_LENGTH};
pub use spec::{CommandSpecification, ParameterSpec};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, LIST_DELIMITER, VALUE_DELIMITER};
