//! A small file tool built on argspec.
//!
//! ```text
//! argspec-demo -f=file1.txt,file2.txt --list
//! argspec-demo -Dapp.verbose=true --copy a.txt b.txt --json
//! RUST_LOG=argspec=trace argspec-demo instal
//! ```
//!
//! Settings may be supplied as JSON through `ARGSPEC_SETTINGS`, for example
//! `{"implicit_properties": false}`.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use argspec::{CmdLine, CommandInstance, CommandListener, Settings};
use tracing_subscriber::prelude::*;

const DEFINITIONS: &[&str] = &[
    r"-f, --file, !fileNames..., :[\w.-]+\.txt, #Load text files",
    "-c, --copy, !from, !to, #Copy a file",
    "-r, --remove, !path, ?more..., #Remove files",
    "-l, --list, #List loaded files",
    "-i, --info, ?path, #Show file details",
    "--json, #Print matched commands as JSON lines",
    "-h, --help, #Show this help",
];

/// Prints every command as it is handed over.
struct ConsoleListener {
    json: bool,
}

impl CommandListener for ConsoleListener {
    fn handle(&mut self, command: &CommandInstance) {
        if self.json {
            match serde_json::to_string(command) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("cannot serialize {}: {err}", command.name()),
            }
            return;
        }

        let kind = if command.is_implicit() { "property" } else { "command" };
        println!("{kind} {}", command.name());
        for (parameter, values) in command.parameters() {
            println!("  {parameter} = {}", values.join(", "));
        }
    }
}

fn settings() -> Result<Settings> {
    match env::var("ARGSPEC_SETTINGS") {
        Ok(raw) => serde_json::from_str(&raw).context("invalid ARGSPEC_SETTINGS"),
        Err(_) => Ok(Settings::default()),
    }
}

fn cmdline() -> Result<CmdLine> {
    let mut cmdline = CmdLine::with_settings(settings()?)
        .application_name(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"));
    for definition in DEFINITIONS {
        cmdline
            .define(&[*definition])
            .with_context(|| format!("bad definition '{definition}'"))?;
    }
    Ok(cmdline)
}

/// Usage is shown when nothing was asked for or the help command matched.
fn wants_help(commands: &[CommandInstance]) -> bool {
    commands.is_empty() || commands.iter().any(|c| matches!(c.name(), "-h" | "--help"))
}

fn run(args: &[String]) -> Result<ExitCode> {
    let mut cmdline = cmdline()?;

    let commands = match cmdline.registry().parse(args) {
        Ok(commands) => commands,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("\n{}", cmdline.usage());
            return Ok(ExitCode::from(2));
        }
    };
    if wants_help(&commands) {
        print!("{}", cmdline.usage());
        return Ok(ExitCode::SUCCESS);
    }

    let json = commands.iter().any(|c| c.name() == "--json");
    cmdline.add_listener(ConsoleListener { json });
    let handled = cmdline.parse(args)?;
    tracing::debug!(commands = handled.len(), "done");
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    run(&args)
}
