//! Command-line argument parsing
//!
//! Supports:
//! - Verifying an expression against the configured checker
//! - Instantiating a template from `ALIAS:TYPE=VALUE` arguments
//! - Inserting tokens into an expression
//! - Listing chord bindings

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::grammar::{parse_mode, NotationMode, TokenId};
use crate::template::ArgumentBinding;
use crate::verification::ConstituentKind;

/// Symbolic formula editing with external verification
#[derive(Parser, Debug)]
#[command(
    name = "formula-editor",
    version,
    about = "Symbolic formula editing with external verification"
)]
pub struct CliArgs {
    /// Checker executable, overriding the configured one
    #[arg(long, global = true, value_name = "CMD")]
    pub checker: Option<String>,

    /// Seconds to wait for the checker
    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Verify an expression and print its status and errors
    Verify {
        /// Alias of the constituent the expression defines
        #[arg(long)]
        alias: String,
        #[arg(long, default_value = "term")]
        kind: ConstituentKind,
        expression: String,
    },

    /// Substitute template arguments and print the instantiated expression
    Instantiate {
        /// Template expression
        #[arg(long)]
        template: String,
        /// Kind of the template constituent
        #[arg(long, default_value = "function")]
        kind: ConstituentKind,
        /// Argument binding; an empty VALUE leaves the argument free
        #[arg(long = "arg", value_name = "ALIAS[:TYPE]=VALUE", value_parser = parse_binding)]
        args: Vec<ArgumentBinding>,
        /// Verify the result under this alias
        #[arg(long)]
        verify_as: Option<String>,
    },

    /// Apply tokens in order at the end of an expression
    Insert {
        #[arg(long, default_value = "")]
        text: String,
        #[arg(value_parser = parse_token, required = true)]
        tokens: Vec<TokenId>,
    },

    /// List chord bindings
    Chords {
        #[arg(long, value_parser = parse_mode_arg)]
        mode: Option<NotationMode>,
    },
}

impl CliArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Parse `ALIAS[:TYPE]=VALUE`
pub fn parse_binding(s: &str) -> Result<ArgumentBinding, String> {
    let (head, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ALIAS[:TYPE]=VALUE, got `{s}`"))?;
    let (alias, typification) = head.split_once(':').unwrap_or((head, ""));
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(format!("missing argument alias in `{s}`"));
    }
    Ok(ArgumentBinding::new(alias, typification.trim(), value))
}

fn parse_token(s: &str) -> Result<TokenId, String> {
    s.parse().map_err(|_| format!("unknown token `{s}`"))
}

fn parse_mode_arg(s: &str) -> Result<NotationMode, String> {
    parse_mode(s).map_err(|e| e.to_string())
}
