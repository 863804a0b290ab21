//! One input line, one core call.
//!
//! Lines are split on whitespace; the first word picks the call and the rest
//! are its arguments. No arithmetic expression is ever parsed here.

use rpn_calc_sdk::{Handle, RpnCalcError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    New,
    Delete(Handle),
    Push(Handle, f64),
    Pop(Handle),
    Op(Handle, char),
    Size(Handle),
    At(Handle, usize),
    Stack(Handle),
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownVerb(String),

    #[error("'{verb}' takes {expected} argument(s), got {got}")]
    Arity {
        verb: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("malformed number '{0}'")]
    BadNumber(String),

    #[error(transparent)]
    Rejected(#[from] RpnCalcError),
}

impl Command {
    /// Parses one line; blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    /// Returns `CommandError` for unknown verbs, wrong arity or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "new" => {
                expect_args("new", &args, 0)?;
                Self::New
            }
            "quit" | "exit" => {
                expect_args("quit", &args, 0)?;
                Self::Quit
            }
            "delete" => {
                expect_args("delete", &args, 1)?;
                Self::Delete(args[0].parse()?)
            }
            "push" => {
                expect_args("push", &args, 2)?;
                Self::Push(args[0].parse()?, parse_value(args[1])?)
            }
            "pop" => {
                expect_args("pop", &args, 1)?;
                Self::Pop(args[0].parse()?)
            }
            "op" => {
                expect_args("op", &args, 2)?;
                Self::Op(args[0].parse()?, parse_symbol(args[1])?)
            }
            "size" => {
                expect_args("size", &args, 1)?;
                Self::Size(args[0].parse()?)
            }
            "at" => {
                expect_args("at", &args, 2)?;
                Self::At(args[0].parse()?, parse_index(args[1])?)
            }
            "stack" => {
                expect_args("stack", &args, 1)?;
                Self::Stack(args[0].parse()?)
            }
            _ => return Err(CommandError::UnknownVerb(verb.to_owned())),
        };
        Ok(Some(cmd))
    }
}

fn expect_args(verb: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::Arity {
            verb,
            expected,
            got: args.len(),
        })
    }
}

fn parse_value(word: &str) -> Result<f64, CommandError> {
    word.parse().map_err(|_| CommandError::BadNumber(word.to_owned()))
}

/// Indices too large for `usize` saturate so the core reports them as out of
/// range instead of the line being rejected as malformed.
fn parse_index(word: &str) -> Result<usize, CommandError> {
    let index: i128 = word.parse().map_err(|_| CommandError::BadNumber(word.to_owned()))?;
    if index < 0 {
        return Err(RpnCalcError::invalid(format!("negative index {index}")).into());
    }
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

fn parse_symbol(word: &str) -> Result<char, CommandError> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(
            RpnCalcError::invalid(format!("operator must be a single symbol, got '{word}'")).into(),
        ),
    }
}
