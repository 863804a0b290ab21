//! Command loop connecting a line stream to the calculator client.

use std::io::{BufRead, Write};
use std::sync::Arc;

use rpn_calc_sdk::{Handle, RpnCalcClient, RpnCalcError};
use tracing::debug;

use crate::command::Command;

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub errors: usize,
}

enum Reply {
    Handle(Handle),
    Done,
    Value(f64),
    Count(usize),
    Values(Vec<f64>),
}

pub struct Session {
    client: Arc<dyn RpnCalcClient>,
}

impl Session {
    #[must_use]
    pub fn new(client: Arc<dyn RpnCalcClient>) -> Self {
        Self { client }
    }

    /// Executes lines from `input` until `quit` or EOF, writing one reply
    /// line per command to `out`. Failed commands print `error: ...` and
    /// the session continues.
    ///
    /// # Errors
    /// Only I/O failures on `input` or `out` end the session with an error.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut out: W) -> anyhow::Result<SessionStats> {
        let mut stats = SessionStats::default();

        for line in input.lines() {
            let line = line?;
            let cmd = match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    stats.errors += 1;
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            stats.commands += 1;
            match self.execute(cmd) {
                Ok(reply) => write_reply(&mut out, reply)?,
                Err(e) => {
                    stats.errors += 1;
                    debug!(?cmd, error = %e, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        out.flush()?;
        Ok(stats)
    }

    fn execute(&self, cmd: Command) -> Result<Reply, RpnCalcError> {
        let client = self.client.as_ref();
        match cmd {
            Command::New => client.create().map(Reply::Handle),
            Command::Delete(h) => client.delete(h).map(|()| Reply::Done),
            Command::Push(h, v) => client.push(h, v).map(|()| Reply::Done),
            Command::Pop(h) => client.pop(h).map(Reply::Value),
            Command::Op(h, symbol) => client.apply(h, symbol).map(Reply::Value),
            Command::Size(h) => client.size(h).map(Reply::Count),
            Command::At(h, index) => client.at(h, index).map(Reply::Value),
            Command::Stack(h) => client.snapshot(h).map(Reply::Values),
            Command::Quit => Ok(Reply::Done),
        }
    }
}

fn write_reply<W: Write>(out: &mut W, reply: Reply) -> std::io::Result<()> {
    match reply {
        Reply::Handle(h) => writeln!(out, "{h}"),
        Reply::Done => writeln!(out, "ok"),
        Reply::Value(v) => writeln!(out, "{v}"),
        Reply::Count(n) => writeln!(out, "{n}"),
        Reply::Values(values) if values.is_empty() => writeln!(out, "(empty)"),
        Reply::Values(values) => {
            let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", joined.join(" "))
        }
    }
}
