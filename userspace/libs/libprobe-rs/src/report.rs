// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    ffi::OsStr,
    io::{Error, Write},
};

use crate::{STDERR_GREETING, STDOUT_GREETING};

pub fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), Error> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Writes every entry verbatim on its own line, returning how many were written.
pub fn write_environ<W, I, S>(out: &mut W, entries: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut count = 0;
    for entry in entries {
        out.write_all(entry.as_ref().as_encoded_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Writes `[ arg0  arg1 ... ]` followed by a newline; `[]` when there are no
/// arguments. Returns the number of arguments written.
pub fn write_argv<W, I, S>(out: &mut W, args: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut count = 0;
    out.write_all(b"[")?;
    for arg in args {
        out.write_all(b" ")?;
        out.write_all(arg.as_ref().as_encoded_bytes())?;
        out.write_all(b" ")?;
        count += 1;
    }
    out.write_all(b"]\n")?;
    Ok(count)
}

pub struct Probe<O: Write, E: Write> {
    stdout: O,
    stderr: E,
}

impl<O: Write, E: Write> Probe<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        Probe { stdout, stderr }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.stdout, self.stderr)
    }

    /// Greets on both streams, then dumps the environment and the argument
    /// vector to stdout. Only the greeting ever goes to stderr.
    pub fn run<EI, ES, AI, AS>(&mut self, environ: EI, argv: AI) -> Result<(), Error>
    where
        EI: IntoIterator<Item = ES>,
        ES: AsRef<OsStr>,
        AI: IntoIterator<Item = AS>,
        AS: AsRef<OsStr>,
    {
        write_line(&mut self.stdout, STDOUT_GREETING)?;
        write_line(&mut self.stderr, STDERR_GREETING)?;
        self.stderr.flush()?;

        let entries = write_environ(&mut self.stdout, environ)?;
        log::debug!("wrote {} environment entries", entries);

        let args = write_argv(&mut self.stdout, argv)?;
        log::debug!("wrote {} arguments", args);
        self.stdout.flush()?;

        Ok(())
    }
}
