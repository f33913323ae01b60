// SPDX-License-Identifier: GPL-3.0-or-later

// ! Environment
pub(crate) mod environ;
pub use environ::{environ, Environ};

// ! Output sections
pub(crate) mod report;
pub use report::{write_argv, write_environ, write_line, Probe};

pub const STDOUT_GREETING: &str = "hello from stdout!";
pub const STDERR_GREETING: &str = "hello from stderr!";
