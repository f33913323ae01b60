// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    env::{vars_os, VarsOs},
    ffi::OsString,
};

/// Iterator over the inherited environment table, in host order.
///
/// Each entry is yielded as its raw `KEY=VALUE` form. The iterator is consumed
/// as it goes; call [`environ`] again for a fresh pass.
pub struct Environ {
    vars: VarsOs,
}

pub fn environ() -> Environ {
    Environ { vars: vars_os() }
}

impl Iterator for Environ {
    type Item = OsString;

    fn next(&mut self) -> Option<OsString> {
        let (key, value) = self.vars.next()?;
        let mut entry = OsString::with_capacity(key.len() + 1 + value.len());
        entry.push(key);
        entry.push("=");
        entry.push(value);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vars.size_hint()
    }
}
