// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io::{BufRead, Write};

/// A cancellable text exchange with the user. Screens talk to the terminal
/// only through this seam, so flows stay scriptable in tests.
pub trait Prompt {
    /// Asks for a line of text. `initial` is shown as the value kept on
    /// empty input. `None` means the exchange was cancelled (EOF).
    fn input(&mut self, message: &str, initial: Option<&str>) -> Result<Option<String>>;

    /// Yes/no question; anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let reply = self.input(&format!("{} [y/N]", message), None)?;
        Ok(matches!(
            reply.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        ))
    }
}

/// Stdin-backed prompt for the real binary.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn input(&mut self, message: &str, initial: Option<&str>) -> Result<Option<String>> {
        match initial {
            Some(init) if !init.is_empty() => print!("{} [{}]: ", message, init),
            _ => print!("{}: ", message),
        }
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
