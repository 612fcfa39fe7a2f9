//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Hold the console open after a failure so a double-clicked launcher
//!   window does not vanish before the message is read.

use anyhow::Result;
use std::io::{BufRead, IsTerminal, Write};

/// Wait for the user to press Enter.
///
/// Returns immediately when stdin is not a terminal, so scripted and piped
/// runs never block.
pub fn pause_for_acknowledgement() -> Result<()> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }
    wait_for_enter(&mut stdin.lock(), &mut std::io::stderr())
}

fn wait_for_enter(input: &mut impl BufRead, prompt: &mut impl Write) -> Result<()> {
    write!(prompt, "Press Enter to exit...")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
