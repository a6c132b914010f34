//! Interactive confirmation capability.

use std::io::{self, BufRead, Write};

/// Yes/no confirmation seam. The reconciler asks through this trait so tests
/// can script the answers.
pub trait Confirm: Send + Sync {
    /// Ask the user; `true` means "go ahead".
    fn confirm(&self, prompt: &str) -> bool;
}

/// Blocking terminal prompt. A failed read (no terminal attached, closed
/// stdin) declines: destructive changes are never applied unattended.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}
