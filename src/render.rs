//! Output rendering for the chat REPL.
//!
//! This module provides a renderer trait and a plain-text implementation
//! with optional ANSI styling, the terminal counterpart of the original
//! themed web display.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for the busy indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (used for the greeting verse).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for magenta text (used for Kelly's verse).
const ANSI_MAGENTA: &str = "\x1b[35m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Capturing output in tests
pub trait Renderer: Send {
    /// Print the greeting verse shown when the conversation is empty.
    fn print_greeting(&mut self, greeting: &str);

    /// Print the busy indicator while the one outbound call is in flight.
    fn print_busy(&mut self);

    /// Print a complete assistant reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout so partial lines show before the call blocks.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_greeting(&mut self, greeting: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{ANSI_ITALIC}{greeting}{ANSI_RESET}\n");
        } else {
            println!("{greeting}\n");
        }
        self.flush();
    }

    fn print_busy(&mut self) {
        if self.use_color {
            println!("{ANSI_DIM}Kelly is composing verse...{ANSI_RESET}");
        } else {
            println!("Kelly is composing verse...");
        }
        self.flush();
    }

    fn print_reply(&mut self, text: &str) {
        if self.use_color {
            println!("{ANSI_MAGENTA}Kelly:{ANSI_RESET}\n{text}\n");
        } else {
            println!("Kelly:\n{text}\n");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("\nError: {error}");
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }
}
