//! Clipboard access for the terminal.
//!
//! The primary mechanism pipes text into the platform's clipboard tool. The
//! legacy fallback emits an OSC 52 escape sequence, which most terminal
//! emulators turn into a clipboard write. A file target replaces both for
//! headless use.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use horo_app::{Clipboard, ClipboardError};

#[cfg(target_os = "macos")]
const TOOLS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const TOOLS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

pub enum TerminalClipboard {
    /// Platform clipboard tools, then OSC 52.
    System,
    /// Write the text to a file instead.
    File(PathBuf),
}

impl TerminalClipboard {
    pub fn new(file: Option<PathBuf>) -> Self {
        file.map_or(Self::System, Self::File)
    }
}

fn pipe_to(tool: &[&str], text: &str) -> Result<(), ClipboardError> {
    let (program, args) = tool.split_first().ok_or(ClipboardError::Unavailable)?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| ClipboardError::Unavailable)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardError::Failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardError::Failed(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed(format!("{program} exited with {status}")))
    }
}

impl Clipboard for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self {
            Self::File(path) => {
                std::fs::write(path, text).map_err(|e| ClipboardError::Failed(e.to_string()))
            }
            Self::System => {
                let mut last = ClipboardError::Unavailable;
                for tool in TOOLS {
                    match pipe_to(tool, text) {
                        Ok(()) => return Ok(()),
                        Err(e) => {
                            debug!(tool = tool[0], error = %e, "clipboard tool failed");
                            last = e;
                        }
                    }
                }
                Err(last)
            }
        }
    }

    fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if matches!(self, Self::File(_)) {
            return Err(ClipboardError::Unavailable);
        }
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable);
        }
        write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Failed(e.to_string()))
    }
}
