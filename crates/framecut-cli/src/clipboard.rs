//! Terminal clipboard back-ends.
//!
//! [`SystemClipboard`] pipes text into the first platform copy tool that
//! succeeds. [`Osc52Clipboard`] asks the terminal itself to set the clipboard
//! with an OSC 52 escape sequence, which also works over SSH.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use framecut_core::{Clipboard, ClipboardError, FallbackClipboard};

/// An external program that reads the text to copy from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CopyCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, text: &str) -> Result<(), ClipboardError> {
        let command = self.display();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::io(command.clone(), source))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::io(command.clone(), source))?;
        }
        let status = child
            .wait()
            .map_err(|source| ClipboardError::io(command.clone(), source))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit {
                command,
                status: status.to_string(),
            })
        }
    }
}

/// Copy tools tried in order for the current platform.
pub fn platform_commands() -> Vec<CopyCommand> {
    if cfg!(target_os = "macos") {
        vec![CopyCommand::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![CopyCommand::new("clip", &[])]
    } else {
        vec![
            CopyCommand::new("wl-copy", &[]),
            CopyCommand::new("xclip", &["-selection", "clipboard"]),
            CopyCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<CopyCommand>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new(platform_commands())
    }
}

impl SystemClipboard {
    pub fn new(commands: Vec<CopyCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[CopyCommand] {
        &self.commands
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last = ClipboardError::Unavailable;
        for command in &self.commands {
            match command.run(text) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    debug!(command = %command.program, %error, "copy tool failed");
                    last = error;
                }
            }
        }
        Err(last)
    }
}

/// The OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Writes an OSC 52 sequence to a terminal stream.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
}

impl Osc52Clipboard<io::Stderr> {
    /// Write to stderr so the sequence never lands in redirected results.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Rejected("terminal writer poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| ClipboardError::io("osc52", source))
    }
}

/// Platform tools first, the terminal escape sequence as fallback.
pub type DefaultClipboard = FallbackClipboard<SystemClipboard, Osc52Clipboard<io::Stderr>>;

pub fn default_clipboard() -> DefaultClipboard {
    FallbackClipboard::new(SystemClipboard::default(), Osc52Clipboard::stderr())
}
