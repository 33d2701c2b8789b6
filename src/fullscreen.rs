//! Fullscreen toggle.
//!
//! Fullscreen is an external capability: the viewer asks for it and the
//! terminal emulator may or may not comply. A failed request is logged and
//! otherwise ignored, it never touches navigation state.

use std::fmt;
use std::io::{self, Write};

use crossterm::{execute, Command};
use log::{info, warn};
use thiserror::Error;

/// Errors returned by a fullscreen capability.
#[derive(Error, Debug)]
pub enum FullscreenError {
    #[error("fullscreen is disabled")]
    Denied,

    #[error("terminal rejected the request: {0}")]
    RequestFailed(#[from] io::Error),
}

/// Something that can enter and leave fullscreen.
pub trait Fullscreen {
    fn request(&mut self) -> Result<(), FullscreenError>;
    fn exit(&mut self) -> Result<(), FullscreenError>;
    fn is_active(&self) -> bool;
}

/// Enters fullscreen when inactive, leaves it when active.
///
/// Failures are reported as warnings and swallowed.
pub fn toggle_fullscreen(fullscreen: &mut impl Fullscreen) {
    if !fullscreen.is_active() {
        if let Err(err) = fullscreen.request() {
            warn!("Fullscreen request failed: {}", err);
        }
    } else if let Err(err) = fullscreen.exit() {
        warn!("Fullscreen exit failed: {}", err);
    }
}

/// xterm window operation: maximize to full screen (`CSI 10 ; 1 t`).
struct EnterFullScreen;

/// xterm window operation: undo full screen (`CSI 10 ; 0 t`).
struct LeaveFullScreen;

impl Command for EnterFullScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;1t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen needs an ANSI terminal",
        ))
    }
}

impl Command for LeaveFullScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;0t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen needs an ANSI terminal",
        ))
    }
}

/// Terminal fullscreen through xterm window-manipulation sequences.
///
/// While active the viewer also hides its chrome.
pub struct TerminalFullscreen<W: Write> {
    out: W,
    allowed: bool,
    active: bool,
}

impl<W: Write> TerminalFullscreen<W> {
    /// Creates the capability. When `allowed` is false every request is denied.
    pub fn new(out: W, allowed: bool) -> Self {
        Self {
            out,
            allowed,
            active: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Fullscreen for TerminalFullscreen<W> {
    fn request(&mut self) -> Result<(), FullscreenError> {
        if !self.allowed {
            return Err(FullscreenError::Denied);
        }
        execute!(self.out, EnterFullScreen)?;
        self.active = true;
        info!("entered fullscreen");
        Ok(())
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        execute!(self.out, LeaveFullScreen)?;
        self.active = false;
        info!("left fullscreen");
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
