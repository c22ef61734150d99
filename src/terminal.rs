//! Terminal surfaces a [`Canvas`](crate::canvas::Canvas) draws onto.
//!
//! A surface answers two questions per frame: how big is the character grid
//! right now, and where does a finished frame go. [`StdoutTerminal`] asks the
//! terminal driver and prints; [`HeadlessTerminal`] keeps a fixed size and
//! captures frames in memory.

use std::io::{self, Stdout, Write};
use std::mem;

use log::{info, warn};

use crate::error::{Error, Result};

/// A character-grid output device.
pub trait Terminal {
    /// Current `(width, height)` in character cells.
    fn size(&self) -> Result<(usize, usize)>;

    /// Emits one rendered frame.
    fn present(&mut self, frame: &str) -> Result<()>;
}

/// The process's real terminal, sized with `ioctl(TIOCGWINSZ)` on stdout.
pub struct StdoutTerminal {
    out: Stdout,
    fallback: Option<(usize, usize)>,
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutTerminal {
    /// A terminal whose size query failure is fatal.
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            fallback: None,
        }
    }

    /// A terminal that reports `(width, height)` when the driver cannot,
    /// e.g. when stdout is a pipe.
    pub fn with_fallback(width: usize, height: usize) -> Self {
        Self {
            out: io::stdout(),
            fallback: Some((width, height)),
        }
    }
}

impl Terminal for StdoutTerminal {
    fn size(&self) -> Result<(usize, usize)> {
        match query_window_size(libc::STDOUT_FILENO) {
            Ok(size) => Ok(size),
            Err(e) => match self.fallback {
                Some(size) => {
                    warn!(
                        "Terminal size query failed ({}), using fallback {}x{}",
                        e, size.0, size.1
                    );
                    Ok(size)
                }
                None => Err(Error::TerminalQuery(e)),
            },
        }
    }

    fn present(&mut self, frame: &str) -> Result<()> {
        let mut lock = self.out.lock();
        writeln!(lock, "{frame}")?;
        lock.flush()?;
        Ok(())
    }
}

/// Retrieves `(columns, rows)` for `fd`. A zero-sized window counts as a
/// failure so callers fall back instead of allocating an empty grid.
fn query_window_size(fd: libc::c_int) -> io::Result<(usize, usize)> {
    // SAFETY: `ioctl` is an FFI call writing into a zeroed, properly sized `winsize`.
    let ws = unsafe {
        let mut ws: libc::winsize = mem::zeroed();
        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) == -1 {
            return Err(io::Error::last_os_error());
        }
        ws
    };
    if ws.ws_col == 0 || ws.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported a zero-sized window",
        ));
    }
    Ok((ws.ws_col as usize, ws.ws_row as usize))
}

/// An in-memory surface with a settable size that records every frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessTerminal {
    width: usize,
    height: usize,
    frames: Vec<String>,
}

impl HeadlessTerminal {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    /// Changes the size reported from the next query on, like a window resize.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Frames presented so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Terminal for HeadlessTerminal {
    fn size(&self) -> Result<(usize, usize)> {
        Ok((self.width, self.height))
    }

    fn present(&mut self, frame: &str) -> Result<()> {
        self.frames.push(frame.to_owned());
        Ok(())
    }
}

/// Terminal type and color capability as advertised by the environment.
///
/// Only logged; output is never colored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalInfo {
    pub term: Option<String>,
    pub color: Option<String>,
}

impl TerminalInfo {
    /// Reads `TERM` and `COLORTERM`.
    pub fn from_env() -> Self {
        Self {
            term: std::env::var("TERM").ok(),
            color: std::env::var("COLORTERM").ok(),
        }
    }

    pub fn log(&self) {
        info!(
            "Term type: {}, term color: {}",
            self.term.as_deref().unwrap_or("<unset>"),
            self.color.as_deref().unwrap_or("<unset>")
        );
    }
}
