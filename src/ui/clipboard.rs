use std::io::Write;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::session::{SharePayload, SharePlatform};

/// Terminals have no share sheet, so sharing always falls back to the
/// clipboard, reached through the OSC 52 escape sequence.
pub struct TerminalShare<W: Write> {
    out: W,
}

impl<W: Write> TerminalShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> SharePlatform for TerminalShare<W> {
    fn supports_native_share(&self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<()> {
        bail!("native sharing is not available in a terminal")
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        debug!(bytes = text.len(), "copying to clipboard");
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| self.out.flush())
            .context("failed to write clipboard sequence")
    }
}
