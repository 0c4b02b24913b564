//! Clipboard access for copying swatch hex codes.
//!
//! Clipboard failures never abort a command: callers report them as
//! warnings and carry on.
//!
//! On Linux the process owns what it puts on the X11/Wayland clipboard, and
//! the contents vanish when it exits. [`SystemClipboard`] therefore blocks
//! until another program (usually a clipboard manager, or the next copy)
//! takes the selection over.

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Palette;

/// Where copied text goes.
pub trait ClipboardSink {
    /// Places `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| hand_off(&mut clipboard, text))
            .context("Failed to copy to clipboard")
    }
}

#[cfg(target_os = "linux")]
fn hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    debug!("Holding clipboard selection until another program takes it");
    clipboard.set().wait().text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

/// Copies the hex code of swatch `position` (1-based) to `sink`.
///
/// Returns the confirmation message shown to the user.
///
/// # Errors
///
/// Returns an error if `position` is not a swatch of the palette or the
/// clipboard rejects the text.
pub fn copy_swatch(
    palette: &Palette,
    position: usize,
    sink: &mut impl ClipboardSink,
) -> Result<String> {
    let color = position
        .checked_sub(1)
        .and_then(|index| palette.get(index))
        .with_context(|| {
            format!(
                "Swatch {position} does not exist (expected 1-{})",
                palette.len()
            )
        })?;

    let hex = color.hex();
    sink.set_text(&hex)?;
    debug!(position, hex = %hex, "Copied swatch");

    Ok(format!("Copied {hex} to clipboard!"))
}
