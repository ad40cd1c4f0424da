use crate::error::Result;
use arboard::Clipboard;

/// Somewhere copied text ends up.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
///
/// The arboard handle is opened on first use and kept, since on Linux the
/// copied text is only served while a handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text)?;
        Ok(())
    }
}
