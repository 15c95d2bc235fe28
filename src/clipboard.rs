#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

#[async_trait::async_trait(?Send)]
pub trait ClipboardSink {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// The OS clipboard, through arboard.
///
/// The handle is kept open after the first write: on X11 the contents are
/// served by the owning handle and vanish when it is dropped.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct SystemClipboard {
    handle: RefCell<Option<arboard::Clipboard>>,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut handle = self.handle.borrow_mut();
        if handle.is_none() {
            *handle = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = handle.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}

/// The browser clipboard, through `navigator.clipboard`.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct SystemClipboard;

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        use anyhow::anyhow;
        use dioxus::prelude::document;

        let js = format!(
            "await navigator.clipboard.writeText({}); return true;",
            serde_json::to_string(text)?
        );
        document::eval(&js).await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }
}
