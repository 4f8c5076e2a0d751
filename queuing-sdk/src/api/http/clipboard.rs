use async_trait::async_trait;

use crate::api::clipboard::ClipboardApi;
use crate::Result;

/// `navigator.clipboard` backed clipboard
pub struct NavigatorClipboard;

#[async_trait(?Send)]
impl ClipboardApi for NavigatorClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        utils::write_clipboard(text).await?;
        Ok(())
    }
}
