use async_trait::async_trait;

use crate::Result;

#[async_trait(?Send)]
pub trait ClipboardApi {
    async fn copy(&self, text: &str) -> Result<()>;
}
