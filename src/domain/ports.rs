use crate::utils::error::Result;
use async_trait::async_trait;

/// 遠端文字生成服務。每次呼叫只有一個等待點：送出 prompt、取回文字。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<G> {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        (**self).generate_text(prompt).await
    }
}

pub trait GenerationSettings: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> Option<u64>;
}
