use super::PromptSource;
use crate::app::ModuleKind;
use crate::domain::responses::MarketPulseResponse;
use crate::fixtures::{mock_data, prompts};
use crate::utils::error::Result;

/// Competitor watch, trend radar and strategy brief from public chatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketPulseModule;

impl PromptSource for MarketPulseModule {
    type Output = MarketPulseResponse;

    const KIND: ModuleKind = ModuleKind::MarketPulse;

    fn compose_prompt(&self) -> Result<String> {
        Ok(prompts::MARKET_PULSE_PROMPT.render(&[
            ("competitor_reviews_text", mock_data::COMPETITOR_REVIEWS_TEXT),
            ("social_media_text", mock_data::SOCIAL_MEDIA_TEXT),
            ("food_blog_text", mock_data::FOOD_BLOG_TEXT),
        ]))
    }
}
