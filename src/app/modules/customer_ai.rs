use super::PromptSource;
use crate::app::ModuleKind;
use crate::domain::responses::CustomerAIResponse;
use crate::fixtures::{mock_data, prompts};
use crate::utils::error::Result;

/// Personalised outreach for the fixture loyalty-program customers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerAIModule;

impl PromptSource for CustomerAIModule {
    type Output = CustomerAIResponse;

    const KIND: ModuleKind = ModuleKind::CustomerAI;

    fn compose_prompt(&self) -> Result<String> {
        Ok(prompts::CUSTOMER_AI_PROMPT.render(&[(
            "customer_profiles_json",
            mock_data::CUSTOMER_PROFILES_JSON,
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modules::test_support::ScriptedGenerator;
    use crate::app::modules::ModuleController;
    use crate::domain::responses::Channel;

    #[test]
    fn test_prompt_embeds_profiles() {
        let prompt = CustomerAIModule.compose_prompt().unwrap();
        assert!(prompt.contains(r#""name":"Sarah J.""#));
        assert!(prompt.contains("Lapsed Vegan"));
        assert!(!prompt.contains("{{customer_profiles_json}}"));
    }

    #[tokio::test]
    async fn test_trigger_parses_opportunities() {
        let generator = ScriptedGenerator::replying(
            r#"{"opportunities":[
                {"customerName":"Sarah J.","insight":"Morning regular.","channel":"Push Notification","generatedMessage":"Your latte is on us tomorrow at 8!"},
                {"customerName":"David L.","insight":"Lapsed vegan.","channel":"Email","generatedMessage":"We miss you, David."}
            ]}"#,
        );
        let mut controller = ModuleController::new(CustomerAIModule);

        let state = controller.trigger(&generator).await;

        let data = state.data().unwrap();
        assert_eq!(data.opportunities.len(), 2);
        assert_eq!(data.opportunities[1].channel, Some(Channel::Email));
    }
}
