use super::PromptSource;
use crate::app::ModuleKind;
use crate::domain::responses::EmployeeCoPilotResponse;
use crate::fixtures::{mock_data, prompts};
use crate::utils::error::{CatalystError, Result};

/// Staff Q&A grounded in the SOP and product guide excerpts.
#[derive(Debug, Clone, Default)]
pub struct EmployeeCoPilotModule {
    query: String,
}

impl EmployeeCoPilotModule {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Loads one of the canned staff questions as the current query.
    pub fn use_example(&mut self, example_id: &str) -> Result<()> {
        let example = mock_data::staff_query_example(example_id).ok_or_else(|| {
            CatalystError::validation(format!("Unknown example question: {}", example_id))
        })?;
        self.query = example.query.to_string();
        Ok(())
    }
}

impl PromptSource for EmployeeCoPilotModule {
    type Output = EmployeeCoPilotResponse;

    const KIND: ModuleKind = ModuleKind::EmployeeCoPilot;

    fn compose_prompt(&self) -> Result<String> {
        if self.query.trim().is_empty() {
            return Err(CatalystError::validation("Please enter a question."));
        }

        Ok(prompts::EMPLOYEE_CO_PILOT_PROMPT.render(&[
            ("sop_excerpt", mock_data::STAFF_SOP_EXCERPT),
            ("product_guide_excerpt", mock_data::PRODUCT_GUIDE_EXCERPT),
            ("user_question", self.query.as_str()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_rejected() {
        let err = EmployeeCoPilotModule::new("   ").compose_prompt().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a question.");
    }

    #[test]
    fn test_prompt_contains_question_and_excerpts() {
        let prompt = EmployeeCoPilotModule::new("How do I clean the espresso machine?")
            .compose_prompt()
            .unwrap();

        assert!(prompt.contains("Staff Question: How do I clean the espresso machine?"));
        assert!(prompt.contains("5.1 Espresso Machine Operation"));
        assert!(prompt.contains("Ethiopian Yirgacheffe (Single Origin)"));
    }

    #[test]
    fn test_use_example() {
        let mut module = EmployeeCoPilotModule::default();
        module.use_example("q4").unwrap();
        assert_eq!(module.query(), "What are the tasting notes for the House Blend?");

        assert!(module.use_example("q42").is_err());
        assert_eq!(module.query(), "What are the tasting notes for the House Blend?");
    }
}
