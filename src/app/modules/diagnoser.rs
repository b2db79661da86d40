use super::PromptSource;
use crate::app::ModuleKind;
use crate::domain::responses::StorePerformanceDiagnoserResponse;
use crate::fixtures::mock_data::{self, PERFORMANCE_ISSUE_EXAMPLES};
use crate::fixtures::prompts;
use crate::utils::error::{CatalystError, Result};

/// Root causes and turnaround actions for a selected store issue.
#[derive(Debug, Clone)]
pub struct StorePerformanceDiagnoserModule {
    selected_issue_id: String,
}

impl Default for StorePerformanceDiagnoserModule {
    /// 預設選取第一個範例問題
    fn default() -> Self {
        Self {
            selected_issue_id: PERFORMANCE_ISSUE_EXAMPLES
                .first()
                .map(|issue| issue.id.to_string())
                .unwrap_or_default(),
        }
    }
}

impl StorePerformanceDiagnoserModule {
    pub fn new(issue_id: impl Into<String>) -> Self {
        Self {
            selected_issue_id: issue_id.into(),
        }
    }

    pub fn selected_issue_id(&self) -> &str {
        &self.selected_issue_id
    }

    pub fn select_issue(&mut self, issue_id: impl Into<String>) {
        self.selected_issue_id = issue_id.into();
    }
}

impl PromptSource for StorePerformanceDiagnoserModule {
    type Output = StorePerformanceDiagnoserResponse;

    const KIND: ModuleKind = ModuleKind::StorePerformanceDiagnoser;

    fn compose_prompt(&self) -> Result<String> {
        if self.selected_issue_id.is_empty() {
            return Err(CatalystError::validation("Please select an issue to diagnose."));
        }

        let issue = mock_data::performance_issue(&self.selected_issue_id)
            .ok_or_else(|| CatalystError::validation("Please select a valid performance issue."))?;

        let data = mock_data::store_issue_data(issue.store_internal_id, issue.concern_internal_id)
            .ok_or_else(|| {
                CatalystError::validation(format!(
                    "Mock data not found for {} - {}.",
                    issue.store_display_name, issue.concern_display_name
                ))
            })?;

        Ok(prompts::STORE_PERFORMANCE_DIAGNOSER_PROMPT.render(&[
            ("store_name", issue.store_display_name),
            ("area_of_concern", issue.concern_display_name),
            ("sales_data_extract_csv", data.sales_data_extract_csv),
            ("customer_feedback_summary_text", data.customer_feedback_summary),
            ("competitor_activity_text", data.competitor_activity),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_first_issue() {
        assert_eq!(StorePerformanceDiagnoserModule::default().selected_issue_id(), "issue1");
    }

    #[test]
    fn test_every_store_name_occurrence_is_filled() {
        let prompt = StorePerformanceDiagnoserModule::new("issue1").compose_prompt().unwrap();

        assert!(!prompt.contains("{{"));
        assert_eq!(prompt.matches("Flagship Store - 5th Avenue").count(), 4);
        assert!(prompt.contains("Area of Concern: Declining Pastry Sales"));
        assert!(prompt.contains("```csv\ndate,category,item,quantity_sold,revenue"));
        assert!(prompt.contains("freshly baked hourly"));
    }

    #[test]
    fn test_selection_errors() {
        let err = StorePerformanceDiagnoserModule::new("").compose_prompt().unwrap_err();
        assert_eq!(err.to_string(), "Please select an issue to diagnose.");

        let err = StorePerformanceDiagnoserModule::new("issue9").compose_prompt().unwrap_err();
        assert_eq!(err.to_string(), "Please select a valid performance issue.");
    }

    #[test]
    fn test_second_issue_uses_bean_data() {
        let mut module = StorePerformanceDiagnoserModule::default();
        module.select_issue("issue2");

        let prompt = module.compose_prompt().unwrap();
        assert!(prompt.contains("subscribe and save"));
        assert!(prompt.contains("Low Retail Coffee Bean Sales"));
    }
}
