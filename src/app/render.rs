//! Plain-text views of each payload for the terminal shell.

use crate::app::state::{ModuleFailure, ModuleState};
use crate::domain::responses::{
    CustomerAIResponse, EmployeeCoPilotResponse, MarketPulseResponse, SmartInventoryResponse,
    StorePerformanceDiagnoserResponse,
};
use std::fmt::Write;

const MISSING: &str = "(not provided)";

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

pub trait Render {
    fn render(&self) -> String;
}

impl Render for SmartInventoryResponse {
    fn render(&self) -> String {
        let mut out = String::new();
        match self.projected_monthly_savings {
            Some(savings) => {
                let _ = writeln!(out, "Projected monthly savings: ${:.0}", savings);
            }
            None => {
                let _ = writeln!(out, "Projected monthly savings: {}", MISSING);
            }
        }
        let _ = writeln!(out, "\nSmart orders:");
        if self.smart_orders.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for order in &self.smart_orders {
            let _ = writeln!(
                out,
                "  {:<28} {:>6}  {}",
                or_missing(&order.product),
                order.change.as_deref().unwrap_or("?"),
                or_missing(&order.reason)
            );
        }
        out
    }
}

impl Render for CustomerAIResponse {
    fn render(&self) -> String {
        let mut out = String::new();
        if self.opportunities.is_empty() {
            let _ = writeln!(out, "No customer opportunities returned.");
        }
        for opportunity in &self.opportunities {
            let channel = opportunity
                .channel
                .as_ref()
                .map(|c| c.label())
                .unwrap_or(MISSING);
            let _ = writeln!(out, "{} via {}", or_missing(&opportunity.customer_name), channel);
            let _ = writeln!(out, "  Insight: {}", or_missing(&opportunity.insight));
            let _ = writeln!(out, "  Message: {}\n", or_missing(&opportunity.generated_message));
        }
        out
    }
}

impl Render for MarketPulseResponse {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Competitor watch: {}", or_missing(&self.competitor_watch));
        let _ = writeln!(out, "\nTrend radar:");
        if self.trend_radar.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for trend in &self.trend_radar {
            let heat = match trend.heat_level() {
                Some(level) => "🔥".repeat(level as usize),
                None => "?".to_string(),
            };
            let _ = writeln!(out, "  {} {}", heat, or_missing(&trend.trend));
        }
        let _ = writeln!(out, "\nStrategy brief: {}", or_missing(&self.strategy_brief));
        out
    }
}

impl Render for EmployeeCoPilotResponse {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Q: {}", or_missing(&self.query));
        let _ = writeln!(out, "A: {}", or_missing(&self.answer));
        if !self.references.is_empty() {
            let _ = writeln!(out, "References: {}", self.references.join("; "));
        }
        out
    }
}

impl Render for StorePerformanceDiagnoserResponse {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", or_missing(&self.store), or_missing(&self.concern));
        let _ = writeln!(out, "\nRoot causes:");
        for (i, cause) in self.root_causes.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, or_missing(&cause.cause));
            if let Some(data) = &cause.supporting_data {
                let _ = writeln!(out, "     Evidence: {}", data);
            }
        }
        let _ = writeln!(out, "\nRecommendations:");
        for (i, rec) in self.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, or_missing(&rec.action));
            let _ = writeln!(out, "     Why: {}", or_missing(&rec.rationale));
            if let Some(impact) = &rec.expected_impact {
                let _ = writeln!(out, "     Impact: {}", impact);
            }
        }
        out
    }
}

pub fn render_failure(failure: &ModuleFailure) -> String {
    let mut out = format!("❌ {}", failure.message);
    if failure.is_retryable() {
        out.push_str("\n🔁 Retry: run the same command again, or pass --retries");
    }
    out
}

pub fn render_state<T: Render>(state: &ModuleState<T>, loading_text: &str) -> String {
    match state {
        ModuleState::Idle => String::new(),
        ModuleState::Pending => loading_text.to_string(),
        ModuleState::Ready(data) => data.render(),
        ModuleState::Failed(failure) => render_failure(failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::responses::{SmartOrder, Trend};
    use crate::utils::error::CatalystError;

    #[test]
    fn test_inventory_render_marks_missing_fields() {
        let payload = SmartInventoryResponse {
            projected_monthly_savings: None,
            smart_orders: vec![SmartOrder {
                product: Some("Oat Milk".into()),
                change: None,
                reason: Some("Vegan demand rising".into()),
            }],
        };

        let text = payload.render();
        assert!(text.contains("Projected monthly savings: (not provided)"));
        assert!(text.contains("Oat Milk"));
        assert!(text.contains("Vegan demand rising"));
    }

    #[test]
    fn test_market_render_heat() {
        let payload = MarketPulseResponse {
            competitor_watch: Some("Lavender latte launch".into()),
            trend_radar: vec![Trend { trend: Some("Tasting flights".into()), heat: Some(2) }],
            strategy_brief: None,
        };

        let text = payload.render();
        assert!(text.contains("🔥🔥 Tasting flights"));
        assert!(text.contains("Strategy brief: (not provided)"));
    }

    #[test]
    fn test_copilot_render_references() {
        let payload = EmployeeCoPilotResponse {
            query: Some("How do I clean the espresso machine?".into()),
            answer: Some("Clean the portafilter and group head after each use.".into()),
            references: vec!["SOP Section 5.1".into()],
        };
        assert!(payload.render().contains("References: SOP Section 5.1"));
    }

    #[test]
    fn test_render_state_variants() {
        let pending: ModuleState<EmployeeCoPilotResponse> = ModuleState::Pending;
        assert_eq!(render_state(&pending, "Thinking..."), "Thinking...");

        let failed: ModuleState<EmployeeCoPilotResponse> =
            ModuleState::Failed((&CatalystError::EmptyResponse).into());
        let text = render_state(&failed, "");
        assert!(text.starts_with("❌ Gemini API error"));
        assert!(text.contains("Retry"));

        let invalid: ModuleState<EmployeeCoPilotResponse> =
            ModuleState::Failed((&CatalystError::validation("Please enter a question.")).into());
        assert_eq!(render_state(&invalid, ""), "❌ Please enter a question.");
    }
}
