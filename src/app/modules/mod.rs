pub mod copilot;
pub mod customer_ai;
pub mod diagnoser;
pub mod inventory;
pub mod market_pulse;

pub use copilot::EmployeeCoPilotModule;
pub use customer_ai::CustomerAIModule;
pub use diagnoser::StorePerformanceDiagnoserModule;
pub use inventory::SmartInventoryModule;
pub use market_pulse::MarketPulseModule;

use crate::app::state::{ModuleFailure, ModuleState};
use crate::app::ModuleKind;
use crate::core::generation::generate;
use crate::domain::ports::TextGenerator;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;

/// Builds one module's prompt from its template, fixtures and local input.
///
/// Input validation happens here: an `Err` stops the trigger before any
/// remote call is made.
pub trait PromptSource {
    type Output: DeserializeOwned;

    const KIND: ModuleKind;

    fn compose_prompt(&self) -> Result<String>;
}

/// Owns a module's inputs and its result-or-error state.
///
/// `trigger` borrows the controller mutably for the whole request, so a
/// second trigger on the same controller cannot start while one is in flight.
pub struct ModuleController<M: PromptSource> {
    source: M,
    state: ModuleState<M::Output>,
}

impl<M: PromptSource> ModuleController<M> {
    pub fn new(source: M) -> Self {
        Self {
            source,
            state: ModuleState::Idle,
        }
    }

    pub fn source(&self) -> &M {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut M {
        &mut self.source
    }

    pub fn state(&self) -> &ModuleState<M::Output> {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub async fn trigger<G>(&mut self, generator: &G) -> &ModuleState<M::Output>
    where
        G: TextGenerator + ?Sized,
    {
        let prompt = match self.source.compose_prompt() {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("⚠️ {}: {}", M::KIND, e);
                self.state = ModuleState::Failed(ModuleFailure::from(&e));
                return &self.state;
            }
        };

        // 先清掉上一次的結果，避免舊資料與新的載入狀態同時出現
        self.state = ModuleState::Pending;
        tracing::info!("🚀 {}: requesting analysis", M::KIND);
        tracing::debug!("{}: prompt is {} chars", M::KIND, prompt.len());

        self.state = match generate::<M::Output, G>(generator, &prompt).await {
            Ok(data) => {
                tracing::info!("✅ {}: analysis ready", M::KIND);
                ModuleState::Ready(data)
            }
            Err(e) => {
                tracing::error!("❌ {}: {}", M::KIND, e);
                ModuleState::Failed(ModuleFailure::from(&e))
            }
        };
        &self.state
    }

    /// Re-runs the trigger with the inputs currently held by the module.
    pub async fn retry<G>(&mut self, generator: &G) -> &ModuleState<M::Output>
    where
        G: TextGenerator + ?Sized,
    {
        tracing::info!("🔁 {}: retrying", M::KIND);
        self.trigger(generator).await
    }

    /// Triggers once, then retries up to `retries` more times while the
    /// failure is retryable. Validation failures are never retried.
    pub async fn trigger_with_retries<G>(&mut self, generator: &G, retries: u32) -> &ModuleState<M::Output>
    where
        G: TextGenerator + ?Sized,
    {
        self.trigger(generator).await;
        let mut attempt = 0;
        while attempt < retries && self.state.failure().is_some_and(|f| f.is_retryable()) {
            attempt += 1;
            tracing::warn!("⚠️ {}: attempt {} of {} failed", M::KIND, attempt, retries + 1);
            self.retry(generator).await;
        }
        &self.state
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::ports::TextGenerator;
    use crate::utils::error::{CatalystError, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted replies in order and records every prompt.
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        pub fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(CatalystError::EmptyResponse))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::ScriptedGenerator;
    use super::*;
    use crate::utils::error::{CatalystError, ErrorCategory};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        value: String,
    }

    struct EchoSource {
        input: String,
    }

    impl PromptSource for EchoSource {
        type Output = Echo;
        const KIND: ModuleKind = ModuleKind::EmployeeCoPilot;

        fn compose_prompt(&self) -> Result<String> {
            if self.input.is_empty() {
                return Err(CatalystError::validation("input required"));
            }
            Ok(format!("echo {}", self.input))
        }
    }

    #[tokio::test]
    async fn test_validation_failure_skips_remote_call() {
        let generator = ScriptedGenerator::replying(r#"{"value":"x"}"#);
        let mut controller = ModuleController::new(EchoSource { input: String::new() });

        let state = controller.trigger(&generator).await;

        assert_eq!(state.error(), Some("input required"));
        assert_eq!(state.failure().unwrap().category, ErrorCategory::Validation);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_stores_payload() {
        let generator = ScriptedGenerator::replying("```json\n{\"value\":\"hi\"}\n```");
        let mut controller = ModuleController::new(EchoSource { input: "hi".into() });

        controller.trigger(&generator).await;

        assert_eq!(controller.state().data(), Some(&Echo { value: "hi".into() }));
        assert_eq!(generator.last_prompt(), "echo hi");
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_retry_replaces_failure_with_result() {
        let generator = ScriptedGenerator::new(vec![
            Err(CatalystError::RemoteServiceError {
                status: 503,
                message: "overloaded".into(),
            }),
            Ok(r#"{"value":"second"}"#.to_string()),
        ]);
        let mut controller = ModuleController::new(EchoSource { input: "again".into() });

        let first = controller.trigger(&generator).await;
        assert!(first.error().unwrap().contains("overloaded"));

        let second = controller.retry(&generator).await;
        assert!(second.error().is_none());
        assert_eq!(second.data().unwrap().value, "second");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_retries_stop_after_success() {
        let generator = ScriptedGenerator::new(vec![
            Ok("garbage".to_string()),
            Ok(r#"{"value":"fixed"}"#.to_string()),
            Ok(r#"{"value":"unused"}"#.to_string()),
        ]);
        let mut controller = ModuleController::new(EchoSource { input: "x".into() });

        let state = controller.trigger_with_retries(&generator, 5).await;

        assert_eq!(state.data().unwrap().value, "fixed");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let generator = ScriptedGenerator::new(Vec::new());
        let mut controller = ModuleController::new(EchoSource { input: "x".into() });

        let state = controller.trigger_with_retries(&generator, 2).await;

        assert!(state.failure().is_some());
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_validation_failure_is_not_retried() {
        let generator = ScriptedGenerator::new(Vec::new());
        let mut controller = ModuleController::new(EchoSource { input: String::new() });

        controller.trigger_with_retries(&generator, 3).await;

        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_replaces_previous_result() {
        let generator = ScriptedGenerator::replying(r#"{"value":"ok"}"#);
        let mut controller = ModuleController::new(EchoSource { input: "ok".into() });
        controller.trigger(&generator).await;
        assert!(controller.state().data().is_some());

        controller.source_mut().input.clear();
        controller.trigger(&generator).await;

        assert!(controller.state().data().is_none());
        assert_eq!(controller.state().error(), Some("input required"));
    }
}
