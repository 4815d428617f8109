//! OpenAI-style completion provider (mock generation).

use super::{simulated_latency_ms, Completion, CompletionProvider, ProviderError};
use async_trait::async_trait;
use llm_eval_domain::model::ModelSpec;
use tracing::debug;

/// Simulates GPT-family models: single-paragraph responses and a 4-chars-
/// per-token estimate. A real backend would replace `generate_completion`
/// with an API call.
pub struct OpenAiProvider;

impl OpenAiProvider {
    fn generate_content(&self, model: &ModelSpec, prompt: &str) -> String {
        let prompt_lower = prompt.to_lowercase();

        if prompt_lower.contains("summarize") || prompt_lower.contains("summary") {
            "This is a mock summary of the provided text. The key points include the main topics discussed and their relevance to the overall context.".to_string()
        } else if prompt.contains('?') {
            "This is a mock answer to your question. The response addresses the key aspects of your inquiry with relevant information.".to_string()
        } else if prompt_lower.contains("reasoning") || prompt_lower.contains("logic") {
            "This is a mock reasoning response. Step 1: Analyze the premises. Step 2: Apply logical rules. Step 3: Draw conclusions based on the evidence.".to_string()
        } else {
            format!(
                "This is a mock response from {}. The input was processed and this is the generated output based on the prompt.",
                model.name
            )
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn generate_completion(
        &self,
        model: &ModelSpec,
        prompt: &str,
    ) -> Result<Completion, ProviderError> {
        let content = self.generate_content(model, prompt);
        let tokens_used = self.estimate_tokens(&format!("{prompt}{content}"));
        let latency_ms = simulated_latency_ms(prompt, 100, 400);

        debug!(model = %model.name, tokens_used, "OpenAI completion generated");

        Ok(Completion {
            content,
            tokens_used,
            latency_ms,
            cost_usd: model.cost_for_tokens(tokens_used),
        })
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        // Rough approximation: 4 chars per token
        (text.len() / 4) as u32
    }

    fn kind(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpt4() -> ModelSpec {
        ModelSpec::new("GPT-4", "openai", "gpt-4", 0.03, 8192)
    }

    #[tokio::test]
    async fn test_question_prompt_gets_answer_template() {
        let completion = OpenAiProvider
            .generate_completion(&gpt4(), "What is the capital of Australia?")
            .await
            .unwrap();
        assert!(completion.content.contains("mock answer"));
    }

    #[tokio::test]
    async fn test_summary_prompt_gets_summary_template() {
        let completion = OpenAiProvider
            .generate_completion(&gpt4(), "Please summarize the following text")
            .await
            .unwrap();
        assert!(completion.content.contains("mock summary"));
    }

    #[test]
    fn test_token_estimate_divisor() {
        assert_eq!(OpenAiProvider.estimate_tokens("abcdefgh"), 2);
        assert_eq!(OpenAiProvider.estimate_tokens(""), 0);
    }
}
