//! Plain mock completion provider.

use super::{simulated_latency_ms, Completion, CompletionProvider, ProviderError};
use async_trait::async_trait;
use llm_eval_domain::model::ModelSpec;
use tracing::debug;

const SUMMARIZATION_TEMPLATES: [&str; 3] = [
    "The main points of the text include: key developments in the field, important trends and patterns, and significant implications for stakeholders.",
    "Summary: The content discusses several critical aspects including primary findings, methodological approaches, and practical applications.",
    "Key takeaways from the text: major themes, supporting evidence, and conclusions drawn from the analysis.",
];

const QA_TEMPLATES: [&str; 3] = [
    "Based on the available information, the answer addresses the specific question while providing relevant context and supporting details.",
    "The response to your question involves multiple factors that contribute to a comprehensive understanding of the topic.",
    "To answer your question: the key information indicates specific findings that directly relate to your inquiry.",
];

const REASONING_TEMPLATE: &str = "Following logical analysis:\n\n\
Step 1: Examine the given premises and identify key relationships\n\
Step 2: Apply relevant logical rules and principles\n\
Step 3: Draw valid conclusions based on the established premises\n\n\
Therefore, the logical conclusion follows from the systematic application of reasoning principles to the given information.";

/// Mock provider for testing and demo purposes.
///
/// Template selection rotates with the prompt length instead of a random
/// choice, so a given prompt always yields the same completion.
pub struct MockProvider;

impl MockProvider {
    fn generate_content(&self, model: &ModelSpec, prompt: &str) -> String {
        let prompt_lower = prompt.to_lowercase();

        if prompt_lower.contains("summarize") || prompt_lower.contains("summary") {
            SUMMARIZATION_TEMPLATES[prompt.len() % SUMMARIZATION_TEMPLATES.len()].to_string()
        } else if prompt.contains('?') {
            QA_TEMPLATES[prompt.len() % QA_TEMPLATES.len()].to_string()
        } else if prompt_lower.contains("reasoning")
            || prompt_lower.contains("logic")
            || prompt_lower.contains("conclude")
        {
            REASONING_TEMPLATE.to_string()
        } else {
            format!(
                "This is a mock response from {}. The system has processed your input and generated this sample output to demonstrate functionality. In a real implementation, this would contain the actual model response.",
                model.name
            )
        }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn generate_completion(
        &self,
        model: &ModelSpec,
        prompt: &str,
    ) -> Result<Completion, ProviderError> {
        let content = self.generate_content(model, prompt);
        let tokens_used = self.estimate_tokens(&format!("{prompt}{content}"));
        let latency_ms = simulated_latency_ms(prompt, 100, 700);

        debug!(model = %model.name, tokens_used, "Mock completion generated");

        Ok(Completion {
            content,
            tokens_used,
            latency_ms,
            cost_usd: model.cost_for_tokens(tokens_used),
        })
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        // Standard approximation: 4 chars per token
        (text.len() / 4) as u32
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}
