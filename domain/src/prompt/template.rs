//! Prompt templates

use crate::core::provider_name::ProviderName;
use crate::fanout::FanOutResult;

/// First line of every summarizer prompt
pub const SUMMARY_HEADER: &str = "Summarize and provide a verdict for these answers:";

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the summarizer prompt from the successful answers only
    ///
    /// Answers are listed in provider-name order so the same fan-out always
    /// yields the same prompt. Failed providers never appear.
    pub fn summary_prompt(fan_out: &FanOutResult) -> String {
        Self::summary_prompt_from(fan_out.sorted_results().iter())
    }

    /// Build the summarizer prompt from `(provider, answer)` pairs, in the given order
    pub fn summary_prompt_from<'a, I>(answers: I) -> String
    where
        I: IntoIterator<Item = (&'a ProviderName, &'a String)>,
    {
        let mut prompt = format!("{}\n", SUMMARY_HEADER);
        for (name, answer) in answers {
            prompt.push_str(&format!("[{}]: {}\n", name, answer));
        }
        prompt
    }
}
