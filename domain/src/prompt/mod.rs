//! Prompt construction for the summarization step

mod template;

pub use template::PromptTemplate;
