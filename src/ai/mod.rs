//! Summarization pipeline: prompt assembly, OpenAI client, and
//! response parsing.

pub mod client;
pub mod parse;
pub mod prompt;
