// Resume chat: prompt composition and the POST /chat handler.
// All generation goes through llm_client::TextGenerator.

pub mod composer;
pub mod handlers;
pub mod prompts;
