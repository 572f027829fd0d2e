// Cheer-message generation: prompt assembly, output validation and the
// retrieval-augmented pipeline behind POST /data/.
// All model calls go through llm_client::ChatModel.

pub mod assembler;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod validator;
