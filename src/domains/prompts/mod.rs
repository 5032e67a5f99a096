//! Prompt catalog.
//!
//! Prompts are message templates that steer a client model towards the
//! tools: describing an architecture for `dac`, or walking through a
//! CloudFormation template before running `cfn` on it. Each prompt lives in
//! its own file under `definitions/` and is listed in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
