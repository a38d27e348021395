//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{info, instrument};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Key: prompt name
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: HashMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts, sorted by name.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Get a prompt with arguments substituted.
    #[instrument(skip(self, arguments))]
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments);

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
