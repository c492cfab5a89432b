use crate::domain::errors::RelayError;
use crate::domain::ports::{GenerationRequest, GenerativeModel};
use crate::domain::prompts::translate_prompt;

pub const DEFAULT_TARGET_LANG: &str = "en";

// Translation use case with an injected model.
pub struct TranslateUseCase<M> {
    pub model: M,
}

impl<M> TranslateUseCase<M>
where
    M: GenerativeModel,
{
    pub async fn execute(&self, text: &str, target_lang: Option<&str>) -> Result<String, RelayError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RelayError::invalid_input("text is required"));
        }
        let target_lang = target_lang
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(DEFAULT_TARGET_LANG);

        // Single attempt; failures surface to the caller as-is.
        let translated = self
            .model
            .generate(GenerationRequest::text(translate_prompt(target_lang, text)))
            .await
            .map_err(RelayError::upstream)?;

        Ok(translated.trim().to_string())
    }
}
