use serde_json::Value;

use crate::domain::errors::RelayError;
use crate::domain::image::{InlineImage, decode_image};
use crate::domain::ports::{GenerationRequest, GenerativeModel};
use crate::domain::prompts::{crop_hint, ocr_prompt};

// OCR use case: sanitize and sniff the image, then ask the model for the raw text.
pub struct OcrUseCase<M> {
    pub model: M,
}

impl<M> OcrUseCase<M>
where
    M: GenerativeModel,
{
    pub async fn execute(
        &self,
        image_base64: &str,
        crop_rect: Option<&Value>,
    ) -> Result<String, RelayError> {
        let image_base64 = image_base64.trim();
        if image_base64.is_empty() {
            return Err(RelayError::invalid_input("imageBase64 is required"));
        }

        let bytes = decode_image(image_base64)
            .map_err(|err| RelayError::invalid_input(format!("invalid base64 image: {err}")))?;
        if bytes.is_empty() {
            return Err(RelayError::invalid_input(
                "imageBase64 decoded to an empty image",
            ));
        }
        let image = InlineImage::sniffed(bytes);
        tracing::debug!(
            mime_type = image.mime_type,
            image_bytes = image.data.len(),
            "image decoded"
        );

        let hint = crop_rect.and_then(crop_hint);
        let prompt = ocr_prompt(hint.as_deref());

        let text = self
            .model
            .generate(GenerationRequest::with_image(image, prompt))
            .await
            .map_err(|err| RelayError::UpstreamFailure(format!("OCR failed: {err}")))?;

        Ok(text.trim().to_string())
    }
}
