use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

// Standard alphabet, padding optional. Mobile clients are inconsistent about it.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Image formats the model accepts as inline data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    /// Sniffs the format from magic bytes. Only the first 12 bytes are read;
    /// anything unrecognised is reported as JPEG.
    pub fn detect(bytes: &[u8]) -> Self {
        let head = &bytes[..bytes.len().min(12)];

        if head.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            ImageFormat::Png
        } else if head.starts_with(&[0xFF, 0xD8]) {
            ImageFormat::Jpeg
        } else if head.starts_with(b"RIFF") && head.get(8..12) == Some(b"WEBP".as_slice()) {
            ImageFormat::Webp
        } else if head.starts_with(b"GIF87a") || head.starts_with(b"GIF89a") {
            ImageFormat::Gif
        } else {
            ImageFormat::Jpeg
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// Raw image bytes tagged with their mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn sniffed(data: Vec<u8>) -> Self {
        let mime_type = ImageFormat::detect(&data).mime_type();
        Self { mime_type, data }
    }
}

// Keeps only the payload after the last comma of a data URI.
pub fn strip_data_uri(raw: &str) -> &str {
    match raw.rsplit_once(',') {
        Some((_, payload)) => payload,
        None => raw,
    }
}

// Data-URI prefix removed, then every whitespace character dropped.
pub fn normalize_base64(raw: &str) -> String {
    strip_data_uri(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn decode_image(raw: &str) -> Result<Vec<u8>, base64::DecodeError> {
    LENIENT_STANDARD.decode(normalize_base64(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_bytes_start_with_png_signature_then_detects_png() {
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
        assert_eq!(ImageFormat::detect(&bytes).mime_type(), "image/png");
    }

    #[test]
    fn when_bytes_start_with_ff_d8_then_detects_jpeg() {
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageFormat::Jpeg);
    }

    #[test]
    fn when_riff_container_carries_webp_tag_then_detects_webp() {
        let bytes = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(ImageFormat::detect(bytes), ImageFormat::Webp);
    }

    #[test]
    fn when_riff_container_is_not_webp_then_defaults_to_jpeg() {
        let bytes = b"RIFF\x24\x00\x00\x00WAVEfmt ";
        assert_eq!(ImageFormat::detect(bytes), ImageFormat::Jpeg);
    }

    #[test]
    fn when_bytes_carry_either_gif_signature_then_detects_gif() {
        assert_eq!(ImageFormat::detect(b"GIF89a\x01\x00"), ImageFormat::Gif);
        assert_eq!(ImageFormat::detect(b"GIF87a\x01\x00"), ImageFormat::Gif);
        assert_eq!(ImageFormat::detect(b"GIF88a\x01\x00"), ImageFormat::Jpeg);
    }

    #[test]
    fn when_bytes_are_unknown_or_short_then_defaults_to_jpeg() {
        assert_eq!(ImageFormat::detect(b"hello world"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::detect(&[0x89]), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::detect(&[]), ImageFormat::Jpeg);
    }

    #[test]
    fn when_only_bytes_after_twelve_differ_then_detection_is_unchanged() {
        let mut first = b"RIFF\x00\x00\x00\x00WEBP".to_vec();
        let mut second = first.clone();
        first.extend_from_slice(b"aaaa");
        second.extend_from_slice(&[0xFF, 0xD8, 0x00]);
        assert_eq!(ImageFormat::detect(&first), ImageFormat::detect(&second));
    }

    #[test]
    fn when_payload_has_data_uri_prefix_then_everything_up_to_last_comma_is_dropped() {
        assert_eq!(strip_data_uri("data:image/png;base64,iVBORw0K"), "iVBORw0K");
        assert_eq!(strip_data_uri("a,b,c"), "c");
        assert_eq!(strip_data_uri("iVBORw0K"), "iVBORw0K");
    }

    #[test]
    fn when_payload_contains_line_breaks_then_they_are_removed_before_decoding() {
        let decoded = decode_image("data:image/gif;base64,R0lG\r\nODlh\n AQ==").expect("valid base64");
        assert_eq!(&decoded[..6], b"GIF89a");
    }

    #[test]
    fn when_padding_is_missing_then_payload_still_decodes() {
        assert_eq!(decode_image("/9j/").expect("valid base64"), vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(decode_image("R0lGODlhAQ").expect("valid base64").len(), 7);
    }

    #[test]
    fn when_payload_has_invalid_characters_then_decode_fails() {
        assert!(decode_image("not*base64!").is_err());
    }

    #[test]
    fn when_image_is_sniffed_then_mime_type_follows_content() {
        let image = InlineImage::sniffed(vec![0x89, 0x50, 0x4E, 0x47, 0x00]);
        assert_eq!(image.mime_type, "image/png");
    }
}
