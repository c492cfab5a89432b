// Prompt text sent to the generative model.

use serde_json::Value;

const OCR_INSTRUCTION: &str = "Return exactly the text you see in that area, preserving line breaks. \
Do not add explanations or translation, only the raw text.";

pub fn translate_prompt(target_lang: &str, text: &str) -> String {
    format!(
        "Translate this text into {target_lang} only. Respond with the translation only, no explanation:\n\n{text}"
    )
}

/// Builds the crop-rectangle hint. Returns `None` unless `crop_rect` is an
/// object carrying numeric `x`, `y`, `width` and `height`.
pub fn crop_hint(crop_rect: &Value) -> Option<String> {
    let rect = crop_rect.as_object()?;
    let x = rect.get("x")?.as_f64()?;
    let y = rect.get("y")?.as_f64()?;
    let width = rect.get("width")?.as_f64()?;
    let height = rect.get("height")?.as_f64()?;

    Some(format!(
        "Only read the text inside the rectangle defined by \
x={x:.2}, y={y:.2}, width={width:.2}, height={height:.2} (normalized 0-1). "
    ))
}

pub fn ocr_prompt(hint: Option<&str>) -> String {
    format!("{}{OCR_INSTRUCTION}", hint.unwrap_or_default())
}

pub fn suggest_places_prompt(location_label: &str) -> String {
    format!(
        r#"You are helping a traveler explore around {location_label}.

List 10 interesting nearby places such as malls, supermarkets, parks, landmarks,
and tourist attractions that a visitor might want to check out.

Return ONLY a JSON array (no extra text) where each item has:
- id: a short unique string (can be slugified name)
- name: place name
- category: short category like "Mall", "Supermarket", "Park", "Tourist spot"

Example:
[
  {{"id": "sm-north-edsa", "name": "SM North EDSA", "category": "Mall"}},
  {{"id": "puregold-xyz", "name": "Puregold XYZ", "category": "Supermarket"}}
]"#
    )
}
