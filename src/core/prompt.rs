//! Prompt construction for mockup generation

use crate::core::models::mockup::GenerateRequest;

/// Natural-language fragment for a `colorCount` value
pub fn color_description(color_count: &str) -> &'static str {
    match color_count {
        "monochrome" => "in a single consistent color palette",
        "2-4" => "using 2 to 4 complementary colors",
        "5-7" => "with a bold mix of 5 to 7 different colors",
        _ => "with a harmonious color palette",
    }
}

/// Render the image prompt for a validated request. Pure.
pub fn build_prompt(request: &GenerateRequest) -> String {
    format!(
        "A highly detailed image of a handmade crochet project. \
         The project is described as: {}. \
         The overall color vibe is: {}. \
         Please visualize the crochet item {}, with realistic yarn textures such as cotton, chenille, or wool. \
         The background should be minimal, studio-lit, and clean.",
        request.project_description,
        request.color_vibe,
        color_description(&request.color_count)
    )
}
