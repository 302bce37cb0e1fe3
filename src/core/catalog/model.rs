use super::CatalogEntry;

/// A hosted model, keyed by the name shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelRef {
    Llama31_8bInstant,
    Llama31_70bVersatile,
    Llama32_1bPreview,
    Llama32_3bPreview,
    Llama32_11bVisionPreview,
    Llama32_90bVisionPreview,
    Mixtral8x7b32768,
    Gemma2_9bIt,
}

const ALL: &[ModelRef] = &[
    ModelRef::Llama31_8bInstant,
    ModelRef::Llama31_70bVersatile,
    ModelRef::Llama32_1bPreview,
    ModelRef::Llama32_3bPreview,
    ModelRef::Llama32_11bVisionPreview,
    ModelRef::Llama32_90bVisionPreview,
    ModelRef::Mixtral8x7b32768,
    ModelRef::Gemma2_9bIt,
];

impl ModelRef {
    /// Identifier sent to the provider in the `model` field.
    pub fn provider_id(self) -> &'static str {
        match self {
            ModelRef::Llama31_8bInstant => "llama-3.1-8b-instant",
            ModelRef::Llama31_70bVersatile => "llama-3.1-70b-versatile",
            ModelRef::Llama32_1bPreview => "llama-3.2-1b-preview",
            ModelRef::Llama32_3bPreview => "llama-3.2-3b-preview",
            ModelRef::Llama32_11bVisionPreview => "llama-3.2-11b-vision-preview",
            ModelRef::Llama32_90bVisionPreview => "llama-3.2-90b-vision-preview",
            ModelRef::Mixtral8x7b32768 => "mixtral-8x7b-32768",
            ModelRef::Gemma2_9bIt => "gemma2-9b-it",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ModelRef::Llama31_8bInstant => "Fast, efficient model for general use",
            ModelRef::Llama31_70bVersatile => "Powerful model for complex tasks",
            ModelRef::Llama32_1bPreview | ModelRef::Llama32_3bPreview => {
                "Lightweight model for quick responses"
            }
            ModelRef::Llama32_11bVisionPreview | ModelRef::Llama32_90bVisionPreview => {
                "Model with image capabilities"
            }
            ModelRef::Mixtral8x7b32768 => "Mixture of experts model with wide knowledge",
            ModelRef::Gemma2_9bIt => "Google's efficient and capable model",
        }
    }
}

impl CatalogEntry for ModelRef {
    const KIND: &'static str = "model";

    fn all() -> &'static [Self] {
        ALL
    }

    fn display_name(self) -> &'static str {
        match self {
            ModelRef::Llama31_8bInstant => "Llama-3.1-8B-Instant",
            ModelRef::Llama31_70bVersatile => "Llama-3.1-70B-Versatile",
            ModelRef::Llama32_1bPreview => "Llama-3.2-1B-Preview",
            ModelRef::Llama32_3bPreview => "Llama-3.2-3B-Preview",
            ModelRef::Llama32_11bVisionPreview => "Llama-3.2-11B-Vision-Preview",
            ModelRef::Llama32_90bVisionPreview => "Llama-3.2-90B-Vision-Preview",
            ModelRef::Mixtral8x7b32768 => "Mixtral-8x7B-32768",
            ModelRef::Gemma2_9bIt => "Gemma2-9B-It",
        }
    }

    fn aliases(self) -> Vec<String> {
        vec![self.provider_id().to_string()]
    }
}

impl std::fmt::Display for ModelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
