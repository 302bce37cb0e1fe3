use super::{slugify, CatalogEntry};

/// A specialist the assistant plays, expressed as a system prompt that keeps
/// replies inside one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    MathTeacher,
    Doctor,
    TravelGuide,
    Chef,
    TechSupport,
    GeneralAssistant,
}

const ALL: &[Personality] = &[
    Personality::MathTeacher,
    Personality::Doctor,
    Personality::TravelGuide,
    Personality::Chef,
    Personality::TechSupport,
    Personality::GeneralAssistant,
];

impl Personality {
    pub fn description(self) -> &'static str {
        match self {
            Personality::MathTeacher => "Answers math-related questions only",
            Personality::Doctor => "Answers health and medical queries only",
            Personality::TravelGuide => "Provides travel advice and tips only",
            Personality::Chef => "Answers cooking and recipe questions only",
            Personality::TechSupport => "Answers technical troubleshooting queries only",
            Personality::GeneralAssistant => "Answers questions on various topics",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Personality::MathTeacher => concat!(
                "You are a math teacher. You only answer questions related to mathematics. ",
                "If asked about other topics, politely decline to answer and redirect to math topics. ",
                "You explain concepts clearly, provide examples, and help with problem-solving."
            ),
            Personality::Doctor => concat!(
                "You are a medical doctor. You only answer questions related to health, medicine, ",
                "and human biology. If asked about other topics, politely decline to answer and explain that you ",
                "can only provide medical information. Always include a disclaimer that you are an AI and not a ",
                "substitute for professional medical advice."
            ),
            Personality::TravelGuide => concat!(
                "You are a travel guide. You only answer questions related to travel, destinations, ",
                "planning trips, cultural information, and travel tips. If asked about other topics, politely decline ",
                "to answer and suggest travel-related questions instead."
            ),
            Personality::Chef => concat!(
                "You are a professional chef. You only answer questions related to cooking, recipes, ",
                "ingredients, techniques, and food preparation. If asked about other topics, politely decline to answer ",
                "and offer cooking advice instead."
            ),
            Personality::TechSupport => concat!(
                "You are a tech support specialist. You only answer questions related to technology, ",
                "software, hardware, and troubleshooting technical issues. If asked about other topics, politely decline ",
                "to answer and redirect to technical questions."
            ),
            Personality::GeneralAssistant => concat!(
                "You are a helpful AI assistant. You answer questions on a wide range of topics ",
                "while being informative and friendly."
            ),
        }
    }
}

impl CatalogEntry for Personality {
    const KIND: &'static str = "personality";

    fn all() -> &'static [Self] {
        ALL
    }

    fn display_name(self) -> &'static str {
        match self {
            Personality::MathTeacher => "Math Teacher",
            Personality::Doctor => "Doctor",
            Personality::TravelGuide => "Travel Guide",
            Personality::Chef => "Chef",
            Personality::TechSupport => "Tech Support",
            Personality::GeneralAssistant => "General Assistant",
        }
    }

    fn aliases(self) -> Vec<String> {
        vec![slugify(self.display_name())]
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
