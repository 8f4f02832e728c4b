//! Keyword responder behind the chatbot view.

/// Answer returned when no rule matches.
pub const FALLBACK_ANSWER: &str = "No tengo una respuesta para eso aún.";

/// A trigger substring and its canned answer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub trigger: &'static str,
    pub response: &'static str,
}

/// The fixed rule set. Evaluation order is this order; the first
/// trigger contained in the query wins.
const RULES: [KeywordRule; 3] = [
    KeywordRule {
        trigger: "fertilizante",
        response: "Para papa: use nitrógeno cada 2 semanas.",
    },
    KeywordRule {
        trigger: "riego",
        response: "Riegue temprano en la mañana o al atardecer.",
    },
    KeywordRule {
        trigger: "plagas",
        response: "Use pesticidas naturales como neem.",
    },
];

/// Maps a free-text question to one of a fixed set of canned answers.
///
/// Total: every query gets an answer, unknown ones get the fallback.
#[derive(Debug, Clone, Default)]
pub struct Responder;

impl Responder {
    pub fn new() -> Self {
        Self
    }

    /// The rule set, in evaluation order.
    pub fn rules(&self) -> &'static [KeywordRule] {
        &RULES
    }

    /// Answer a question by case-insensitive substring containment.
    pub fn respond(&self, query: &str) -> &'static str {
        let query = query.to_lowercase();
        RULES
            .iter()
            .find(|rule| query.contains(rule.trigger))
            .map(|rule| rule.response)
            .unwrap_or(FALLBACK_ANSWER)
    }
}
