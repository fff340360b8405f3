//! Static persona registry: one fixed (name, behavioral prompt) pair per
//! scam category. A conversation is assigned its persona exactly once.

use scamlure_core::{Persona, ScamCategory};

/// Look up the persona for a scam category.
pub fn persona_for(category: ScamCategory) -> Persona {
    let (name, prompt) = match category {
        ScamCategory::Bank => (
            "elderly_person",
            "You are an elderly person scared about bank problems.",
        ),
        ScamCategory::Prize => (
            "naive_student",
            "You are a confused student excited about winning prizes.",
        ),
        ScamCategory::Job => ("job_seeker", "You are desperate for a job opportunity."),
        ScamCategory::TechSupport => (
            "non_technical_user",
            "You struggle with technology and need help.",
        ),
        ScamCategory::Investment => (
            "curious_beginner",
            "You want to understand investing but are unsure.",
        ),
        ScamCategory::Otp => (
            "confused_user",
            "You don't understand OTPs and are worried.",
        ),
        ScamCategory::Unknown => (
            "generic_victim",
            "You are polite and confused about everything.",
        ),
    };
    Persona {
        name: name.to_string(),
        prompt: prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_persona() {
        let categories = [
            ScamCategory::Bank,
            ScamCategory::Prize,
            ScamCategory::Job,
            ScamCategory::TechSupport,
            ScamCategory::Investment,
            ScamCategory::Otp,
            ScamCategory::Unknown,
        ];
        for category in categories {
            let persona = persona_for(category);
            assert!(!persona.name.is_empty());
            assert!(!persona.prompt.is_empty());
        }
    }

    #[test]
    fn bank_maps_to_elderly_person() {
        assert_eq!(persona_for(ScamCategory::Bank).name, "elderly_person");
    }

    #[test]
    fn lookup_is_stable() {
        assert_eq!(persona_for(ScamCategory::Otp), persona_for(ScamCategory::Otp));
    }
}
