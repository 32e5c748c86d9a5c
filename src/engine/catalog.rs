//! Vaccine names and the recommendation texts each rule emits

use crate::types::{Priority, VaccineRecommendation};

pub const INFLUENZA: &str = "Influenza (Flu)";
pub const PNEUMOCOCCAL: &str = "Pneumococcal";
pub const SHINGLES: &str = "Shingles (Herpes Zoster)";
pub const YELLOW_FEVER: &str = "Yellow Fever";
pub const TYPHOID: &str = "Typhoid";
pub const HEPATITIS_A: &str = "Hepatitis A";
pub const JAPANESE_ENCEPHALITIS: &str = "Japanese Encephalitis";
pub const TDAP: &str = "Tdap (Tetanus, Diphtheria, Pertussis)";
pub const CONSULTATION_REQUIRED: &str = "Consultation Required";

const PNEUMOCOCCAL_DESCRIPTION: &str =
    "Protects against pneumococcal disease, which can cause severe infections";

// Age

pub fn influenza_older_adult() -> VaccineRecommendation {
    VaccineRecommendation::new(
        INFLUENZA,
        "Annual flu vaccination is recommended for older adults",
        Priority::High,
        "Adults 65 and older are at higher risk for flu complications",
    )
}

pub fn pneumococcal_older_adult() -> VaccineRecommendation {
    VaccineRecommendation::new(
        PNEUMOCOCCAL,
        PNEUMOCOCCAL_DESCRIPTION,
        Priority::High,
        "Recommended for all adults 65 and older",
    )
}

pub fn shingles() -> VaccineRecommendation {
    VaccineRecommendation::new(
        SHINGLES,
        "Protects against shingles and post-herpetic neuralgia",
        Priority::Medium,
        "Recommended for adults 50 and older",
    )
}

// Travel

pub fn yellow_fever() -> VaccineRecommendation {
    VaccineRecommendation::new(
        YELLOW_FEVER,
        "Required for travel to many parts of Africa and South America",
        Priority::High,
        "Travel to regions where Yellow Fever is endemic",
    )
}

pub fn typhoid() -> VaccineRecommendation {
    VaccineRecommendation::new(
        TYPHOID,
        "Recommended for travelers to regions with poor sanitation",
        Priority::Medium,
        "Travel to regions with risk of typhoid",
    )
}

pub fn hepatitis_a() -> VaccineRecommendation {
    VaccineRecommendation::new(
        HEPATITIS_A,
        "Protects against hepatitis A virus infection",
        Priority::Medium,
        "Travel to regions with risk of Hepatitis A",
    )
}

pub fn japanese_encephalitis() -> VaccineRecommendation {
    VaccineRecommendation::new(
        JAPANESE_ENCEPHALITIS,
        "Recommended for longer stays in rural areas of Asia",
        Priority::Medium,
        "Travel to regions with risk of Japanese Encephalitis",
    )
}

// Health conditions

pub fn influenza_chronic_condition() -> VaccineRecommendation {
    VaccineRecommendation::new(
        INFLUENZA,
        "Annual flu vaccination is recommended for people with chronic health conditions",
        Priority::High,
        "Chronic health conditions increase risk of flu complications",
    )
}

pub fn pneumococcal_chronic_condition() -> VaccineRecommendation {
    VaccineRecommendation::new(
        PNEUMOCOCCAL,
        PNEUMOCOCCAL_DESCRIPTION,
        Priority::High,
        "Recommended for people with certain chronic health conditions",
    )
}

pub fn pneumococcal_immunocompromised() -> VaccineRecommendation {
    VaccineRecommendation::new(
        PNEUMOCOCCAL,
        PNEUMOCOCCAL_DESCRIPTION,
        Priority::High,
        "Recommended for immunocompromised individuals",
    )
}

/// Live vaccines may be contraindicated, so the list defers to a clinician
pub fn consultation_immunocompromised() -> VaccineRecommendation {
    VaccineRecommendation::new(
        CONSULTATION_REQUIRED,
        "Special vaccination considerations for immunocompromised individuals",
        Priority::High,
        "Your immune status requires personalized vaccine recommendations",
    )
}

// Pregnancy

pub fn tdap_pregnancy() -> VaccineRecommendation {
    VaccineRecommendation::new(
        TDAP,
        "Recommended during each pregnancy",
        Priority::High,
        "Protects both mother and newborn against pertussis (whooping cough)",
    )
}

pub fn influenza_pregnancy() -> VaccineRecommendation {
    VaccineRecommendation::new(
        INFLUENZA,
        "Recommended for all pregnant women during flu season",
        Priority::High,
        "Pregnancy increases risk of flu complications",
    )
}

pub fn consultation_pregnancy() -> VaccineRecommendation {
    VaccineRecommendation::new(
        CONSULTATION_REQUIRED,
        "Some vaccines should be avoided during pregnancy",
        Priority::High,
        "Your pregnancy status requires personalized vaccine recommendations",
    )
}

// Allergies

pub fn consultation_allergy() -> VaccineRecommendation {
    VaccineRecommendation::new(
        CONSULTATION_REQUIRED,
        "Your allergies may affect vaccine recommendations",
        Priority::High,
        "Allergies to vaccine components require medical evaluation",
    )
}

// General

pub fn tdap_booster() -> VaccineRecommendation {
    VaccineRecommendation::new(
        TDAP,
        "Booster recommended every 10 years",
        Priority::Medium,
        "General recommendation for all adults",
    )
}

pub fn influenza_annual() -> VaccineRecommendation {
    VaccineRecommendation::new(
        INFLUENZA,
        "Annual vaccination recommended",
        Priority::Medium,
        "General recommendation for all adults",
    )
}

pub fn consultation_multiple_risks() -> VaccineRecommendation {
    VaccineRecommendation::new(
        CONSULTATION_REQUIRED,
        "Your health profile suggests the need for personalized medical advice",
        Priority::High,
        "Multiple risk factors identified",
    )
}
