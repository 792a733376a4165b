use serde::Serialize;
use std::fmt;

/// Value the API uses for species with no gender.
pub const GENDERLESS_RATE: i8 = -1;

/// Chance of each gender, derived from the API's gender rate (female eighths).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GenderRatio {
    Genderless,
    Gendered { male_percent: f32, female_percent: f32 },
}

impl GenderRatio {
    /// `-1` is genderless; `0..=8` is the number of eighths that are female.
    /// Values outside that range are clamped.
    pub fn from_gender_rate(rate: i8) -> Self {
        if rate == GENDERLESS_RATE {
            return GenderRatio::Genderless;
        }
        let female_percent = rate.clamp(0, 8) as f32 / 8.0 * 100.0;
        GenderRatio::Gendered {
            male_percent: 100.0 - female_percent,
            female_percent,
        }
    }
}

impl fmt::Display for GenderRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderRatio::Genderless => write!(f, "Genderless"),
            GenderRatio::Gendered {
                male_percent,
                female_percent,
            } => write!(f, "♂ {}% / ♀ {}%", male_percent, female_percent),
        }
    }
}
