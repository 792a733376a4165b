use schema::{NatureName, StatKey};
use strum::IntoEnumIterator;

const BOOSTED_MULTIPLIER: f32 = 1.1;
const HINDERED_MULTIPLIER: f32 = 0.9;

/// Multiplier a nature applies to one stat.
pub fn nature_stat_multiplier(nature: NatureName, stat: StatKey) -> f32 {
    match nature.modifier() {
        Some(m) if m.increased == stat => BOOSTED_MULTIPLIER,
        Some(m) if m.decreased == stat => HINDERED_MULTIPLIER,
        _ => 1.0,
    }
}

/// One-sentence explanation of why a nature suits a base stat distribution.
pub fn nature_rationale(nature: NatureName) -> String {
    match nature.modifier() {
        Some(m) => format!(
            "{} raises {} by 10% and lowers the less useful {} by 10%, leaning into the species' base stat spread.",
            nature, m.increased, m.decreased
        ),
        None => format!(
            "{} is neutral: no stat is raised or lowered, keeping growth balanced.",
            nature
        ),
    }
}

/// Short description of what a nature does, as a nature list shows it.
pub fn nature_summary(nature: NatureName) -> String {
    match nature.modifier() {
        Some(m) => format!("+10% {}, -10% {}", m.increased, m.decreased),
        None => "No stat changes".to_string(),
    }
}

/// Natures whose name, raised stat or lowered stat contains `query`,
/// ignoring case. An empty query matches every nature.
pub fn search_natures(query: &str) -> Vec<NatureName> {
    let needle = query.trim().to_lowercase();
    NatureName::iter()
        .filter(|nature| {
            nature.api_name().contains(&needle)
                || nature.modifier().is_some_and(|m| {
                    m.increased.to_string().to_lowercase().contains(&needle)
                        || m.decreased.to_string().to_lowercase().contains(&needle)
                })
        })
        .collect()
}
