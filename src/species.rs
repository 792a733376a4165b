//! Species classification and list filtering over already-retrieved records.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

static ULTRA_BEASTS: phf::Set<&'static str> = phf::phf_set! {
    "nihilego", "buzzwole", "pheromosa", "xurkitree", "celesteela", "kartana",
    "guzzlord", "poipole", "naganadel", "stakataka", "blacephalon",
};

// Includes the Ultra Beasts and a few sub-legendary species the API does not
// flag, so the "legendary" list filter matches what players expect.
static LEGENDARIES_AND_MYTHICALS: phf::Set<&'static str> = phf::phf_set! {
    "articuno", "zapdos", "moltres", "mewtwo", "mew",
    "raikou", "entei", "suicune", "lugia", "ho-oh", "celebi",
    "regirock", "regice", "registeel", "latias", "latios", "kyogre", "groudon",
    "rayquaza", "jirachi", "deoxys",
    "uxie", "mesprit", "azelf", "dialga", "palkia", "heatran", "regigigas",
    "giratina", "cresselia", "phione", "manaphy", "darkrai", "shaymin", "arceus",
    "victini", "cobalion", "terrakion", "virizion", "tornadus", "thundurus",
    "reshiram", "zekrom", "landorus", "kyurem", "keldeo", "meloetta", "genesect",
    "xerneas", "yveltal", "zygarde", "diancie", "hoopa", "volcanion",
    "type-null", "silvally", "tapu-koko", "tapu-lele", "tapu-bulu", "tapu-fini",
    "cosmog", "cosmoem", "solgaleo", "lunala", "nihilego", "buzzwole",
    "pheromosa", "xurkitree", "celesteela", "kartana", "guzzlord", "necrozma",
    "magearna", "marshadow", "poipole", "naganadel", "stakataka", "blacephalon",
    "zeraora", "meltan", "melmetal",
    "zacian", "zamazenta", "eternatus", "kubfu", "urshifu", "zarude",
    "regieleki", "regidrago", "glastrier", "spectrier", "calyrex", "enamorus",
    "wo-chien", "chien-pao", "ting-lu", "chi-yu", "koraidon", "miraidon",
    "walking-wake", "iron-leaves", "dipplin", "okidogi", "munkidori",
    "fezandipiti", "ogerpon", "terapagos", "pecharunt",
};

pub fn is_ultra_beast(species_name: &str) -> bool {
    ULTRA_BEASTS.contains(species_name)
}

pub fn is_legendary_or_mythical(species_name: &str) -> bool {
    LEGENDARIES_AND_MYTHICALS.contains(species_name)
}

/// Special status badge for a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpeciesStatus {
    Legendary,
    Mythical,
    UltraBeast,
}

impl fmt::Display for SpeciesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesStatus::Legendary => write!(f, "Legendary"),
            SpeciesStatus::Mythical => write!(f, "Mythical"),
            SpeciesStatus::UltraBeast => write!(f, "Ultra Beast"),
        }
    }
}

/// The API flags take precedence, legendary before mythical; Ultra Beasts
/// are recognised by name.
pub fn classify_species(
    species_name: &str,
    is_legendary: bool,
    is_mythical: bool,
) -> Option<SpeciesStatus> {
    if is_legendary {
        Some(SpeciesStatus::Legendary)
    } else if is_mythical {
        Some(SpeciesStatus::Mythical)
    } else if is_ultra_beast(species_name) {
        Some(SpeciesStatus::UltraBeast)
    } else {
        None
    }
}

/// One row of the national species list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesListing {
    pub id: u32,
    pub name: String,
}

impl SpeciesListing {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        SpeciesListing {
            id,
            name: name.into(),
        }
    }
}

/// Criteria for narrowing the species list. Each set holds the species names
/// that belong to one generation or one type.
#[derive(Debug, Clone, Default)]
pub struct SpeciesFilter {
    pub generation: Option<HashSet<String>>,
    /// A species must appear in every set.
    pub types: Vec<HashSet<String>>,
    pub legendary_only: bool,
}

impl SpeciesFilter {
    pub fn matches(&self, species_name: &str) -> bool {
        self.generation
            .as_ref()
            .map_or(true, |members| members.contains(species_name))
            && self.types.iter().all(|members| members.contains(species_name))
            && (!self.legendary_only || is_legendary_or_mythical(species_name))
    }
}

/// Species passing every criterion, sorted by national id.
pub fn filter_species(listings: &[SpeciesListing], filter: &SpeciesFilter) -> Vec<SpeciesListing> {
    let mut matched: Vec<SpeciesListing> = listings
        .iter()
        .filter(|listing| filter.matches(&listing.name))
        .cloned()
        .collect();
    matched.sort_by_key(|listing| listing.id);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(members: &[&str]) -> HashSet<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    #[rstest]
    #[case("Flagged legendary", "mewtwo", true, false, Some(SpeciesStatus::Legendary))]
    #[case("Legendary wins over mythical", "odd-case", true, true, Some(SpeciesStatus::Legendary))]
    #[case("Flagged mythical", "mew", false, true, Some(SpeciesStatus::Mythical))]
    #[case("Ultra Beast by name", "kartana", false, false, Some(SpeciesStatus::UltraBeast))]
    #[case("Ordinary species", "pikachu", false, false, None)]
    #[case("Unflagged legendary-list member", "kubfu", false, false, None)]
    fn test_classify_species(
        #[case] desc: &str,
        #[case] name: &str,
        #[case] is_legendary: bool,
        #[case] is_mythical: bool,
        #[case] expected: Option<SpeciesStatus>,
    ) {
        assert_eq!(classify_species(name, is_legendary, is_mythical), expected, "{}", desc);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SpeciesStatus::UltraBeast.to_string(), "Ultra Beast");
        assert!(is_legendary_or_mythical("tapu-koko"));
        assert!(!is_legendary_or_mythical("Tapu-Koko"));
    }

    fn national_list() -> Vec<SpeciesListing> {
        vec![
            SpeciesListing::new(145, "zapdos"),
            SpeciesListing::new(25, "pikachu"),
            SpeciesListing::new(150, "mewtwo"),
            SpeciesListing::new(6, "charizard"),
            SpeciesListing::new(142, "aerodactyl"),
            SpeciesListing::new(807, "zeraora"),
        ]
    }

    fn ids(listings: &[SpeciesListing]) -> Vec<u32> {
        listings.iter().map(|l| l.id).collect()
    }

    #[rstest]
    #[case("No criteria keeps everything, sorted", SpeciesFilter::default(), vec![6, 25, 142, 145, 150, 807])]
    #[case(
        "Single type",
        SpeciesFilter { types: vec![names(&["zapdos", "pikachu", "zeraora"])], ..Default::default() },
        vec![25, 145, 807]
    )]
    #[case(
        "Two types intersect",
        SpeciesFilter {
            types: vec![
                names(&["zapdos", "pikachu", "zeraora"]),
                names(&["zapdos", "charizard", "aerodactyl"]),
            ],
            ..Default::default()
        },
        vec![145]
    )]
    #[case(
        "Generation and legendary",
        SpeciesFilter {
            generation: Some(names(&["zapdos", "pikachu", "mewtwo", "charizard", "aerodactyl"])),
            legendary_only: true,
            ..Default::default()
        },
        vec![145, 150]
    )]
    #[case(
        "Disjoint types",
        SpeciesFilter { types: vec![names(&["pikachu"]), names(&["charizard"])], ..Default::default() },
        vec![]
    )]
    fn test_filter_species(
        #[case] desc: &str,
        #[case] filter: SpeciesFilter,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(ids(&filter_species(&national_list(), &filter)), expected, "{}", desc);
    }
}
