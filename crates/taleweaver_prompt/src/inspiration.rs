//! Random inspiration for story parameters: character names, items,
//! locations, and plot seeds.
//!
//! Pure functions over a caller-supplied random source, so callers can seed
//! deterministically in tests.

use rand::Rng;

/// Naming tradition for generated character names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCulture {
    Western,
    Eastern,
    Fantasy,
}

/// Kind of generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Weapon,
    Magical,
}

/// Theme for generated locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationTheme {
    Fantasy,
    SciFi,
}

/// Genre for generated plot seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedGenre {
    Adventure,
    Mystery,
    Fantasy,
}

const WESTERN_FIRST: [&str; 5] = ["James", "Emma", "William", "Olivia", "Alexander"];
const WESTERN_LAST: [&str; 5] = ["Smith", "Johnson", "Williams", "Brown", "Davis"];
const EASTERN_FIRST: [&str; 5] = ["Hiroshi", "Yuki", "Chen", "Ming", "Ji-eun"];
const EASTERN_LAST: [&str; 5] = ["Tanaka", "Kim", "Wang", "Liu", "Zhang"];
const FANTASY_FIRST: [&str; 5] = ["Aethel", "Thorne", "Sylvar", "Mystic", "Raven"];
const FANTASY_LAST: [&str; 5] = [
    "Brightstar",
    "Shadowweave",
    "Moonwhisper",
    "Stormborn",
    "Frostwind",
];

const WEAPON_PREFIXES: [&str; 5] = ["Ancient", "Mystical", "Cursed", "Blessed", "Legendary"];
const WEAPON_ITEMS: [&str; 5] = ["Sword", "Bow", "Staff", "Dagger", "Axe"];
const WEAPON_SUFFIXES: [&str; 5] = ["of Power", "of Truth", "of Light", "of Shadows", "of Time"];
const MAGICAL_PREFIXES: [&str; 5] = ["Enchanted", "Ethereal", "Celestial", "Arcane", "Divine"];
const MAGICAL_ITEMS: [&str; 5] = ["Ring", "Amulet", "Crystal", "Orb", "Pendant"];
const MAGICAL_SUFFIXES: [&str; 5] = ["of Wisdom", "of Dreams", "of Fortune", "of Life", "of Magic"];

const FANTASY_NAMES: [&str; 5] = ["Crystal", "Shadow", "Mystic", "Ancient", "Enchanted"];
const FANTASY_PLACES: [&str; 5] = ["Castle", "Forest", "Cave", "Temple", "Tower"];
const FANTASY_FEATURES: [&str; 5] = [
    "with floating islands",
    "shrouded in mist",
    "of eternal twilight",
    "guarded by dragons",
    "lost in time",
];
const SCIFI_NAMES: [&str; 5] = ["Nova", "Quantum", "Stellar", "Cyber", "Neo"];
const SCIFI_PLACES: [&str; 5] = ["Station", "Colony", "Port", "Base", "Hub"];
const SCIFI_FEATURES: [&str; 5] = [
    "in the asteroid belt",
    "on a dying star",
    "beyond the nebula",
    "in deep space",
    "under the ice moon",
];

const ADVENTURE_SEEDS: [&str; 3] = [
    "A mysterious map leads to an unexpected discovery...",
    "During a routine journey, your character stumbles upon...",
    "An ancient artifact suddenly activates, causing...",
];
const MYSTERY_SEEDS: [&str; 3] = [
    "A series of impossible coincidences points to...",
    "An old diary reveals a long-buried secret about...",
    "Strange symbols appear overnight in the town square...",
];
const FANTASY_SEEDS: [&str; 3] = [
    "A spell goes wrong, transforming the protagonist into...",
    "A dragon's egg hatches in an unusual place...",
    "Magic suddenly stops working, except for...",
];

fn pick<'a>(rng: &mut impl Rng, options: &'a [&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Generate a random character name in the given naming tradition.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use taleweaver_prompt::inspiration::{NameCulture, character_name};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let name = character_name(NameCulture::Fantasy, &mut rng);
/// assert!(name.contains(' '));
/// ```
pub fn character_name(culture: NameCulture, rng: &mut impl Rng) -> String {
    let (first, last) = match culture {
        NameCulture::Western => (&WESTERN_FIRST, &WESTERN_LAST),
        NameCulture::Eastern => (&EASTERN_FIRST, &EASTERN_LAST),
        NameCulture::Fantasy => (&FANTASY_FIRST, &FANTASY_LAST),
    };
    format!("{} {}", pick(rng, first), pick(rng, last))
}

/// Generate a random item name of the given kind.
pub fn item_name(kind: ItemKind, rng: &mut impl Rng) -> String {
    let (prefixes, items, suffixes) = match kind {
        ItemKind::Weapon => (&WEAPON_PREFIXES, &WEAPON_ITEMS, &WEAPON_SUFFIXES),
        ItemKind::Magical => (&MAGICAL_PREFIXES, &MAGICAL_ITEMS, &MAGICAL_SUFFIXES),
    };
    format!(
        "{} {} {}",
        pick(rng, prefixes),
        pick(rng, items),
        pick(rng, suffixes)
    )
}

/// Generate a random location description for the given theme.
pub fn location(theme: LocationTheme, rng: &mut impl Rng) -> String {
    let (names, places, features) = match theme {
        LocationTheme::Fantasy => (&FANTASY_NAMES, &FANTASY_PLACES, &FANTASY_FEATURES),
        LocationTheme::SciFi => (&SCIFI_NAMES, &SCIFI_PLACES, &SCIFI_FEATURES),
    };
    format!(
        "The {} {} {}",
        pick(rng, names),
        pick(rng, places),
        pick(rng, features)
    )
}

/// Pick a random plot seed for the given genre.
pub fn story_seed(genre: SeedGenre, rng: &mut impl Rng) -> &'static str {
    let seeds = match genre {
        SeedGenre::Adventure => &ADVENTURE_SEEDS,
        SeedGenre::Mystery => &MYSTERY_SEEDS,
        SeedGenre::Fantasy => &FANTASY_SEEDS,
    };
    pick(rng, seeds)
}
