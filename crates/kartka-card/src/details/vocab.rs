//! Extraction vocabularies.
//!
//! These lists are domain knowledge, not logic: they encode what the free
//! text of circulating character cards actually says. They are versioned so
//! downstream callers can tell whether two imports ran the same vocabulary,
//! and additions belong here rather than inline in the probes.
//!
//! Ordering matters twice over: compound entries must appear (`half-elf`,
//! `bounty hunter`) so they win over their suffix words by matching at an
//! earlier position, and entries sharing a prefix (`princess`/`prince`) must
//! be listed longest first because alternation is first-match.

/// Bumped whenever any list below changes.
pub const VOCAB_VERSION: u32 = 1;

/// Gender vocabulary, matched as whole words.
pub const GENDERS: &[&str] = &[
    "non-binary",
    "transgender",
    "genderfluid",
    "genderqueer",
    "agender",
    "female",
    "male",
    "woman",
    "man",
    "girl",
    "boy",
    "trans",
];

/// Race/species vocabulary, fantasy and sci-fi staples.
pub const RACES: &[&str] = &[
    "dragonborn",
    "half-elf",
    "high elf",
    "dark elf",
    "wood elf",
    "half-orc",
    "halfling",
    "werewolf",
    "vampire",
    "android",
    "cyborg",
    "robot",
    "alien",
    "demon",
    "angel",
    "dragon",
    "tiefling",
    "goblin",
    "gnome",
    "dwarf",
    "kitsune",
    "succubus",
    "mermaid",
    "fairy",
    "elf",
    "orc",
    "human",
    "ghost",
    "zombie",
    "undead",
    "celestial",
];

/// Occupation/role vocabulary.
pub const OCCUPATIONS: &[&str] = &[
    "bounty hunter",
    "police officer",
    "businesswoman",
    "businessman",
    "blacksmith",
    "alchemist",
    "mercenary",
    "assassin",
    "sorceress",
    "sorcerer",
    "priestess",
    "priest",
    "princess",
    "prince",
    "empress",
    "emperor",
    "wizard",
    "witch",
    "mage",
    "knight",
    "paladin",
    "warrior",
    "soldier",
    "guard",
    "bodyguard",
    "thief",
    "rogue",
    "huntress",
    "hunter",
    "ranger",
    "bard",
    "merchant",
    "healer",
    "monk",
    "samurai",
    "ninja",
    "pirate",
    "sailor",
    "captain",
    "doctor",
    "nurse",
    "scientist",
    "engineer",
    "professor",
    "teacher",
    "student",
    "librarian",
    "detective",
    "officer",
    "pilot",
    "chef",
    "baker",
    "farmer",
    "innkeeper",
    "bartender",
    "maid",
    "butler",
    "artist",
    "musician",
    "singer",
    "dancer",
    "writer",
    "journalist",
    "photographer",
    "programmer",
    "hacker",
    "idol",
    "actress",
    "actor",
    "model",
    "waitress",
    "waiter",
    "secretary",
    "queen",
    "king",
    "noble",
    "spy",
];

/// Trigger phrases that introduce a likes list.
pub const LIKE_TRIGGERS: &[&str] = &["likes", "enjoys", "loves", "fond of", "interested in"];

/// Trigger phrases that introduce a dislikes list.
pub const DISLIKE_TRIGGERS: &[&str] = &["dislikes", "hates", "avoids", "not fond of"];

/// Trigger phrases that introduce an opening line.
pub const FIRST_MESSAGE_TRIGGERS: &[&str] = &["first message", "greeting", "initial message"];
