//! The curated starting archive.
//!
//! Everything submitted at runtime starts at zero votes; these launch
//! entries carry the vote counts the archive opened with.

use crate::types::MysteryEntry;

fn entry(
    title: &str,
    era: &str,
    votes: u32,
    summary: &str,
    body: &str,
    source: &str,
) -> MysteryEntry {
    MysteryEntry {
        id: ulid::Ulid::new().to_string(),
        title: title.to_string(),
        era: era.to_string(),
        summary: summary.to_string(),
        body: body.to_string(),
        source: source.to_string(),
        votes,
    }
}

pub fn initial_entries() -> Vec<MysteryEntry> {
    vec![
        entry(
            "The Voynich Manuscript",
            "15th Century",
            1840,
            "An illustrated codex written in an unknown script and language, never deciphered.",
            "The Voynich Manuscript dates back to the early 1400s and is filled with strange \
             botanical drawings, astronomical diagrams, and undeciphered text. Despite centuries \
             of study by cryptographers, linguists, and historians, its meaning and purpose \
             remain unknown.",
            "https://en.wikipedia.org/wiki/Voynich_manuscript",
        ),
        entry(
            "The Disappearance of the Roanoke Colony",
            "1587",
            1620,
            "An entire English settlement vanished without a trace in the New World.",
            "When John White returned to Roanoke Island after three years, the colony was \
             deserted. The only clue was the word 'CROATOAN' carved into a post. The fate of \
             the settlers remains one of history's greatest mysteries.",
            "https://en.wikipedia.org/wiki/Roanoke_Colony",
        ),
        entry(
            "The Lost City of Atlantis",
            "Ancient Greece",
            1410,
            "A legendary advanced civilization said to have sunk beneath the sea.",
            "First described by Plato, Atlantis was said to be a powerful and technologically \
             advanced society that fell out of favor with the gods and disappeared in a single \
             day and night.",
            "https://en.wikipedia.org/wiki/Atlantis",
        ),
        entry(
            "The Antikythera Mechanism",
            "1st Century BCE",
            1710,
            "An ancient Greek device capable of predicting astronomical events.",
            "Discovered in a shipwreck, the Antikythera Mechanism is considered the world's \
             first analog computer.",
            "https://en.wikipedia.org/wiki/Antikythera_mechanism",
        ),
    ]
}
