//! Word bank the board draws from
//!
//! The dictionary file itself is external; this module holds the in-memory
//! list and the uniform draw the generator uses.

use rand::Rng;

/// Compiled-in fallback list, spanning all three score tiers
const BUILTIN: &[&str] = &[
    // short tier
    "cat", "dog", "sun", "fox", "owl", "elm", "ivy", "oak", "fern", "moss", "reed", "wolf",
    "lamp", "rain", "tree", "bark", "dusk", "dawn", "tide", "stone", "river", "cloud", "frost",
    "ember", "storm", "brook", "maple", "cedar", "raven", "eagle", "otter", "holly", "grove",
    "ridge", "flame", "meadow", "canyon", "forest", "valley", "summit", "breeze", "shadow",
    "winter", "autumn",
    // medium tier
    "volcano", "lantern", "harvest", "whisper", "granite", "monsoon", "thunder", "cascade",
    "estuary", "juniper", "glacier", "horizon", "prairie", "redwood", "blizzard", "mahogany",
    "chestnut", "sycamore", "marigold", "lavender", "magnolia", "twilight", "wildfire",
    "downpour", "sagebrush", "waterfall", "limestone", "sandstone", "driftwood", "evergreen",
    "moonlight", "starlight", "riverbank", "shoreline",
    // long tier
    "wilderness", "meadowlark", "watermelon", "strawberry", "blackberry", "grasshopper",
    "hummingbird", "caterpillar", "countryside", "honeysuckle", "huckleberry", "pomegranate",
    "dragonfruit", "archipelago", "thunderstorm", "rhododendron", "constellation",
    "photosynthesis",
];

/// An in-memory pool of ASCII words sampled uniformly per generation event
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordBank {
    /// Bank backed by the compiled-in list
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Bank from externally loaded lines; blank lines are dropped.
    /// Falls back to the builtin list when nothing usable remains.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            log::warn!("empty word list, falling back to the builtin bank");
            return Self::builtin();
        }
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Draw one word uniformly at random
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
