//! Mood detection by keyword presence.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returned when no mood keyword appears in the text.
pub const NEUTRAL_VIBE: &str = "Detected vibe: neutral 😊";

/// A mood label with the keywords that trigger it and the emojis that represent it.
#[derive(Debug, Clone, Copy)]
pub struct Mood {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub emojis: &'static [&'static str],
}

pub static MOODS: [Mood; 5] = [
    Mood {
        name: "excited",
        keywords: &["excited", "amazing", "awesome", "incredible", "fantastic"],
        emojis: &["🎉", "🚀", "🔥", "✨"],
    },
    Mood {
        name: "grateful",
        keywords: &["thank", "grateful", "appreciate", "blessed"],
        emojis: &["🙏", "💖", "🌟", "😊"],
    },
    Mood {
        name: "proud",
        keywords: &["proud", "achievement", "accomplished", "success"],
        emojis: &["🏆", "💪", "🎯", "⭐"],
    },
    Mood {
        name: "innovative",
        keywords: &["new", "innovative", "creative", "launch"],
        emojis: &["💡", "🚀", "🆕", "🔮"],
    },
    Mood {
        name: "team",
        keywords: &["team", "together", "collaboration", "partnership"],
        emojis: &["🤝", "👥", "💫", "🌈"],
    },
];

impl Mood {
    /// Substring match on already-lowercased text. Hit count does not matter.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(*k))
    }
}

/// All moods whose keywords appear in `text`, in table order.
pub fn matching_moods(text: &str) -> Vec<&'static Mood> {
    let lowered = text.to_lowercase();
    MOODS.iter().filter(|m| m.matches(&lowered)).collect()
}

/// Picks one matching mood uniformly, then one of its emojis uniformly.
pub fn detect_vibe<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let moods = matching_moods(text);
    let Some(mood) = moods.choose(rng) else {
        return NEUTRAL_VIBE.to_string();
    };
    match mood.emojis.choose(rng) {
        Some(emoji) => format!("Detected vibe: {} {emoji}", mood.name),
        None => format!("Detected vibe: {}", mood.name),
    }
}
