//! Tone wrapping and emoji decoration for the boost path.
//!
//! NOTE: the two operations treat an unknown tone differently. `adjust_tone`
//! returns the text untouched; `add_pizzazz` decorates with the friendly pool.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::profile::Tone;

/// Prefix and suffix pools for one tone.
#[derive(Debug, Clone, Copy)]
pub struct ToneWrapping {
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

/// A suffix is appended when a uniform draw in [0, 1) exceeds this (40% of the time).
pub const SUFFIX_THRESHOLD: f64 = 0.6;

/// Upper bound on emojis appended by `add_pizzazz`.
pub const MAX_EMOJIS: usize = 3;

const FRIENDLY_EMOJIS: &[&str] = &["😊", "🎉", "💖", "🌟", "🔥", "✨", "🚀", "💪", "🎊", "😄"];
const PROFESSIONAL_EMOJIS: &[&str] = &["🚀", "💼", "📈", "⭐", "🏆", "💡", "🎯", "✅", "📊", "🌟"];

/// Returns the wrapping pools for a tone.
pub fn tone_wrapping(tone: Tone) -> ToneWrapping {
    match tone {
        Tone::Friendly => ToneWrapping {
            prefixes: &["Hey!", "Hi there!", "Hello!", "Hey everyone!"],
            suffixes: &[
                "Hope you love it!",
                "Let me know what you think!",
                "Excited to share!",
            ],
        },
        Tone::Professional => ToneWrapping {
            prefixes: &[
                "We are pleased to announce",
                "I am excited to share",
                "Proud to present",
            ],
            suffixes: &[
                "Thank you for your attention.",
                "We appreciate your interest.",
                "Best regards.",
            ],
        },
    }
}

pub fn emoji_pool(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Friendly => FRIENDLY_EMOJIS,
        Tone::Professional => PROFESSIONAL_EMOJIS,
    }
}

/// Whether a suffix draw of `draw` (uniform in [0, 1)) includes a suffix.
pub fn includes_suffix(draw: f64) -> bool {
    draw > SUFFIX_THRESHOLD
}

/// Wraps `text` in a random prefix and, 40% of the time, a random suffix.
///
/// Unknown tones return `text` unchanged. No default tone is substituted.
pub fn adjust_tone<R: Rng + ?Sized>(text: &str, tone: &str, rng: &mut R) -> String {
    let Some(tone) = Tone::recognize(tone) else {
        return text.to_string();
    };
    let wrapping = tone_wrapping(tone);

    let Some(prefix) = wrapping.prefixes.choose(rng) else {
        return text.to_string();
    };
    let suffix = if includes_suffix(rng.gen::<f64>()) {
        wrapping.suffixes.choose(rng)
    } else {
        None
    };

    match suffix {
        Some(suffix) => format!("{prefix} {text} {suffix}"),
        None => format!("{prefix} {text}"),
    }
}

/// Appends 1–3 distinct emojis from the tone's pool (friendly pool for unknown tones).
pub fn add_pizzazz<R: Rng + ?Sized>(text: &str, tone: &str, rng: &mut R) -> String {
    let pool = emoji_pool(Tone::recognize(tone).unwrap_or(Tone::Friendly));
    let count = rng.gen_range(1..=MAX_EMOJIS).min(pool.len());
    let emojis: Vec<&str> = pool.choose_multiple(rng, count).copied().collect();

    format!("{text} {}", emojis.join(" "))
}
