// Boost path: model-free post enhancement (tone, emojis, keyword hashtags)
// and mood detection. Every random choice takes an injected `Rng`.

pub mod booster;
pub mod handlers;
pub mod hashtags;
pub mod tone;
pub mod vibe;
