//! Enumerated stylistic inputs: business profile, vibe and tone.
//!
//! Profile and Vibe resolve unknown keys to a named default. Tone does not:
//! `Tone::recognize` returns `None` and the tone adjuster leaves the text alone.
//! All three also parse strictly via `FromStr` for request validation.
//! Keys are matched exactly: `"Salon"` and `" gym "` are not known values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Business persona selecting the system prompt and hashtag strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessProfile {
    #[default]
    Barber,
    Salon,
    Gym,
}

/// Modifier applied to caption instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    #[default]
    Smooth,
    Hype,
    Professional,
}

/// Post-hoc wrapping style used by the boost path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
}

impl BusinessProfile {
    pub const ALL: [BusinessProfile; 3] = [Self::Barber, Self::Salon, Self::Gym];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Barber => "barber",
            Self::Salon => "salon",
            Self::Gym => "gym",
        }
    }

    /// Lenient lookup: unknown keys fall back to `Barber`.
    pub fn resolve(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl Vibe {
    pub const ALL: [Vibe; 3] = [Self::Smooth, Self::Hype, Self::Professional];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Hype => "hype",
            Self::Professional => "professional",
        }
    }

    /// Lenient lookup: unknown keys fall back to `Smooth`.
    pub fn resolve(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl Tone {
    pub const ALL: [Tone; 2] = [Self::Friendly, Self::Professional];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Professional => "professional",
        }
    }

    /// Returns `None` for unknown keys. There is deliberately no default here.
    pub fn recognize(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

/// Strict parse failure, carrying a message that lists the accepted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
    pub accepted: Vec<&'static str>,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}'; expected one of: {}",
            self.field,
            self.value,
            self.accepted.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariant {}

fn parse_variant<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, UnknownVariant> {
    all.iter()
        .copied()
        .find(|v| name(*v) == value)
        .ok_or_else(|| UnknownVariant {
            field,
            value: value.to_string(),
            accepted: all.iter().map(|v| name(*v)).collect(),
        })
}

impl FromStr for BusinessProfile {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("business_type", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Vibe {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("vibe", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Tone {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("tone", s, &Self::ALL, Self::as_str)
    }
}
