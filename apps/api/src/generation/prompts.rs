// All LLM prompt text for caption and hashtag generation.
// Pure lookups: same profile/description/vibe always yields the same prompts.

use crate::models::profile::{BusinessProfile, Vibe};

/// A system/user instruction pair sent to the text generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

const BARBER_SYSTEM: &str = "You're a streetwear-savvy barber shop social media expert.

Your style:
- Smooth, confident, no corporate cringe
- Use barber culture slang naturally (fade, lineup, taper, blend)
- Reference the craft and pride in the work
- Casual but professional tone
- Emojis: 💈✂️🔥💯 (sparingly)

Avoid:
- Corporate marketing speak
- Over-the-top hype
- Cringe millennial slang
- Making it about you (focus on the client/work)";

const SALON_SYSTEM: &str = "You're a luxury beauty industry insider and Instagram strategist.

Your style:
- Empowering, aspirational, confident
- Reference current hair trends (balayage, lived-in color, etc)
- Make clients feel like they're getting VIP treatment
- Elegant but not stuffy
- Emojis: ✨💅💇‍♀️🌟 (tastefully)

Avoid:
- Cheap/discount language
- Generic beauty platitudes
- Overly technical jargon
- Salesy pushiness";

const GYM_SYSTEM: &str = "You're a no-BS fitness coach who keeps it real on social media.

Your style:
- Motivational but authentic (no toxic positivity)
- Results-focused and honest about the work
- Build community and accountability
- Mix tough love with encouragement
- Emojis: 💪🔥🏋️‍♂️⚡ (when it fits)

Avoid:
- Bro-science nonsense
- Shaming or body negativity
- Unrealistic promises
- Gym rat gatekeeping";

/// Caption prompt template. Replace `{post_description}` and `{vibe_modifier}`.
const CAPTION_PROMPT_TEMPLATE: &str = "Create 5 Instagram caption variations for this post:

POST DESCRIPTION: {post_description}

VIBE: {vibe_modifier}

REQUIREMENTS:
1. Each caption should be 1-2 sentences (15-25 words max)
2. Include relevant emojis (1-3 per caption)
3. First caption should be the strongest/most engaging
4. Vary the style across all 5 (question, statement, story, call-to-action, bold claim)
5. No hashtags in captions (we'll generate those separately)

Return ONLY the 5 captions, numbered 1-5, no explanations.";

/// Hashtag prompt template. Replace `{post_description}` (appears twice).
const HASHTAG_PROMPT_TEMPLATE: &str = "Generate 25 hashtags for this post: {post_description}

STRATEGY:
- 5 high-competition hashtags (1M+ posts) for reach
- 10 medium-competition hashtags (100K-1M posts) for engagement
- 10 niche hashtags (10K-100K posts) for targeting

FORMAT:
Return as a single line of hashtags separated by spaces, no explanations.
Example: #barberlife #fade #barbershop #mensstyle...

POST: {post_description}";

/// Persona for the caption system prompt.
pub fn persona(profile: BusinessProfile) -> &'static str {
    match profile {
        BusinessProfile::Barber => BARBER_SYSTEM,
        BusinessProfile::Salon => SALON_SYSTEM,
        BusinessProfile::Gym => GYM_SYSTEM,
    }
}

/// One-sentence modifier folded into the caption instructions.
pub fn vibe_modifier(vibe: Vibe) -> &'static str {
    match vibe {
        Vibe::Hype => "Make it energetic and exciting. Build anticipation. Use power words.",
        Vibe::Smooth => "Keep it cool and effortless. Understated confidence. Less is more.",
        Vibe::Professional => "Polished and trustworthy. Emphasize expertise and quality.",
    }
}

fn hashtag_strategist(profile: BusinessProfile) -> &'static str {
    match profile {
        BusinessProfile::Barber => "You're a barber shop marketing expert who knows which hashtags actually get engagement vs vanity metrics.",
        BusinessProfile::Salon => "You're a salon social media manager who understands beauty industry hashtag strategy.",
        BusinessProfile::Gym => "You're a fitness marketing specialist who knows which gym hashtags drive real engagement.",
    }
}

/// Builds the instruction pair asking for exactly 5 numbered captions.
pub fn build_caption_prompt(
    profile: BusinessProfile,
    post_description: &str,
    vibe: Vibe,
) -> PromptPair {
    PromptPair {
        system: persona(profile).to_string(),
        user: CAPTION_PROMPT_TEMPLATE
            .replace("{vibe_modifier}", vibe_modifier(vibe))
            .replace("{post_description}", post_description),
    }
}

/// Builds the instruction pair asking for a single line of ~25 tiered hashtags.
pub fn build_hashtag_prompt(profile: BusinessProfile, post_description: &str) -> PromptPair {
    PromptPair {
        system: hashtag_strategist(profile).to_string(),
        user: HASHTAG_PROMPT_TEMPLATE.replace("{post_description}", post_description),
    }
}
