//! Content pillars: the thematic categories shaping generated copy.

use super::OutputLanguage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pillar {
    Educational,
    Promotional,
    Entertainment,
    Inspirational,
    Community,
    Testimonial,
}

impl Pillar {
    pub const ALL: [Pillar; 6] = [
        Pillar::Educational,
        Pillar::Promotional,
        Pillar::Entertainment,
        Pillar::Inspirational,
        Pillar::Community,
        Pillar::Testimonial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Educational => "educational",
            Pillar::Promotional => "promotional",
            Pillar::Entertainment => "entertainment",
            Pillar::Inspirational => "inspirational",
            Pillar::Community => "community",
            Pillar::Testimonial => "testimonial",
        }
    }

    pub fn label(&self, locale: OutputLanguage) -> &'static str {
        use OutputLanguage::*;
        match (self, locale) {
            (Pillar::Educational, English) => "Educational",
            (Pillar::Educational, Vietnamese) => "Giáo dục",
            (Pillar::Educational, Spanish) => "Educativo",
            (Pillar::Promotional, English) => "Promotional",
            (Pillar::Promotional, Vietnamese) => "Quảng bá",
            (Pillar::Promotional, Spanish) => "Promocional",
            (Pillar::Entertainment, English) => "Entertainment",
            (Pillar::Entertainment, Vietnamese) => "Giải trí",
            (Pillar::Entertainment, Spanish) => "Entretenimiento",
            (Pillar::Inspirational, English) => "Inspirational",
            (Pillar::Inspirational, Vietnamese) => "Truyền cảm hứng",
            (Pillar::Inspirational, Spanish) => "Inspirador",
            (Pillar::Community, English) => "Community",
            (Pillar::Community, Vietnamese) => "Cộng đồng",
            (Pillar::Community, Spanish) => "Comunidad",
            (Pillar::Testimonial, English) => "Testimonial",
            (Pillar::Testimonial, Vietnamese) => "Chứng thực khách hàng",
            (Pillar::Testimonial, Spanish) => "Testimonial",
        }
    }

    /// Pillar-specific instructional fragment embedded into the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Pillar::Educational => {
                "This is educational content: teach the reader something \
                 genuinely useful about the topic, lead with the insight, and \
                 keep promotion to a light touch at the end."
            }
            Pillar::Promotional => {
                "This is promotional content: spotlight the offer, make the \
                 value unmistakable, create a sense of timeliness, and drive \
                 directly toward the call to action."
            }
            Pillar::Entertainment => {
                "This is entertainment content: prioritize being fun and \
                 shareable. Humor, surprise, or a playful take on the topic \
                 matter more than product detail."
            }
            Pillar::Inspirational => {
                "This is inspirational content: find an uplifting angle on the \
                 topic that leaves the reader motivated, and tie the feeling \
                 back to the brand's mission."
            }
            Pillar::Community => {
                "This is community content: speak with the audience rather than \
                 at them, invite replies and opinions, and end with a question \
                 that is easy to answer."
            }
            Pillar::Testimonial => {
                "This is testimonial-style content: center a customer's voice \
                 and results. Concrete before-and-after detail beats \
                 superlatives; let the proof do the selling."
            }
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "educational" | "education" => Ok(Pillar::Educational),
            "promotional" | "promotion" | "promo" => Ok(Pillar::Promotional),
            "entertainment" => Ok(Pillar::Entertainment),
            "inspirational" | "inspiration" => Ok(Pillar::Inspirational),
            "community" | "engagement" => Ok(Pillar::Community),
            "testimonial" => Ok(Pillar::Testimonial),
            other => Err(format!(
                "unknown content pillar '{other}' (expected one of: educational, promotional, entertainment, inspirational, community, testimonial)"
            )),
        }
    }
}
