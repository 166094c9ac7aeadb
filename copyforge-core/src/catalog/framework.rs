//! Persuasion frameworks and the instructional fragments they map to.

use super::OutputLanguage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named persuasive-copy structure guiding how the generated content is
/// organized. Each variant maps to exactly one instructional fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    Aida,
    Pas,
    Bab,
    Fab,
    FourCs,
    Pastor,
    Quest,
    Storytelling,
}

impl Framework {
    pub const ALL: [Framework; 8] = [
        Framework::Aida,
        Framework::Pas,
        Framework::Bab,
        Framework::Fab,
        Framework::FourCs,
        Framework::Pastor,
        Framework::Quest,
        Framework::Storytelling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Aida => "aida",
            Framework::Pas => "pas",
            Framework::Bab => "bab",
            Framework::Fab => "fab",
            Framework::FourCs => "four-cs",
            Framework::Pastor => "pastor",
            Framework::Quest => "quest",
            Framework::Storytelling => "storytelling",
        }
    }

    pub fn label(&self, locale: OutputLanguage) -> &'static str {
        use OutputLanguage::*;
        match (self, locale) {
            (Framework::Aida, English) => "AIDA (Attention - Interest - Desire - Action)",
            (Framework::Aida, Vietnamese) => "AIDA (Chú ý - Quan tâm - Khao khát - Hành động)",
            (Framework::Aida, Spanish) => "AIDA (Atención - Interés - Deseo - Acción)",
            (Framework::Pas, English) => "PAS (Problem - Agitate - Solution)",
            (Framework::Pas, Vietnamese) => "PAS (Vấn đề - Khuấy động - Giải pháp)",
            (Framework::Pas, Spanish) => "PAS (Problema - Agitación - Solución)",
            (Framework::Bab, English) => "BAB (Before - After - Bridge)",
            (Framework::Bab, Vietnamese) => "BAB (Trước - Sau - Cầu nối)",
            (Framework::Bab, Spanish) => "BAB (Antes - Después - Puente)",
            (Framework::Fab, English) => "FAB (Features - Advantages - Benefits)",
            (Framework::Fab, Vietnamese) => "FAB (Tính năng - Ưu điểm - Lợi ích)",
            (Framework::Fab, Spanish) => "FAB (Características - Ventajas - Beneficios)",
            (Framework::FourCs, English) => "4Cs (Clear - Concise - Compelling - Credible)",
            (Framework::FourCs, Vietnamese) => "4Cs (Rõ ràng - Súc tích - Thuyết phục - Đáng tin)",
            (Framework::FourCs, Spanish) => "4Cs (Claro - Conciso - Convincente - Creíble)",
            (Framework::Pastor, English) => "PASTOR (Problem - Amplify - Story - Transformation - Offer - Response)",
            (Framework::Pastor, Vietnamese) => "PASTOR (Vấn đề - Khuếch đại - Câu chuyện - Chuyển hóa - Ưu đãi - Phản hồi)",
            (Framework::Pastor, Spanish) => "PASTOR (Problema - Amplificar - Historia - Transformación - Oferta - Respuesta)",
            (Framework::Quest, English) => "QUEST (Qualify - Understand - Educate - Stimulate - Transition)",
            (Framework::Quest, Vietnamese) => "QUEST (Sàng lọc - Thấu hiểu - Giáo dục - Khơi gợi - Chuyển tiếp)",
            (Framework::Quest, Spanish) => "QUEST (Calificar - Comprender - Educar - Estimular - Transicionar)",
            (Framework::Storytelling, English) => "Storytelling",
            (Framework::Storytelling, Vietnamese) => "Kể chuyện",
            (Framework::Storytelling, Spanish) => "Narración",
        }
    }

    /// Framework-specific instructional fragment embedded into the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Framework::Aida => {
                "Structure the copy with the AIDA framework: open with a \
                 scroll-stopping hook to grab Attention, build Interest with a \
                 relatable detail, create Desire by painting the outcome the \
                 reader wants, and close with a clear call to Action."
            }
            Framework::Pas => {
                "Structure the copy with the PAS framework: name the Problem the \
                 reader is living with, Agitate it by making the cost of \
                 inaction vivid, then present the product as the Solution that \
                 removes the pain."
            }
            Framework::Bab => {
                "Structure the copy with the Before-After-Bridge framework: \
                 describe the reader's world Before, show the After they wish \
                 they had, then position the product as the Bridge between the \
                 two."
            }
            Framework::Fab => {
                "Structure the copy with the Features-Advantages-Benefits \
                 framework: list the standout Features, translate each into a \
                 concrete Advantage, and land on the Benefit the reader \
                 personally feels."
            }
            Framework::FourCs => {
                "Follow the 4Cs: keep the copy Clear, Concise, Compelling, and \
                 Credible. Cut filler, back every claim with a specific, and \
                 make each sentence earn its place."
            }
            Framework::Pastor => {
                "Structure the copy with the PASTOR framework: Problem, Amplify, \
                 Story, Transformation with testimony, Offer, Response. Walk the \
                 reader from the pain they feel to one concrete next step."
            }
            Framework::Quest => {
                "Structure the copy with the QUEST framework: Qualify the \
                 reader, show you Understand their situation, Educate them on \
                 the solution, Stimulate desire, and Transition into the call to \
                 action."
            }
            Framework::Storytelling => {
                "Write the copy as a short story: a relatable protagonist, a \
                 moment of tension, and a resolution where the product plays a \
                 natural part. Let the narrative carry the message instead of a \
                 hard sell."
            }
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aida" => Ok(Framework::Aida),
            "pas" => Ok(Framework::Pas),
            "bab" | "before-after-bridge" => Ok(Framework::Bab),
            "fab" => Ok(Framework::Fab),
            "four-cs" | "4cs" | "4c" => Ok(Framework::FourCs),
            "pastor" => Ok(Framework::Pastor),
            "quest" => Ok(Framework::Quest),
            "storytelling" | "story" => Ok(Framework::Storytelling),
            other => Err(format!(
                "unknown framework '{other}' (expected one of: aida, pas, bab, fab, four-cs, pastor, quest, storytelling)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_identifier() {
        for framework in Framework::ALL {
            assert_eq!(framework.as_str().parse::<Framework>(), Ok(framework));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert!("pizza".parse::<Framework>().is_err());
    }

    #[test]
    fn instructions_are_distinct() {
        for a in Framework::ALL {
            for b in Framework::ALL {
                if a != b {
                    assert_ne!(a.instruction(), b.instruction());
                }
            }
        }
    }
}
