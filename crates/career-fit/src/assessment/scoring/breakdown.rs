use serde::{Deserialize, Serialize};

/// Interest, work style, and the motivation blend derived from both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychometricScores {
    pub interest: u8,
    pub personality: u8,
    pub motivation: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalScores {
    pub aptitude: u8,
    pub prerequisites: u8,
    pub domain: u8,
    pub total: u8,
}

/// Will, interest, skill, cognitive readiness, ability to learn, real-world application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
    pub total: u8,
}

/// Every score lies in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub psychometric: PsychometricScores,
    pub technical: TechnicalScores,
    pub wiscar: WiscarScores,
    pub overall: u8,
}
