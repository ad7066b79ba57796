use std::fmt;
use std::str::FromStr;

/// Learning-style category attached to every quiz option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LearningType {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown learning type `{0}`")]
pub struct UnknownLearningType(pub String);

impl LearningType {
    pub const ALL: [LearningType; 4] = [
        LearningType::Visual,
        LearningType::Auditory,
        LearningType::ReadingWriting,
        LearningType::Kinesthetic,
    ];

    /// Wire and storage label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningType::Visual => "Visual",
            LearningType::Auditory => "Auditory",
            LearningType::ReadingWriting => "Reading/Writing",
            LearningType::Kinesthetic => "Kinesthetic",
        }
    }
}

impl fmt::Display for LearningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningType {
    type Err = UnknownLearningType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LearningType::ALL
            .into_iter()
            .find(|t| t.as_str() == trimmed)
            .ok_or_else(|| UnknownLearningType(s.to_string()))
    }
}
