use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::MAX_SCORE;

/// One answer slot. On the wire a score is `null` (explicit "No Answer"),
/// `-1` (not yet filled, only valid while filling) or an integer 0 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    NoAnswer,
    Unfilled,
    Value(u8),
}

impl Score {
    /// Counts toward "Answered n/m". An explicit "No Answer" does not.
    pub fn is_answered(&self) -> bool {
        matches!(self, Score::Value(_))
    }

    pub fn is_unfilled(&self) -> bool {
        matches!(self, Score::Unfilled)
    }
}

/// 1-based positions of still unfilled answers, for the "please fill"
/// warning before submitting.
pub fn unfilled_positions(scores: &[Score]) -> Vec<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| score.is_unfilled())
        .map(|(position, _)| position + 1)
        .collect()
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Score::NoAnswer => serializer.serialize_none(),
            Score::Unfilled => serializer.serialize_i8(-1),
            Score::Value(v) => serializer.serialize_u8(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<i16> = Option::deserialize(deserializer)?;
        match value {
            None => Ok(Score::NoAnswer),
            Some(-1) => Ok(Score::Unfilled),
            Some(v) if v >= 0 && v <= MAX_SCORE as i16 => Ok(Score::Value(v as u8)),
            Some(v) => Err(D::Error::custom(format!("score out of range: {}", v))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Submission {
    #[serde(rename = "surveyId")]
    pub survey_id: String,
    pub scores: Vec<Score>,
    #[serde(rename = "insertDate")]
    pub insert_date: String,
}

impl Submission {
    pub fn answered_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_answered()).count()
    }
}
