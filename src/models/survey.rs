use serde::{Deserialize, Serialize};

use super::Question;

/// The private survey document. Readable only by its owner; the `published`
/// flag gates read access to the published sub-document.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SurveyRecord {
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "insertDate")]
    pub insert_date: String,
    pub published: bool,
}

/// The public survey document, stored under the survey code. This is all a
/// participant ever sees.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PublishedSurvey {
    pub title: String,
    pub questions: Vec<Question>,
}

/// A survey as the owner sees it: the private record and the published
/// document merged into one view.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Survey {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "insertDate")]
    pub insert_date: String,
    pub published: bool,
    #[serde(rename = "surveyCode")]
    pub survey_code: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Published,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Private
    }
}

impl Visibility {
    pub fn is_published(&self) -> bool {
        matches!(self, Visibility::Published)
    }

    pub fn toggled(&self) -> Visibility {
        match self {
            Visibility::Private => Visibility::Published,
            Visibility::Published => Visibility::Private,
        }
    }
}
