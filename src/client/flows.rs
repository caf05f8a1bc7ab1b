use chrono::Local;

use crate::code::{content_checksum, SurveyCode};
use crate::constants::{DATE_TIME_FORMAT, MULTIPLE_PUBLISHED_VERSIONS, NO_PUBLISHED_VERSION};
use crate::error::{SurveyError, SurveyResult};
use crate::models::{
    Account, Document, PublishedSurvey, Question, Submission, Survey, SurveyRecord, Visibility,
};
use crate::survey_error;

use super::SurveyClient;

pub fn current_date_time() -> String {
    Local::now().format(DATE_TIME_FORMAT).to_string()
}

/// Newest first, by the submission timestamp string.
pub fn sort_submissions(submissions: &mut [Document<Submission>]) {
    submissions.sort_by(|a, b| b.data.insert_date.cmp(&a.data.insert_date));
}

/// How resolving a survey code ended. Only transport failures are errors;
/// every refusal is an ordinary outcome and the caller picks the message.
#[derive(Debug)]
pub enum ParticipateOutcome {
    Ready(PublishedSurvey),
    OwnSurvey,
    NoSurvey,
    InvalidCode,
    NotPublished,
}

impl SurveyClient {
    /// Creates a survey: private record first (the server assigns the id),
    /// then the published document keyed by the survey code. The published
    /// document always exists; the record's `published` flag decides who
    /// may read it.
    pub async fn create_survey(
        &self,
        account: &Account,
        title: &str,
        questions: Vec<Question>,
        visibility: Visibility,
    ) -> SurveyResult<Survey> {
        let record = SurveyRecord {
            owner_id: account.user_id.clone(),
            insert_date: current_date_time(),
            published: visibility.is_published(),
        };
        let survey_id = self.add_survey(&record).await?;

        let checksum = content_checksum(&record, title, &questions);
        let code = SurveyCode::new(&account.username, &survey_id, &checksum);

        let published = PublishedSurvey {
            title: title.to_string(),
            questions,
        };
        self.put_published(&survey_id, &code.to_string(), &published)
            .await?;

        Ok(Survey {
            id: survey_id,
            title: published.title,
            questions: published.questions,
            owner_id: record.owner_id,
            insert_date: record.insert_date,
            published: record.published,
            survey_code: code.to_string(),
        })
    }

    /// Lists the owner's surveys, merging each private record with its
    /// published document. A survey whose published sub-collection does not
    /// hold exactly one document is skipped and reported in the warnings.
    /// Newest first.
    pub async fn fetch_surveys(
        &self,
        owner_id: &str,
    ) -> SurveyResult<(Vec<Survey>, Vec<String>)> {
        let records = self.get_surveys_by_owner(owner_id).await?;

        let mut surveys = Vec::new();
        let mut warnings = Vec::new();
        for record in records {
            let mut published = self.list_published(&record.id).await?;
            match published.len() {
                1 => {
                    let doc = published.remove(0);
                    surveys.push(Survey {
                        id: record.id,
                        title: doc.data.title,
                        questions: doc.data.questions,
                        owner_id: record.data.owner_id,
                        insert_date: record.data.insert_date,
                        published: record.data.published,
                        survey_code: doc.id,
                    });
                }
                0 => warnings.push(format!("{} ({})", NO_PUBLISHED_VERSION, record.id)),
                _ => warnings.push(format!("{} ({})", MULTIPLE_PUBLISHED_VERSIONS, record.id)),
            }
        }

        surveys.sort_by(|a, b| b.insert_date.cmp(&a.insert_date));
        Ok((surveys, warnings))
    }

    /// Loads one survey by id, merging the private record with its
    /// published document.
    pub async fn fetch_survey(&self, survey_id: &str) -> SurveyResult<Survey> {
        let record = self.get_survey(survey_id).await?;
        let mut published = self.list_published(survey_id).await?;
        let doc = match published.len() {
            1 => published.remove(0),
            0 => {
                return Err(survey_error!(
                    DataError,
                    "{} ({})",
                    NO_PUBLISHED_VERSION,
                    survey_id
                ))
            }
            _ => {
                return Err(survey_error!(
                    DataError,
                    "{} ({})",
                    MULTIPLE_PUBLISHED_VERSIONS,
                    survey_id
                ))
            }
        };

        Ok(Survey {
            id: survey_id.to_string(),
            title: doc.data.title,
            questions: doc.data.questions,
            owner_id: record.owner_id,
            insert_date: record.insert_date,
            published: record.published,
            survey_code: doc.id,
        })
    }

    /// Deletes a survey and everything hanging off it: the published
    /// document first so nobody can keep participating, then every
    /// submission, then the record itself.
    pub async fn remove_survey(&self, survey_id: &str, survey_code: &str) -> SurveyResult<()> {
        self.delete_published(survey_id, survey_code).await?;

        let submissions = self.get_submissions(survey_id).await?;
        for submission in submissions {
            self.delete_submission(&submission.id).await?;
        }

        self.delete_survey(survey_id).await
    }

    /// Resolves a survey code to a fillable survey. Signed-in users first
    /// probe the private record: reading it succeeds only for the owner, so
    /// permission-denied is the normal "someone else's survey" signal and
    /// the probe falls through to the published document.
    pub async fn resolve_participation(
        &self,
        code: &SurveyCode,
        user_id: Option<&str>,
    ) -> SurveyResult<ParticipateOutcome> {
        if let Some(uid) = user_id {
            match self.get_survey(&code.survey_id).await {
                Ok(record) => {
                    return Ok(if record.owner_id == uid {
                        ParticipateOutcome::OwnSurvey
                    } else {
                        ParticipateOutcome::NoSurvey
                    });
                }
                Err(SurveyError::NotFound(_)) => return Ok(ParticipateOutcome::NoSurvey),
                Err(SurveyError::PermissionDenied(_)) => {}
                Err(e) => return Err(e),
            }
        }

        match self.get_published(&code.survey_id, &code.to_string()).await {
            Ok(survey) => Ok(ParticipateOutcome::Ready(survey)),
            Err(SurveyError::NotFound(_)) => Ok(ParticipateOutcome::InvalidCode),
            Err(SurveyError::PermissionDenied(_)) => Ok(ParticipateOutcome::NotPublished),
            Err(e) => Err(e),
        }
    }
}
