use serde_json::json;

use crate::error::SurveyResult;
use crate::models::{
    Created, Document, DocumentList, PublishedSurvey, Submission, SurveyRecord, UserProfile,
};

use super::SurveyClient;

/// Document-store operations. Collection paths mirror the service layout:
/// `users/{id}`, `surveys/{id}`, `surveys/{id}/published/{code}` and a flat
/// `submissions` collection queried by survey id.
impl SurveyClient {
    pub async fn put_user_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> SurveyResult<()> {
        self.request_unit(self.put(&format!("/v1/users/{}", user_id)).json(profile))
            .await
    }

    pub async fn get_user_profile(&self, user_id: &str) -> SurveyResult<UserProfile> {
        self.request(self.get(&format!("/v1/users/{}", user_id)))
            .await
    }

    /// Creates the private survey record. The server assigns the id.
    pub async fn add_survey(&self, record: &SurveyRecord) -> SurveyResult<String> {
        let created: Created = self.request(self.post("/v1/surveys").json(record)).await?;
        Ok(created.id)
    }

    pub async fn get_survey(&self, survey_id: &str) -> SurveyResult<SurveyRecord> {
        self.request(self.get(&format!("/v1/surveys/{}", survey_id)))
            .await
    }

    pub async fn get_surveys_by_owner(
        &self,
        owner_id: &str,
    ) -> SurveyResult<Vec<Document<SurveyRecord>>> {
        let list: DocumentList<SurveyRecord> = self
            .request(self.get("/v1/surveys").query(&[("ownerId", owner_id)]))
            .await?;
        Ok(list.documents)
    }

    pub async fn set_survey_published(&self, survey_id: &str) -> SurveyResult<()> {
        let body = json!({ "published": true });
        self.request_unit(self.patch(&format!("/v1/surveys/{}", survey_id)).json(&body))
            .await
    }

    pub async fn delete_survey(&self, survey_id: &str) -> SurveyResult<()> {
        self.request_unit(self.delete(&format!("/v1/surveys/{}", survey_id)))
            .await
    }

    /// Writes the published document under the survey code. Done at
    /// creation for every survey; the private record's `published` flag is
    /// what makes it readable to participants.
    pub async fn put_published(
        &self,
        survey_id: &str,
        code: &str,
        published: &PublishedSurvey,
    ) -> SurveyResult<()> {
        self.request_unit(
            self.put(&format!("/v1/surveys/{}/published/{}", survey_id, code))
                .json(published),
        )
        .await
    }

    pub async fn get_published(
        &self,
        survey_id: &str,
        code: &str,
    ) -> SurveyResult<PublishedSurvey> {
        self.request(self.get(&format!("/v1/surveys/{}/published/{}", survey_id, code)))
            .await
    }

    pub async fn list_published(
        &self,
        survey_id: &str,
    ) -> SurveyResult<Vec<Document<PublishedSurvey>>> {
        let list: DocumentList<PublishedSurvey> = self
            .request(self.get(&format!("/v1/surveys/{}/published", survey_id)))
            .await?;
        Ok(list.documents)
    }

    pub async fn delete_published(&self, survey_id: &str, code: &str) -> SurveyResult<()> {
        self.request_unit(self.delete(&format!("/v1/surveys/{}/published/{}", survey_id, code)))
            .await
    }

    pub async fn add_submission(&self, submission: &Submission) -> SurveyResult<String> {
        let created: Created = self
            .request(self.post("/v1/submissions").json(submission))
            .await?;
        Ok(created.id)
    }

    pub async fn get_submissions(
        &self,
        survey_id: &str,
    ) -> SurveyResult<Vec<Document<Submission>>> {
        let list: DocumentList<Submission> = self
            .request(self.get("/v1/submissions").query(&[("surveyId", survey_id)]))
            .await?;
        Ok(list.documents)
    }

    pub async fn delete_submission(&self, submission_id: &str) -> SurveyResult<()> {
        self.request_unit(self.delete(&format!("/v1/submissions/{}", submission_id)))
            .await
    }
}
