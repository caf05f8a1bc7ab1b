use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logging::log_debug;
use crate::models::{Document, Submission};

use super::SurveyClient;

pub const WATCH_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// A live view over one survey's submissions. A background task polls the
/// submission query and delivers every snapshot over a channel. Stopping
/// the watch aborts the task, so a screen that has been left never receives
/// another snapshot.
pub struct SubmissionWatch {
    survey_id: String,
    receiver: mpsc::Receiver<Vec<Document<Submission>>>,
    task: JoinHandle<()>,
}

impl SubmissionWatch {
    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }

    /// Waits for the next snapshot. Returns None once the poll task is gone.
    pub async fn next(&mut self) -> Option<Vec<Document<Submission>>> {
        self.receiver.recv().await
    }

    /// Non-blocking drain for the interactive tick: returns the newest
    /// queued snapshot, discarding any older ones behind it.
    pub fn try_latest(&mut self) -> Option<Vec<Document<Submission>>> {
        let mut latest = None;
        while let Ok(snapshot) = self.receiver.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for SubmissionWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl SurveyClient {
    /// Starts polling the survey's submissions. The first poll fires
    /// immediately so the caller does not wait a full interval for data.
    pub fn watch_submissions(
        self: Arc<Self>,
        survey_id: &str,
        interval: Duration,
    ) -> SubmissionWatch {
        let (sender, receiver) = mpsc::channel(8);
        let id = survey_id.to_string();
        let task_id = id.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match self.get_submissions(&task_id).await {
                    Ok(submissions) => {
                        if sender.send(submissions).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log_debug(&format!(
                            "Submission poll for {} failed: {}",
                            task_id, e
                        ));
                    }
                }
            }
        });

        SubmissionWatch {
            survey_id: id,
            receiver,
            task,
        }
    }
}
