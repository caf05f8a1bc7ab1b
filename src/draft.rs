use crate::constants::MAX_QUESTIONS;
use crate::models::{Question, Visibility};

/// Outcome of trying to add the editor text as a new question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Normalized text was empty; nothing changed.
    EmptyInput,
    /// The survey already holds the maximum number of questions.
    TooManyQuestions,
}

/// The one in-flight unsaved survey. All mutation of a new survey goes
/// through these transitions; everything here is local and synchronous,
/// nothing touches the network until the survey is saved.
#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    pub title: String,
    pub visibility: Visibility,
    pub questions: Vec<Question>,
    /// Current text of the question editor. Survives navigation so a
    /// half-typed question is not lost.
    pub editor: String,
    /// Set while an existing question is being edited.
    pub edited_question_id: Option<u32>,
    next_id: u32,
}

/// Strips newlines and surrounding whitespace. Question content is stored
/// single-line.
pub fn normalize_content(text: &str) -> String {
    text.replace('\n', "").trim().to_string()
}

impl SurveyDraft {
    pub fn new() -> Self {
        SurveyDraft::default()
    }

    /// Seeds a draft from existing questions, resuming the id counter above
    /// the greatest id already present.
    pub fn from_questions(title: &str, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id + 1).max().unwrap_or(0);
        SurveyDraft {
            title: title.to_string(),
            questions,
            next_id,
            ..SurveyDraft::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edited_question_id.is_some()
    }

    /// Appends the text as a new question. Empty input is ignored; at the
    /// question limit nothing changes and the caller shows the warning.
    pub fn add(&mut self, text: &str) -> AddOutcome {
        let content = normalize_content(text);
        if content.is_empty() {
            return AddOutcome::EmptyInput;
        }
        if self.questions.len() >= MAX_QUESTIONS {
            return AddOutcome::TooManyQuestions;
        }
        self.questions.push(Question {
            id: self.next_id,
            content,
        });
        self.next_id += 1;
        self.editor.clear();
        AddOutcome::Added
    }

    /// Copies the question's content into the editor and marks it as being
    /// edited. Unknown ids are ignored. Switching to another question while
    /// already editing is allowed and simply retargets the edit.
    pub fn start_edit(&mut self, id: u32) -> bool {
        match self.questions.iter().find(|q| q.id == id) {
            Some(question) => {
                self.editor = question.content.clone();
                self.edited_question_id = Some(id);
                true
            }
            None => false,
        }
    }

    /// Replaces the edited question's content. A no-op when the text is
    /// empty or unchanged; in both cases edit mode stays active.
    pub fn update(&mut self, text: &str) -> bool {
        let content = normalize_content(text);
        if content.is_empty() {
            return false;
        }
        let id = match self.edited_question_id {
            Some(id) => id,
            None => return false,
        };
        let question = match self.questions.iter_mut().find(|q| q.id == id) {
            Some(q) => q,
            None => return false,
        };
        if question.content == content {
            return false;
        }
        question.content = content;
        self.editor.clear();
        self.edited_question_id = None;
        true
    }

    /// Removes the question with the given id. Ids are never reused or
    /// renumbered; later questions just move up one position. Removing the
    /// question currently being edited also leaves edit mode.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        let removed = self.questions.len() != before;
        if removed && self.edited_question_id == Some(id) {
            self.cancel();
        }
        removed
    }

    /// Clears the editor and leaves edit mode.
    pub fn cancel(&mut self) {
        self.editor.clear();
        self.edited_question_id = None;
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Leftover editor text that would be lost on save, normalized. The
    /// save flow asks for confirmation when this is non-empty.
    pub fn unsaved_editor_text(&self) -> String {
        normalize_content(&self.editor)
    }

    /// Resets everything back to a fresh draft after a successful save.
    pub fn reset(&mut self) {
        *self = SurveyDraft::new();
    }
}
