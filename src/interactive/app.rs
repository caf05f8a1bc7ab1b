use std::time::Instant;

use crossterm::event::KeyCode;

use crate::client::{
    current_date_time, sort_submissions, ParticipateOutcome, SubmissionWatch, WATCH_POLL_INTERVAL,
};
use crate::code::SurveyCode;
use crate::constants::{
    ALREADY_PARTICIPATED, CONFIRM_ADD_SURVEY, CONFIRM_DELETE, CONFIRM_PUBLISH, CONFIRM_SUBMISSION,
    INVALID_CODE, MAX_SCORE, NO_QUESTIONS, OWN_SURVEY, SUBMISSION_ADDED, SURVEY_ADDED,
    SURVEY_DELETED, SURVEY_NOT_FOUND, SURVEY_NOT_PUBLISHED, SURVEY_PUBLISHED, TOO_MANY_QUESTIONS,
    UNFILLED_QUESTIONS_PREFIX, UNSAVED_QUESTION_WARNING,
};
use crate::context::AppContext;
use crate::draft::{AddOutcome, SurveyDraft};
use crate::logging::{log_error, log_info};
use crate::models::{
    unfilled_positions, Account, Document, PublishedSurvey, Score, Submission, Survey,
};
use crate::storage::Storage;
use crate::validation::{
    validate_email, validate_password, validate_survey_code, validate_survey_title,
    validate_username,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    SignIn,
    SignUp,
    Surveys,
    Creator,
    Detail,
    Participate,
    Filler,
}

/// Focused region of the survey creator screen. Text keys go to the
/// focused input; list actions only work while the question list has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorFocus {
    Title,
    Editor,
    Questions,
}

/// What a pending [Y]es answer will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DiscardUnsavedQuestion,
    AddSurvey,
    PublishSurvey,
    DeleteSurvey,
    SubmitAnswers,
}

impl ConfirmAction {
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmAction::DiscardUnsavedQuestion => UNSAVED_QUESTION_WARNING,
            ConfirmAction::AddSurvey => CONFIRM_ADD_SURVEY,
            ConfirmAction::PublishSurvey => CONFIRM_PUBLISH,
            ConfirmAction::DeleteSurvey => CONFIRM_DELETE,
            ConfirmAction::SubmitAnswers => CONFIRM_SUBMISSION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
    Info,
}

pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

/// A survey being filled out by a participant.
pub struct FillerState {
    pub code: SurveyCode,
    pub code_text: String,
    pub survey: PublishedSurvey,
    pub scores: Vec<Score>,
    pub selected: usize,
}

pub struct InteractiveApp {
    pub screen: Screen,
    pub should_quit: bool,
    pub context: AppContext,
    pub storage: Storage,
    pub account: Option<Account>,
    pub notifications: Vec<Notification>,
    pub popup: Option<ConfirmAction>,

    // Welcome menu
    pub menu_index: usize,

    // Sign-in / sign-up forms
    pub email_input: String,
    pub username_input: String,
    pub password_input: String,
    pub form_focus: usize,

    // Survey list
    pub surveys: Vec<Survey>,
    pub selected_survey: usize,

    // Creator
    pub draft: SurveyDraft,
    pub creator_focus: CreatorFocus,
    pub selected_question: usize,

    // Detail
    pub submissions: Vec<Document<Submission>>,
    pub selected_submission: usize,
    pub show_scores: bool,
    pub watch: Option<SubmissionWatch>,

    // Participation
    pub code_input: String,
    pub filler: Option<FillerState>,
}

impl InteractiveApp {
    pub async fn new() -> Self {
        let mut app = Self {
            screen: Screen::Welcome,
            should_quit: false,
            context: AppContext::load(),
            storage: Storage::open(),
            account: None,
            notifications: Vec::new(),
            popup: None,
            menu_index: 0,
            email_input: String::new(),
            username_input: String::new(),
            password_input: String::new(),
            form_focus: 0,
            surveys: Vec::new(),
            selected_survey: 0,
            draft: SurveyDraft::new(),
            creator_focus: CreatorFocus::Title,
            selected_question: 0,
            submissions: Vec::new(),
            selected_submission: 0,
            show_scores: false,
            watch: None,
            code_input: String::new(),
            filler: None,
        };

        match app.context.restore_session().await {
            Ok(Some(account)) => {
                log_info(&format!("Session restored for {}", account.username));
                app.account = Some(account);
                app.screen = Screen::Surveys;
                app.refresh_surveys().await;
            }
            Ok(None) => {}
            Err(e) => app.notify_error(format!("{}", e)),
        }

        app
    }

    pub fn signed_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn detail_survey(&self) -> Option<&Survey> {
        self.surveys.get(self.selected_survey)
    }

    // ----- notifications -----

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notifications.push(Notification {
            kind,
            message,
            created_at: Instant::now(),
        });
    }

    pub fn notify_success(&mut self, message: &str) {
        self.notify(NotificationKind::Success, message.to_string());
    }

    pub fn notify_error(&mut self, message: String) {
        log_error(&message);
        self.notify(NotificationKind::Error, message);
    }

    pub fn notify_info(&mut self, message: &str) {
        self.notify(NotificationKind::Info, message.to_string());
    }

    fn begin_loading(&mut self, message: &str) {
        self.notify(NotificationKind::Loading, message.to_string());
    }

    fn end_loading(&mut self) {
        self.notifications
            .retain(|n| n.kind != NotificationKind::Loading);
    }

    pub fn is_loading(&self) -> bool {
        self.notifications
            .iter()
            .any(|n| n.kind == NotificationKind::Loading)
    }

    /// Expire notifications. Successes and infos go after 5 seconds,
    /// errors linger a little longer.
    fn expire_notifications(&mut self) {
        self.notifications.retain(|n| {
            let age = n.created_at.elapsed().as_secs();
            match n.kind {
                NotificationKind::Success | NotificationKind::Info => age < 5,
                NotificationKind::Error => age < 8,
                NotificationKind::Loading => true,
            }
        });
    }

    pub fn on_tick(&mut self) {
        self.expire_notifications();
        self.poll_watch();
    }

    // ----- key dispatch -----

    pub fn handle_key(&mut self, key: KeyCode) {
        if self.popup.is_some() {
            // [Y] is handled upstream because confirmations run async work.
            if matches!(key, KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc) {
                self.popup = None;
            }
            return;
        }

        match self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::SignIn | Screen::SignUp => self.handle_form_key(key),
            Screen::Surveys => self.handle_surveys_key(key),
            Screen::Creator => self.handle_creator_key(key),
            Screen::Detail => self.handle_detail_key(key),
            Screen::Participate => self.handle_participate_key(key),
            Screen::Filler => self.handle_filler_key(key),
        }
    }

    pub fn menu_items(&self) -> &'static [&'static str] {
        &["Sign in", "Sign up", "Participate in a survey", "Quit"]
    }

    fn handle_welcome_key(&mut self, key: KeyCode) {
        let count = self.menu_items().len();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % count;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu_index = if self.menu_index == 0 {
                    count - 1
                } else {
                    self.menu_index - 1
                };
            }
            KeyCode::Enter => match self.menu_index {
                0 => self.enter_sign_in(),
                1 => self.enter_sign_up(),
                2 => self.enter_participate(),
                _ => self.should_quit = true,
            },
            _ => {}
        }
    }

    fn enter_sign_in(&mut self) {
        self.email_input = self.storage.remembered_email().unwrap_or_default();
        self.password_input.clear();
        self.form_focus = 0;
        self.screen = Screen::SignIn;
    }

    fn enter_sign_up(&mut self) {
        self.email_input.clear();
        self.username_input.clear();
        self.password_input.clear();
        self.form_focus = 0;
        self.screen = Screen::SignUp;
    }

    fn enter_participate(&mut self) {
        self.code_input.clear();
        self.screen = Screen::Participate;
    }

    fn form_field_count(&self) -> usize {
        match self.screen {
            Screen::SignUp => 3,
            _ => 2,
        }
    }

    /// The sign-up form is email, username, password; sign-in skips the
    /// username. Enter on the last field is picked up by the event loop and
    /// submits.
    fn handle_form_key(&mut self, key: KeyCode) {
        let count = self.form_field_count();
        match key {
            KeyCode::Esc => self.screen = Screen::Welcome,
            KeyCode::Tab | KeyCode::Down => self.form_focus = (self.form_focus + 1) % count,
            KeyCode::BackTab | KeyCode::Up => {
                self.form_focus = if self.form_focus == 0 {
                    count - 1
                } else {
                    self.form_focus - 1
                };
            }
            KeyCode::Char(c) => self.focused_field_mut().push(c),
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
            }
            _ => {}
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match (self.screen, self.form_focus) {
            (Screen::SignUp, 1) => &mut self.username_input,
            (Screen::SignUp, 2) => &mut self.password_input,
            (_, 1) => &mut self.password_input,
            _ => &mut self.email_input,
        }
    }

    fn handle_surveys_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.surveys.is_empty() {
                    self.selected_survey = (self.selected_survey + 1) % self.surveys.len();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.surveys.is_empty() {
                    self.selected_survey = if self.selected_survey == 0 {
                        self.surveys.len() - 1
                    } else {
                        self.selected_survey - 1
                    };
                }
            }
            KeyCode::Char('n') => {
                self.creator_focus = if self.draft.title.is_empty() {
                    CreatorFocus::Title
                } else {
                    CreatorFocus::Editor
                };
                self.selected_question = 0;
                self.screen = Screen::Creator;
            }
            KeyCode::Char('p') => self.enter_participate(),
            _ => {}
        }
    }

    fn handle_creator_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                self.creator_focus = match self.creator_focus {
                    CreatorFocus::Title => CreatorFocus::Editor,
                    CreatorFocus::Editor => CreatorFocus::Questions,
                    CreatorFocus::Questions => CreatorFocus::Title,
                };
            }
            KeyCode::BackTab => {
                self.creator_focus = match self.creator_focus {
                    CreatorFocus::Title => CreatorFocus::Questions,
                    CreatorFocus::Editor => CreatorFocus::Title,
                    CreatorFocus::Questions => CreatorFocus::Editor,
                };
            }
            _ => match self.creator_focus {
                CreatorFocus::Title => self.handle_title_key(key),
                CreatorFocus::Editor => self.handle_editor_key(key),
                CreatorFocus::Questions => self.handle_question_list_key(key),
            },
        }
    }

    fn handle_title_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.draft.title.push(c),
            KeyCode::Backspace => {
                self.draft.title.pop();
            }
            KeyCode::Enter => self.creator_focus = CreatorFocus::Editor,
            KeyCode::Esc => self.leave_creator(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.draft.editor.push(c),
            KeyCode::Backspace => {
                self.draft.editor.pop();
            }
            KeyCode::Enter => self.commit_editor(),
            KeyCode::Esc => {
                if self.draft.is_editing() {
                    self.draft.cancel();
                } else {
                    self.leave_creator();
                }
            }
            _ => {}
        }
    }

    /// Enter in the editor adds a new question, or saves the edited one.
    /// An unchanged or emptied text keeps edit mode so nothing is lost by
    /// accident.
    fn commit_editor(&mut self) {
        let text = self.draft.editor.clone();
        if self.draft.is_editing() {
            self.draft.update(&text);
        } else {
            match self.draft.add(&text) {
                AddOutcome::Added | AddOutcome::EmptyInput => {}
                AddOutcome::TooManyQuestions => {
                    self.notify_error(TOO_MANY_QUESTIONS.to_string());
                }
            }
        }
        self.clamp_question_selection();
    }

    fn handle_question_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.draft.questions.is_empty() {
                    self.selected_question =
                        (self.selected_question + 1) % self.draft.questions.len();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.draft.questions.is_empty() {
                    self.selected_question = if self.selected_question == 0 {
                        self.draft.questions.len() - 1
                    } else {
                        self.selected_question - 1
                    };
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_question_id() {
                    if self.draft.edited_question_id == Some(id) {
                        self.notify_info("Already editing this question.");
                    } else if self.draft.start_edit(id) {
                        self.creator_focus = CreatorFocus::Editor;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_question_id() {
                    // The question being edited cannot be removed from
                    // under the editor.
                    if self.draft.edited_question_id == Some(id) {
                        self.notify_info("Finish editing this question first.");
                    } else {
                        self.draft.remove(id);
                        self.clamp_question_selection();
                    }
                }
            }
            KeyCode::Char('v') => {
                self.draft.visibility = self.draft.visibility.toggled();
            }
            KeyCode::Char('s') => self.start_save_flow(),
            KeyCode::Esc => self.leave_creator(),
            _ => {}
        }
    }

    fn selected_question_id(&self) -> Option<u32> {
        self.draft
            .questions
            .get(self.selected_question)
            .map(|q| q.id)
    }

    fn clamp_question_selection(&mut self) {
        if self.selected_question >= self.draft.questions.len()
            && !self.draft.questions.is_empty()
        {
            self.selected_question = self.draft.questions.len() - 1;
        }
    }

    /// Leaving the creator keeps the draft (including half-typed editor
    /// text) so coming back resumes where the user left off.
    fn leave_creator(&mut self) {
        self.screen = Screen::Surveys;
    }

    /// The save chain: no questions is a hard stop, leftover editor text
    /// asks whether to continue without it, then the final confirmation.
    pub fn start_save_flow(&mut self) {
        if let Err(e) = validate_survey_title(&self.draft.title) {
            self.notify_error(format!("{}", e));
            return;
        }
        if self.draft.questions.is_empty() {
            self.notify_error(NO_QUESTIONS.to_string());
            return;
        }
        if !self.draft.unsaved_editor_text().is_empty() {
            self.popup = Some(ConfirmAction::DiscardUnsavedQuestion);
        } else {
            self.popup = Some(ConfirmAction::AddSurvey);
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.submissions.is_empty() {
                    self.selected_submission =
                        (self.selected_submission + 1) % self.submissions.len();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.submissions.is_empty() {
                    self.selected_submission = if self.selected_submission == 0 {
                        self.submissions.len() - 1
                    } else {
                        self.selected_submission - 1
                    };
                }
            }
            KeyCode::Char('f') => self.show_scores = !self.show_scores,
            KeyCode::Char('p') => match self.detail_survey() {
                Some(survey) if survey.published => {
                    self.notify_info("This survey is already published.")
                }
                Some(_) => self.popup = Some(ConfirmAction::PublishSurvey),
                None => {}
            },
            KeyCode::Char('d') => {
                if self.detail_survey().is_some() {
                    self.popup = Some(ConfirmAction::DeleteSurvey);
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.close_detail();
                self.screen = Screen::Surveys;
            }
            _ => {}
        }
    }

    fn handle_participate_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.code_input.push(c),
            KeyCode::Backspace => {
                self.code_input.pop();
            }
            KeyCode::Esc => {
                self.screen = if self.signed_in() {
                    Screen::Surveys
                } else {
                    Screen::Welcome
                };
            }
            _ => {}
        }
    }

    fn handle_filler_key(&mut self, key: KeyCode) {
        let Some(filler) = &mut self.filler else {
            return;
        };
        let count = filler.scores.len();
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    filler.selected = (filler.selected + 1) % count;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if count > 0 {
                    filler.selected = if filler.selected == 0 {
                        count - 1
                    } else {
                        filler.selected - 1
                    };
                }
            }
            KeyCode::Char(c @ '0'..='9') => {
                let value = c as u8 - b'0';
                if let Some(score) = filler.scores.get_mut(filler.selected) {
                    *score = Score::Value(value);
                }
            }
            KeyCode::Right | KeyCode::Char('+') => {
                if let Some(score) = filler.scores.get_mut(filler.selected) {
                    *score = match *score {
                        Score::Value(v) if v < MAX_SCORE => Score::Value(v + 1),
                        Score::Value(v) => Score::Value(v),
                        _ => Score::Value(0),
                    };
                }
            }
            KeyCode::Left | KeyCode::Char('-') => {
                if let Some(score) = filler.scores.get_mut(filler.selected) {
                    *score = match *score {
                        Score::Value(v) if v > 0 => Score::Value(v - 1),
                        _ => Score::Value(0),
                    };
                }
            }
            KeyCode::Char('n') => {
                if let Some(score) = filler.scores.get_mut(filler.selected) {
                    *score = Score::NoAnswer;
                }
            }
            KeyCode::Char('s') => self.start_submit_flow(),
            KeyCode::Esc => {
                self.filler = None;
                self.screen = Screen::Participate;
            }
            _ => {}
        }
    }

    /// Blocks submission while any question is neither scored nor marked
    /// "No Answer", naming the open ones by position.
    pub fn start_submit_flow(&mut self) {
        let Some(filler) = &self.filler else {
            return;
        };
        let unfilled = unfilled_positions(&filler.scores);
        if !unfilled.is_empty() {
            let listed = unfilled
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            self.notify_error(format!("{}{}", UNFILLED_QUESTIONS_PREFIX, listed));
            return;
        }
        self.popup = Some(ConfirmAction::SubmitAnswers);
    }

    // ----- async operations, driven by the event loop -----

    /// Dispatches a confirmed popup. Discarding the unsaved question chains
    /// straight into the add-survey confirmation.
    pub async fn confirm_popup(&mut self) {
        let Some(action) = self.popup.take() else {
            return;
        };
        match action {
            ConfirmAction::DiscardUnsavedQuestion => {
                self.popup = Some(ConfirmAction::AddSurvey);
            }
            ConfirmAction::AddSurvey => self.save_survey().await,
            ConfirmAction::PublishSurvey => self.publish_survey().await,
            ConfirmAction::DeleteSurvey => self.delete_survey().await,
            ConfirmAction::SubmitAnswers => self.submit_answers().await,
        }
    }

    /// Enter in a sign-in/sign-up form: move to the next field, or submit
    /// from the last one.
    pub async fn submit_form(&mut self) {
        if self.form_focus + 1 < self.form_field_count() {
            self.form_focus += 1;
            return;
        }
        match self.screen {
            Screen::SignIn => self.submit_sign_in().await,
            Screen::SignUp => self.submit_sign_up().await,
            _ => {}
        }
    }

    async fn submit_sign_in(&mut self) {
        if let Err(e) = validate_email(&self.email_input) {
            self.notify_error(format!("{}", e));
            return;
        }
        if let Err(e) = validate_password(&self.password_input) {
            self.notify_error(format!("{}", e));
            return;
        }

        self.begin_loading("Signing in...");
        let result = self
            .context
            .anonymous_client()
            .sign_in(&self.email_input, &self.password_input)
            .await;
        let credential = match result {
            Ok(credential) => credential,
            Err(e) => {
                self.end_loading();
                self.notify_error(format!("{}", e));
                return;
            }
        };

        if let Err(e) = self.context.set_session(&credential.token, &credential.user_id) {
            self.end_loading();
            self.notify_error(format!("{}", e));
            return;
        }

        match self.context.restore_session().await {
            Ok(Some(account)) => {
                self.storage.remember_email(&self.email_input);
                self.notify_success(&format!("Signed in as {}", account.username));
                self.account = Some(account);
                self.password_input.clear();
                self.screen = Screen::Surveys;
                self.end_loading();
                self.refresh_surveys().await;
            }
            Ok(None) => {
                let _ = self.context.sign_out().await;
                self.end_loading();
                self.notify_error("Session was rejected right after sign-in".to_string());
            }
            Err(e) => {
                let _ = self.context.sign_out().await;
                self.end_loading();
                self.notify_error(format!("{}", e));
            }
        }
    }

    async fn submit_sign_up(&mut self) {
        if let Err(e) = validate_email(&self.email_input) {
            self.notify_error(format!("{}", e));
            return;
        }
        if let Err(e) = validate_username(&self.username_input) {
            self.notify_error(format!("{}", e));
            return;
        }
        if let Err(e) = validate_password(&self.password_input) {
            self.notify_error(format!("{}", e));
            return;
        }

        self.begin_loading("Creating account...");
        let result = self
            .context
            .anonymous_client()
            .sign_up(&self.email_input, &self.password_input)
            .await;
        let credential = match result {
            Ok(credential) => credential,
            Err(e) => {
                self.end_loading();
                self.notify_error(format!("{}", e));
                return;
            }
        };

        if let Err(e) = self.context.set_session(&credential.token, &credential.user_id) {
            self.end_loading();
            self.notify_error(format!("{}", e));
            return;
        }

        let profile = crate::models::UserProfile {
            username: self.username_input.clone(),
            email: self.email_input.clone(),
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.end_loading();
                self.notify_error(format!("{}", e));
                return;
            }
        };
        if let Err(e) = client.put_user_profile(&credential.user_id, &profile).await {
            self.end_loading();
            self.notify_error(format!("{}", e));
            return;
        }

        self.storage.remember_email(&self.email_input);
        let account = Account {
            user_id: credential.user_id,
            username: profile.username,
            email: profile.email,
        };
        self.notify_success(&format!("Signed up as {}", account.username));
        self.account = Some(account);
        self.password_input.clear();
        self.screen = Screen::Surveys;
        self.end_loading();
        self.refresh_surveys().await;
    }

    pub async fn sign_out_flow(&mut self) {
        if let Err(e) = self.context.sign_out().await {
            self.notify_error(format!("{}", e));
            return;
        }
        self.account = None;
        self.surveys.clear();
        self.selected_survey = 0;
        self.close_detail();
        self.menu_index = 0;
        self.screen = Screen::Welcome;
        self.notify_success("Signed out.");
    }

    pub async fn refresh_surveys(&mut self) {
        let Some(account) = self.account.clone() else {
            return;
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.notify_error(format!("{}", e));
                return;
            }
        };

        self.begin_loading("Loading surveys...");
        match client.fetch_surveys(&account.user_id).await {
            Ok((surveys, warnings)) => {
                self.surveys = surveys;
                for warning in warnings {
                    self.notify_error(warning);
                }
                if self.selected_survey >= self.surveys.len() && !self.surveys.is_empty() {
                    self.selected_survey = self.surveys.len() - 1;
                }
            }
            Err(e) => self.notify_error(format!("{}", e)),
        }
        self.end_loading();
    }

    async fn save_survey(&mut self) {
        let Some(account) = self.account.clone() else {
            return;
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.notify_error(format!("{}", e));
                return;
            }
        };

        self.begin_loading("Saving survey...");
        let result = client
            .create_survey(
                &account,
                &self.draft.title,
                self.draft.questions.clone(),
                self.draft.visibility,
            )
            .await;
        self.end_loading();

        match result {
            Ok(survey) => {
                self.draft.reset();
                self.surveys.insert(0, survey);
                self.selected_survey = 0;
                self.screen = Screen::Surveys;
                self.notify_success(SURVEY_ADDED);
            }
            Err(e) => self.notify_error(format!("{}", e)),
        }
    }

    /// Loads the submissions for the selected survey and starts the poll
    /// that keeps them fresh while the detail screen is open.
    pub async fn open_detail(&mut self) {
        let Some(survey) = self.detail_survey().cloned() else {
            return;
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.notify_error(format!("{}", e));
                return;
            }
        };

        self.begin_loading("Loading submissions...");
        match client.get_submissions(&survey.id).await {
            Ok(mut submissions) => {
                sort_submissions(&mut submissions);
                self.submissions = submissions;
                self.selected_submission = 0;
                self.show_scores = false;
                self.watch = Some(client.watch_submissions(&survey.id, WATCH_POLL_INTERVAL));
                self.screen = Screen::Detail;
            }
            Err(e) => self.notify_error(format!("{}", e)),
        }
        self.end_loading();
    }

    /// Stops the submission poll. Dropping the watch aborts its task, so a
    /// closed detail screen never receives another snapshot.
    pub fn close_detail(&mut self) {
        self.watch = None;
        self.submissions.clear();
        self.selected_submission = 0;
    }

    fn poll_watch(&mut self) {
        let Some(watch) = &mut self.watch else {
            return;
        };
        if let Some(mut snapshot) = watch.try_latest() {
            sort_submissions(&mut snapshot);
            self.submissions = snapshot;
            if self.selected_submission >= self.submissions.len()
                && !self.submissions.is_empty()
            {
                self.selected_submission = self.submissions.len() - 1;
            }
        }
    }

    async fn publish_survey(&mut self) {
        let Some(survey) = self.detail_survey().cloned() else {
            return;
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.notify_error(format!("{}", e));
                return;
            }
        };

        self.begin_loading("Publishing...");
        let result = client.set_survey_published(&survey.id).await;
        self.end_loading();

        match result {
            Ok(()) => {
                if let Some(entry) = self.surveys.get_mut(self.selected_survey) {
                    entry.published = true;
                }
                self.notify_success(SURVEY_PUBLISHED);
            }
            Err(e) => self.notify_error(format!("{}", e)),
        }
    }

    async fn delete_survey(&mut self) {
        let Some(survey) = self.detail_survey().cloned() else {
            return;
        };
        let client = match self.context.verified_client() {
            Ok(client) => client,
            Err(e) => {
                self.notify_error(format!("{}", e));
                return;
            }
        };

        // The poll task has to stop before its survey starts disappearing.
        self.watch = None;

        self.begin_loading("Deleting survey...");
        let result = client.remove_survey(&survey.id, &survey.survey_code).await;
        self.end_loading();

        match result {
            Ok(()) => {
                self.close_detail();
                self.surveys.retain(|s| s.id != survey.id);
                if self.selected_survey >= self.surveys.len() && !self.surveys.is_empty() {
                    self.selected_survey = self.surveys.len() - 1;
                }
                self.screen = Screen::Surveys;
                self.notify_success(SURVEY_DELETED);
            }
            Err(e) => {
                // Still on the detail screen, so the live list resumes.
                self.watch = Some(client.watch_submissions(&survey.id, WATCH_POLL_INTERVAL));
                self.notify_error(format!("{}", e));
            }
        }
    }

    /// Resolves the entered code and opens the filler when the survey can
    /// be participated in. Refusals surface as notifications.
    pub async fn resolve_code(&mut self) {
        let code_text = self.code_input.trim().to_string();
        if validate_survey_code(&code_text).is_err() {
            self.notify_error(INVALID_CODE.to_string());
            return;
        }
        if self.storage.has_consumed(&code_text) {
            self.notify_info(ALREADY_PARTICIPATED);
            return;
        }
        let code = match SurveyCode::parse(&code_text) {
            Ok(code) => code,
            Err(_) => {
                self.notify_error(INVALID_CODE.to_string());
                return;
            }
        };

        let user_id = self.account.as_ref().map(|a| a.user_id.clone());
        let client = self.context.any_client();

        self.begin_loading("Looking up survey...");
        let outcome = client
            .resolve_participation(&code, user_id.as_deref())
            .await;
        self.end_loading();

        match outcome {
            Ok(ParticipateOutcome::Ready(survey)) => {
                let scores = vec![Score::Unfilled; survey.questions.len()];
                self.filler = Some(FillerState {
                    code,
                    code_text,
                    survey,
                    scores,
                    selected: 0,
                });
                self.screen = Screen::Filler;
            }
            Ok(ParticipateOutcome::OwnSurvey) => self.notify_info(OWN_SURVEY),
            Ok(ParticipateOutcome::NoSurvey) => self.notify_error(SURVEY_NOT_FOUND.to_string()),
            Ok(ParticipateOutcome::InvalidCode) => self.notify_error(INVALID_CODE.to_string()),
            Ok(ParticipateOutcome::NotPublished) => self.notify_info(SURVEY_NOT_PUBLISHED),
            Err(e) => self.notify_error(format!("{}", e)),
        }
    }

    async fn submit_answers(&mut self) {
        let Some(filler) = &self.filler else {
            return;
        };
        let submission = Submission {
            survey_id: filler.code.survey_id.clone(),
            scores: filler.scores.clone(),
            insert_date: current_date_time(),
        };
        let code_text = filler.code_text.clone();
        let client = self.context.any_client();

        self.begin_loading("Submitting...");
        let result = client.add_submission(&submission).await;
        self.end_loading();

        match result {
            Ok(_) => {
                if !self.storage.add_consumed_code(&code_text) {
                    self.notify_error("Could not record your participation locally.".to_string());
                }
                self.filler = None;
                self.code_input.clear();
                self.screen = if self.signed_in() {
                    Screen::Surveys
                } else {
                    Screen::Welcome
                };
                self.notify_success(SUBMISSION_ADDED);
            }
            Err(e) => self.notify_error(format!("{}", e)),
        }
    }
}
