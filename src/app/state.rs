use super::mode::Field;
use crate::copy::CopyAffordance;
use crate::secret::{SavedSecret, SecretForm};
use crate::ui::theme::Theme;
use crate::utils::text::TextInput;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Saved(SavedSecret),
    Cancelled,
}

/// The save-secret dialog as hosted in the terminal.
pub struct AppState {
    pub form: SecretForm,
    pub label_input: TextInput,
    pub value_input: TextInput,
    pub focus: Field,
    pub copy: CopyAffordance,
    pub theme: Theme,
    pub is_open: bool,
    pub outcome: Option<DialogOutcome>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(copy: CopyAffordance, theme: Theme) -> Self {
        Self {
            form: SecretForm::new(""),
            label_input: TextInput::default(),
            value_input: TextInput::default(),
            focus: Field::Label,
            copy,
            theme,
            is_open: false,
            outcome: None,
            should_quit: false,
        }
    }

    /// Closed -> open. Any earlier draft is discarded.
    pub fn open(&mut self, initial_value: &str) {
        self.form.reset(initial_value);
        self.sync_inputs();
        self.focus = Field::Label;
        self.copy.dismiss();
        self.outcome = None;
        self.is_open = true;
        debug!("Opened save dialog");
    }

    pub fn cancel(&mut self) {
        debug!("Save dialog cancelled");
        self.close(DialogOutcome::Cancelled);
    }

    /// Returns true when the secret was accepted and the dialog closed.
    pub fn save(&mut self) -> bool {
        match self.form.submit() {
            Some(secret) => {
                info!(label = %secret.label, expiration = %secret.expiration, "Secret saved");
                self.close(DialogOutcome::Saved(secret));
                true
            }
            None => {
                if self.form.label_error() {
                    self.focus = Field::Label;
                } else if self.form.value_error() {
                    self.focus = Field::Value;
                }
                false
            }
        }
    }

    pub fn copy_value(&mut self) -> bool {
        self.copy_value_at(Instant::now())
    }

    pub fn copy_value_at(&mut self, now: Instant) -> bool {
        let value = self.form.draft().value.as_str();
        self.copy.copy_at(Some(value), now)
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Field::Label => Some(&mut self.label_input),
            Field::Value => Some(&mut self.value_input),
            Field::Expiration => None,
        }
    }

    /// Push the focused input's text into the draft after an edit.
    pub fn commit_focused_input(&mut self) {
        match self.focus {
            Field::Label => self.form.update_label(self.label_input.as_str()),
            Field::Value => self.form.update_value(self.value_input.as_str()),
            Field::Expiration => {}
        }
    }

    pub fn next_expiration(&mut self) {
        let next = self.form.draft().expiration.next();
        self.form.update_expiration(next);
    }

    pub fn prev_expiration(&mut self) {
        let prev = self.form.draft().expiration.prev();
        self.form.update_expiration(prev);
    }

    pub fn tick(&mut self, now: Instant) {
        self.copy.tick(now);
    }

    /// How long the event loop may block: never past the copy badge deadline.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.copy.time_until_clear(now) {
            Some(remaining) => remaining.min(max),
            None => max,
        }
    }

    fn sync_inputs(&mut self) {
        let draft = self.form.draft();
        self.label_input = TextInput::new(&draft.label);
        self.value_input = TextInput::new(&draft.value);
    }

    fn close(&mut self, outcome: DialogOutcome) {
        self.form.reset("");
        self.sync_inputs();
        self.copy.dismiss();
        self.outcome = Some(outcome);
        self.is_open = false;
        self.should_quit = true;
    }
}
