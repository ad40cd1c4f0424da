use super::expiration::ExpirationChoice;
use super::record::SavedSecret;
use chrono::{DateTime, Local};
use tracing::{debug, warn};

/// The in-progress input of the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDraft {
    pub label: String,
    pub value: String,
    pub expiration: ExpirationChoice,
    pub invalid: bool,
}

impl SecretDraft {
    pub fn new(initial_value: &str) -> Self {
        Self {
            label: String::new(),
            value: initial_value.to_string(),
            expiration: ExpirationChoice::Week,
            invalid: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    Clean,
    Invalid,
}

/// Validates the draft and turns it into a [`SavedSecret`] on submit.
///
/// An incomplete draft is not an error: `submit` returns `None` and the
/// draft is flagged invalid until the next edit or reset.
#[derive(Debug, Clone)]
pub struct SecretForm {
    draft: SecretDraft,
    autofocus: bool,
}

impl SecretForm {
    pub fn new(initial_value: &str) -> Self {
        Self {
            draft: SecretDraft::new(initial_value),
            autofocus: true,
        }
    }

    /// Throw away any edits and start over. Called every time the dialog opens.
    pub fn reset(&mut self, initial_value: &str) {
        self.draft = SecretDraft::new(initial_value);
        self.autofocus = true;
    }

    pub fn draft(&self) -> &SecretDraft {
        &self.draft
    }

    pub fn status(&self) -> DraftStatus {
        if self.draft.invalid {
            DraftStatus::Invalid
        } else {
            DraftStatus::Clean
        }
    }

    pub fn wants_autofocus(&self) -> bool {
        self.autofocus
    }

    pub fn update_label(&mut self, text: impl Into<String>) {
        self.draft.label = text.into();
        self.touch();
    }

    pub fn update_value(&mut self, text: impl Into<String>) {
        self.draft.value = text.into();
        self.touch();
    }

    pub fn update_expiration(&mut self, choice: ExpirationChoice) {
        self.draft.expiration = choice;
        self.touch();
    }

    pub fn label_error(&self) -> bool {
        self.draft.invalid && self.draft.label.is_empty()
    }

    pub fn value_error(&self) -> bool {
        self.draft.invalid && self.draft.value.is_empty()
    }

    pub fn submit(&mut self) -> Option<SavedSecret> {
        self.submit_at(Local::now())
    }

    pub fn submit_at(&mut self, now: DateTime<Local>) -> Option<SavedSecret> {
        self.autofocus = false;

        if !self.draft.is_complete() {
            debug!(
                missing_label = self.draft.label.is_empty(),
                missing_value = self.draft.value.is_empty(),
                "Rejected incomplete secret draft"
            );
            self.draft.invalid = true;
            return None;
        }

        let expiration = match self.draft.expiration.expires_at(&now) {
            Ok(at) => at,
            Err(e) => {
                warn!("Could not compute expiration: {}", e);
                return None;
            }
        };

        // An accepted draft is spent; the next submit starts from nothing.
        let spent = std::mem::replace(&mut self.draft, SecretDraft::new(""));
        Some(SavedSecret::new(spent.label, spent.value, expiration))
    }

    fn touch(&mut self) {
        self.draft.invalid = false;
        self.autofocus = false;
    }
}
