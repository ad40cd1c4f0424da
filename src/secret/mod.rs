pub mod expiration;
pub mod form;
pub mod record;

pub use expiration::{ExpirationChoice, ExpirationOffset};
pub use form::{DraftStatus, SecretDraft, SecretForm};
pub use record::SavedSecret;
