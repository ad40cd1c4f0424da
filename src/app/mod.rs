pub mod event;
pub mod mode;
pub mod state;

pub use mode::Field;
pub use state::{AppState, DialogOutcome};
