pub mod draft;
pub mod state;

pub use draft::{DraftField, FormDraft};
pub use state::{DirectoryState, ErrorSignal};
