pub mod commands;
pub mod document;
pub mod presenter;
pub mod shortcuts;
pub mod storage;

pub use commands::CommandStack;
pub use document::DeckDocument;
pub use presenter::{Presenter, PresenterState, fit_scale};
pub use shortcuts::{PresenterAction, PresenterKeys};
pub use storage::{FileStore, MemoryStore, Store, StoreError, load_document, save_document};
