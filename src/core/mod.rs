pub mod catalog;
pub mod errors;
pub mod models;
pub mod row_store;
pub mod study;

mod study_tests;

pub use catalog::WordCatalog;
pub use errors::TarjetaError;
pub use models::{
    CardSide,
    Direction,
    StudyRange,
    TraversalMode,
    ViewMode,
    WordRecord,
};
pub use study::{
    StudyPaths,
    StudySignal,
    StudyState,
};
