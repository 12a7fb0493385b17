pub mod error;
pub mod prca;

pub use error::{ImporterError, Result};
pub use prca::{
    models::RodeoResultsRecord,
    transformer::{ImportOptions, ImportOutcome, ImportSummary, RecordImporter},
    validator::RecordValidator,
};
