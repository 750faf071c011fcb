pub mod identifiers;
pub mod summary;

pub use identifiers::{ApiCredential, SourceVersion};
pub use summary::{
    Keyword, ScoredSentence, Summary, SummaryError, SummaryMethod, SummaryRatio, SummaryReport,
};
