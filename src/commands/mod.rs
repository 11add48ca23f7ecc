//! Command implementations

pub mod analyze;
pub mod play;
pub mod survey;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use play::{PlayerInput, RoundOutcome, Score, Session, SessionError};
pub use survey::{SurveyStatistics, run_survey};
