pub mod error;
pub mod question;
pub mod quiz_brain;
pub mod source;

pub use error::{QuizError, SourceError};
pub use question::{Answer, Question};
pub use quiz_brain::{QuizBrain, Rating, ScoreSummary};
pub use source::{decode_batch, OpenTriviaSource, QuestionSource, SourceConfig};
