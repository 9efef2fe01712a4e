mod answer_set;
mod estimate;
mod question;

pub use answer_set::AnswerSet;
pub use estimate::{BreakdownLine, EconomicCategory, EstimateRange};
pub use question::{AnswerOption, Question, QuestionKind};
