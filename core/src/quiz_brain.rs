use crate::error::QuizError;
use crate::question::{Answer, Question};

/// Walks a batch of questions in order and keeps the score.
#[derive(Debug, Clone, Default)]
pub struct QuizBrain {
    question_list: Vec<Question>,
    question_number: usize,
    score: usize,
    current_question: Option<Question>,
    answered: bool,
}

impl QuizBrain {
    pub fn new(question_list: Vec<Question>) -> Self {
        Self {
            question_list,
            question_number: 0,
            score: 0,
            current_question: None,
            answered: false,
        }
    }

    pub fn still_has_questions(&self) -> bool {
        self.question_number < self.question_list.len()
    }

    /// Serve the next question in list order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Exhausted` once every question has been served;
    /// the brain is left unchanged in that case.
    pub fn next_question(&mut self) -> Result<&Question, QuizError> {
        let question = self
            .question_list
            .get(self.question_number)
            .cloned()
            .ok_or(QuizError::Exhausted)?;

        self.question_number += 1;
        self.answered = false;
        let current = &*self.current_question.insert(question);
        Ok(current)
    }

    /// Score a raw answer against the current question.
    ///
    /// Input is normalised (trimmed, case-insensitive). Anything that is not
    /// `true`/`false` is a wrong answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoCurrentQuestion` before the first question is
    /// served and `QuizError::AlreadyAnswered` on a second answer to the same
    /// question.
    pub fn check_answer(&mut self, user_answer: &str) -> Result<bool, QuizError> {
        match Answer::from_user_input(user_answer) {
            Some(answer) => self.check(answer),
            None => {
                self.mark_answered()?;
                log::debug!("unrecognised answer {user_answer:?}");
                Ok(false)
            }
        }
    }

    /// Score a typed answer against the current question.
    ///
    /// # Errors
    ///
    /// Same as [`QuizBrain::check_answer`].
    pub fn check(&mut self, answer: Answer) -> Result<bool, QuizError> {
        let correct = self.mark_answered()?;
        let is_right = answer == correct;
        if is_right {
            self.score += 1;
        }
        Ok(is_right)
    }

    fn mark_answered(&mut self) -> Result<Answer, QuizError> {
        let correct = self
            .current_question
            .as_ref()
            .ok_or(QuizError::NoCurrentQuestion)?
            .correct_answer();

        if self.answered {
            return Err(QuizError::AlreadyAnswered {
                question_number: self.question_number,
            });
        }
        self.answered = true;
        Ok(correct)
    }

    /// Drop the current session and start over on a fresh batch.
    pub fn restart(&mut self, question_list: Vec<Question>) {
        *self = Self::new(question_list);
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn question_number(&self) -> usize {
        self.question_number
    }

    pub fn total(&self) -> usize {
        self.question_list.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn question_list(&self) -> &[Question] {
        &self.question_list
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.question_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    GoodJob,
    KeepLearning,
}

impl Rating {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Rating::Excellent
        } else if percentage >= 60 {
            Rating::GoodJob
        } else {
            Rating::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rating::Excellent => "🏆 Excellent!",
            Rating::GoodJob => "👍 Good Job!",
            Rating::KeepLearning => "📚 Keep Learning!",
        }
    }
}

/// End-of-quiz result shown on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub answered: usize,
    pub percentage: u32,
    pub rating: Rating,
}

impl ScoreSummary {
    pub fn new(score: usize, answered: usize) -> Self {
        let percentage = if answered == 0 {
            0
        } else {
            (score * 100 / answered) as u32
        };
        Self {
            score,
            answered,
            percentage,
            rating: Rating::from_percentage(percentage),
        }
    }
}
