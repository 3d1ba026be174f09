use std::cell::Cell;

use quiz_core::{
    decode_batch, Answer, Question, QuestionSource, QuizBrain, QuizError, Rating, SourceError,
};

/// Hands out numbered batches so a restart visibly swaps the list.
struct NumberedSource {
    batch: Cell<usize>,
    size: usize,
}

impl NumberedSource {
    fn new(size: usize) -> Self {
        Self {
            batch: Cell::new(0),
            size,
        }
    }
}

impl QuestionSource for NumberedSource {
    fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let batch = self.batch.get() + 1;
        self.batch.set(batch);
        Ok((1..=self.size)
            .map(|n| Question::new(format!("batch {batch} question {n}"), Answer::from(n % 2 == 0)))
            .collect())
    }
}

struct DownSource;

impl QuestionSource for DownSource {
    fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        decode_batch(r#"{"response_code": 1, "results": []}"#)
    }
}

#[test]
fn full_session_then_restart() {
    let source = NumberedSource::new(10);
    let mut quiz = QuizBrain::new(source.fetch().unwrap());

    let mut served = 0;
    while quiz.still_has_questions() {
        let correct = quiz.next_question().unwrap().correct_answer();
        served += 1;
        // Miss every third question.
        let given = if served % 3 == 0 {
            Answer::from(correct == Answer::False)
        } else {
            correct
        };
        quiz.check(given).unwrap();
        assert!(quiz.score() <= quiz.question_number());
        assert!(quiz.question_number() <= quiz.total());
    }

    assert_eq!(served, 10);
    let summary = quiz.summary();
    assert_eq!(summary.score, 7);
    assert_eq!(summary.answered, 10);
    assert_eq!(summary.percentage, 70);
    assert_eq!(summary.rating, Rating::GoodJob);
    assert_eq!(quiz.next_question().unwrap_err(), QuizError::Exhausted);

    quiz.restart(source.fetch().unwrap());
    assert!(quiz.still_has_questions());
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.question_number(), 0);
    assert_eq!(
        quiz.next_question().unwrap().text(),
        "batch 2 question 1"
    );
}

#[test]
fn string_answers_drive_the_same_session() {
    let mut quiz = QuizBrain::new(NumberedSource::new(4).fetch().unwrap());
    let mut rights = 0;
    while quiz.still_has_questions() {
        quiz.next_question().unwrap();
        if quiz.check_answer("True").unwrap() {
            rights += 1;
        }
    }
    // Even-numbered questions are true.
    assert_eq!(rights, 2);
    assert_eq!(quiz.score(), 2);
    assert_eq!(quiz.summary().rating, Rating::KeepLearning);
}

#[test]
fn source_failure_is_reported_not_swallowed() {
    match DownSource.fetch() {
        Err(SourceError::Api { code, .. }) => assert_eq!(code, 1),
        other => panic!("expected an api error, got {other:?}"),
    }
}
