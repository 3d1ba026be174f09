use std::fmt;

/// One of the two canonical answers to a true/false question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    True,
    False,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::True => "True",
            Answer::False => "False",
        }
    }

    /// Exact match against `"True"` / `"False"`, as served by the trivia API.
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "True" => Some(Answer::True),
            "False" => Some(Answer::False),
            _ => None,
        }
    }

    /// Lenient parse for answers typed or clicked by a player.
    pub fn from_user_input(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("true") {
            Some(Answer::True)
        } else if s.eq_ignore_ascii_case("false") {
            Some(Answer::False)
        } else {
            None
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::True
        } else {
            Answer::False
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: Answer,
}

impl Question {
    pub fn new(text: impl Into<String>, correct_answer: Answer) -> Self {
        Self {
            text: text.into(),
            correct_answer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> Answer {
        self.correct_answer
    }
}
