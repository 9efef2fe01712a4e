use serde::{Deserialize, Serialize};

/// One selectable answer of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub key: String,
    pub label: String,
}

impl AnswerOption {
    pub fn new(
        key: &str,
        label: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// A finite, ordered set of answer keys.
    Choice(Vec<AnswerOption>),
    /// A free-text whole-number field (dollars, years, counts).
    Number { placeholder: String },
}

/// A single input of a calculator form.
///
/// Questions are created when a calculator is defined and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    /// Whether the step holding this question may be left with it blank.
    pub required: bool,
}

impl Question {
    /// A required choice question. `options` are `(key, label)` pairs in
    /// display order.
    pub fn choice(
        id: &str,
        label: &str,
        options: &[(&str, &str)],
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: QuestionKind::Choice(
                options
                    .iter()
                    .map(|(key, label)| AnswerOption::new(key, label))
                    .collect(),
            ),
            required: true,
        }
    }

    /// A required free-text number question.
    pub fn number(
        id: &str,
        label: &str,
        placeholder: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: QuestionKind::Number {
                placeholder: placeholder.to_string(),
            },
            required: true,
        }
    }

    /// Marks the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Answer options for choice questions; empty for number questions.
    pub fn options(&self) -> &[AnswerOption] {
        match &self.kind {
            QuestionKind::Choice(options) => options,
            QuestionKind::Number { .. } => &[],
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::Choice(_))
    }

    /// Display label for an answer key, falling back to the key itself.
    pub fn label_for<'a>(
        &'a self,
        key: &'a str,
    ) -> &'a str {
        self.options()
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.label.as_str())
            .unwrap_or(key)
    }
}
