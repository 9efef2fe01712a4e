use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The answers collected so far for one calculator session.
///
/// Values are stored exactly as entered. A value that is empty or only
/// whitespace counts as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `question`, replacing any previous answer.
    pub fn set(
        &mut self,
        question: &str,
        value: impl Into<String>,
    ) {
        self.values.insert(question.to_string(), value.into());
    }

    /// Builder form of [`AnswerSet::set`].
    pub fn with(
        mut self,
        question: &str,
        value: impl Into<String>,
    ) -> Self {
        self.set(question, value);
        self
    }

    /// The answer for `question`, or `None` when it is missing or blank.
    pub fn get(
        &self,
        question: &str,
    ) -> Option<&str> {
        self.values
            .get(question)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn is_answered(
        &self,
        question: &str,
    ) -> bool {
        self.get(question).is_some()
    }

    pub fn remove(
        &mut self,
        question: &str,
    ) -> Option<String> {
        self.values.remove(question)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored `(question, value)` pairs in question-id order, blanks
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Splits a `question=value` assignment. Whitespace around both parts is
    /// trimmed; the value may itself contain `=`.
    pub fn parse_pair(assignment: &str) -> Option<(&str, &str)> {
        let (question, value) = assignment.split_once('=')?;
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        Some((question, value.trim()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_values_count_as_unanswered() {
        let answers = AnswerSet::new()
            .with("age", "")
            .with("income", "   ")
            .with("injurySeverity", "severe");

        assert!(!answers.is_answered("age"));
        assert!(!answers.is_answered("income"));
        assert!(answers.is_answered("injurySeverity"));
        assert!(!answers.is_answered("missing"));
    }

    #[test]
    fn set_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        answers.set("painLevel", "mild");
        answers.set("painLevel", "severe");

        assert_eq!(answers.get("painLevel"), Some("severe"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut answers = AnswerSet::new().with("a", "1").with("b", "2");

        answers.clear();

        assert!(answers.is_empty());
    }

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(AnswerSet::parse_pair("age = 45"), Some(("age", "45")));
        assert_eq!(AnswerSet::parse_pair("note=a=b"), Some(("note", "a=b")));
        assert_eq!(AnswerSet::parse_pair("=45"), None);
        assert_eq!(AnswerSet::parse_pair("age"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let answers: AnswerSet = [("age", "45"), ("income", "75000")].into_iter().collect();

        let pairs: Vec<_> = answers.iter().collect();

        assert_eq!(pairs, vec![("age", "45"), ("income", "75000")]);
    }
}
