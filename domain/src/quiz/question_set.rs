//! Question set entity and shuffler.

use crate::core::question::Question;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::Serialize;

/// An ordered sequence of questions
///
/// Order determines presentation order. Duplicate prompts or answers are
/// allowed. An empty set is a valid value here; rejecting empty sources is
/// the loader's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Shuffle in place using the thread-local RNG.
    ///
    /// Two calls on the same input may produce different orders.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle in place with a deterministic RNG seeded from `seed`.
    ///
    /// The same seed always yields the same permutation of the same input.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut StdRng::seed_from_u64(seed));
    }

    /// Uniform in-place permutation (Fisher-Yates) driven by `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for QuestionSet {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample(n: usize) -> QuestionSet {
        (1..=n)
            .map(|i| Question::new(format!("Question {}", i), &format!("Answer {}", i)))
            .collect()
    }

    fn multiset(set: &QuestionSet) -> HashMap<Question, usize> {
        let mut counts = HashMap::new();
        for q in set {
            *counts.entry(q.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_shuffle_preserves_length_and_elements() {
        let mut set = sample(10);
        set.questions.push(Question::new("Question 1", "answer 1"));
        let before = multiset(&set);

        set.shuffle();

        assert_eq!(set.len(), 11);
        assert_eq!(multiset(&set), before);
    }

    #[test]
    fn test_shuffle_does_not_touch_fields() {
        let mut set = QuestionSet::new(vec![
            Question::new("2+2?", "4"),
            Question::new("capital of France?", "Paris"),
        ]);
        set.shuffle_seeded(7);

        for q in &set {
            match q.prompt() {
                "2+2?" => assert_eq!(q.answer(), "4"),
                "capital of France?" => assert_eq!(q.answer(), "paris"),
                other => panic!("unexpected prompt {:?}", other),
            }
        }
    }

    #[test]
    fn test_repeated_shuffles_change_order() {
        let original = sample(5);
        let changed = (0..100).any(|_| {
            let mut set = original.clone();
            set.shuffle();
            set != original
        });
        assert!(changed, "100 shuffles all reproduced the original order");
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let mut a = sample(8);
        let mut b = sample(8);
        a.shuffle_seeded(42);
        b.shuffle_seeded(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // 3 elements -> 6 permutations, ~1000 hits each over 6000 seeded runs
        let original = sample(3);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..6000 {
            let mut set = original.clone();
            set.shuffle_with(&mut rng);
            let order = set.iter().map(|q| q.prompt().to_string()).collect();
            *counts.entry(order).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, count) in &counts {
            assert!(
                (850..=1150).contains(count),
                "permutation {:?} seen {} times",
                order,
                count
            );
        }
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty = QuestionSet::default();
        empty.shuffle();
        assert!(empty.is_empty());

        let mut single = sample(1);
        single.shuffle();
        assert_eq!(single, sample(1));
    }
}
