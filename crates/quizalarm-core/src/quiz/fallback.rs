//! Static content served whenever generation fails.

use super::question::Question;

pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Practice more questions on these topics",
    "Review the fundamental concepts",
    "Try solving similar problems on LeetCode",
];

pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Three time-complexity questions.
pub fn fallback_questions() -> Vec<Question> {
    vec![
        Question {
            question: "What is the time complexity of accessing an element in an array by index?"
                .into(),
            options: ["O(1)", "O(n)", "O(log n)", "O(n^2)"].map(String::from),
            correct_answer: 0,
        },
        Question {
            question: "Which operation in a singly linked list has O(1) time complexity?".into(),
            options: [
                "Insertion at beginning",
                "Insertion at end",
                "Finding middle element",
                "Reversing the list",
            ]
            .map(String::from),
            correct_answer: 0,
        },
        Question {
            question: "What is the space complexity of a recursive binary search?".into(),
            options: ["O(1)", "O(log n)", "O(n)", "O(n^2)"].map(String::from),
            correct_answer: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_questions_are_well_formed() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.correct_answer() <= 3));
        assert_eq!(questions[2].correct_answer(), 1);
    }

    #[test]
    fn fallback_suggestions_in_order() {
        assert_eq!(
            fallback_suggestions(),
            vec![
                "Practice more questions on these topics",
                "Review the fundamental concepts",
                "Try solving similar problems on LeetCode",
            ]
        );
    }
}
