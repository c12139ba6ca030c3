use super::fallback::{fallback_questions, fallback_suggestions};
use super::generator::{build_question_prompt, parse_questions};
use super::question::{Answer, Question};
use super::suggestions::{build_suggestion_prompt, parse_suggestions};
use crate::error::GenerationError;
use crate::llm::TextGenerator;

/// Questions together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub fallback: bool,
}

/// Question and suggestion generation over a [`TextGenerator`].
///
/// The infallible entry points never surface errors: any failure is logged
/// and replaced by static content. One attempt per call, no retries.
pub struct QuizPipeline<G> {
    generator: G,
}

impl<G: TextGenerator> QuizPipeline<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn try_generate_questions<S: AsRef<str>>(
        &self,
        topics: &[S],
    ) -> Result<Vec<Question>, GenerationError> {
        let prompt = build_question_prompt(topics);
        let text = self.generator.generate(&prompt).await?;
        parse_questions(&text).inspect_err(|_| {
            tracing::debug!(received = %text, "unusable question response");
        })
    }

    pub async fn question_set<S: AsRef<str>>(&self, topics: &[S]) -> QuestionSet {
        match self.try_generate_questions(topics).await {
            Ok(questions) => QuestionSet {
                questions,
                fallback: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "question generation failed, using fallback set");
                QuestionSet {
                    questions: fallback_questions(),
                    fallback: true,
                }
            }
        }
    }

    /// Always exactly three questions.
    pub async fn generate_questions<S: AsRef<str>>(&self, topics: &[S]) -> Vec<Question> {
        self.question_set(topics).await.questions
    }

    pub async fn try_generate_suggestions<S: AsRef<str>>(
        &self,
        topics: &[S],
        answers: &[Answer],
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = build_suggestion_prompt(topics, answers);
        let text = self.generator.generate(&prompt).await?;
        parse_suggestions(&text).inspect_err(|_| {
            tracing::debug!(received = %text, "unusable suggestion response");
        })
    }

    /// Always exactly three suggestions.
    pub async fn generate_suggestions<S: AsRef<str>>(
        &self,
        topics: &[S],
        answers: &[Answer],
    ) -> Vec<String> {
        match self.try_generate_suggestions(topics, answers).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, "suggestion generation failed, using fallback");
                fallback_suggestions()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::testing::ScriptedGenerator;
    use crate::quiz::FALLBACK_SUGGESTIONS;

    const QUESTIONS: &str = r#"```json
[
  {"question": "Which traversal uses a queue?", "options": ["DFS", "BFS", "Inorder", "Postorder"], "correctAnswer": 1},
  {"question": "Height of a balanced BST?", "options": ["O(1)", "O(log n)", "O(n)", "O(n log n)"], "correctAnswer": 1},
  {"question": "Edges in a tree with n nodes?", "options": ["n", "n-1", "n+1", "2n"], "correctAnswer": 1}
]
```"#;

    #[tokio::test]
    async fn uses_generated_questions_when_valid() {
        let pipeline = QuizPipeline::new(ScriptedGenerator::new([Some(QUESTIONS)]));
        let set = pipeline.question_set(&["Trees & Graphs"]).await;
        assert!(!set.fallback);
        assert_eq!(set.questions[0].question(), "Which traversal uses a queue?");
        let prompts = pipeline.generator().prompts();
        assert!(prompts[0].contains("Trees & Graphs"));
    }

    #[tokio::test]
    async fn falls_back_on_service_failure() {
        let pipeline = QuizPipeline::new(ScriptedGenerator::new([None]));
        let questions = pipeline.generate_questions(&["Recursion"]).await;
        assert_eq!(questions, fallback_questions());
    }

    #[tokio::test]
    async fn falls_back_on_malformed_response() {
        let pipeline = QuizPipeline::new(ScriptedGenerator::new([Some("[1, 2, 3]")]));
        let set = pipeline.question_set::<&str>(&[]).await;
        assert!(set.fallback);
        assert_eq!(set.questions.len(), 3);
    }

    #[tokio::test]
    async fn suggestions_fall_back_verbatim() {
        let pipeline = QuizPipeline::new(ScriptedGenerator::new([None, Some("{}")]));
        for _ in 0..2 {
            let suggestions = pipeline.generate_suggestions(&["Recursion"], &[]).await;
            assert_eq!(suggestions, FALLBACK_SUGGESTIONS.to_vec());
        }
    }

    #[tokio::test]
    async fn suggestions_pass_through_when_valid() {
        let pipeline = QuizPipeline::new(ScriptedGenerator::new([Some(
            r#"["Solve LeetCode 104", "Read about AVL trees", "Watch a BFS visualisation"]"#,
        )]));
        let answers = [Answer {
            question_index: 0,
            user_answer: 1,
            is_correct: true,
        }];
        let suggestions = pipeline
            .generate_suggestions(&["Trees & Graphs"], &answers)
            .await;
        assert_eq!(suggestions[0], "Solve LeetCode 104");
        assert!(pipeline.generator().prompts()[0].contains("Score: 1 correct out of 1"));
    }
}
