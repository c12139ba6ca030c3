//! Property tests for scoring and completion cleanup.

use proptest::prelude::*;
use quizalarm_core::quiz::{correct_count, percentage, strip_code_fences, Answer};
use quizalarm_core::timer::format_mm_ss;

proptest! {
    #[test]
    fn percentage_stays_in_range(total in 1usize..500, score_seed in 0usize..500) {
        let score = score_seed % (total + 1);
        let pct = percentage(score, total);
        prop_assert!(pct <= 100);
        if score == total {
            prop_assert_eq!(pct, 100);
        }
        if score == 0 {
            prop_assert_eq!(pct, 0);
        }
    }

    #[test]
    fn percentage_is_monotonic(total in 1usize..200, score in 0usize..200) {
        let score = score % total;
        prop_assert!(percentage(score, total) <= percentage(score + 1, total));
    }

    #[test]
    fn correct_count_matches_flags(flags in proptest::collection::vec(any::<bool>(), 0..20)) {
        let answers: Vec<Answer> = flags
            .iter()
            .enumerate()
            .map(|(i, &is_correct)| Answer { question_index: i, user_answer: 0, is_correct })
            .collect();
        prop_assert_eq!(correct_count(&answers), flags.iter().filter(|f| **f).count());
    }

    #[test]
    fn fence_stripping_is_idempotent(body in "[a-z0-9\\[\\]{}\", :]{0,40}") {
        let fenced = format!("```json\n{body}\n```");
        let once = strip_code_fences(&fenced);
        prop_assert_eq!(strip_code_fences(once), once);
        prop_assert_eq!(once, body.trim());
    }

    #[test]
    fn countdown_display_is_zero_padded(ms in 0u64..3_600_000) {
        let shown = format_mm_ss(ms);
        prop_assert_eq!(shown.len(), 5);
        prop_assert_eq!(&shown[2..3], ":");
    }
}
