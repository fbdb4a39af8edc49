use hanzi_core::time::fixed_clock;
use services::Clock;
use services::session::{CORRECT_COLOR, NEUTRAL_COLOR, WRONG_COLOR};

use super::test_harness::{chapters, setup_quiz_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_card() {
    let harness = setup_quiz_harness(&chapters(&[("狗", "dog,puppy")]), fixed_clock());

    let html = harness.render();
    assert!(html.contains("狗"), "missing glyph in {html}");
    assert!(html.contains(NEUTRAL_COLOR), "missing neutral color in {html}");
    assert!(html.contains("Card 1 / 1"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Stop"), "missing stop button in {html}");
    assert!(!html.contains("Restart"), "restart shown too early in {html}");
    assert!(harness.snapshot().display.unwrap().input_enabled);
}

#[tokio::test(flavor = "current_thread")]
async fn correct_answer_turns_glyph_green_and_locks_input() {
    let mut harness = setup_quiz_harness(&chapters(&[("狗", "dog,puppy")]), fixed_clock());

    harness.type_answer("  Dog ");
    harness.dispatch(QuizIntent::Submit);

    let html = harness.render();
    assert!(html.contains(CORRECT_COLOR), "missing green glyph in {html}");
    assert!(html.contains("✅ Correct! (dog, puppy)"), "missing feedback in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(!harness.snapshot().display.unwrap().input_enabled);
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_lists_every_meaning() {
    let mut harness = setup_quiz_harness(&chapters(&[("狗", "dog,puppy")]), fixed_clock());

    harness.type_answer("cat");
    harness.dispatch(QuizIntent::Submit);

    let html = harness.render();
    assert!(html.contains(WRONG_COLOR), "missing red glyph in {html}");
    assert!(html.contains("❌ Wrong. Correct: dog, puppy"), "missing feedback in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_submit_is_scored_once() {
    let mut harness = setup_quiz_harness(&chapters(&[("狗", "dog")]), fixed_clock());

    harness.type_answer("dog");
    harness.dispatch(QuizIntent::Submit);
    harness.dispatch(QuizIntent::Submit);

    assert_eq!(harness.snapshot().progress.score, 1);
}

#[tokio::test(flavor = "current_thread")]
async fn stop_shows_result_and_restart_starts_over() {
    let mut harness = setup_quiz_harness(
        &chapters(&[("狗", "dog"), ("猫", "cat")]),
        fixed_clock(),
    );

    let glyph = harness.snapshot().display.unwrap().glyph;
    let answer = if glyph == "狗" { "dog" } else { "cat" };
    harness.type_answer(answer);
    harness.dispatch(QuizIntent::Submit);
    harness.dispatch(QuizIntent::Stop);

    let html = harness.render();
    assert!(
        html.contains("Finished! Your score: 1/2 (50%)"),
        "missing result in {html}"
    );
    assert!(html.contains("Restart"), "missing restart in {html}");
    assert!(!html.contains("quiz-answer"), "input still shown in {html}");

    harness.dispatch(QuizIntent::Restart);

    let html = harness.render();
    assert!(html.contains("Card 1 / 2"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Finished!"), "result still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_moves_on_after_timeout() {
    let mut harness = setup_quiz_harness(
        &chapters(&[("狗", "dog"), ("猫", "cat")]),
        Clock::default_clock(),
    );

    harness.type_answer("bird");
    harness.dispatch(QuizIntent::Submit);
    assert_eq!(harness.snapshot().progress.position, 0);

    for _ in 0..100 {
        harness.drive_async().await;
        if harness.snapshot().progress.position == 1 {
            break;
        }
    }

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.progress.position, 1);
    let display = snapshot.display.unwrap();
    assert!(display.input_enabled);
    assert!(display.feedback.is_empty());
    let html = harness.render();
    assert!(html.contains("Card 2 / 2"), "missing progress in {html}");
}
