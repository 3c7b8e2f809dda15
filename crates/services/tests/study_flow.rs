use chrono::Duration;

use services::{QuizSessionView, StudyServices};
use study_core::model::{JournalDraft, QuizId, ReadingId, VerseId, VerseStatus};
use study_core::time::fixed_clock;

#[test]
fn seeded_dashboard_stats() {
    let services = StudyServices::seeded(fixed_clock()).unwrap();
    let stats = services.stats();

    assert_eq!(stats.streak, 15);
    assert_eq!(stats.chapters_read, 15);
    assert_eq!(stats.verses_memorized, 2);
    assert_eq!(stats.quiz_score_average, 100);
}

#[test]
fn study_actions_feed_the_dashboard() {
    let mut services = StudyServices::seeded(fixed_clock()).unwrap();

    services
        .reading_mut()
        .toggle(&ReadingId::new("reading-15"))
        .unwrap();
    services
        .memorization_mut()
        .set_status(&VerseId::new("v3"), VerseStatus::Mastered)
        .unwrap();

    let stats = services.stats();
    assert_eq!(stats.streak, 16);
    assert_eq!(stats.chapters_read, 16);
    assert_eq!(stats.verses_memorized, 3);
}

#[test]
fn finished_quiz_is_not_written_back() {
    let mut services = StudyServices::seeded(fixed_clock()).unwrap();
    let q1 = QuizId::new("q1");

    let quiz = services.quiz_mut();
    quiz.start(&q1).unwrap();
    quiz.submit_answer(1).unwrap();
    quiz.advance().unwrap();
    quiz.submit_answer(2).unwrap();
    quiz.advance().unwrap();

    let QuizSessionView::Completed(outcome) = services.quiz().view() else {
        panic!("expected completed quiz");
    };
    assert_eq!(outcome.percentage, 100);

    services.quiz_mut().reset();
    let bank = services.quiz_bank();
    let stored = bank.get(&q1).unwrap();
    assert!(!stored.is_completed());
    assert_eq!(stored.last_score(), None);
    assert_eq!(services.stats().quiz_score_average, 100);

    // Recording the outcome is an explicit, separate step.
    let recorded = outcome.apply_to(stored.clone()).unwrap();
    assert_eq!(recorded.last_score(), Some(100));
}

#[test]
fn journal_entries_use_the_clock_date() {
    let mut clock = fixed_clock();
    clock.advance(Duration::days(2));
    let mut services = StudyServices::seeded(clock).unwrap();

    let entry = services
        .journal_mut()
        .create(JournalDraft::new("Jean 15", "Demeurez en moi").with_tag("Prière"))
        .unwrap()
        .clone();
    assert_eq!(entry.date(), clock.today());

    let hits = services.journal().with_tag("prière");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id(), entry.id());
}

#[test]
fn reading_plan_is_anchored_on_today() {
    let services = StudyServices::seeded(fixed_clock()).unwrap();
    let next = services.reading().next_unread().unwrap();
    assert_eq!(next.day(), 16);
    assert_eq!(next.date(), fixed_clock().today());
}
