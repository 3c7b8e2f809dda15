//! Static sample data the application starts from.

use chrono::{Duration, NaiveDate};

use crate::bank::QuizBank;
use crate::error::Error;
use crate::model::{
    JournalDraft, JournalEntry, JournalEntryId, QuestionId, Quiz, QuizError, QuizId,
    QuizQuestion, ReadingId, ReadingPlanError, ReadingPlanItem, Verse, VerseError, VerseId,
    VerseStatus,
};

/// Number of days in the sample reading plan.
pub const READING_PLAN_DAYS: u32 = 60;
/// Days already read when the sample plan starts.
pub const READING_PLAN_DAYS_DONE: u32 = 15;

const PLAN_BOOKS: [&str; 7] = [
    "Genèse",
    "Exode",
    "Psaumes",
    "Proverbes",
    "Matthieu",
    "Jean",
    "Romains",
];

fn question(
    id: &str,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
) -> Result<QuizQuestion, QuizError> {
    QuizQuestion::new(
        QuestionId::new(id),
        prompt,
        options.iter().map(|o| (*o).to_owned()).collect(),
        correct,
    )
}

/// The two sample quizzes, in display order.
///
/// # Errors
///
/// Returns `QuizError` if the sample data fails validation.
pub fn sample_quizzes() -> Result<Vec<Quiz>, QuizError> {
    let gospels = Quiz::new(
        QuizId::new("q1"),
        "Les Évangiles",
        vec![
            question(
                "qq1",
                "Combien y a-t-il d'évangiles dans le Nouveau Testament ?",
                ["3", "4", "5", "12"],
                1,
            )?,
            question(
                "qq2",
                "Quel disciple a marché sur l'eau avec Jésus ?",
                ["Jean", "Judas", "Pierre", "Jacques"],
                2,
            )?,
        ],
    )?;

    let old_testament = Quiz::new(
        QuizId::new("q2"),
        "L'Ancien Testament",
        vec![question(
            "qt1",
            "Qui a construit l'arche ?",
            ["Moïse", "Noé", "Abraham", "David"],
            1,
        )?],
    )?
    .with_result(100)?;

    Ok(vec![gospels, old_testament])
}

/// # Errors
///
/// Returns `QuizError` if the sample data fails validation.
pub fn sample_quiz_bank() -> Result<QuizBank, QuizError> {
    QuizBank::new(sample_quizzes()?)
}

/// # Errors
///
/// Returns `VerseError` if the sample data fails validation.
pub fn sample_verses() -> Result<Vec<Verse>, VerseError> {
    let rows = [
        (
            "v1",
            "Jean 3:16",
            "Car Dieu a tant aimé le monde qu'il a donné son Fils unique...",
            "Amour",
            VerseStatus::Mastered,
        ),
        (
            "v2",
            "Philippiens 4:13",
            "Je puis tout par celui qui me fortifie.",
            "Force",
            VerseStatus::Mastered,
        ),
        (
            "v3",
            "Psaumes 23:1",
            "L'Éternel est mon berger: je ne manquerai de rien.",
            "Confiance",
            VerseStatus::Learning,
        ),
        (
            "v4",
            "Romains 8:28",
            "Nous savons, du reste, que toutes choses concourent au bien...",
            "Espérance",
            VerseStatus::Learning,
        ),
        (
            "v5",
            "Proverbes 3:5",
            "Confie-toi en l'Éternel de tout ton cœur...",
            "Sagesse",
            VerseStatus::New,
        ),
        (
            "v6",
            "Ésaïe 41:10",
            "Ne crains rien, car je suis avec toi...",
            "Courage",
            VerseStatus::New,
        ),
    ];

    rows.into_iter()
        .map(|(id, reference, text, topic, status)| {
            Verse::new(VerseId::new(id), reference, text, topic, status)
        })
        .collect()
}

/// Sample journal entries, in the order the journal first lists them.
///
/// # Errors
///
/// Returns `Error::Journal` if the sample data fails validation.
pub fn sample_journal_entries() -> Result<Vec<JournalEntry>, Error> {
    let genesis = JournalDraft::new(
        "Réflexion sur la Genèse",
        "La création montre la puissance infinie de Dieu. Je suis frappé par l'ordre dans le chaos.",
    )
    .with_tag("Création")
    .with_tag("Puissance")
    .validate(JournalEntryId::new("j1"), sample_date(2023, 10, 24)?)?;

    let prayer = JournalDraft::new(
        "Prière pour la famille",
        "Seigneur, garde ma famille unie et en bonne santé. Donne-nous la sagesse.",
    )
    .with_tag("Prière")
    .with_tag("Famille")
    .validate(JournalEntryId::new("j2"), sample_date(2023, 10, 25)?)?;

    Ok(vec![genesis, prayer])
}

/// The 60-day plan, with the first 15 days read and day 16 falling on `today`.
///
/// # Errors
///
/// Returns `ReadingPlanError` if the sample data fails validation.
pub fn sample_reading_plan(today: NaiveDate) -> Result<Vec<ReadingPlanItem>, ReadingPlanError> {
    (0..READING_PLAN_DAYS)
        .map(|i| {
            let book = PLAN_BOOKS[i as usize % PLAN_BOOKS.len()];
            let chapter = (i % 28) + 1;
            let offset = i64::from(i) - i64::from(READING_PLAN_DAYS_DONE);
            ReadingPlanItem::new(
                ReadingId::new(format!("reading-{i}")),
                i + 1,
                format!("{book} {chapter}"),
                i < READING_PLAN_DAYS_DONE,
                today + Duration::days(offset),
            )
        })
        .collect()
}

fn sample_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, Error> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}
