//! Derived Statistics
//!
//! Read-only computations over the state tree: progress percentages,
//! vocabulary mastery counts, test averages, practice tallies, list
//! filtering, and the weekly parent report. All ratios are guarded; an
//! empty denominator yields 0 (or `None` where "not applicable" is the
//! meaningful answer) rather than a NaN.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::{
    AppState, Lesson, PracticeRating, PronunciationPractice, TestScore, VocabularyWord, Week,
    WeeklyReport,
};

// ==================== Curriculum progress ====================

/// Lesson completion across the whole curriculum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumStats {
    pub total_lessons: u32,
    pub completed_lessons: u32,
    /// 0-100
    pub progress_percentage: f64,
}

/// Percentage of a lesson's activities that are checked off, across all
/// sections. A lesson with no activities reports 0.
pub fn lesson_progress(lesson: &Lesson) -> f64 {
    let total: usize = lesson.sections.iter().map(|s| s.activities.len()).sum();
    if total == 0 {
        return 0.0;
    }
    let completed: usize = lesson
        .sections
        .iter()
        .map(|s| s.activities.iter().filter(|a| a.completed).count())
        .sum();
    completed as f64 / total as f64 * 100.0
}

/// Percentage of a week's lessons that are completed.
pub fn week_progress(week: &Week) -> f64 {
    if week.lessons.is_empty() {
        return 0.0;
    }
    let completed = week.lessons.iter().filter(|l| l.completed).count();
    completed as f64 / week.lessons.len() as f64 * 100.0
}

/// Completion counts and percentage over the whole lesson plan.
pub fn curriculum_stats(weeks: &[Week]) -> CurriculumStats {
    let total_lessons: u32 = weeks.iter().map(|w| w.lessons.len() as u32).sum();
    let completed_lessons: u32 = weeks
        .iter()
        .map(|w| w.lessons.iter().filter(|l| l.completed).count() as u32)
        .sum();

    let progress_percentage = if total_lessons == 0 {
        0.0
    } else {
        completed_lessons as f64 / total_lessons as f64 * 100.0
    };

    CurriculumStats {
        total_lessons,
        completed_lessons,
        progress_percentage,
    }
}

/// The lesson scheduled for `weekday` of week `week_number`. Weekends have
/// no lesson.
pub fn todays_lesson(weeks: &[Week], week_number: u32, weekday: Weekday) -> Option<&Lesson> {
    let day_number = match weekday {
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat | Weekday::Sun => return None,
    };
    weeks
        .iter()
        .find(|w| w.week_number == week_number)
        .and_then(|w| w.lessons.iter().find(|l| l.day_number == day_number))
}

// ==================== Vocabulary ====================

/// Mastery breakdown of the vocabulary list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total: u32,
    pub mastered: u32,
    pub learning: u32,
}

impl VocabularyStats {
    /// 0-100; 0 for an empty list.
    pub fn mastered_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.mastered as f64 / self.total as f64 * 100.0
    }
}

pub fn vocabulary_stats(vocabulary: &[VocabularyWord]) -> VocabularyStats {
    let mastered = vocabulary.iter().filter(|w| w.mastered).count() as u32;
    VocabularyStats {
        total: vocabulary.len() as u32,
        mastered,
        learning: vocabulary.len() as u32 - mastered,
    }
}

/// Distinct categories in first-seen order.
pub fn vocabulary_categories(vocabulary: &[VocabularyWord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for word in vocabulary {
        if !categories.iter().any(|c| c == &word.category) {
            categories.push(word.category.clone());
        }
    }
    categories
}

/// Mastery facet for [`filter_vocabulary`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MasteryFilter {
    #[default]
    All,
    Mastered,
    Learning,
}

/// List filtering as the vocabulary screen applies it: the search query
/// matches the English word case-insensitively and the Thai fields by
/// substring; `category` narrows to one tag; `mastery` narrows by flag.
/// An empty query matches everything.
pub fn filter_vocabulary<'a>(
    vocabulary: &'a [VocabularyWord],
    query: &str,
    category: Option<&str>,
    mastery: MasteryFilter,
) -> Vec<&'a VocabularyWord> {
    let query_lower = query.to_lowercase();

    vocabulary
        .iter()
        .filter(|word| {
            let matches_search = word.english_word.to_lowercase().contains(&query_lower)
                || word.thai_translation.contains(query)
                || word.thai_pronunciation.contains(query);

            let matches_category = category.map_or(true, |c| word.category == c);

            let matches_mastery = match mastery {
                MasteryFilter::All => true,
                MasteryFilter::Mastered => word.mastered,
                MasteryFilter::Learning => !word.mastered,
            };

            matches_search && matches_category && matches_mastery
        })
        .collect()
}

// ==================== Tests ====================

/// Mean of the caller-supplied overall percentages, `None` when no tests
/// have been recorded ("N/A" on the dashboard).
pub fn average_test_score(tests: &[TestScore]) -> Option<f64> {
    if tests.is_empty() {
        return None;
    }
    let sum: f64 = tests.iter().map(|t| t.overall_percentage).sum();
    Some(sum / tests.len() as f64)
}

// ==================== Pronunciation practice ====================

/// Rating counts over a slice of the practice log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeTally {
    pub good: u32,
    pub okay: u32,
    pub try_again: u32,
}

fn tally_records<'a>(records: impl IntoIterator<Item = &'a PronunciationPractice>) -> PracticeTally {
    let mut tally = PracticeTally::default();
    for record in records {
        match record.rating {
            PracticeRating::Good => tally.good += 1,
            PracticeRating::Okay => tally.okay += 1,
            PracticeRating::TryAgain => tally.try_again += 1,
        }
    }
    tally
}

pub fn practice_tally(history: &[PronunciationPractice]) -> PracticeTally {
    tally_records(history)
}

/// Tally restricted to one word's attempts.
pub fn practice_tally_for_word(
    history: &[PronunciationPractice],
    word_id: &str,
) -> PracticeTally {
    tally_records(history.iter().filter(|p| p.word_id == word_id))
}

// ==================== Weekly report ====================

/// Builds the parent report for one week: grammar topics covered,
/// vocabulary introduced that week, the week's test score if any, and
/// attendance as completed lessons out of five. Narrative fields collect
/// the teacher's lesson notes; `next_week_preview` carries the following
/// week's theme. Returns `None` for an unknown week.
pub fn weekly_report(state: &AppState, week_number: u32) -> Option<WeeklyReport> {
    let week = state.week(week_number)?;

    let mut topics: Vec<String> = Vec::new();
    for lesson in &week.lessons {
        if !lesson.grammar_focus.is_empty() && !topics.iter().any(|t| t == &lesson.grammar_focus) {
            topics.push(lesson.grammar_focus.clone());
        }
    }

    let vocabulary_learned: Vec<VocabularyWord> = state
        .vocabulary
        .iter()
        .filter(|w| w.week_learned == week_number)
        .cloned()
        .collect();

    let test_score = state
        .tests
        .iter()
        .find(|t| t.week_number == week_number)
        .cloned();

    let attendance = week.lessons.iter().filter(|l| l.completed).count() as u32;

    let observations = week
        .lessons
        .iter()
        .map(|l| l.notes.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let next_week_preview = state
        .week(week_number + 1)
        .map(|w| w.theme.clone())
        .unwrap_or_default();

    Some(WeeklyReport {
        week_number,
        topics,
        vocabulary_learned,
        test_score,
        attendance,
        observations,
        homework_completion: String::new(),
        pronunciation_notes: String::new(),
        next_week_preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_state, sample_word};
    use chrono::Utc;

    #[test]
    fn test_lesson_progress_one_of_four_is_25_percent() {
        let mut state = sample_state();
        let section_id = state.lesson(1, 1).unwrap().sections[0].id.clone();
        let activity_id = state.lesson(1, 1).unwrap().sections[0].activities[0]
            .id
            .clone();
        state
            .toggle_activity(1, 1, &section_id, &activity_id)
            .unwrap();

        assert_eq!(lesson_progress(state.lesson(1, 1).unwrap()), 25.0);
    }

    #[test]
    fn test_lesson_progress_guards_empty_lesson() {
        let mut state = sample_state();
        state
            .update_lesson(
                1,
                1,
                crate::patch::LessonPatch {
                    sections: Some(vec![]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(lesson_progress(state.lesson(1, 1).unwrap()), 0.0);
    }

    #[test]
    fn test_week_and_curriculum_progress() {
        let mut state = sample_state();
        state.complete_lesson(1, 1).unwrap();
        state.complete_lesson(1, 2).unwrap();

        let week = state.week(1).unwrap();
        assert_eq!(week_progress(week), 40.0);

        let stats = curriculum_stats(&state.weeks);
        assert_eq!(stats.total_lessons, 10);
        assert_eq!(stats.completed_lessons, 2);
        assert_eq!(stats.progress_percentage, 20.0);
    }

    #[test]
    fn test_curriculum_stats_empty_plan() {
        let stats = curriculum_stats(&[]);
        assert_eq!(stats.total_lessons, 0);
        assert_eq!(stats.progress_percentage, 0.0);
    }

    #[test]
    fn test_todays_lesson_maps_weekdays_and_skips_weekends() {
        let state = sample_state();
        let lesson = todays_lesson(&state.weeks, 1, Weekday::Wed).unwrap();
        assert_eq!(lesson.day_number, 3);

        assert!(todays_lesson(&state.weeks, 1, Weekday::Sat).is_none());
        assert!(todays_lesson(&state.weeks, 99, Weekday::Mon).is_none());
    }

    #[test]
    fn test_vocabulary_stats_and_empty_guard() {
        let mut state = sample_state();
        let id = state.vocabulary[0].id.clone();
        state.toggle_mastered(&id).unwrap();

        let stats = vocabulary_stats(&state.vocabulary);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.mastered, 1);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.mastered_percentage(), 50.0);

        let empty = vocabulary_stats(&[]);
        assert_eq!(empty.mastered_percentage(), 0.0);
    }

    #[test]
    fn test_vocabulary_categories_distinct_in_order() {
        let mut words = vec![sample_word("1", "hello"), sample_word("2", "goodbye")];
        words[1].category = "basic".to_string();
        words.push(sample_word("3", "thanks"));

        assert_eq!(
            vocabulary_categories(&words),
            vec!["greetings".to_string(), "basic".to_string()]
        );
    }

    #[test]
    fn test_filter_vocabulary_by_query_category_and_mastery() {
        let mut state = sample_state();
        state.vocabulary[1].category = "animals".to_string();
        state.vocabulary[1].mastered = true;

        let hits = filter_vocabulary(&state.vocabulary, "HELLO", None, MasteryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].english_word, "hello");

        let hits = filter_vocabulary(&state.vocabulary, "", Some("animals"), MasteryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].english_word, "cat");

        let hits = filter_vocabulary(&state.vocabulary, "", None, MasteryFilter::Learning);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].english_word, "hello");

        let hits = filter_vocabulary(&state.vocabulary, "สวัสดี", None, MasteryFilter::All);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_average_test_score_none_without_tests() {
        assert_eq!(average_test_score(&[]), None);

        let mut tests = vec![];
        for (id, pct) in [("t-1", 70.0), ("t-2", 90.0)] {
            tests.push(crate::types::TestScore {
                id: id.to_string(),
                week_number: 1,
                topic: "Greetings".to_string(),
                date: "2024-01-05".to_string(),
                speaking: 30,
                listening: 20,
                vocabulary: 15,
                grammar: 8,
                overall_percentage: pct,
                passed: true,
                notes: String::new(),
            });
        }
        assert_eq!(average_test_score(&tests), Some(80.0));
    }

    #[test]
    fn test_practice_tally() {
        let history = vec![
            PronunciationPractice {
                id: "p-1".to_string(),
                word_id: "v-1".to_string(),
                date: Utc::now(),
                rating: PracticeRating::Good,
            },
            PronunciationPractice {
                id: "p-2".to_string(),
                word_id: "v-1".to_string(),
                date: Utc::now(),
                rating: PracticeRating::TryAgain,
            },
            PronunciationPractice {
                id: "p-3".to_string(),
                word_id: "v-2".to_string(),
                date: Utc::now(),
                rating: PracticeRating::Good,
            },
        ];

        let tally = practice_tally(&history);
        assert_eq!(tally.good, 2);
        assert_eq!(tally.okay, 0);
        assert_eq!(tally.try_again, 1);

        let for_word = practice_tally_for_word(&history, "v-1");
        assert_eq!(for_word.good, 1);
        assert_eq!(for_word.try_again, 1);
    }

    #[test]
    fn test_weekly_report_attendance_and_contents() {
        let mut state = sample_state();
        state.complete_lesson(1, 1).unwrap();
        state.complete_lesson(1, 3).unwrap();
        state.add_lesson_note(1, 1, "Confident with greetings").unwrap();
        state.insert_test(crate::types::TestScore {
            id: "t-1".to_string(),
            week_number: 1,
            topic: "Greetings".to_string(),
            date: "2024-01-05".to_string(),
            speaking: 35,
            listening: 25,
            vocabulary: 18,
            grammar: 9,
            overall_percentage: 87.0,
            passed: true,
            notes: String::new(),
        });

        let report = weekly_report(&state, 1).unwrap();
        assert_eq!(report.week_number, 1);
        assert_eq!(report.attendance, 2);
        assert_eq!(report.vocabulary_learned.len(), 2);
        assert_eq!(report.test_score.as_ref().unwrap().id, "t-1");
        assert_eq!(report.topics, vec!["Present simple".to_string()]);
        assert_eq!(report.observations, "Confident with greetings");
        assert_eq!(report.next_week_preview, "Week 2 Theme");

        assert!(weekly_report(&state, 99).is_none());
    }
}
