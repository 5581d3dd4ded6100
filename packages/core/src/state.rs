//! State Transitions
//!
//! Pure mutation operations on [`AppState`]. Every operation is a
//! synchronous transformation of the state in place; persistence is layered
//! on top by the store crate. Operations that look an entity up by key or id
//! report a miss as [`NotFound`] and leave the state untouched, so callers
//! can surface or ignore the condition as they see fit.
//!
//! Fully-formed records (with ids and timestamps already assigned) are
//! inserted here; id and timestamp generation happens in the store layer so
//! these transitions stay deterministic.

use chrono::NaiveDate;
use thiserror::Error;

use crate::patch::{
    LessonPatch, ProfilePatch, ResourcePatch, TestScorePatch, TtsSettingsPatch, VocabularyPatch,
};
use crate::streak;
use crate::types::{
    AppState, Lesson, LessonStatus, PronunciationPractice, Resource, TestScore, VocabularyWord,
    Week,
};

// ==================== Lookup miss ====================

/// A key or id lookup that found nothing. The state is unchanged whenever
/// this is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("no lesson for week {week} day {day}")]
    Lesson { week: u32, day: u32 },
    #[error("no activity {activity} in section {section}")]
    Activity { section: String, activity: String },
    #[error("no vocabulary word with id {0}")]
    Vocabulary(String),
    #[error("no test score with id {0}")]
    Test(String),
    #[error("no resource with id {0}")]
    Resource(String),
}

// ==================== Lookups ====================

impl AppState {
    /// Read-only lookup of a week by number.
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    /// Read-only lookup of a lesson by its `(week, day)` key.
    pub fn lesson(&self, week_number: u32, day_number: u32) -> Option<&Lesson> {
        self.week(week_number)
            .and_then(|w| w.lessons.iter().find(|l| l.day_number == day_number))
    }

    fn lesson_mut(&mut self, week_number: u32, day_number: u32) -> Result<&mut Lesson, NotFound> {
        self.weeks
            .iter_mut()
            .find(|w| w.week_number == week_number)
            .and_then(|w| w.lessons.iter_mut().find(|l| l.day_number == day_number))
            .ok_or(NotFound::Lesson {
                week: week_number,
                day: day_number,
            })
    }

    pub fn vocabulary_word(&self, id: &str) -> Option<&VocabularyWord> {
        self.vocabulary.iter().find(|w| w.id == id)
    }

    fn vocabulary_word_mut(&mut self, id: &str) -> Result<&mut VocabularyWord, NotFound> {
        self.vocabulary
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| NotFound::Vocabulary(id.to_string()))
    }

    pub fn test_score(&self, id: &str) -> Option<&TestScore> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }
}

// ==================== Curriculum transitions ====================

impl AppState {
    /// Merges the set fields of `patch` into the lesson at `(week, day)`.
    /// Unset fields keep their previous values.
    pub fn update_lesson(
        &mut self,
        week_number: u32,
        day_number: u32,
        patch: LessonPatch,
    ) -> Result<(), NotFound> {
        let lesson = self.lesson_mut(week_number, day_number)?;
        patch.apply(lesson);
        Ok(())
    }

    /// Marks a lesson completed, keeping `status` and the `completed` flag
    /// in sync. Idempotent.
    pub fn complete_lesson(&mut self, week_number: u32, day_number: u32) -> Result<(), NotFound> {
        let lesson = self.lesson_mut(week_number, day_number)?;
        lesson.status = LessonStatus::Completed;
        lesson.completed = true;
        Ok(())
    }

    /// Appends a note to the lesson's running notes, newline-separated.
    /// Replacing the notes wholesale goes through [`Self::update_lesson`].
    pub fn add_lesson_note(
        &mut self,
        week_number: u32,
        day_number: u32,
        note: &str,
    ) -> Result<(), NotFound> {
        let lesson = self.lesson_mut(week_number, day_number)?;
        lesson.notes.push('\n');
        lesson.notes.push_str(note);
        Ok(())
    }

    /// Sets the engagement star rating. The 1-5 range is the caller's
    /// responsibility; out-of-range values are stored as given.
    pub fn update_lesson_engagement(
        &mut self,
        week_number: u32,
        day_number: u32,
        rating: u8,
    ) -> Result<(), NotFound> {
        let lesson = self.lesson_mut(week_number, day_number)?;
        lesson.engagement_rating = rating;
        Ok(())
    }

    /// Flips one activity's `completed` flag, addressed by section and
    /// activity id within the lesson. No other activity is touched.
    pub fn toggle_activity(
        &mut self,
        week_number: u32,
        day_number: u32,
        section_id: &str,
        activity_id: &str,
    ) -> Result<(), NotFound> {
        let lesson = self.lesson_mut(week_number, day_number)?;
        let activity = lesson
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .and_then(|s| s.activities.iter_mut().find(|a| a.id == activity_id))
            .ok_or_else(|| NotFound::Activity {
                section: section_id.to_string(),
                activity: activity_id.to_string(),
            })?;
        activity.completed = !activity.completed;
        Ok(())
    }
}

// ==================== Vocabulary transitions ====================

impl AppState {
    /// Appends a fully-formed vocabulary record.
    pub fn insert_vocabulary(&mut self, word: VocabularyWord) {
        self.vocabulary.push(word);
    }

    pub fn update_vocabulary(&mut self, id: &str, patch: VocabularyPatch) -> Result<(), NotFound> {
        let word = self.vocabulary_word_mut(id)?;
        patch.apply(word);
        Ok(())
    }

    pub fn delete_vocabulary(&mut self, id: &str) -> Result<(), NotFound> {
        let before = self.vocabulary.len();
        self.vocabulary.retain(|w| w.id != id);
        if self.vocabulary.len() == before {
            return Err(NotFound::Vocabulary(id.to_string()));
        }
        Ok(())
    }

    pub fn toggle_mastered(&mut self, id: &str) -> Result<(), NotFound> {
        let word = self.vocabulary_word_mut(id)?;
        word.mastered = !word.mastered;
        Ok(())
    }

    /// Bumps the practice counter. Called when the word's pronunciation is
    /// actually played, not when the word is merely displayed.
    pub fn increment_practice_count(&mut self, id: &str) -> Result<(), NotFound> {
        let word = self.vocabulary_word_mut(id)?;
        word.practice_count += 1;
        Ok(())
    }
}

// ==================== Test score transitions ====================

impl AppState {
    pub fn insert_test(&mut self, test: TestScore) {
        self.tests.push(test);
    }

    pub fn update_test(&mut self, id: &str, patch: TestScorePatch) -> Result<(), NotFound> {
        let test = self
            .tests
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| NotFound::Test(id.to_string()))?;
        patch.apply(test);
        Ok(())
    }

    pub fn delete_test(&mut self, id: &str) -> Result<(), NotFound> {
        let before = self.tests.len();
        self.tests.retain(|t| t.id != id);
        if self.tests.len() == before {
            return Err(NotFound::Test(id.to_string()));
        }
        Ok(())
    }
}

// ==================== Profile & settings transitions ====================

impl AppState {
    /// Shallow-merges the patch into the profile singleton.
    pub fn update_student_profile(&mut self, patch: ProfilePatch) {
        patch.apply(&mut self.student_profile);
    }

    /// Shallow-merges the patch into the playback settings singleton.
    pub fn update_tts_settings(&mut self, patch: TtsSettingsPatch) {
        patch.apply(&mut self.tts_settings);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Advances the consecutive-day streak for a session starting `today`.
    /// Intended to run once per session start; same-day repeats are no-ops
    /// for the counter.
    pub fn update_streak(&mut self, today: NaiveDate) {
        let (streak_days, last_access_date) =
            streak::advance(self.streak_days, self.last_access_date, today);
        self.streak_days = streak_days;
        self.last_access_date = last_access_date;
    }
}

// ==================== Practice log transitions ====================

impl AppState {
    /// Appends to the pronunciation practice log. Prior records are never
    /// mutated or removed, and `word_id` is not checked against the
    /// vocabulary list.
    pub fn push_pronunciation_practice(&mut self, practice: PronunciationPractice) {
        self.pronunciation_history.push(practice);
    }
}

// ==================== Resource transitions ====================

impl AppState {
    pub fn insert_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn update_resource(&mut self, id: &str, patch: ResourcePatch) -> Result<(), NotFound> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| NotFound::Resource(id.to_string()))?;
        patch.apply(resource);
        Ok(())
    }

    pub fn delete_resource(&mut self, id: &str) -> Result<(), NotFound> {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        if self.resources.len() == before {
            return Err(NotFound::Resource(id.to_string()));
        }
        Ok(())
    }

    pub fn toggle_resource_favorite(&mut self, id: &str) -> Result<(), NotFound> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| NotFound::Resource(id.to_string()))?;
        resource.favorite = !resource.favorite;
        Ok(())
    }
}
