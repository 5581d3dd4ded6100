//! Domain Types
//!
//! Data model for the tutoring planner: the 12-week curriculum hierarchy,
//! vocabulary list, test scores, student profile, playback settings, the
//! pronunciation practice log, and the `AppState` root aggregate.
//!
//! All types serialize with camelCase field names; a persisted snapshot is
//! shape-identical to the in-memory state, so import is a structural replace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==================== Curriculum ====================

/// Completion state of a lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    Planned,
    InProgress,
    Completed,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// A single checkable activity inside a lesson section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    /// Free-text duration label, e.g. "5 min"
    pub duration: String,
    pub description: String,
    /// Independently toggleable; feeds the lesson progress percentage
    pub completed: bool,
}

/// A timed block of a lesson (warm-up, main content, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSection {
    pub id: String,
    pub title: String,
    /// Free-text duration label, e.g. "15-20 min"
    pub duration: String,
    pub activities: Vec<Activity>,
}

/// One weekday lesson, identified by the `(week_number, day_number)` pair.
///
/// The pair is the stable key used by all lesson mutations; `id` is only a
/// display handle carried along for the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub week_number: u32,
    /// 1-5 (Monday-Friday)
    pub day_number: u32,
    pub title: String,
    pub date: Option<String>,
    pub learning_goals: Vec<String>,
    pub grammar_focus: String,
    pub sections: Vec<LessonSection>,
    pub homework: String,
    pub status: LessonStatus,
    /// Free text; appended to by `add_lesson_note`, replaceable via patch
    pub notes: String,
    pub vocabulary_count: u32,
    /// 1-5 stars, 0 = unrated. The range is not enforced by the store.
    pub engagement_rating: u8,
    /// Kept consistent with `status == Completed` by `complete_lesson`
    pub completed: bool,
}

/// One curriculum week: a theme plus five weekday lessons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-12, unique, immutable after creation
    pub week_number: u32,
    pub theme: String,
    pub lessons: Vec<Lesson>,
}

// ==================== Vocabulary ====================

/// A vocabulary entry with Thai translation and practice tracking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyWord {
    pub id: String,
    pub english_word: String,
    pub thai_translation: String,
    /// Thai-script phonetic spelling, e.g. "แอป-เพิล"
    pub thai_pronunciation: String,
    /// Free-text tag, e.g. "greetings"
    pub category: String,
    pub example_sentence: Option<String>,
    pub image_url: Option<String>,
    /// 1-12
    pub week_learned: u32,
    /// Set once at creation
    pub date_added: DateTime<Utc>,
    pub mastered: bool,
    /// Incremented each time the word's pronunciation is played; never
    /// decremented or reset outside a full data reset
    pub practice_count: u32,
}

// ==================== Test scores ====================

/// A graded test. The four sub-scores have fixed maxima
/// (speaking 40, listening 30, vocabulary 20, grammar 10);
/// `overall_percentage` and `passed` are supplied by the caller,
/// the store never derives them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScore {
    pub id: String,
    pub week_number: u32,
    pub topic: String,
    pub date: String,
    /// out of 40
    pub speaking: u32,
    /// out of 30
    pub listening: u32,
    /// out of 20
    pub vocabulary: u32,
    /// out of 10
    pub grammar: u32,
    pub overall_percentage: f64,
    pub passed: bool,
    pub notes: String,
}

// ==================== Student profile ====================

/// Contact details for the student's parent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Backup activity suggestions keyed by the student's mood.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyLessonIdeas {
    pub tired: Vec<String>,
    pub energetic: Vec<String>,
    pub distracted: Vec<String>,
}

/// Singleton student profile. Exactly one instance exists per state tree;
/// there is no id-based lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub photo_url: Option<String>,
    pub learning_goals: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub parent_contact: ParentContact,
    pub notes: String,
    pub emergency_lesson_ideas: EmergencyLessonIdeas,
}

// ==================== TTS settings ====================

/// Singleton speech playback configuration, read by the playback
/// collaborator on every utterance. Never historized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsSettings {
    /// Engine voice name; empty selects the engine default
    pub voice: String,
    /// 0.5-2.0, 1.0 = normal
    pub speed: f32,
    pub pitch: f32,
    /// 0.0-1.0
    pub volume: f32,
    /// BCP-47 tag, e.g. "en-US"
    pub language: String,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            voice: String::new(),
            speed: 1.0,
            pitch: 1.0,
            volume: 1.0,
            language: "en-US".to_string(),
        }
    }
}

// ==================== Pronunciation practice ====================

/// Teacher-assigned quality of one pronunciation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeRating {
    Good,
    Okay,
    TryAgain,
}

impl PracticeRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Okay => "okay",
            Self::TryAgain => "try-again",
        }
    }
}

/// One entry in the append-only pronunciation practice log.
///
/// `word_id` is a reference, not ownership: the referenced word may have
/// been deleted since, and lookups must treat that as an expected absence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationPractice {
    pub id: String,
    pub word_id: String,
    pub date: DateTime<Utc>,
    pub rating: PracticeRating,
}

// ==================== Resources ====================

/// Kind of teaching resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Song,
    Game,
    Website,
    Activity,
    Printable,
    Pronunciation,
}

/// An external teaching resource (song, game, website, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub category: ResourceCategory,
    pub description: String,
    pub url: String,
    pub youtube_id: Option<String>,
    pub favorite: bool,
}

// ==================== Weekly report ====================

/// Parent-facing summary of one curriculum week, derived from state by
/// [`crate::stats::weekly_report`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week_number: u32,
    pub topics: Vec<String>,
    pub vocabulary_learned: Vec<VocabularyWord>,
    pub test_score: Option<TestScore>,
    /// Days completed out of 5
    pub attendance: u32,
    pub observations: String,
    pub homework_completion: String,
    pub pronunciation_notes: String,
    pub next_week_preview: String,
}

// ==================== Root aggregate ====================

/// The complete application state. One instance per process, owned by the
/// store; collaborators only ever see clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub weeks: Vec<Week>,
    pub vocabulary: Vec<VocabularyWord>,
    pub tests: Vec<TestScore>,
    pub student_profile: StudentProfile,
    pub tts_settings: TtsSettings,
    pub pronunciation_history: Vec<PronunciationPractice>,
    pub resources: Vec<Resource>,
    /// Consecutive-day usage counter
    pub streak_days: u32,
    /// Calendar date of the most recent session, no time component
    pub last_access_date: NaiveDate,
    pub dark_mode: bool,
}
