//! # jiaoan-core - Tutoring planner domain core
//!
//! Pure-Rust data model and state logic for the English tutoring planner:
//!
//! - **Curriculum state** - 12-week lesson plan with sections and activities
//! - **Vocabulary tracking** - Thai-English word list with mastery and
//!   practice counters
//! - **Derived statistics** - progress percentages, tallies, weekly reports
//! - **Streak tracking** - consecutive-day usage counter
//!
//! ## Design goals
//!
//! - **Pure** - no I/O, no clocks, no id generation; every transition is a
//!   deterministic function of the previous state and its arguments
//! - **Reusable** - the store crate layers persistence on top without this
//!   crate knowing about it
//! - **Fully tested** - every transition and statistic has unit tests
//!
//! ## Module structure
//!
//! - [`types`] - domain entities and the [`AppState`] root aggregate
//! - [`patch`] - typed partial updates, one per mutable entity
//! - [`state`] - state transitions and the [`NotFound`] lookup condition
//! - [`stats`] - derived statistics over the state tree
//! - [`streak`] - calendar-day streak arithmetic

// ============================================================================
// Module declarations
// ============================================================================

pub mod patch;
pub mod state;
pub mod stats;
pub mod streak;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all domain types
pub use types::*;

/// Re-export the typed patch structures
pub use patch::{
    LessonPatch, ProfilePatch, ResourcePatch, TestScorePatch, TtsSettingsPatch, VocabularyPatch,
};

/// Re-export the lookup-miss condition
pub use state::NotFound;

/// Re-export the statistics surface
pub use stats::{
    average_test_score, curriculum_stats, filter_vocabulary, lesson_progress, practice_tally,
    practice_tally_for_word, todays_lesson, vocabulary_categories, vocabulary_stats, week_progress,
    weekly_report, CurriculumStats, MasteryFilter, PracticeTally, VocabularyStats,
};
