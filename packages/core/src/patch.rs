//! Typed Partial Updates
//!
//! One patch structure per mutable entity. Every field is optional; `apply`
//! merges only the fields that are set and leaves the rest untouched.
//! Unknown or mistyped fields are rejected at the type level instead of
//! being silently merged in.

use serde::{Deserialize, Serialize};

use crate::types::{
    EmergencyLessonIdeas, Lesson, LessonSection, LessonStatus, ParentContact, Resource,
    ResourceCategory, StudentProfile, TestScore, TtsSettings, VocabularyWord,
};

/// Applies `$patch.$field` onto `$target.$field` when the patch field is set.
macro_rules! merge {
    ($patch:ident, $target:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

// ==================== Lesson ====================

/// Partial update for a [`Lesson`]. The `(week_number, day_number)` key
/// itself is not patchable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub learning_goals: Option<Vec<String>>,
    pub grammar_focus: Option<String>,
    pub sections: Option<Vec<LessonSection>>,
    pub homework: Option<String>,
    pub status: Option<LessonStatus>,
    pub notes: Option<String>,
    pub vocabulary_count: Option<u32>,
    pub engagement_rating: Option<u8>,
    pub completed: Option<bool>,
}

impl LessonPatch {
    pub fn apply(self, lesson: &mut Lesson) {
        let patch = self;
        if let Some(date) = patch.date {
            lesson.date = Some(date);
        }
        merge!(
            patch,
            lesson,
            title,
            learning_goals,
            grammar_focus,
            sections,
            homework,
            status,
            notes,
            vocabulary_count,
            engagement_rating,
            completed,
        );
    }
}

// ==================== Vocabulary ====================

/// Partial update for a [`VocabularyWord`]. `id`, `date_added` and
/// `practice_count` are owned by the store and not patchable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VocabularyPatch {
    pub english_word: Option<String>,
    pub thai_translation: Option<String>,
    pub thai_pronunciation: Option<String>,
    pub category: Option<String>,
    pub example_sentence: Option<String>,
    pub image_url: Option<String>,
    pub week_learned: Option<u32>,
    pub mastered: Option<bool>,
}

impl VocabularyPatch {
    pub fn apply(self, word: &mut VocabularyWord) {
        let patch = self;
        if let Some(sentence) = patch.example_sentence {
            word.example_sentence = Some(sentence);
        }
        if let Some(url) = patch.image_url {
            word.image_url = Some(url);
        }
        merge!(
            patch,
            word,
            english_word,
            thai_translation,
            thai_pronunciation,
            category,
            week_learned,
            mastered,
        );
    }
}

// ==================== Test score ====================

/// Partial update for a [`TestScore`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestScorePatch {
    pub week_number: Option<u32>,
    pub topic: Option<String>,
    pub date: Option<String>,
    pub speaking: Option<u32>,
    pub listening: Option<u32>,
    pub vocabulary: Option<u32>,
    pub grammar: Option<u32>,
    pub overall_percentage: Option<f64>,
    pub passed: Option<bool>,
    pub notes: Option<String>,
}

impl TestScorePatch {
    pub fn apply(self, test: &mut TestScore) {
        let patch = self;
        merge!(
            patch,
            test,
            week_number,
            topic,
            date,
            speaking,
            listening,
            vocabulary,
            grammar,
            overall_percentage,
            passed,
            notes,
        );
    }
}

// ==================== Student profile ====================

/// Shallow partial update for the [`StudentProfile`] singleton. Nested
/// structures (`parent_contact`, `emergency_lesson_ideas`) are replaced
/// wholesale when set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub photo_url: Option<String>,
    pub learning_goals: Option<String>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub parent_contact: Option<ParentContact>,
    pub notes: Option<String>,
    pub emergency_lesson_ideas: Option<EmergencyLessonIdeas>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut StudentProfile) {
        let patch = self;
        if let Some(url) = patch.photo_url {
            profile.photo_url = Some(url);
        }
        merge!(
            patch,
            profile,
            name,
            age,
            learning_goals,
            strengths,
            weaknesses,
            parent_contact,
            notes,
            emergency_lesson_ideas,
        );
    }
}

// ==================== TTS settings ====================

/// Shallow partial update for the [`TtsSettings`] singleton.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TtsSettingsPatch {
    pub voice: Option<String>,
    pub speed: Option<f32>,
    pub pitch: Option<f32>,
    pub volume: Option<f32>,
    pub language: Option<String>,
}

impl TtsSettingsPatch {
    pub fn apply(self, settings: &mut TtsSettings) {
        let patch = self;
        merge!(patch, settings, voice, speed, pitch, volume, language);
    }
}

// ==================== Resource ====================

/// Partial update for a [`Resource`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub category: Option<ResourceCategory>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub youtube_id: Option<String>,
    pub favorite: Option<bool>,
}

impl ResourcePatch {
    pub fn apply(self, resource: &mut Resource) {
        let patch = self;
        if let Some(youtube_id) = patch.youtube_id {
            resource.youtube_id = Some(youtube_id);
        }
        merge!(patch, resource, title, category, description, url, favorite);
    }
}
