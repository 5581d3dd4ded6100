//! Shared test fixtures.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::types::{
    Activity, AppState, EmergencyLessonIdeas, Lesson, LessonSection, LessonStatus, ParentContact,
    Resource, ResourceCategory, StudentProfile, TtsSettings, VocabularyWord, Week,
};

pub fn sample_lesson(week_number: u32, day_number: u32) -> Lesson {
    let key = format!("{week_number}-{day_number}");
    Lesson {
        id: format!("w{week_number}-d{day_number}"),
        week_number,
        day_number,
        title: format!("Week {week_number} - Day {day_number}"),
        date: None,
        learning_goals: vec!["Goal one".to_string(), "Goal two".to_string()],
        grammar_focus: "Present simple".to_string(),
        sections: vec![
            LessonSection {
                id: format!("{key}-warmup"),
                title: "Warm-up".to_string(),
                duration: "5-10 min".to_string(),
                activities: vec![
                    Activity {
                        id: format!("{key}-warmup-1"),
                        title: "Greeting".to_string(),
                        duration: "3 min".to_string(),
                        description: "Casual conversation".to_string(),
                        completed: false,
                    },
                    Activity {
                        id: format!("{key}-warmup-2"),
                        title: "Review".to_string(),
                        duration: "5 min".to_string(),
                        description: "Review last session".to_string(),
                        completed: false,
                    },
                ],
            },
            LessonSection {
                id: format!("{key}-practice"),
                title: "Practice".to_string(),
                duration: "20-25 min".to_string(),
                activities: vec![
                    Activity {
                        id: format!("{key}-practice-1"),
                        title: "Guided practice".to_string(),
                        duration: "15 min".to_string(),
                        description: "Practice with support".to_string(),
                        completed: false,
                    },
                    Activity {
                        id: format!("{key}-practice-2"),
                        title: "Game".to_string(),
                        duration: "10 min".to_string(),
                        description: "Reinforcement game".to_string(),
                        completed: false,
                    },
                ],
            },
        ],
        homework: "Practice exercises".to_string(),
        status: LessonStatus::Planned,
        notes: String::new(),
        vocabulary_count: 0,
        engagement_rating: 0,
        completed: false,
    }
}

pub fn sample_word(id: &str, english: &str) -> VocabularyWord {
    VocabularyWord {
        id: id.to_string(),
        english_word: english.to_string(),
        thai_translation: "สวัสดี".to_string(),
        thai_pronunciation: "หวัดดี".to_string(),
        category: "greetings".to_string(),
        example_sentence: None,
        image_url: None,
        week_learned: 1,
        date_added: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        mastered: false,
        practice_count: 0,
    }
}

pub fn sample_resource(id: &str) -> Resource {
    Resource {
        id: id.to_string(),
        title: "Phonics Games".to_string(),
        category: ResourceCategory::Game,
        description: "Interactive phonics practice".to_string(),
        url: "https://example.com/phonics".to_string(),
        youtube_id: None,
        favorite: false,
    }
}

/// Two curriculum weeks of five lessons each, two starter words, defaults
/// everywhere else.
pub fn sample_state() -> AppState {
    let weeks = (1..=2)
        .map(|week_number| Week {
            week_number,
            theme: format!("Week {week_number} Theme"),
            lessons: (1..=5).map(|day| sample_lesson(week_number, day)).collect(),
        })
        .collect();

    AppState {
        weeks,
        vocabulary: vec![sample_word("v-1", "hello"), sample_word("v-2", "cat")],
        tests: vec![],
        student_profile: StudentProfile {
            id: "1".to_string(),
            name: "Mali".to_string(),
            age: 10,
            photo_url: None,
            learning_goals: "Build speaking confidence".to_string(),
            strengths: vec!["Good memory".to_string()],
            weaknesses: vec!["Shy when speaking".to_string()],
            parent_contact: ParentContact::default(),
            notes: String::new(),
            emergency_lesson_ideas: EmergencyLessonIdeas::default(),
        },
        tts_settings: TtsSettings::default(),
        pronunciation_history: vec![],
        resources: vec![],
        streak_days: 0,
        last_access_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        dark_mode: false,
    }
}
