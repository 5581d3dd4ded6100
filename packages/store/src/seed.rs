//! 种子数据模块
//!
//! 首次启动（以及整体重置）时的初始状态：
//! - 12 周 × 5 课的课程计划模板，每课五个环节
//! - 入门词汇表（泰英对照）
//! - 默认学生档案与应急课程点子
//! - 初始教学资源
//!
//! 词汇和资源的 id 在构建时重新生成，日期取当前时间，
//! 因此重置后的状态等价于一次全新的首次运行。

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use jiaoan_core::{
    Activity, AppState, EmergencyLessonIdeas, Lesson, LessonSection, LessonStatus, ParentContact,
    Resource, ResourceCategory, StudentProfile, TtsSettings, VocabularyWord, Week,
};

/// 课程计划总周数
pub const TOTAL_WEEKS: u32 = 12;

/// 每周课程数（周一至周五）
pub const LESSONS_PER_WEEK: u32 = 5;

// ============================================================
// 课程计划
// ============================================================

/// 构建一节课的五环节模板：热身、主课、练习、产出、收尾
fn build_lesson(
    week_number: u32,
    day_number: u32,
    title: &str,
    grammar_focus: &str,
    goals: &[&str],
    homework: &str,
) -> Lesson {
    let key = format!("{week_number}-{day_number}");

    let activity = |suffix: &str, title: &str, duration: &str, description: &str| Activity {
        id: format!("{key}-{suffix}"),
        title: title.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        completed: false,
    };

    let sections = vec![
        LessonSection {
            id: format!("{key}-warmup"),
            title: "Warm-up".to_string(),
            duration: "5-10 min".to_string(),
            activities: vec![
                activity(
                    "warmup-1",
                    "Greeting and small talk",
                    "3 min",
                    "Start with casual conversation to ease into the lesson",
                ),
                activity(
                    "warmup-2",
                    "Review previous lesson",
                    "5 min",
                    "Quick review of last session's vocabulary and concepts",
                ),
            ],
        },
        LessonSection {
            id: format!("{key}-main"),
            title: "Main Content".to_string(),
            duration: "15-20 min".to_string(),
            activities: vec![
                activity(
                    "main-1",
                    "Introduce new topic",
                    "10 min",
                    "Present new vocabulary and grammar concepts",
                ),
                activity(
                    "main-2",
                    "Examples and explanation",
                    "10 min",
                    "Provide clear examples and detailed explanations",
                ),
            ],
        },
        LessonSection {
            id: format!("{key}-practice"),
            title: "Practice".to_string(),
            duration: "20-25 min".to_string(),
            activities: vec![
                activity(
                    "practice-1",
                    "Guided practice",
                    "15 min",
                    "Student practices with teacher support",
                ),
                activity(
                    "practice-2",
                    "Interactive exercises",
                    "10 min",
                    "Games or activities to reinforce learning",
                ),
            ],
        },
        LessonSection {
            id: format!("{key}-production"),
            title: "Production".to_string(),
            duration: "10-15 min".to_string(),
            activities: vec![activity(
                "production-1",
                "Independent practice",
                "10 min",
                "Student applies learning independently",
            )],
        },
        LessonSection {
            id: format!("{key}-wrapup"),
            title: "Wrap-up".to_string(),
            duration: "5 min".to_string(),
            activities: vec![
                activity(
                    "wrapup-1",
                    "Review and summary",
                    "3 min",
                    "Recap key points of the lesson",
                ),
                activity(
                    "wrapup-2",
                    "Assign homework",
                    "2 min",
                    "Explain homework assignment",
                ),
            ],
        },
    ];

    Lesson {
        id: format!("w{week_number}-d{day_number}"),
        week_number,
        day_number,
        title: title.to_string(),
        date: None,
        learning_goals: goals.iter().map(|g| g.to_string()).collect(),
        grammar_focus: grammar_focus.to_string(),
        sections,
        homework: homework.to_string(),
        status: LessonStatus::Planned,
        notes: String::new(),
        vocabulary_count: 0,
        engagement_rating: 0,
        completed: false,
    }
}

/// 12 周课程计划模板，第 1 周带有定制内容
pub fn initial_weeks() -> Vec<Week> {
    let mut weeks: Vec<Week> = (1..=TOTAL_WEEKS)
        .map(|week_number| Week {
            week_number,
            theme: format!("Week {week_number} Theme"),
            lessons: (1..=LESSONS_PER_WEEK)
                .map(|day| {
                    build_lesson(
                        week_number,
                        day,
                        &format!("Week {week_number} - Day {day}: Lesson Title"),
                        "Grammar Focus",
                        &["Learning goal 1", "Learning goal 2", "Learning goal 3"],
                        "Complete practice exercises",
                    )
                })
                .collect(),
        })
        .collect();

    // 第 1 周的具体内容
    weeks[0].theme = "Greetings and Basic Introduction".to_string();

    let day1 = &mut weeks[0].lessons[0];
    day1.title = "Hello! Nice to meet you".to_string();
    day1.grammar_focus = "Subject pronouns (I, you)".to_string();
    day1.learning_goals = vec![
        "Learn basic greetings".to_string(),
        "Introduce yourself".to_string(),
        "Use \"I am\" and \"you are\"".to_string(),
    ];

    let day2 = &mut weeks[0].lessons[1];
    day2.title = "Colors and Animals".to_string();
    day2.grammar_focus = "Articles (a, an, the)".to_string();
    day2.learning_goals = vec![
        "Identify basic colors".to_string(),
        "Name common animals".to_string(),
        "Describe animals with colors".to_string(),
    ];

    weeks
}

// ============================================================
// 词汇表
// ============================================================

/// 入门词汇：第 1 周的基础问候语、代词、动物和颜色
pub fn initial_vocabulary(now: DateTime<Utc>) -> Vec<VocabularyWord> {
    let entries: [(&str, &str, &str, &str, &str); 11] = [
        ("hello", "สวัสดี", "หวัดดี", "greetings", "Hello, how are you?"),
        ("goodbye", "ลาก่อน", "กู๊ดบาย", "greetings", "Goodbye, see you tomorrow!"),
        ("thank you", "ขอบคุณ", "แธงคิว", "greetings", "Thank you for your help."),
        ("yes", "ใช่", "เยส", "basic", "Yes, I understand."),
        ("no", "ไม่ใช่", "โน", "basic", "No, I don't like that."),
        ("I am", "ฉันเป็น/ฉันคือ", "ไอ แอม", "basic", "I am a student."),
        ("you are", "คุณเป็น/คุณคือ", "ยู อาร์", "basic", "You are my teacher."),
        ("cat", "แมว", "แคท", "animals", "The cat is sleeping."),
        ("dog", "สุนัข", "ด็อก", "animals", "The dog is running."),
        ("red", "สีแดง", "เรด", "colors", "I like the red apple."),
        ("blue", "สีน้ำเงิน", "บลู", "colors", "The sky is blue."),
    ];

    entries
        .iter()
        .map(
            |(english, thai, pronunciation, category, example)| VocabularyWord {
                id: Uuid::new_v4().to_string(),
                english_word: english.to_string(),
                thai_translation: thai.to_string(),
                thai_pronunciation: pronunciation.to_string(),
                category: category.to_string(),
                example_sentence: Some(example.to_string()),
                image_url: None,
                week_learned: 1,
                date_added: now,
                mastered: false,
                practice_count: 0,
            },
        )
        .collect()
}

// ============================================================
// 学生档案
// ============================================================

/// 默认学生档案，含按学生状态分类的应急课程点子
pub fn initial_student_profile() -> StudentProfile {
    StudentProfile {
        id: "1".to_string(),
        name: "Student Name".to_string(),
        age: 10,
        photo_url: None,
        learning_goals: "Improve English conversation skills and build confidence in speaking"
            .to_string(),
        strengths: vec![
            "Good memory".to_string(),
            "Enthusiastic".to_string(),
            "Creative".to_string(),
        ],
        weaknesses: vec![
            "Shy when speaking".to_string(),
            "Grammar structure".to_string(),
        ],
        parent_contact: ParentContact {
            name: "Parent Name".to_string(),
            phone: String::new(),
            email: String::new(),
        },
        notes: String::new(),
        emergency_lesson_ideas: EmergencyLessonIdeas {
            tired: vec![
                "Watch an educational video".to_string(),
                "Read a simple story together".to_string(),
                "Play a quiet word game".to_string(),
            ],
            energetic: vec![
                "Physical games (Simon Says, TPR activities)".to_string(),
                "Role-play scenarios".to_string(),
                "Fast-paced vocabulary challenges".to_string(),
            ],
            distracted: vec![
                "Interactive games with immediate rewards".to_string(),
                "Short, varied activities".to_string(),
                "One-on-one conversation practice".to_string(),
            ],
        },
    }
}

// ============================================================
// 教学资源
// ============================================================

/// 初始教学资源
pub fn initial_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: Uuid::new_v4().to_string(),
            title: "English Songs for Kids".to_string(),
            category: ResourceCategory::Song,
            description: "Collection of educational English songs".to_string(),
            url: "https://www.youtube.com/playlist".to_string(),
            youtube_id: None,
            favorite: false,
        },
        Resource {
            id: Uuid::new_v4().to_string(),
            title: "Phonics Games".to_string(),
            category: ResourceCategory::Game,
            description: "Interactive phonics practice games".to_string(),
            url: "https://www.starfall.com".to_string(),
            youtube_id: None,
            favorite: false,
        },
        Resource {
            id: Uuid::new_v4().to_string(),
            title: "British Council Kids".to_string(),
            category: ResourceCategory::Website,
            description: "Free English learning resources for children".to_string(),
            url: "https://learnenglishkids.britishcouncil.org".to_string(),
            youtube_id: None,
            favorite: true,
        },
    ]
}

// ============================================================
// 初始状态
// ============================================================

/// 组装完整的首次运行状态
pub fn initial_state(today: NaiveDate, now: DateTime<Utc>) -> AppState {
    AppState {
        weeks: initial_weeks(),
        vocabulary: initial_vocabulary(now),
        tests: vec![],
        student_profile: initial_student_profile(),
        tts_settings: TtsSettings::default(),
        pronunciation_history: vec![],
        resources: initial_resources(),
        streak_days: 0,
        last_access_date: today,
        dark_mode: false,
    }
}

// ============================================================
// 测试
// ============================================================
