//! # jiaoan-store - 教学计划应用状态仓库
//!
//! 英语家教课程追踪应用的状态层，提供：
//! - 全量应用状态的内存仓库与变更命令
//! - 每次变更后的本地 SQLite 快照持久化
//! - 快照的导出 / 导入 / 整体重置
//! - 语音播放编排（合成引擎由宿主注入）
//!
//! 领域模型与纯状态逻辑在 `jiaoan-core` 中；本 crate 负责
//! id 分配、时间戳、持久化等带副作用的部分。

// ============================================================
// 子模块声明
// ============================================================

pub mod persist;
pub mod seed;
pub mod store;
pub mod tts;

// ============================================================
// 重新导出主要类型
// ============================================================

pub use persist::{SnapshotRepository, SNAPSHOT_KEY};
pub use store::{
    AppStore, NewPronunciationPractice, NewResource, NewTestScore, NewVocabularyWord, StoreError,
    StoreResult,
};
pub use tts::{
    SpeakCallbacks, SpeechSynthesizer, TtsError, TtsPlayer, TtsStatus, UnsupportedSynthesizer,
};

/// 重新导出领域核心，宿主无需单独依赖 `jiaoan-core`
pub use jiaoan_core as core;
