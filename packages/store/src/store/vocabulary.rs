//! 词汇表命令
//!
//! 词汇条目的增删改、掌握状态切换与发音练习计数。
//! 新词的 id 与添加时间由仓库在创建时统一分配。

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jiaoan_core::{VocabularyPatch, VocabularyWord};

use super::{AppStore, StoreResult};

/// 新词草稿：id、添加时间、练习次数由仓库分配
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVocabularyWord {
    pub english_word: String,
    pub thai_translation: String,
    pub thai_pronunciation: String,
    pub category: String,
    pub example_sentence: Option<String>,
    pub image_url: Option<String>,
    pub week_learned: u32,
    pub mastered: bool,
}

impl AppStore {
    // ========== 读取 ==========

    /// 获取词汇表的克隆
    pub fn vocabulary(&self) -> StoreResult<Vec<VocabularyWord>> {
        Ok(self.lock()?.vocabulary.clone())
    }

    /// 按 id 获取单个词条的克隆
    pub fn vocabulary_word(&self, id: &str) -> StoreResult<Option<VocabularyWord>> {
        Ok(self.lock()?.vocabulary_word(id).cloned())
    }

    // ========== 变更 ==========

    /// 添加新词
    ///
    /// 分配进程内唯一的 id，记录添加时间，练习次数从 0 开始。
    /// 返回完整的新记录，方便调用方立即拿到 id。
    pub fn add_vocabulary(&self, draft: NewVocabularyWord) -> StoreResult<VocabularyWord> {
        let word = VocabularyWord {
            id: Uuid::new_v4().to_string(),
            english_word: draft.english_word,
            thai_translation: draft.thai_translation,
            thai_pronunciation: draft.thai_pronunciation,
            category: draft.category,
            example_sentence: draft.example_sentence,
            image_url: draft.image_url,
            week_learned: draft.week_learned,
            date_added: Utc::now(),
            mastered: draft.mastered,
            practice_count: 0,
        };

        let stored = word.clone();
        self.mutate(|state| {
            state.insert_vocabulary(word);
            Ok(())
        })?;
        Ok(stored)
    }

    pub fn update_vocabulary(&self, id: &str, patch: VocabularyPatch) -> StoreResult<()> {
        self.mutate(|state| state.update_vocabulary(id, patch))
    }

    pub fn delete_vocabulary(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.delete_vocabulary(id))
    }

    /// 翻转掌握标记
    pub fn toggle_mastered(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.toggle_mastered(id))
    }

    /// 发音被实际播放时计一次练习
    pub fn increment_practice_count(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.increment_practice_count(id))
    }
}
