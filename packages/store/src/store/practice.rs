//! 发音练习记录命令
//!
//! 只追加的练习日志。`word_id` 是弱引用：被引用的词可能已被
//! 删除，记录照常保留，查询方按"可能缺失"处理。

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jiaoan_core::{PracticeRating, PronunciationPractice};

use super::{AppStore, StoreResult};

/// 新练习记录草稿：id 与时间由仓库分配
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPronunciationPractice {
    pub word_id: String,
    pub rating: PracticeRating,
}

impl AppStore {
    // ========== 读取 ==========

    /// 获取完整练习日志的克隆
    pub fn pronunciation_history(&self) -> StoreResult<Vec<PronunciationPractice>> {
        Ok(self.lock()?.pronunciation_history.clone())
    }

    // ========== 变更 ==========

    /// 追加一条练习记录，不校验 `word_id` 是否存在
    pub fn add_pronunciation_practice(
        &self,
        draft: NewPronunciationPractice,
    ) -> StoreResult<PronunciationPractice> {
        let practice = PronunciationPractice {
            id: Uuid::new_v4().to_string(),
            word_id: draft.word_id,
            date: Utc::now(),
            rating: draft.rating,
        };

        let stored = practice.clone();
        self.mutate(|state| {
            state.push_pronunciation_practice(practice);
            Ok(())
        })?;
        Ok(stored)
    }
}
