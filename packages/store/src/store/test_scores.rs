//! 测验成绩命令
//!
//! 四个分项满分固定（口语 40、听力 30、词汇 20、语法 10）；
//! 总百分比与是否通过由调用方给出，仓库不做推导。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jiaoan_core::{TestScore, TestScorePatch};

use super::{AppStore, StoreResult};

/// 新测验草稿：id 由仓库分配
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestScore {
    pub week_number: u32,
    pub topic: String,
    pub date: String,
    pub speaking: u32,
    pub listening: u32,
    pub vocabulary: u32,
    pub grammar: u32,
    pub overall_percentage: f64,
    pub passed: bool,
    pub notes: String,
}

impl AppStore {
    // ========== 读取 ==========

    /// 获取全部测验成绩的克隆
    pub fn tests(&self) -> StoreResult<Vec<TestScore>> {
        Ok(self.lock()?.tests.clone())
    }

    // ========== 变更 ==========

    /// 录入一次测验成绩，返回带新 id 的完整记录
    pub fn add_test(&self, draft: NewTestScore) -> StoreResult<TestScore> {
        let test = TestScore {
            id: Uuid::new_v4().to_string(),
            week_number: draft.week_number,
            topic: draft.topic,
            date: draft.date,
            speaking: draft.speaking,
            listening: draft.listening,
            vocabulary: draft.vocabulary,
            grammar: draft.grammar,
            overall_percentage: draft.overall_percentage,
            passed: draft.passed,
            notes: draft.notes,
        };

        let stored = test.clone();
        self.mutate(|state| {
            state.insert_test(test);
            Ok(())
        })?;
        Ok(stored)
    }

    pub fn update_test(&self, id: &str, patch: TestScorePatch) -> StoreResult<()> {
        self.mutate(|state| state.update_test(id, patch))
    }

    pub fn delete_test(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.delete_test(id))
    }
}
