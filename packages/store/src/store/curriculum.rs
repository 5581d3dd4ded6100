//! 课程计划命令
//!
//! 周 / 课 / 活动层级的变更入口。课以 `(week_number, day_number)`
//! 键定位，环节和活动在课内按 id 定位；每次变更只替换目标叶子，
//! 同级实体保持原样。

use jiaoan_core::{Lesson, LessonPatch, Week};

use super::{AppStore, StoreResult};

impl AppStore {
    // ========== 读取 ==========

    /// 获取全部课程周的克隆
    pub fn weeks(&self) -> StoreResult<Vec<Week>> {
        Ok(self.lock()?.weeks.clone())
    }

    /// 按 `(week, day)` 键获取一节课的克隆
    pub fn lesson(&self, week_number: u32, day_number: u32) -> StoreResult<Option<Lesson>> {
        Ok(self.lock()?.lesson(week_number, day_number).cloned())
    }

    // ========== 变更 ==========

    /// 将补丁中已设置的字段合并进目标课
    pub fn update_lesson(
        &self,
        week_number: u32,
        day_number: u32,
        patch: LessonPatch,
    ) -> StoreResult<()> {
        self.mutate(|state| state.update_lesson(week_number, day_number, patch))
    }

    /// 标记一节课完成（幂等）
    pub fn complete_lesson(&self, week_number: u32, day_number: u32) -> StoreResult<()> {
        self.mutate(|state| state.complete_lesson(week_number, day_number))
    }

    /// 追加一条课堂笔记（换行分隔，不覆盖已有内容）
    pub fn add_lesson_note(
        &self,
        week_number: u32,
        day_number: u32,
        note: &str,
    ) -> StoreResult<()> {
        self.mutate(|state| state.add_lesson_note(week_number, day_number, note))
    }

    /// 设置课堂参与度评分
    pub fn update_lesson_engagement(
        &self,
        week_number: u32,
        day_number: u32,
        rating: u8,
    ) -> StoreResult<()> {
        self.mutate(|state| state.update_lesson_engagement(week_number, day_number, rating))
    }

    /// 翻转课内单个活动的完成状态
    pub fn toggle_activity(
        &self,
        week_number: u32,
        day_number: u32,
        section_id: &str,
        activity_id: &str,
    ) -> StoreResult<()> {
        self.mutate(|state| state.toggle_activity(week_number, day_number, section_id, activity_id))
    }
}
