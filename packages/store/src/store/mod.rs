//! 应用状态仓库
//!
//! 整个应用的单一状态入口，负责：
//! - 持有内存中的权威状态树
//! - 将所有变更路由到核心层的纯状态转移函数
//! - 每次变更后把全量快照写入本地存储
//! - 快照的导出 / 导入 / 整体重置
//!
//! 读取一律返回克隆：调用方改动返回值不会影响仓库内部状态，
//! 所有写入必须经过这里的变更方法。

// ============================================================
// 子模块声明
// ============================================================

pub mod curriculum;
pub mod practice;
pub mod profile;
pub mod resources;
pub mod test_scores;
pub mod vocabulary;

pub use practice::NewPronunciationPractice;
pub use resources::NewResource;
pub use test_scores::NewTestScore;
pub use vocabulary::NewVocabularyWord;

// ============================================================
// 依赖导入
// ============================================================

use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

use jiaoan_core::{AppState, NotFound};

use crate::persist::SnapshotRepository;
use crate::seed;

// ============================================================
// 错误类型定义
// ============================================================

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("迁移错误: {0}")]
    Migration(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("导入失败: {0}")]
    ImportFailed(String),

    #[error("数据未找到: {0}")]
    NotFound(#[from] NotFound),

    #[error("锁获取失败: {0}")]
    Lock(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================
// AppStore - 应用状态仓库
// ============================================================

/// 应用状态仓库
///
/// 进程内唯一的写入者。UI 层通过依赖注入持有它的引用，
/// 读到的都是状态的只读克隆。
pub struct AppStore {
    state: Mutex<AppState>,
    repo: SnapshotRepository,
}

impl AppStore {
    /// 打开（或创建）数据库文件并加载状态
    ///
    /// 存储槽里有上次会话的快照则直接使用；否则生成种子数据
    /// 并立即持久化一次，等价于首次运行。
    pub fn open<P: AsRef<Path>>(db_path: P) -> StoreResult<Self> {
        let repo = SnapshotRepository::new(db_path)?;
        Self::with_repository(repo)
    }

    /// 基于内存数据库创建仓库（用于测试）
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_repository(SnapshotRepository::in_memory()?)
    }

    /// 基于既有仓储创建仓库
    pub fn with_repository(repo: SnapshotRepository) -> StoreResult<Self> {
        let state = match repo.load()? {
            Some(state) => {
                log::info!("已从本地存储恢复状态: {}", repo.db_path());
                state
            }
            None => {
                let now = Utc::now();
                let state = seed::initial_state(now.date_naive(), now);
                repo.save(&state)?;
                log::info!("首次启动，已写入种子数据: {}", repo.db_path());
                state
            }
        };

        Ok(Self {
            state: Mutex::new(state),
            repo,
        })
    }

    /// 获取底层快照仓储的引用
    pub fn repository(&self) -> &SnapshotRepository {
        &self.repo
    }

    // ========== 内部工具 ==========

    pub(crate) fn lock(&self) -> StoreResult<MutexGuard<'_, AppState>> {
        self.state
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// 变更后持久化全量快照
    ///
    /// 内存状态是权威数据，写入失败只记录日志，不影响变更结果。
    fn persist(&self, state: &AppState) {
        if let Err(e) = self.repo.save(state) {
            log::warn!("快照写入失败: {e}");
        }
    }

    /// 执行一次状态转移并在成功后持久化
    ///
    /// 转移返回查找失败时状态未被改动，跳过持久化。
    pub(crate) fn mutate<T>(
        &self,
        transition: impl FnOnce(&mut AppState) -> Result<T, NotFound>,
    ) -> StoreResult<T> {
        let mut state = self.lock()?;
        let value = transition(&mut state)?;
        self.persist(&state);
        Ok(value)
    }

    // ========== 全量读取 ==========

    /// 获取完整状态的克隆
    pub fn snapshot(&self) -> StoreResult<AppState> {
        Ok(self.lock()?.clone())
    }

    // ========== 会话与外观 ==========

    /// 推进连续使用天数
    ///
    /// 应在每次会话开始时调用一次；同一天内重复调用不改变计数。
    pub fn update_streak(&self) -> StoreResult<u32> {
        self.mutate(|state| {
            state.update_streak(Utc::now().date_naive());
            Ok(state.streak_days)
        })
    }

    /// 切换深色模式
    pub fn toggle_dark_mode(&self) -> StoreResult<bool> {
        self.mutate(|state| {
            state.toggle_dark_mode();
            Ok(state.dark_mode)
        })
    }

    pub fn streak_days(&self) -> StoreResult<u32> {
        Ok(self.lock()?.streak_days)
    }

    pub fn dark_mode(&self) -> StoreResult<bool> {
        Ok(self.lock()?.dark_mode)
    }

    // ========== 快照交换 ==========

    /// 导出全量快照为带缩进的 JSON 文档
    ///
    /// 字段名与嵌套结构和持久化快照完全一致，可直接重新导入。
    pub fn export_data(&self) -> StoreResult<String> {
        let state = self.lock()?;
        Ok(serde_json::to_string_pretty(&*state)?)
    }

    /// 导出文件名，嵌入导出时刻的毫秒时间戳
    pub fn export_file_name(now: DateTime<Utc>) -> String {
        format!("english-teaching-backup-{}.json", now.timestamp_millis())
    }

    /// 导入快照文档，整体替换当前状态
    ///
    /// 解析失败返回 [`StoreError::ImportFailed`]，既有状态不受影响。
    pub fn import_data(&self, document: &str) -> StoreResult<()> {
        let parsed: AppState = serde_json::from_str(document).map_err(|e| {
            log::error!("导入数据解析失败: {e}");
            StoreError::ImportFailed(e.to_string())
        })?;

        let mut state = self.lock()?;
        *state = parsed;
        self.persist(&state);
        Ok(())
    }

    /// 整体重置为种子数据（重新生成 id 与日期）
    pub fn reset_all_data(&self) -> StoreResult<()> {
        let now = Utc::now();
        let fresh = seed::initial_state(now.date_naive(), now);

        let mut state = self.lock()?;
        *state = fresh;
        self.persist(&state);
        Ok(())
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_seeds_and_persists() {
        let store = AppStore::in_memory().expect("Failed to create store");

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.weeks.len(), 12);
        assert_eq!(snapshot.vocabulary.len(), 11);

        // 种子数据在启动时已写入存储槽
        let persisted = store
            .repository()
            .load()
            .expect("Failed to load")
            .expect("Slot is empty");
        assert_eq!(persisted, snapshot);
    }

    #[test]
    fn test_restores_previous_session_state() {
        let repo = SnapshotRepository::in_memory().expect("Failed to create repository");
        let now = Utc::now();
        let mut state = seed::initial_state(now.date_naive(), now);
        state.streak_days = 9;
        state.complete_lesson(1, 1).unwrap();
        repo.save(&state).expect("Failed to save");

        let store = AppStore::with_repository(repo).expect("Failed to create store");
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.streak_days, 9);
        assert!(snapshot.lesson(1, 1).unwrap().completed);
    }

    #[test]
    fn test_mutation_persists_snapshot() {
        let store = AppStore::in_memory().expect("Failed to create store");
        store.complete_lesson(1, 2).expect("Failed to complete");

        let persisted = store.repository().load().unwrap().unwrap();
        assert!(persisted.lesson(1, 2).unwrap().completed);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let store = AppStore::in_memory().expect("Failed to create store");

        let mut snapshot = store.snapshot().unwrap();
        snapshot.weeks.clear();
        snapshot.dark_mode = true;

        let fresh = store.snapshot().unwrap();
        assert_eq!(fresh.weeks.len(), 12);
        assert!(!fresh.dark_mode);
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = AppStore::in_memory().expect("Failed to create store");
        store.complete_lesson(1, 1).unwrap();
        store.toggle_dark_mode().unwrap();
        store
            .add_vocabulary(NewVocabularyWord {
                english_word: "water".to_string(),
                thai_translation: "น้ำ".to_string(),
                thai_pronunciation: "ว็อเทอะ".to_string(),
                category: "food".to_string(),
                example_sentence: None,
                image_url: None,
                week_learned: 2,
                mastered: false,
            })
            .unwrap();

        let before = store.snapshot().unwrap();
        let document = store.export_data().unwrap();
        store.import_data(&document).unwrap();

        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_import_failure_leaves_state_untouched() {
        let store = AppStore::in_memory().expect("Failed to create store");
        store.complete_lesson(1, 1).unwrap();
        let before = store.snapshot().unwrap();

        let err = store.import_data("{ this is not a snapshot").unwrap_err();
        assert!(matches!(err, StoreError::ImportFailed(_)));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_import_replaces_state_wholesale() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let exported = store.export_data().unwrap();

        store.toggle_dark_mode().unwrap();
        store.complete_lesson(1, 1).unwrap();

        store.import_data(&exported).unwrap();
        let snapshot = store.snapshot().unwrap();
        assert!(!snapshot.dark_mode);
        assert!(!snapshot.lesson(1, 1).unwrap().completed);
    }

    #[test]
    fn test_reset_all_data_returns_to_first_run_state() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let original_word_id = store.snapshot().unwrap().vocabulary[0].id.clone();

        store.complete_lesson(1, 1).unwrap();
        store.toggle_dark_mode().unwrap();
        store.reset_all_data().unwrap();

        let snapshot = store.snapshot().unwrap();
        assert!(!snapshot.lesson(1, 1).unwrap().completed);
        assert!(!snapshot.dark_mode);
        assert_eq!(snapshot.streak_days, 0);
        assert!(snapshot.tests.is_empty());
        // 重置会重新生成种子 id
        assert_ne!(snapshot.vocabulary[0].id, original_word_id);
    }

    #[test]
    fn test_not_found_is_reported_and_not_persisted() {
        let store = AppStore::in_memory().expect("Failed to create store");
        store.toggle_dark_mode().unwrap();

        let err = store.complete_lesson(99, 1).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        // 状态与存储槽都未被改动
        let snapshot = store.snapshot().unwrap();
        let persisted = store.repository().load().unwrap().unwrap();
        assert_eq!(snapshot, persisted);
    }

    #[test]
    fn test_export_file_name_embeds_timestamp() {
        use chrono::TimeZone;
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let name = AppStore::export_file_name(now);
        assert_eq!(
            name,
            format!("english-teaching-backup-{}.json", now.timestamp_millis())
        );
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_update_streak_same_day_is_stable() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let first = store.update_streak().unwrap();
        let second = store.update_streak().unwrap();
        assert_eq!(first, second);
    }
}
