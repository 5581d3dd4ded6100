//! 快照持久化模块
//!
//! 提供基于 SQLite 的本地快照存储，支持：
//! - 全量状态快照的持久化（固定命名空间键下的单条记录）
//! - 启动时加载上次会话的状态
//! - 数据库结构的版本迁移
//!
//! 每次变更后整棵状态树被序列化为 JSON 并写入 `snapshot` 表；
//! 内存中的状态始终是权威数据，写入失败不会阻塞变更本身。

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use jiaoan_core::AppState;

use crate::store::{StoreError, StoreResult};

/// 快照存储槽的固定命名空间键
pub const SNAPSHOT_KEY: &str = "english-teaching-storage";

// ============================================================
// 数据库迁移
// ============================================================

/// 当前数据库 schema 版本
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// 迁移记录
#[derive(Debug, Clone)]
struct Migration {
    /// 迁移版本号
    version: i32,
    /// 迁移名称/描述
    name: &'static str,
    /// 迁移 SQL 语句
    sql: &'static str,
}

/// 获取所有迁移定义
///
/// 返回按版本号排序的迁移列表
fn get_migrations() -> Vec<Migration> {
    vec![
        // V1: 快照存储表
        Migration {
            version: 1,
            name: "快照存储表",
            sql: r#"
            CREATE TABLE IF NOT EXISTS snapshot (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        },
    ]
}

/// 运行数据库迁移
///
/// 迁移记录存储在 schema_migrations 表中，只有高于已应用版本的
/// 迁移才会执行。
pub fn run_migrations(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .map_err(|e| StoreError::Migration(format!("创建迁移表失败: {e}")))?;

    let applied: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::Migration(format!("读取迁移版本失败: {e}")))?;

    for migration in get_migrations() {
        if migration.version <= applied {
            continue;
        }
        conn.execute_batch(migration.sql)
            .map_err(|e| StoreError::Migration(format!("迁移 V{} 失败: {e}", migration.version)))?;
        conn.execute(
            "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )
        .map_err(|e| StoreError::Migration(format!("记录迁移 V{} 失败: {e}", migration.version)))?;
    }

    Ok(())
}

// ============================================================
// SnapshotRepository - 快照仓储
// ============================================================

/// 快照仓储
///
/// 管理单个 SQLite 连接，按固定键读写全量状态快照。
pub struct SnapshotRepository {
    conn: Mutex<Connection>,
    db_path: String,
}

impl SnapshotRepository {
    /// 打开（或创建）数据库文件并运行迁移
    ///
    /// 自动启用 WAL 模式以提高并发性能。
    pub fn new<P: AsRef<Path>>(db_path: P) -> StoreResult<Self> {
        let path_str = db_path.as_ref().to_string_lossy().to_string();
        let connection = Connection::open(&db_path)?;

        connection.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA foreign_keys=ON;",
        )?;

        run_migrations(&connection)?;

        Ok(Self {
            conn: Mutex::new(connection),
            db_path: path_str,
        })
    }

    /// 创建内存数据库（用于测试）
    pub fn in_memory() -> StoreResult<Self> {
        let connection = Connection::open_in_memory()?;

        connection.execute_batch("PRAGMA foreign_keys=ON;")?;
        run_migrations(&connection)?;

        Ok(Self {
            conn: Mutex::new(connection),
            db_path: ":memory:".to_string(),
        })
    }

    /// 获取数据库连接的锁
    fn get_connection(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// 获取数据库路径
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// 加载上次持久化的状态快照
    ///
    /// 首次运行时存储槽为空，返回 None；已存储的快照解析失败会
    /// 作为序列化错误上报，而不是悄悄回退到种子数据。
    pub fn load(&self) -> StoreResult<Option<AppState>> {
        let conn = self.get_connection()?;

        let document: Option<String> = conn
            .query_row(
                "SELECT value FROM snapshot WHERE key = ?1",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(document) => {
                let state: AppState = serde_json::from_str(&document)?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    /// 写入全量状态快照（插入或覆盖）
    pub fn save(&self, state: &AppState) -> StoreResult<()> {
        let document = serde_json::to_string(state)?;
        let conn = self.get_connection()?;

        conn.execute(
            "INSERT OR REPLACE INTO snapshot (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![SNAPSHOT_KEY, document],
        )?;

        Ok(())
    }

    /// 删除存储槽中的快照
    ///
    /// # Returns
    /// * `bool` - 是否确实删除了记录
    pub fn clear(&self) -> StoreResult<bool> {
        let conn = self.get_connection()?;
        let affected = conn.execute("DELETE FROM snapshot WHERE key = ?1", [SNAPSHOT_KEY])?;
        Ok(affected > 0)
    }
}

// ============================================================
// 测试
// ============================================================
