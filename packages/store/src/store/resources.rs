//! 教学资源命令
//!
//! 歌曲、游戏、网站等外部资源的增删改与收藏切换。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jiaoan_core::{Resource, ResourceCategory, ResourcePatch};

use super::{AppStore, StoreResult};

/// 新资源草稿：id 由仓库分配
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub category: ResourceCategory,
    pub description: String,
    pub url: String,
    pub youtube_id: Option<String>,
    pub favorite: bool,
}

impl AppStore {
    // ========== 读取 ==========

    /// 获取全部资源的克隆
    pub fn resources(&self) -> StoreResult<Vec<Resource>> {
        Ok(self.lock()?.resources.clone())
    }

    // ========== 变更 ==========

    /// 添加资源，返回带新 id 的完整记录
    pub fn add_resource(&self, draft: NewResource) -> StoreResult<Resource> {
        let resource = Resource {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            category: draft.category,
            description: draft.description,
            url: draft.url,
            youtube_id: draft.youtube_id,
            favorite: draft.favorite,
        };

        let stored = resource.clone();
        self.mutate(|state| {
            state.insert_resource(resource);
            Ok(())
        })?;
        Ok(stored)
    }

    pub fn update_resource(&self, id: &str, patch: ResourcePatch) -> StoreResult<()> {
        self.mutate(|state| state.update_resource(id, patch))
    }

    pub fn delete_resource(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.delete_resource(id))
    }

    /// 翻转收藏标记
    pub fn toggle_resource_favorite(&self, id: &str) -> StoreResult<()> {
        self.mutate(|state| state.toggle_resource_favorite(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn draft() -> NewResource {
        NewResource {
            title: "Alphabet Song".to_string(),
            category: ResourceCategory::Song,
            description: "Classic ABC song with animation".to_string(),
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            youtube_id: Some("abc".to_string()),
            favorite: false,
        }
    }

    #[test]
    fn test_add_update_toggle_delete() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let seeded = store.resources().unwrap().len();

        let resource = store.add_resource(draft()).unwrap();
        assert_eq!(store.resources().unwrap().len(), seeded + 1);

        store
            .update_resource(
                &resource.id,
                ResourcePatch {
                    category: Some(ResourceCategory::Pronunciation),
                    ..Default::default()
                },
            )
            .unwrap();

        store.toggle_resource_favorite(&resource.id).unwrap();

        let stored = store
            .resources()
            .unwrap()
            .into_iter()
            .find(|r| r.id == resource.id)
            .unwrap();
        assert_eq!(stored.category, ResourceCategory::Pronunciation);
        assert!(stored.favorite);
        assert_eq!(stored.title, "Alphabet Song");

        store.delete_resource(&resource.id).unwrap();
        assert_eq!(store.resources().unwrap().len(), seeded);
    }

    #[test]
    fn test_missing_resource_id_is_reported() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let before = store.resources().unwrap();

        let err = store.toggle_resource_favorite("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.resources().unwrap(), before);
    }
}
