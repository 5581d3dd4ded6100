//! 学生档案与设置命令
//!
//! 档案和播放设置都是单例，更新是浅合并：补丁里设置的字段
//! 覆盖原值，其余字段保持不变。

use jiaoan_core::{ProfilePatch, StudentProfile, TtsSettings, TtsSettingsPatch};

use super::{AppStore, StoreResult};

impl AppStore {
    // ========== 读取 ==========

    pub fn student_profile(&self) -> StoreResult<StudentProfile> {
        Ok(self.lock()?.student_profile.clone())
    }

    pub fn tts_settings(&self) -> StoreResult<TtsSettings> {
        Ok(self.lock()?.tts_settings.clone())
    }

    // ========== 变更 ==========

    /// 浅合并学生档案
    pub fn update_student_profile(&self, patch: ProfilePatch) -> StoreResult<()> {
        self.mutate(|state| {
            state.update_student_profile(patch);
            Ok(())
        })
    }

    /// 浅合并播放设置
    pub fn update_tts_settings(&self, patch: TtsSettingsPatch) -> StoreResult<()> {
        self.mutate(|state| {
            state.update_tts_settings(patch);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_keeps_unpatched_fields() {
        let store = AppStore::in_memory().expect("Failed to create store");
        let before = store.student_profile().unwrap();

        store
            .update_student_profile(ProfilePatch {
                name: Some("Nok".to_string()),
                ..Default::default()
            })
            .unwrap();

        let after = store.student_profile().unwrap();
        assert_eq!(after.name, "Nok");
        assert_eq!(after.age, before.age);
        assert_eq!(after.emergency_lesson_ideas, before.emergency_lesson_ideas);
    }

    #[test]
    fn test_update_tts_settings_partial_merge() {
        let store = AppStore::in_memory().expect("Failed to create store");

        store
            .update_tts_settings(TtsSettingsPatch {
                speed: Some(0.7),
                language: Some("en-GB".to_string()),
                ..Default::default()
            })
            .unwrap();

        let settings = store.tts_settings().unwrap();
        assert_eq!(settings.speed, 0.7);
        assert_eq!(settings.language, "en-GB");
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.voice, "");
    }
}
