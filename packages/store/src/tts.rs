// TTS (Text-to-Speech) 播放模块
// 语音合成是宿主提供的外部能力，这里只负责播放编排：
//
// - 任意时刻至多一个朗读在播放，新的播放先取消当前的
// - 取消走和自然结束完全相同的通知路径，回调方无法区分
// - 宿主没有语音能力时走 on_error 降级，不是致命错误

use std::sync::Mutex;

use jiaoan_core::TtsSettings;

// ============================================
// 错误与回调类型
// ============================================

/// TTS 错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtsError {
    /// 宿主不提供语音能力
    NotSupported,
    /// 引擎播放失败
    SpeakFailed(String),
}

impl std::fmt::Display for TtsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TtsError::NotSupported => write!(f, "当前宿主不支持语音合成"),
            TtsError::SpeakFailed(msg) => write!(f, "语音播放失败: {}", msg),
        }
    }
}

impl std::error::Error for TtsError {}

/// 播放生命周期回调
pub type Callback = Box<dyn FnOnce() + Send>;

/// 错误回调
pub type ErrorCallback = Box<dyn FnOnce(TtsError) + Send>;

/// 一次播放请求的回调组
///
/// `on_start` 在引擎接受请求后触发；`on_end` 与 `on_error` 是
/// 终结回调，每次请求至多触发其中一个。
#[derive(Default)]
pub struct SpeakCallbacks {
    pub on_start: Option<Callback>,
    pub on_end: Option<Callback>,
    pub on_error: Option<ErrorCallback>,
}

impl SpeakCallbacks {
    /// 不关心任何通知的空回调组
    pub fn none() -> Self {
        Self::default()
    }
}

// ============================================
// 语音合成能力
// ============================================

/// 宿主提供的语音合成引擎
///
/// `speak` 只负责启动异步渲染并立即返回；渲染自然结束时宿主
/// 必须调用 [`TtsPlayer::notify_ended`]。`speak` 内部不得同步
/// 回调播放器。
pub trait SpeechSynthesizer: Send + Sync {
    /// 引擎是否可用
    fn available(&self) -> bool {
        true
    }

    /// 按给定设置开始渲染一段文本
    fn speak(&self, text: &str, settings: &TtsSettings) -> Result<(), TtsError>;

    /// 立即停止当前渲染
    fn stop(&self);

    /// 可用的发音人名称列表
    fn voices(&self) -> Vec<String> {
        Vec::new()
    }
}

/// 无语音能力的宿主占位实现
///
/// 所有播放请求走 on_error 降级路径，应用其余功能不受影响。
pub struct UnsupportedSynthesizer;

impl SpeechSynthesizer for UnsupportedSynthesizer {
    fn available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str, _settings: &TtsSettings) -> Result<(), TtsError> {
        Err(TtsError::NotSupported)
    }

    fn stop(&self) {}
}

// ============================================
// TtsPlayer - 播放编排
// ============================================

/// TTS 状态
#[derive(Debug, Clone)]
pub struct TtsStatus {
    /// 是否可用
    pub available: bool,
    /// 是否正在播放
    pub speaking: bool,
    /// 可用的发音人列表
    pub voices: Vec<String>,
}

/// 当前朗读的簿记
struct ActiveUtterance {
    text: String,
    settings: TtsSettings,
    /// 本次请求剩余的重复次数
    remaining_repeats: u32,
    on_end: Option<Callback>,
}

/// 播放编排器
///
/// 在合成引擎之上维护"至多一个朗读"的不变量。
pub struct TtsPlayer {
    engine: Box<dyn SpeechSynthesizer>,
    current: Mutex<Option<ActiveUtterance>>,
}

impl TtsPlayer {
    pub fn new(engine: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            engine,
            current: Mutex::new(None),
        }
    }

    /// 语音能力是否可用
    pub fn available(&self) -> bool {
        self.engine.available()
    }

    /// 是否有朗读正在播放
    pub fn is_speaking(&self) -> bool {
        self.lock_current().is_some()
    }

    /// 可用的发音人列表
    pub fn voices(&self) -> Vec<String> {
        self.engine.voices()
    }

    /// 当前播放状态
    pub fn status(&self) -> TtsStatus {
        TtsStatus {
            available: self.available(),
            speaking: self.is_speaking(),
            voices: self.voices(),
        }
    }

    /// 播放一段文本
    ///
    /// 已有朗读在播放时先取消它（其 on_end 照常触发），再启动
    /// 新朗读。引擎拒绝请求时触发 on_error，on_end 不再触发。
    pub fn speak(&self, text: &str, settings: &TtsSettings, callbacks: SpeakCallbacks) {
        self.speak_with_repeat(text, settings, 1, callbacks);
    }

    /// 重复播放一段文本
    ///
    /// 同一文本连续渲染 `repeat_count` 次：on_start 在第一次
    /// 开始时触发一次，on_end 在最后一次结束后触发一次。
    pub fn speak_with_repeat(
        &self,
        text: &str,
        settings: &TtsSettings,
        repeat_count: u32,
        callbacks: SpeakCallbacks,
    ) {
        if repeat_count == 0 {
            if let Some(on_end) = callbacks.on_end {
                on_end();
            }
            return;
        }

        self.cancel_current();

        match self.engine.speak(text, settings) {
            Ok(()) => {
                if let Some(on_start) = callbacks.on_start {
                    on_start();
                }
                *self.lock_current() = Some(ActiveUtterance {
                    text: text.to_string(),
                    settings: settings.clone(),
                    remaining_repeats: repeat_count - 1,
                    on_end: callbacks.on_end,
                });
            }
            Err(e) => {
                log::warn!("语音播放未能启动: {e}");
                if let Some(on_error) = callbacks.on_error {
                    on_error(e);
                }
            }
        }
    }

    /// 停止当前播放
    ///
    /// 取消立即生效，被取消朗读的 on_end 照常触发。
    pub fn stop(&self) {
        self.cancel_current();
    }

    /// 宿主在一次渲染自然结束时调用
    ///
    /// 还有剩余重复次数时续播同一文本；否则触发 on_end。
    pub fn notify_ended(&self) {
        let finished = {
            let mut current = self.lock_current();
            match current.take() {
                Some(mut active) => {
                    if active.remaining_repeats > 0
                        && self.engine.speak(&active.text, &active.settings).is_ok()
                    {
                        active.remaining_repeats -= 1;
                        *current = Some(active);
                        None
                    } else {
                        active.on_end.take()
                    }
                }
                None => None,
            }
        };

        // 回调在锁外触发，允许回调里再次发起播放
        if let Some(on_end) = finished {
            on_end();
        }
    }

    // ========== 内部工具 ==========

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<ActiveUtterance>> {
        match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn cancel_current(&self) {
        let cancelled = self.lock_current().take();
        if let Some(mut active) = cancelled {
            self.engine.stop();
            if let Some(on_end) = active.on_end.take() {
                on_end();
            }
        }
    }
}

// ============================================
// 测试
// ============================================
