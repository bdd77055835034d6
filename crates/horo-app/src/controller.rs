//! The fortune selection controller.
//!
//! `FortuneApp` holds the current sign selection, reads the persisted
//! preference once at construction, and pushes fortunes, share links, and
//! status messages into its render port.

use horo_core::{Clock, DailyFortune, ZodiacSign, fortune_for, get_stars, rating_label};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::ports::{Clipboard, CopyMethod, MessageKind, RenderPort};
use crate::share;
use crate::store::PreferenceStore;

/// Shown when an action needs a sign and none is selected.
pub const MSG_SELECT_SIGN: &str = "请先选择您的星座！";
/// Shown after a fortune is rendered.
pub const MSG_FORTUNE_UPDATED: &str = "运势已更新！";
/// Shown after the share text reaches the clipboard.
pub const MSG_COPIED: &str = "链接已复制到剪贴板！";
/// Shown when every clipboard mechanism failed.
pub const MSG_COPY_FAILED: &str = "复制失败，请手动复制链接";
/// Shown before the WeChat path copies the link.
pub const MSG_WECHAT_HINT: &str = "请使用微信扫描二维码或手动分享链接";
/// Shown after the QQ share page is opened.
pub const MSG_QQ_OPENED: &str = "QQ分享窗口已打开";

/// Controller for picking a sign and viewing its daily fortune.
pub struct FortuneApp<S, C, V, K> {
    config: AppConfig,
    store: S,
    clock: C,
    view: V,
    clipboard: K,
    selected: Option<ZodiacSign>,
}

impl<S, C, V, K> FortuneApp<S, C, V, K>
where
    S: PreferenceStore,
    C: Clock,
    V: RenderPort,
    K: Clipboard,
{
    /// Create the controller and restore the persisted selection.
    ///
    /// A stored value that is not a known sign, or a store that cannot be
    /// read, leaves the selection empty.
    pub fn new(config: AppConfig, store: S, clock: C, view: V, clipboard: K) -> Self {
        let selected = load_selection(&store, &config.preference_key);
        let mut app = Self {
            config,
            store,
            clock,
            view,
            clipboard,
            selected,
        };
        app.view.set_selection(app.selected);
        app.update_button_state();
        app
    }

    /// The currently selected sign.
    pub fn selected(&self) -> Option<ZodiacSign> {
        self.selected
    }

    /// The configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The render port.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The clipboard.
    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }

    /// Select a sign by identifier. An empty identifier clears the selection.
    ///
    /// Unknown identifiers are rejected and leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> AppResult<()> {
        let sign = if id.trim().is_empty() {
            None
        } else {
            Some(ZodiacSign::parse(id).ok_or_else(|| AppError::UnknownSign(id.to_string()))?)
        };
        self.select_sign(sign);
        Ok(())
    }

    /// Set or clear the selection.
    pub fn select_sign(&mut self, sign: Option<ZodiacSign>) {
        debug!(sign = ?sign.map(ZodiacSign::id), "selection changed");
        self.selected = sign;
        self.view.set_selection(sign);
        self.update_button_state();
    }

    /// Keyboard confirm: shows the fortune only when a sign is selected.
    pub fn press_enter(&mut self) -> Option<DailyFortune> {
        self.selected?;
        self.show_fortune().ok()
    }

    /// Persist the selection and render today's fortune for it.
    pub fn show_fortune(&mut self) -> AppResult<DailyFortune> {
        let sign = self.require_selection()?;
        self.save_selection(sign);
        let fortune = self.display_fortune(sign);
        self.view.show_message(MSG_FORTUNE_UPDATED, MessageKind::Success);
        Ok(fortune)
    }

    /// Copy the share text and page URL to the clipboard.
    pub fn copy_share_link(&mut self) -> AppResult<CopyMethod> {
        let sign = self.require_selection()?;
        let day = self.clock.today();
        let content = share::copy_content(sign.id(), day, &self.config.page_url);
        self.copy_text(&content)
    }

    /// WeChat has no share URL; hint the user and copy the link instead.
    pub fn share_to_wechat(&mut self) -> AppResult<CopyMethod> {
        self.require_selection()?;
        self.view.show_message(MSG_WECHAT_HINT, MessageKind::Success);
        self.copy_share_link()
    }

    /// Open the QQ share page and return its URL.
    pub fn share_to_qq(&mut self) -> AppResult<String> {
        let sign = self.require_selection()?;
        let title = share::share_title(sign.id(), self.clock.today());
        let url = share::qq_share_url(&self.config.qq_endpoint, &self.config.page_url, &title);
        info!(%url, "opening QQ share page");
        self.view.open_share_window(&url);
        self.view.show_message(MSG_QQ_OPENED, MessageKind::Success);
        Ok(url)
    }

    fn require_selection(&mut self) -> AppResult<ZodiacSign> {
        match self.selected {
            Some(sign) => Ok(sign),
            None => {
                self.view.show_message(MSG_SELECT_SIGN, MessageKind::Error);
                Err(AppError::NoSignSelected)
            }
        }
    }

    fn update_button_state(&mut self) {
        self.view.set_button_enabled(self.selected.is_some());
    }

    fn save_selection(&mut self, sign: ZodiacSign) {
        if let Err(e) = self.store.set(&self.config.preference_key, sign.id()) {
            warn!(error = %e, sign = sign.id(), "failed to persist selected sign");
        }
    }

    fn display_fortune(&mut self, sign: ZodiacSign) -> DailyFortune {
        let day = self.clock.today();
        let fortune = fortune_for(day, sign);
        debug!(sign = sign.id(), %day, overall = fortune.overall.rating, "fortune computed");

        self.view.set_sign_name(sign.display_name());
        self.view.set_date(&day.display());
        for (category, cat) in fortune.categories() {
            self.view.set_category(
                category,
                &get_stars(cat.rating),
                &rating_label(cat.rating),
                cat.text,
            );
        }
        self.view.set_advice(fortune.advice);
        self.view.set_result_visible(true);
        fortune
    }

    fn copy_text(&mut self, text: &str) -> AppResult<CopyMethod> {
        let method = match self.clipboard.write_text(text) {
            Ok(()) => Ok(CopyMethod::Clipboard),
            Err(e) => {
                debug!(error = %e, "clipboard write failed, trying legacy copy");
                self.clipboard.legacy_copy(text).map(|()| CopyMethod::Legacy)
            }
        };

        match method {
            Ok(method) => {
                self.view.show_message(MSG_COPIED, MessageKind::Success);
                Ok(method)
            }
            Err(e) => {
                warn!(error = %e, "all clipboard mechanisms failed");
                self.view.show_message(MSG_COPY_FAILED, MessageKind::Error);
                Err(AppError::CopyFailed)
            }
        }
    }
}

fn load_selection<S: PreferenceStore>(store: &S, key: &str) -> Option<ZodiacSign> {
    let stored = match store.get(key) {
        Ok(value) => value?,
        Err(e) => {
            warn!(error = %e, "failed to read stored sign");
            return None;
        }
    };
    let sign = ZodiacSign::parse(&stored);
    if sign.is_none() && !stored.is_empty() {
        warn!(value = %stored, "ignoring unknown stored sign");
    }
    sign
}

#[cfg(test)]
mod tests {
    use super::*;
    use horo_core::{CalendarDay, FixedClock, FortuneCategory};

    use crate::ports::ClipboardError;
    use crate::store::{MemoryStore, StoreError};

    #[derive(Debug, Default)]
    struct RecordingView {
        selection: Option<ZodiacSign>,
        button_enabled: bool,
        sign_name: String,
        date: String,
        cards: Vec<(FortuneCategory, String, String, String)>,
        advice: String,
        result_visible: bool,
        messages: Vec<(String, MessageKind)>,
        opened: Vec<String>,
    }

    impl RecordingView {
        fn last_message(&self) -> Option<&(String, MessageKind)> {
            self.messages.last()
        }
    }

    impl RenderPort for RecordingView {
        fn set_selection(&mut self, sign: Option<ZodiacSign>) {
            self.selection = sign;
        }
        fn set_button_enabled(&mut self, enabled: bool) {
            self.button_enabled = enabled;
        }
        fn set_sign_name(&mut self, name: &str) {
            self.sign_name = name.to_string();
        }
        fn set_date(&mut self, date: &str) {
            self.date = date.to_string();
        }
        fn set_category(&mut self, category: FortuneCategory, stars: &str, rating: &str, text: &str) {
            self.cards.push((
                category,
                stars.to_string(),
                rating.to_string(),
                text.to_string(),
            ));
        }
        fn set_advice(&mut self, advice: &str) {
            self.advice = advice.to_string();
        }
        fn set_result_visible(&mut self, visible: bool) {
            self.result_visible = visible;
        }
        fn show_message(&mut self, text: &str, kind: MessageKind) {
            self.messages.push((text.to_string(), kind));
        }
        fn open_share_window(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    #[derive(Debug, Default)]
    struct FakeClipboard {
        primary_fails: bool,
        legacy_fails: bool,
        copied: Vec<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.primary_fails {
                return Err(ClipboardError::Unavailable);
            }
            self.copied.push(text.to_string());
            Ok(())
        }

        fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.legacy_fails {
                return Err(ClipboardError::Failed("denied".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Json(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Json(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }
    }

    type TestApp<S = MemoryStore> = FortuneApp<S, FixedClock, RecordingView, FakeClipboard>;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    fn app_with<S: PreferenceStore>(store: S, clipboard: FakeClipboard) -> TestApp<S> {
        FortuneApp::new(
            AppConfig::default().with_page_url("https://stars.test/"),
            store,
            FixedClock::new(day(2026, 10, 16)),
            RecordingView::default(),
            clipboard,
        )
    }

    fn app() -> TestApp {
        app_with(MemoryStore::new(), FakeClipboard::default())
    }

    #[test]
    fn starts_empty_with_button_disabled() {
        let app = app();
        assert_eq!(app.selected(), None);
        assert!(!app.view().button_enabled);
        assert!(!app.view().result_visible);
    }

    #[test]
    fn restores_persisted_selection() {
        let app = app_with(
            MemoryStore::with_entry("selectedZodiac", "leo"),
            FakeClipboard::default(),
        );
        assert_eq!(app.selected(), Some(ZodiacSign::Leo));
        assert_eq!(app.view().selection, Some(ZodiacSign::Leo));
        assert!(app.view().button_enabled);
    }

    #[test]
    fn ignores_unknown_persisted_value() {
        let app = app_with(
            MemoryStore::with_entry("selectedZodiac", "ophiuchus"),
            FakeClipboard::default(),
        );
        assert_eq!(app.selected(), None);
        assert!(!app.view().button_enabled);
    }

    #[test]
    fn unreadable_store_starts_empty() {
        let app = app_with(BrokenStore, FakeClipboard::default());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn show_without_selection_reports_error() {
        let mut app = app_with(
            MemoryStore::with_entry("theme", "dark"),
            FakeClipboard::default(),
        );
        let err = app.show_fortune().unwrap_err();
        assert!(matches!(err, AppError::NoSignSelected));
        assert_eq!(
            app.view().last_message(),
            Some(&(MSG_SELECT_SIGN.to_string(), MessageKind::Error))
        );
        assert!(!app.view().result_visible);
        assert_eq!(app.store().get("selectedZodiac").unwrap(), None);
    }

    #[test]
    fn show_without_selection_keeps_prior_preference() {
        let mut app = app_with(
            MemoryStore::with_entry("selectedZodiac", "virgo"),
            FakeClipboard::default(),
        );
        app.select("").unwrap();
        assert!(app.show_fortune().is_err());
        assert_eq!(
            app.store().get("selectedZodiac").unwrap().as_deref(),
            Some("virgo")
        );
    }

    #[test]
    fn show_renders_every_region() {
        let mut app = app();
        app.select("leo").unwrap();
        let fortune = app.show_fortune().unwrap();

        let view = app.view();
        assert_eq!(view.sign_name, "狮子座");
        assert_eq!(view.date, "2026年10月16日");
        assert_eq!(view.cards.len(), 5);
        let (category, stars, rating, text) = &view.cards[0];
        assert_eq!(*category, FortuneCategory::Overall);
        assert_eq!(stars, "★★★★☆");
        assert_eq!(rating, "4星");
        assert_eq!(text, fortune.overall.text);
        assert_eq!(view.advice, fortune.advice);
        assert!(view.result_visible);
        assert_eq!(
            view.last_message(),
            Some(&(MSG_FORTUNE_UPDATED.to_string(), MessageKind::Success))
        );
    }

    #[test]
    fn show_persists_selection() {
        let mut app = app();
        app.select("aries").unwrap();
        app.show_fortune().unwrap();
        assert_eq!(
            app.store().get("selectedZodiac").unwrap().as_deref(),
            Some("aries")
        );
    }

    #[test]
    fn same_day_same_fortune() {
        let mut app = app();
        app.select("aries").unwrap();
        let first = app.show_fortune().unwrap();
        let second = app.show_fortune().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn persistence_survives_a_new_instance() {
        let mut first = app();
        first.select("leo").unwrap();
        first.show_fortune().unwrap();
        let store = first.store().clone();

        let second = app_with(store, FakeClipboard::default());
        assert_eq!(second.selected(), Some(ZodiacSign::Leo));
    }

    #[test]
    fn store_failure_does_not_block_fortune() {
        let mut app = app_with(BrokenStore, FakeClipboard::default());
        app.select_sign(Some(ZodiacSign::Pisces));
        assert!(app.show_fortune().is_ok());
        assert!(app.view().result_visible);
    }

    #[test]
    fn select_unknown_keeps_previous() {
        let mut app = app();
        app.select("cancer").unwrap();
        let err = app.select("unicorn").unwrap_err();
        assert!(matches!(err, AppError::UnknownSign(ref id) if id == "unicorn"));
        assert_eq!(app.selected(), Some(ZodiacSign::Cancer));
    }

    #[test]
    fn select_empty_disables_button() {
        let mut app = app();
        app.select("taurus").unwrap();
        assert!(app.view().button_enabled);
        app.select("").unwrap();
        assert!(!app.view().button_enabled);
        assert_eq!(app.view().selection, None);
    }

    #[test]
    fn enter_needs_selection() {
        let mut app = app();
        assert!(app.press_enter().is_none());
        assert!(app.view().messages.is_empty());

        app.select("libra").unwrap();
        let fortune = app.press_enter().unwrap();
        assert_eq!(fortune.sign, ZodiacSign::Libra);
    }

    #[test]
    fn copy_uses_primary_clipboard() {
        let mut app = app();
        app.select("leo").unwrap();
        assert_eq!(app.copy_share_link().unwrap(), CopyMethod::Clipboard);
        assert_eq!(
            app.clipboard().copied,
            ["我的狮子座今日运势：2026年10月16日\n快来查看你的星座运势吧！\nhttps://stars.test/"]
        );
        assert_eq!(
            app.view().last_message(),
            Some(&(MSG_COPIED.to_string(), MessageKind::Success))
        );
    }

    #[test]
    fn copy_falls_back_to_legacy() {
        let clipboard = FakeClipboard {
            primary_fails: true,
            ..FakeClipboard::default()
        };
        let mut app = app_with(MemoryStore::new(), clipboard);
        app.select("leo").unwrap();
        assert_eq!(app.copy_share_link().unwrap(), CopyMethod::Legacy);
        assert_eq!(app.clipboard().copied.len(), 1);
    }

    #[test]
    fn copy_reports_double_failure() {
        let clipboard = FakeClipboard {
            primary_fails: true,
            legacy_fails: true,
            ..FakeClipboard::default()
        };
        let mut app = app_with(MemoryStore::new(), clipboard);
        app.select("leo").unwrap();
        assert!(matches!(app.copy_share_link(), Err(AppError::CopyFailed)));
        assert_eq!(
            app.view().last_message(),
            Some(&(MSG_COPY_FAILED.to_string(), MessageKind::Error))
        );
    }

    #[test]
    fn share_requires_selection() {
        let mut app = app();
        assert!(matches!(app.share_to_qq(), Err(AppError::NoSignSelected)));
        assert!(matches!(app.share_to_wechat(), Err(AppError::NoSignSelected)));
        assert!(app.view().opened.is_empty());
        assert!(app.clipboard().copied.is_empty());
    }

    #[test]
    fn wechat_hints_then_copies() {
        let mut app = app();
        app.select("gemini").unwrap();
        app.share_to_wechat().unwrap();
        let messages: Vec<&str> = app.view().messages.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(messages, [MSG_WECHAT_HINT, MSG_COPIED]);
        assert_eq!(app.clipboard().copied.len(), 1);
    }

    #[test]
    fn qq_opens_share_window() {
        let mut app = app();
        app.select("leo").unwrap();
        let url = app.share_to_qq().unwrap();
        assert!(url.starts_with(
            "https://connect.qq.com/widget/shareqq/index.html?url=https%3A%2F%2Fstars.test%2F&title="
        ));
        assert_eq!(app.view().opened, [url]);
        assert_eq!(
            app.view().last_message(),
            Some(&(MSG_QQ_OPENED.to_string(), MessageKind::Success))
        );
    }
}
