pub mod current;
pub mod share;
pub mod show;
pub mod signs;

use std::path::PathBuf;

use horo_app::{AppConfig, FortuneApp, JsonFileStore};
use horo_core::{CalendarDay, Clock, FixedClock, SystemClock};

use crate::clipboard::TerminalClipboard;
use crate::terminal::TerminalView;

/// Controller wired to the terminal.
pub type CliApp = FortuneApp<JsonFileStore, CliClock, TerminalView, TerminalClipboard>;

/// Either the host clock or a day pinned with `--date`.
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn today(&self) -> CalendarDay {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

/// Settings shared by every command, resolved from global flags.
pub struct Context {
    pub config: AppConfig,
    pub store_path: PathBuf,
    pub date: Option<String>,
    pub clipboard_file: Option<PathBuf>,
}

impl Context {
    fn clock(&self) -> Result<CliClock, String> {
        match &self.date {
            Some(date) => {
                let day = CalendarDay::parse(date).map_err(|e| e.to_string())?;
                Ok(CliClock::Fixed(FixedClock::new(day)))
            }
            None => Ok(CliClock::System(SystemClock)),
        }
    }

    /// Build the controller, restoring the stored selection.
    pub fn app(&self) -> Result<CliApp, String> {
        Ok(FortuneApp::new(
            self.config.clone(),
            JsonFileStore::new(&self.store_path),
            self.clock()?,
            TerminalView::new(),
            TerminalClipboard::new(self.clipboard_file.clone()),
        ))
    }

    /// Build the controller and, if `sign` is given, select it.
    pub fn app_with_sign(&self, sign: Option<&str>) -> Result<CliApp, String> {
        let mut app = self.app()?;
        if let Some(sign) = sign {
            app.select(sign).map_err(|e| e.to_string())?;
        }
        Ok(app)
    }
}

/// Default preference file under the user's data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("horo"))
        .unwrap_or_else(|| PathBuf::from(".horo"))
        .join("preferences.json")
}
