//! Fortune selection controller.
//!
//! [`FortuneApp`] owns the user's current sign selection and drives a
//! [`RenderPort`] with the fortune computed by `horo-core`. Persistence,
//! time, rendering, and clipboard access are injected so the controller runs
//! the same against a terminal, a test double, or any other surface.

pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod share;
pub mod store;

pub use config::AppConfig;
pub use controller::FortuneApp;
pub use error::{AppError, AppResult};
pub use ports::{Clipboard, ClipboardError, CopyMethod, MessageKind, RenderPort};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore, StoreError};
