pub mod action_log;
pub mod core;
pub mod settings;

pub use self::action_log::{ActionKind, ActionSink, FileActionLog, NullSink};
pub use self::core::Explorer;
pub use self::settings::Settings;
