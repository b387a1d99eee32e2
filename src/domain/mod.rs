pub mod config;
pub mod context;
pub mod error;
pub mod placeholder;
pub mod session;
pub mod template;
pub mod values;

pub use config::{API_KEY_ENV, AppConfig, CompletionConfig, MODEL_ENV, StorageConfig};
pub use context::{ContextRegister, RECOGNIZED_KEYS};
pub use error::AppError;
pub use placeholder::{extract, substitute, unfilled};
pub use session::EditorSession;
pub use template::{SavedTemplate, format_date, generate_id};
pub use values::VariableValues;
