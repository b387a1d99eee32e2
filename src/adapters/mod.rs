pub mod clipboard_arboard;
pub mod file_kv_store;
pub mod gemini_client_http;
pub mod memory_kv_store;

pub use clipboard_arboard::ArboardClipboardWriter;
pub use file_kv_store::FileKeyValueStore;
pub use gemini_client_http::HttpGeminiClient;
pub use memory_kv_store::MemoryKeyValueStore;
