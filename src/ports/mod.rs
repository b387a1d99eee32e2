mod clipboard_writer;
mod completion;
mod key_value_store;

pub use clipboard_writer::ClipboardWriter;
pub use completion::{CompletionProvider, ValueSuggester};
pub use key_value_store::KeyValueStore;
