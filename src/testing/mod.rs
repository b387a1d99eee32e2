mod fake_completion_provider;
mod mock_clipboard;

pub use fake_completion_provider::FakeCompletionProvider;
pub use mock_clipboard::MockClipboard;
