pub mod clear;
pub mod context;
pub mod edit;
pub mod render;
pub mod templates;

#[cfg(test)]
pub(crate) fn test_context() -> crate::app::AppContext<crate::adapters::MemoryKeyValueStore> {
    crate::app::AppContext::new(
        crate::domain::AppConfig::default(),
        crate::adapters::MemoryKeyValueStore::new(),
    )
}
