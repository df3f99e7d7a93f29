pub mod format;
pub mod navigation;
pub mod storage;
pub mod token_store;
