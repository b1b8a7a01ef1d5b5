/// the main CLI module
pub mod core;
/// the settings for fetching the sequence between two neighboring genes
pub mod fetch;
