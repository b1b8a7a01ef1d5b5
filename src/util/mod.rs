
/// Generic functionality for writing documents, lines, and serializable objects to file
pub mod file_io;
