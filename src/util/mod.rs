pub mod assets;
pub mod format;
pub mod share;
pub mod version;
