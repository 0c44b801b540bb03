//! Profile document sources

pub mod file_profile;

pub use file_profile::FileProfileSource;
