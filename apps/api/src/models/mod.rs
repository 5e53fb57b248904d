pub mod directory;
pub mod job;
pub mod suggestion;
