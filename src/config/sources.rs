//! Configuration file sources: the main file and the drop-in directory.

pub mod drop_in;
pub mod main_file;
