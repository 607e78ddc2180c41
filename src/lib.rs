pub mod commands;
pub mod package;
pub mod recipe;
pub mod repo_map;
pub mod runtime;
