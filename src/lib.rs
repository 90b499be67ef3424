pub mod commands;
pub mod help;
pub mod host;
pub mod location;
pub mod runtime;
pub mod tokens;
