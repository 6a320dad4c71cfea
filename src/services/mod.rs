pub mod binder;
pub mod config;
pub mod context;
pub mod decoder;
pub mod dispatcher;
pub mod formatter;
pub mod logger;
pub mod tool_executor;
