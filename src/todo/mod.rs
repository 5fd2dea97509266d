//! Persistent todo list: a JSON file holding an ordered list of tasks.

pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod task;

pub use config::TodoConfig;
pub use error::TodoError;
pub use list::TaskList;
pub use task::Task;
