//! Small command-line tools: a word/line/byte counter (`wc`), a persistent
//! todo list (`todo`) and a markdown previewer (`mdp`).

pub mod args;
pub mod config;
pub mod counter;
pub mod logging;
pub mod markdown;
pub mod todo;
