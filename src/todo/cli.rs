use std::io::{BufRead, Write};

use clap::{ArgGroup, Parser};

use crate::args::Flag;
use crate::todo::config::TodoConfig;
use crate::todo::error::TodoError;
use crate::todo::list::TaskList;

/// Flags recognised in single-dash long form.
pub const FLAGS: &[Flag] = &[
    Flag::switch("add"),
    Flag::switch("list"),
    Flag::value("complete"),
    Flag::value("del"),
    Flag::switch("v"),
    Flag::switch("c"),
];

#[derive(Debug, Parser)]
#[command(
    name = "todo",
    about = "todo tool. Developed for The Pragmatic Bookshelf",
    group(ArgGroup::new("action").args(["add", "list", "complete", "del"]))
)]
pub struct Cli {
    /// Add task to the ToDo list
    #[arg(long)]
    pub add: bool,

    /// List all tasks
    #[arg(long)]
    pub list: bool,

    /// Item to be completed
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub complete: Option<i64>,

    /// Item to be deleted
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub del: Option<i64>,

    /// Enable verbose output
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Hide completed tasks from output
    #[arg(short = 'c')]
    pub hide_completed: bool,

    /// Task description for -add; read from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List { verbose: bool, hide_completed: bool },
    Add(Option<String>),
    Complete(i64),
    Delete(i64),
}

impl Cli {
    pub fn action(&self) -> Option<Action> {
        if self.list {
            Some(Action::List {
                verbose: self.verbose,
                hide_completed: self.hide_completed,
            })
        } else if let Some(index) = self.complete {
            Some(Action::Complete(index))
        } else if self.add {
            let description = (!self.words.is_empty()).then(|| self.words.join(" "));
            Some(Action::Add(description))
        } else {
            self.del.map(Action::Delete)
        }
    }
}

/// Loads the list, applies `action`, and saves when it mutated.
pub fn run<R, W>(
    action: Option<Action>,
    config: &TodoConfig,
    input: R,
    mut out: W,
) -> Result<(), TodoError>
where
    R: BufRead,
    W: Write,
{
    let action = action.ok_or(TodoError::InvalidOption)?;
    let mut list = TaskList::load_from_file(&config.filename)?;

    match action {
        Action::List {
            verbose,
            hide_completed,
        } => {
            out.write_all(list.render(verbose, hide_completed).as_bytes())
                .map_err(TodoError::Output)?;
            return Ok(());
        }
        Action::Add(description) => {
            let descriptions = match description {
                Some(d) => vec![d],
                None => read_descriptions(input)?,
            };
            tracing::debug!(count = descriptions.len(), "adding tasks");
            for d in descriptions {
                list.add_task(d);
            }
        }
        Action::Complete(index) => list.complete_task(index)?,
        Action::Delete(index) => {
            let removed = list.delete_task(index)?;
            tracing::debug!(index, task = %removed.description, "deleted task");
        }
    }

    list.save_to_file(&config.filename)
}

/// One description per line, up to the first blank line or end of input.
pub fn read_descriptions<R: BufRead>(input: R) -> Result<Vec<String>, TodoError> {
    let mut descriptions = Vec::new();
    for line in input.lines() {
        let line = line.map_err(TodoError::Stdin)?;
        if line.is_empty() {
            break;
        }
        descriptions.push(line);
    }
    Ok(descriptions)
}
