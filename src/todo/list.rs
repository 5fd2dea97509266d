use crate::todo::error::TodoError;
use crate::todo::task::Task;
use chrono::{DateTime, Local};
use std::{fs, io, io::Write, path::Path};

/// Ordered tasks addressed by 1-based position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Loads the list stored at `file_path`. A missing or empty file is an
    /// empty list.
    pub fn load_from_file(file_path: &Path) -> Result<Self, TodoError> {
        let data = match fs::read(file_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %file_path.display(), "no todo file yet, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(TodoError::Read {
                    path: file_path.to_path_buf(),
                    source,
                })
            }
        };
        if data.is_empty() {
            return Ok(Self::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_slice(&data).map_err(|source| TodoError::Decode {
                path: file_path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(Self { tasks })
    }

    /// Writes the whole list next to `file_path` and renames it into place,
    /// so the previous content survives a failed write.
    pub fn save_to_file(&self, file_path: &Path) -> Result<(), TodoError> {
        let write_err = |source: io::Error| TodoError::Write {
            path: file_path.to_path_buf(),
            source,
        };

        let data = serde_json::to_vec(&self.tasks).map_err(TodoError::Encode)?;
        let dir = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(&data).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o644))
                .map_err(write_err)?;
        }
        staged
            .persist(file_path)
            .map_err(|err| write_err(err.error))?;

        tracing::debug!(path = %file_path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn add_task(&mut self, description: impl Into<String>) {
        self.add_task_at(description, Local::now());
    }

    pub fn add_task_at(&mut self, description: impl Into<String>, created_at: DateTime<Local>) {
        self.tasks.push(Task::new(description, created_at));
    }

    pub fn complete_task(&mut self, index: i64) -> Result<(), TodoError> {
        self.complete_task_at(index, Local::now())
    }

    pub fn complete_task_at(&mut self, index: i64, at: DateTime<Local>) -> Result<(), TodoError> {
        let position = self.position(index)?;
        self.tasks[position].complete(at);
        Ok(())
    }

    /// Removes the task; every later task moves up one position.
    pub fn delete_task(&mut self, index: i64) -> Result<Task, TodoError> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    pub fn get(&self, index: i64) -> Option<&Task> {
        self.position(index).ok().map(|position| &self.tasks[position])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Renders the listing. Hidden tasks keep their slot in the numbering.
    pub fn render(&self, verbose: bool, hide_completed: bool) -> String {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| !(hide_completed && t.done))
            .map(|(k, t)| format!("{}\n", t.format_line(k + 1, verbose)))
            .collect()
    }

    fn position(&self, index: i64) -> Result<usize, TodoError> {
        match usize::try_from(index) {
            Ok(i) if i >= 1 && i <= self.tasks.len() => Ok(i - 1),
            _ => Err(TodoError::NotFound(index)),
        }
    }
}
