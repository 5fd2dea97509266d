use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// `asctime` layout used by the verbose listing.
pub const VERBOSE_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "Task")]
    pub description: String,
    #[serde(rename = "Done")]
    pub done: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Local>,
    #[serde(rename = "CompletedAt", default, with = "zero_time")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(description: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn complete(&mut self, at: DateTime<Local>) {
        self.done = true;
        self.completed_at = Some(at);
    }

    /// One listing line, without the trailing newline.
    pub fn format_line(&self, position: usize, verbose: bool) -> String {
        let marker = if self.done { "X " } else { " " };
        if verbose {
            format!(
                "{marker}{position}: {} - {}",
                self.description,
                self.created_at.format(VERBOSE_TIME_FORMAT)
            )
        } else {
            format!("{marker}{position}: {}", self.description)
        }
    }
}

/// Files written by older tooling store "not completed" as the zero time
/// instead of omitting the field.
mod zero_time {
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serializer};

    const ZERO: &str = "0001-01-01T00:00:00Z";

    pub fn serialize<S>(value: &Option<DateTime<Local>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&at.to_rfc3339()),
            None => serializer.serialize_str(ZERO),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") | Some(ZERO) => Ok(None),
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|at| Some(at.with_timezone(&Local)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap()
    }

    #[test]
    fn new_task_is_open() {
        let task = Task::new("buy milk", fixed_time());
        assert!(!task.done);
        assert!(task.completed_at.is_none());
        assert_eq!(task.created_at, fixed_time());
    }

    #[test]
    fn formats_plain_and_done_lines() {
        let mut task = Task::new("buy milk", fixed_time());
        assert_eq!(task.format_line(1, false), " 1: buy milk");
        task.complete(fixed_time());
        assert_eq!(task.format_line(3, false), "X 3: buy milk");
    }

    #[test]
    fn verbose_line_uses_asctime_layout() {
        let task = Task::new("walk dog", fixed_time());
        assert_eq!(task.format_line(2, true), " 2: walk dog - Tue Mar  5 09:07:01 2024");
    }

    #[test]
    fn open_task_serializes_zero_completion_time() {
        let task = Task::new("walk dog", fixed_time());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["Task"], "walk dog");
        assert_eq!(json["Done"], false);
        assert_eq!(json["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn reads_legacy_records() {
        let raw = r#"{"Task":"old","Done":true,"CreatedAt":"2023-01-02T03:04:05.123456789+00:00","CompletedAt":"2023-01-03T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert!(task.done);
        assert!(task.completed_at.is_some());

        let raw = r#"{"Task":"new","Done":false,"CreatedAt":"2023-01-02T03:04:05Z","CompletedAt":"0001-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn missing_completion_field_is_unset() {
        let raw = r#"{"Task":"new","Done":false,"CreatedAt":"2023-01-02T03:04:05Z"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert!(task.completed_at.is_none());
    }
}
