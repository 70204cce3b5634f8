//! JSONL transcript writer.
//!
//! One line per [`ConversationEvent`]:
//!
//! ```json
//! {"type":"tool_call","timestamp":"2024-04-15T09:12:03.120Z","session":"20240415T091201","tool":"web_search","input":"IPL result"}
//! ```
//!
//! The file is opened in append mode so several runs can share one
//! transcript; the `session` field tells them apart.

use liveqa_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Appends conversation events to a JSONL file.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    session: String,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            session: chrono::Local::now().format("%Y%m%dT%H%M%S").to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier stamped on every line written by this logger.
    pub fn session(&self) -> &str {
        &self.session
    }
}

/// Flatten an event into one JSON object.
///
/// Object payloads are merged at the top level; anything else goes under
/// `data`. `type`, `timestamp` and `session` always win over payload keys.
fn build_record(event: ConversationEvent, timestamp: String, session: &str) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert("timestamp".to_string(), Value::from(timestamp));
    record.insert("session".to_string(), Value::from(session));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = build_record(event, timestamp, &self.session);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "question",
            serde_json::json!({ "text": "Who won yesterday's IPL match?" }),
        ));
        logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({ "tool": "web_search", "input": "IPL result" }),
        ));
        let session = logger.session().to_string();
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "question");
        assert_eq!(lines[0]["text"], "Who won yesterday's IPL match?");
        assert_eq!(lines[1]["type"], "tool_call");
        assert_eq!(lines[1]["tool"], "web_search");
        for line in &lines {
            assert!(line["timestamp"].is_string());
            assert_eq!(line["session"], session.as_str());
        }
    }

    #[test]
    fn test_appends_across_loggers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("qa.jsonl");

        for answer in ["first", "second"] {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new(
                "final_answer",
                serde_json::json!({ "text": answer }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["text"], "second");
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let record = build_record(
            ConversationEvent::new("agent_error", serde_json::json!("timed out")),
            "t".to_string(),
            "s",
        );
        assert_eq!(record["type"], "agent_error");
        assert_eq!(record["data"], "timed out");
    }

    #[test]
    fn test_reserved_keys_override_payload() {
        let record = build_record(
            ConversationEvent::new("question", serde_json::json!({ "type": "spoofed" })),
            "t".to_string(),
            "s",
        );
        assert_eq!(record["type"], "question");
    }

    #[test]
    fn test_open_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlConversationLogger::open(dir.path()).is_err());
    }
}
