//! Reading boards and event scripts from disk

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use taskboard::{default_board, Board, BoardEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => bail!(
                "unsupported file type (expected .json, .yaml or .yml): {}",
                path.display()
            ),
        }
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;

    let value = match format {
        DocumentFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        DocumentFormat::Yaml => serde_yaml_ng::from_str(&text)
            .with_context(|| format!("invalid YAML in {}", path.display()))?,
    };
    Ok(value)
}

/// Load the board from a seed file, or the starter board when no path is
/// given. Seeds with duplicate task ids are rejected.
pub fn load_board(path: Option<&Path>) -> Result<Board> {
    match path {
        Some(path) => {
            let board: Board = read_document(path)?;
            tracing::debug!(
                path = %path.display(),
                columns = board.column_count(),
                tasks = board.task_count(),
                "seed loaded"
            );
            Ok(board)
        }
        None => default_board().context("cannot build starter board"),
    }
}

/// Load an ordered list of board events
pub fn load_script(path: &Path) -> Result<Vec<BoardEvent>> {
    let events: Vec<BoardEvent> = read_document(path)?;
    tracing::debug!(path = %path.display(), events = events.len(), "script loaded");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard::ColumnId;
    use tempfile::TempDir;

    const SEED_YAML: &str = "\
doing:
  name: Doing
  items:
    - { id: t2, content: Second }
todo:
  name: To do
  items:
    - { id: t1, content: First }
";

    #[test]
    fn test_yaml_seed_keeps_document_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.yaml");
        fs::write(&path, SEED_YAML).unwrap();

        let board = load_board(Some(&path)).unwrap();
        let order: Vec<_> = board.columns().map(|c| c.id.to_string()).collect();
        assert_eq!(order, vec!["doing", "todo"]);
        assert_eq!(
            board.column(&ColumnId::from("todo")).unwrap().name,
            "To do"
        );
    }

    #[test]
    fn test_duplicate_task_in_seed_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        fs::write(
            &path,
            r#"{"a": {"name": "A", "items": [{"id": "t1", "content": "x"}]},
                "b": {"name": "B", "items": [{"id": "t1", "content": "y"}]}}"#,
        )
        .unwrap();

        assert!(load_board(Some(&path)).is_err());
    }

    #[test]
    fn test_missing_seed_uses_default_board() {
        let board = load_board(None).unwrap();
        assert_eq!(board.column_count(), 3);
        assert_eq!(board.task_count(), 5);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = load_script(Path::new("events.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn test_script_parses_events() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.yml");
        fs::write(
            &path,
            "- event: task\n  task_id: t1\n  input: { type: click }\n- event: escape_key\n",
        )
        .unwrap();

        let events = load_script(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], BoardEvent::EscapeKey);
    }
}
