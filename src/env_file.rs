//! Dotenv files: loading the credential before setup and recording the
//! created assistant's id afterwards.

use std::path::{Path, PathBuf};

pub const ASSISTANT_ID_VAR: &str = "AI_ASSISTANT_ID";

fn line_key(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    line.split_once('=').map(|(key, _)| key.trim())
}

/// Return `contents` with `key=value` set: an existing assignment of `key`
/// is replaced in place, otherwise the assignment is appended.
pub fn upsert(contents: &str, key: &str, value: &str) -> String {
    let assignment = format!("{key}={value}");
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();
    for line in contents.lines() {
        if line_key(line) == Some(key) {
            if !replaced {
                lines.push(assignment.clone());
                replaced = true;
            }
            continue;
        }
        lines.push(line.to_string());
    }
    if !replaced {
        lines.push(assignment);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Load variables from `path`, or from the nearest `.env` found from the
/// current directory upwards when no path is given.
///
/// Variables already set in the process environment win. A missing file is
/// not an error; returns the file that was loaded, if any.
pub fn load(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => match dotenvy::from_path(path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) if e.not_found() => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load env file");
                None
            }
        },
        None => dotenvy::dotenv().ok(),
    };
    if let Some(path) = &loaded {
        tracing::debug!(path = %path.display(), "loaded env file");
    }
    loaded
}

/// Set `key=value` in the dotenv file at `path`, creating it if missing.
pub fn write_var(path: impl AsRef<Path>, key: &str, value: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };
    std::fs::write(path, upsert(&contents, key, value))?;
    tracing::info!(path = %path.display(), key, "updated env file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_when_missing() {
        assert_eq!(
            upsert("OPENAI_API_KEY=sk-test", ASSISTANT_ID_VAR, "asst_1"),
            "OPENAI_API_KEY=sk-test\nAI_ASSISTANT_ID=asst_1\n"
        );
        assert_eq!(upsert("", ASSISTANT_ID_VAR, "asst_1"), "AI_ASSISTANT_ID=asst_1\n");
    }

    #[test]
    fn replaces_existing_assignment_and_drops_duplicates() {
        let before = "# ids\nAI_ASSISTANT_ID=asst_old\nOPENAI_API_KEY=sk\nexport AI_ASSISTANT_ID = asst_older\n";
        assert_eq!(
            upsert(before, ASSISTANT_ID_VAR, "asst_new"),
            "# ids\nAI_ASSISTANT_ID=asst_new\nOPENAI_API_KEY=sk\n"
        );
    }

    #[test]
    fn ignores_comments_and_prefix_matches() {
        let before = "#AI_ASSISTANT_ID=asst_commented\nAI_ASSISTANT_ID_OLD=x\n";
        assert_eq!(
            upsert(before, ASSISTANT_ID_VAR, "asst_2"),
            "#AI_ASSISTANT_ID=asst_commented\nAI_ASSISTANT_ID_OLD=x\nAI_ASSISTANT_ID=asst_2\n"
        );
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(Some(&dir.path().join(".env"))), None);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        write_var(&path, ASSISTANT_ID_VAR, "asst_a").unwrap();
        write_var(&path, ASSISTANT_ID_VAR, "asst_b").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "AI_ASSISTANT_ID=asst_b\n");
    }
}
