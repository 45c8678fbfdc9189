use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use fastapi_output::RichOutput;
use serde::Serialize;
use sqlmodel_console::OutputMode as SqlModelOutputMode;
use tracing::info;

use crate::error::{Result, TintError};

#[derive(Debug, Clone, Serialize)]
pub struct OutputIntegration {
    pub fastapi_mode: String,
    pub fastapi_agent: bool,
    pub fastapi_ci: bool,
    pub fastapi_tty: bool,
    pub sqlmodel_mode: String,
    pub sqlmodel_agent: bool,
}

impl OutputIntegration {
    #[must_use]
    pub fn detect() -> Self {
        let fastapi_detection = fastapi_output::detect_environment();
        let fastapi_mode = fastapi_output::OutputMode::auto();
        let sqlmodel_mode = SqlModelOutputMode::detect();
        Self {
            fastapi_mode: fastapi_mode.as_str().to_string(),
            fastapi_agent: fastapi_detection.is_agent,
            fastapi_ci: fastapi_detection.is_ci,
            fastapi_tty: fastapi_detection.is_tty,
            sqlmodel_mode: sqlmodel_mode.as_str().to_string(),
            sqlmodel_agent: SqlModelOutputMode::is_agent_environment(),
        }
    }

    #[must_use]
    pub fn should_emit_json(&self) -> bool {
        self.sqlmodel_mode == "json"
    }
}

/// Decorative progress output; the payload never goes through here.
#[derive(Debug, Clone)]
pub struct CliOutput {
    inner: RichOutput,
    enabled: bool,
}

impl CliOutput {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: RichOutput::auto(),
            enabled,
        }
    }

    pub fn rule(&self, title: Option<&str>) {
        if self.enabled {
            self.inner.rule(title);
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            self.inner.info(message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled {
            self.inner.success(message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.enabled {
            self.inner.warning(message);
        }
    }
}

#[must_use]
pub fn output_for(integration: &OutputIntegration) -> CliOutput {
    CliOutput::new(!integration.should_emit_json())
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(TintError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "output written");
    Ok(())
}

/// Write the payload to `output`, or stdout when absent.
pub fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => write_string(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::TintError;

    use super::{OutputIntegration, emit, output_for, read_input};

    #[test]
    fn emit_to_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/theme.css");
        emit(Some(&path), ":root {\n}\n").expect("emit");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), ":root {\n}\n");
        assert_eq!(read_input(&path).expect("read_input"), ":root {\n}\n");
    }

    #[test]
    fn read_input_reports_missing_file() {
        let missing = Path::new("/tmp/tint/no-such-theme.json");
        match read_input(missing).expect_err("missing") {
            TintError::MissingPath { path } => assert_eq!(path, missing),
            other => panic!("expected MissingPath, got {other}"),
        }
    }

    #[test]
    fn output_for_disables_human_output_when_json_mode_requested() {
        let json_integration = OutputIntegration {
            fastapi_mode: "plain".to_string(),
            fastapi_agent: true,
            fastapi_ci: false,
            fastapi_tty: false,
            sqlmodel_mode: "json".to_string(),
            sqlmodel_agent: true,
        };
        let human_integration = OutputIntegration {
            sqlmodel_mode: "plain".to_string(),
            ..json_integration.clone()
        };

        assert!(!output_for(&json_integration).enabled);
        assert!(output_for(&human_integration).enabled);
    }
}
