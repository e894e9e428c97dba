use crate::config::{Command, TomlConfig};
use crate::core::filename::FilenameRules;
use crate::core::fs::ensure_directory;
use crate::core::page_id::{extract_page_id, format_page_id, PageId};
use crate::domain::ports::EnvSource;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub success: bool,
}

impl CommandOutput {
    fn ok(stdout: Vec<String>) -> Self {
        Self {
            stdout,
            stderr: Vec::new(),
            success: true,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: vec![message],
            success: false,
        }
    }
}

/// Runs one CLI command. `env` and `cwd` back the `token` lookup.
pub fn execute<E: EnvSource + ?Sized>(
    command: &Command,
    config: &TomlConfig,
    json: bool,
    env: &E,
    cwd: &Path,
) -> anyhow::Result<CommandOutput> {
    match command {
        Command::Token {
            env_var,
            file,
            start_dir,
        } => {
            let mut lookup = config.token_lookup();
            if let Some(var) = env_var {
                lookup = lookup.env_var(var.as_str());
            }
            if let Some(file) = file {
                lookup = lookup.env_file(file.as_str());
            }
            if let Some(dir) = start_dir {
                lookup = lookup.start_dir(dir.as_path());
            }

            match lookup.find_from(env, cwd) {
                Some(found) => {
                    tracing::info!("Found Notion token in {}", found.source);
                    let line = if json {
                        to_json(&found)?
                    } else {
                        found.token
                    };
                    Ok(CommandOutput::ok(vec![line]))
                }
                None => Ok(CommandOutput::failed(format!(
                    "❌ No Notion token found in ${} or any {} file",
                    env_var.as_deref().unwrap_or(config.env_var()),
                    file.as_deref().unwrap_or(config.env_file())
                ))),
            }
        }

        Command::Sanitize { names, ext } => {
            let rules: FilenameRules = config.filename_rules();
            let sanitized: Vec<String> = names
                .iter()
                .map(|name| match ext {
                    Some(ext) => rules.with_extension(name, ext),
                    None => rules.sanitize(name),
                })
                .collect();
            lines(json, sanitized)
        }

        Command::ExtractId {
            references,
            hyphenated,
            strict,
        } => {
            let mut ids = Vec::with_capacity(references.len());
            for reference in references {
                let id = if *strict {
                    PageId::parse(reference)
                        .with_context(|| format!("Cannot extract a page id from {:?}", reference))?
                        .as_hex()
                        .to_string()
                } else {
                    extract_page_id(reference)
                };
                ids.push(if *hyphenated { format_page_id(&id) } else { id });
            }
            lines(json, ids)
        }

        Command::FormatId { ids } => {
            let formatted: Vec<String> = ids.iter().map(|id| format_page_id(id)).collect();
            lines(json, formatted)
        }

        Command::EnsureDir { paths } => {
            for path in paths {
                let target = cwd.join(path);
                ensure_directory(&target)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                tracing::info!("📁 {}", path.display());
            }
            Ok(CommandOutput::ok(Vec::new()))
        }
    }
}

fn lines(json: bool, values: Vec<String>) -> anyhow::Result<CommandOutput> {
    if json {
        Ok(CommandOutput::ok(vec![to_json(&values)?]))
    } else {
        Ok(CommandOutput::ok(values))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
