// crates/triage/src/cli/analyze.rs
// CLI handlers for `triage bug|code|suggest|config`

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use triage::Analyzer;
use triage::config::{Settings, TriageConfig};

/// Print a result as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read a file, or stdin when the path is "-"
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Map a file extension to the language name used in prompts
pub fn infer_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let language = match ext.as_str() {
        "rs" => "rust",
        "ts" | "tsx" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "py" => "python",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "rb" => "ruby",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "php" => "php",
        "swift" => "swift",
        "sql" => "sql",
        "sh" | "bash" => "bash",
        _ => return None,
    };
    Some(language)
}

pub async fn run_bug(
    analyzer: &Analyzer,
    title: String,
    description: String,
    stack_trace_file: Option<PathBuf>,
) -> Result<()> {
    let stack_trace = stack_trace_file.as_deref().map(read_input).transpose()?;

    let analysis = analyzer
        .analyze_bug(&title, &description, stack_trace.as_deref())
        .await?;
    print_json(&analysis)
}

pub async fn run_code(analyzer: &Analyzer, file: PathBuf, language: Option<String>) -> Result<()> {
    let language = match language.or_else(|| infer_language(&file).map(str::to_string)) {
        Some(l) => l,
        None => bail!(
            "Cannot infer language for {}; pass --language",
            file.display()
        ),
    };

    let code = read_input(&file)?;
    if code.trim().is_empty() {
        bail!("{} is empty", file.display());
    }

    let analysis = analyzer
        .analyze_code(&code, &language, &file.display().to_string())
        .await?;
    print_json(&analysis)
}

pub async fn run_suggest(
    analyzer: &Analyzer,
    context: String,
    language: String,
    requirements: String,
) -> Result<()> {
    let suggestions = analyzer
        .generate_suggestions(&context, &language, &requirements)
        .await?;
    print_json(&serde_json::json!({ "suggestions": suggestions }))
}

pub fn run_config(settings: &Settings) -> Result<()> {
    println!("Config file: {}", TriageConfig::config_path().display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    println!();

    let validation = settings.validate();
    println!("{}", validation.report());
    if !validation.is_valid() {
        bail!("invalid configuration");
    }
    Ok(())
}
