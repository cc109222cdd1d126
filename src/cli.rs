// src/cli.rs

use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::models::{AmrClaim, AuthenticationMethod, LookupMode};

// === CLI ===

#[derive(Parser, Debug)]
#[command(name = "amr")]
#[command(author, version, about = "Справочник кодов Authentication Method Reference", long_about = None)]
pub struct Cli {
    /// Путь к config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Только канонические коды (без `ftp`)
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Список всех методов
    List {
        #[arg(short, long)]
        json: bool,
    },
    /// Показать метод по коду
    Show { code: String },
    /// Проверить коды
    Check {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Собрать claim `amr` из кодов
    Claim { codes: Vec<String> },
}

#[derive(Serialize)]
struct MethodView {
    code: &'static str,
    label: &'static str,
    description: &'static str,
}

impl From<AuthenticationMethod> for MethodView {
    fn from(method: AuthenticationMethod) -> Self {
        Self {
            code: method.code(),
            label: method.label(),
            description: method.description(),
        }
    }
}

impl Cli {
    /// Режим поиска: флаг `--strict` важнее конфига
    pub fn lookup_mode(&self, config: &AppConfig) -> LookupMode {
        if self.strict {
            LookupMode::Strict
        } else {
            config.lookup.mode()
        }
    }

    pub fn run<W: Write>(&self, config: &AppConfig, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
        let mode = self.lookup_mode(config);

        match &self.command {
            Command::List { json } => handle_list(*json, out)?,
            Command::Show { code } => handle_show(code, mode, out)?,
            Command::Check { codes } => handle_check(codes, mode, out)?,
            Command::Claim { codes } => handle_claim(codes, mode, out)?,
        }

        Ok(())
    }
}

// === Обработчики ===

fn handle_list<W: Write>(json: bool, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let views: Vec<MethodView> = AuthenticationMethod::ALL.into_iter().map(MethodView::from).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
    } else {
        for method in AuthenticationMethod::ALL {
            writeln!(out, "{} | {}", method.code(), method.label())?;
        }
    }
    Ok(())
}

fn handle_show<W: Write>(code: &str, mode: LookupMode, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    match AuthenticationMethod::from_code_with(Some(code), mode)? {
        Some(method) => {
            tracing::debug!(code, resolved = method.code(), "AMR lookup");
            writeln!(out, "{}: {}", method.code(), method.label())?;
            if !method.description().is_empty() {
                writeln!(out, "{}", method.description().trim_end())?;
            }
        }
        None => writeln!(out, "метод не указан")?,
    }
    Ok(())
}

fn handle_check<W: Write>(codes: &[String], mode: LookupMode, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    for code in codes {
        match AuthenticationMethod::from_code_with(Some(code.as_str()), mode)? {
            Some(method) => writeln!(out, "✅ {} → {}", code, method)?,
            None => writeln!(out, "➖ пустой код")?,
        }
    }
    Ok(())
}

fn handle_claim<W: Write>(codes: &[String], mode: LookupMode, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let claim = AmrClaim::from_codes(codes.iter().map(String::as_str), mode)?;
    writeln!(out, "{}", serde_json::to_string(&serde_json::json!({ "amr": claim }))?)?;
    Ok(())
}
