// ABOUTME: CLI commands for developer access tokens
// ABOUTME: Issue, list, show, verify, and remove tokens, returning process exit codes

use std::io::Write;

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use devtoken_security::{TokenError, TokenService};
use devtoken_storage::TokenRecord;
use tracing::debug;

use super::{EXIT_FAILURE, EXIT_MALFORMED_TOKEN, EXIT_SUCCESS};

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Issue a new token. The secret is printed once and cannot be recovered.
    Issue {
        /// Print the credential as JSON
        #[arg(long)]
        json: bool,
    },
    /// List stored tokens (hashed form only)
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a stored token record
    Show {
        /// Token ID
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a token against its stored hash (exit code 1 if not verified, 2 if malformed)
    Verify {
        /// Token ID
        id: String,
        /// Token secret as printed by `devtoken issue`
        token: String,
    },
    /// Remove a token. Removing an unknown ID succeeds.
    Remove {
        /// Token ID
        id: String,
    },
}

impl TokenCommands {
    /// Run the command, writing results to `out` and diagnostics to stderr.
    /// Returns the process exit code.
    pub async fn execute(
        &self,
        service: &TokenService,
        out: &mut dyn Write,
    ) -> anyhow::Result<i32> {
        debug!(command = self.name(), "Running token command");

        match self {
            TokenCommands::Issue { json } => issue_command(service, *json, out).await,
            TokenCommands::List { json } => list_command(service, *json, out).await,
            TokenCommands::Show { id, json } => show_command(service, id, *json, out).await,
            TokenCommands::Verify { id, token } => verify_command(service, id, token, out).await,
            TokenCommands::Remove { id } => remove_command(service, id, out).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TokenCommands::Issue { .. } => "issue",
            TokenCommands::List { .. } => "list",
            TokenCommands::Show { .. } => "show",
            TokenCommands::Verify { .. } => "verify",
            TokenCommands::Remove { .. } => "remove",
        }
    }
}

async fn issue_command(
    service: &TokenService,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let credential = service.issue_token().await?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&credential)?)?;
        return Ok(EXIT_SUCCESS);
    }

    writeln!(out, "{} Token issued", "✓".green().bold())?;
    writeln!(out)?;
    writeln!(out, "  {} {}", "ID:".bold(), credential.id)?;
    writeln!(out, "  {} {}", "Token:".bold(), credential.plaintext_token.yellow())?;
    writeln!(out, "  {} {}", "Created:".bold(), credential.created_at.to_rfc3339())?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "Store this token now - it will not be shown again.".dimmed()
    )?;
    Ok(EXIT_SUCCESS)
}

async fn list_command(
    service: &TokenService,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    let records = service.list_tokens().await?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(EXIT_SUCCESS);
    }

    if records.is_empty() {
        writeln!(out, "{}", "No tokens found".yellow())?;
        writeln!(out, "{}", "Use 'devtoken issue' to create one".dimmed())?;
        return Ok(EXIT_SUCCESS);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Created", "Hash"]);

    for record in &records {
        table.add_row(vec![
            record.id.clone(),
            record.created_at.to_rfc3339(),
            truncate(&record.hashed_token, 24),
        ]);
    }

    writeln!(out, "{}", table)?;
    writeln!(out, "Total: {} tokens", records.len().to_string().cyan())?;
    Ok(EXIT_SUCCESS)
}

async fn show_command(
    service: &TokenService,
    id: &str,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    match service.get_token(id).await? {
        Some(record) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            Ok(EXIT_SUCCESS)
        }
        Some(record) => {
            print_record(&record, out)?;
            Ok(EXIT_SUCCESS)
        }
        None => {
            eprintln!("{}", format!("Token with ID '{}' not found", id).red());
            Ok(EXIT_FAILURE)
        }
    }
}

async fn verify_command(
    service: &TokenService,
    id: &str,
    token: &str,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    match service.verify_token(id, token).await {
        Ok(true) => {
            writeln!(out, "{} Token verified", "✓".green().bold())?;
            Ok(EXIT_SUCCESS)
        }
        Ok(false) => {
            eprintln!("{} Token not verified", "✗".red().bold());
            Ok(EXIT_FAILURE)
        }
        Err(TokenError::Encoding(e)) => {
            eprintln!("{} Token is not valid Base58: {}", "✗".red().bold(), e);
            Ok(EXIT_MALFORMED_TOKEN)
        }
        Err(e) => Err(e.into()),
    }
}

async fn remove_command(
    service: &TokenService,
    id: &str,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    service.remove_token(id).await?;
    writeln!(out, "{} Token {} removed", "✓".green().bold(), id.cyan())?;
    Ok(EXIT_SUCCESS)
}

fn print_record(record: &TokenRecord, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "  {} {}", "ID:".bold(), record.id)?;
    writeln!(out, "  {} {}", "Created:".bold(), record.created_at.to_rfc3339())?;
    writeln!(out, "  {} {}", "Hash:".bold(), record.hashed_token.dimmed())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
