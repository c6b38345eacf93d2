//! Command-line interface for runshot.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::prompt::PromptTemplate;

/// Running session screenshots to JSON
#[derive(Parser, Debug)]
#[command(name = "runshot", version, about = "Running session screenshots to JSON via Gemini")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the upload page
    Serve(ServeArgs),
    /// Convert screenshot files and print the model's answer
    Convert(ConvertArgs),
    /// List the selectable models
    Models,
}

/// Arguments for `runshot serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides RUNSHOT_ADDR)
    #[arg(short, long)]
    pub addr: Option<SocketAddr>,
}

/// Arguments for `runshot convert`.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Model to use (gemini-3-flash-preview or gemini-2.5-flash-lite)
    #[arg(short, long, default_value = "gemini-3-flash-preview")]
    pub model: String,

    /// Prompt variant (overrides RUNSHOT_PROMPT)
    #[arg(short, long)]
    pub prompt: Option<PromptTemplate>,

    /// Screenshots in order: summary, heart rate, then split pages
    #[arg(required = true)]
    pub images: Vec<PathBuf>,
}
