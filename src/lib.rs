//! runshot: running-app screenshots to JSON.
//!
//! Collects summary, heart-rate and split screenshots in upload order, sends
//! them with a fixed instruction prompt to a Gemini model in a single request,
//! and hands back the model's text exactly as returned.
//!
//! # Quick Start
//!
//! ```no_run
//! use runshot::collector::ImageCollector;
//! use runshot::config::RunshotConfig;
//! use runshot::models::GeminiModel;
//!
//! # async fn example() -> runshot::error::Result<()> {
//! let config = RunshotConfig::from_env()?;
//! let mut collector = ImageCollector::new();
//! collector.push_paths(&["summary.png", "heart.png", "splits.png"]).await?;
//! let result =
//!     runshot::generation::convert(GeminiModel::Gemini25FlashLite, &config, &collector.finish())
//!         .await?;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod generation;
pub mod html;
pub mod models;
pub mod prelude;
pub mod preview;
pub mod prompt;
pub mod provider;
pub mod types;
pub mod web;

#[cfg(feature = "cli")]
pub mod cli;
