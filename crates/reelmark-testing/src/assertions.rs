//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output contains the expected number of movie cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    Ok(())
}

/// Assert the badge label of a command result.
pub fn assert_badge(json: &Value, expected: &str) -> Result<()> {
    let label = json["badge"]["label"]
        .as_str()
        .context("Expected 'badge.label' in JSON")?;

    if label != expected {
        anyhow::bail!("Expected badge '{}', got '{}'", expected, label);
    }

    Ok(())
}
