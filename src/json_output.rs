//! JSON Output for Simulator Events
//!
//! Structured records for reports and rejected commands, emitted one object
//! per line when the JSON output format is selected.

use crate::direction::Direction;
use crate::error::CommandError;
use crate::robot::Placement;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Get current timestamp as f64 seconds since UNIX epoch with consistent precision
pub fn current_timestamp() -> f64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();

    // Round to 6 decimal places for consistent formatting
    (timestamp * 1_000_000.0).round() / 1_000_000.0
}

/// Position report event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEvent {
    /// Timestamp when event occurred
    pub timestamp: f64,
    /// Event type for JSON parsing
    #[serde(rename = "type")]
    pub event_type: String,
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

/// Rejected command event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningEvent {
    /// Timestamp when event occurred
    pub timestamp: f64,
    /// Event type for JSON parsing
    #[serde(rename = "type")]
    pub event_type: String,
    /// Keyword of the rejected command
    pub command: String,
    /// Human-readable reason
    pub message: String,
}

impl ReportEvent {
    pub fn new(placement: &Placement) -> Self {
        Self {
            timestamp: current_timestamp(),
            event_type: "report".to_string(),
            x: placement.x,
            y: placement.y,
            facing: placement.facing,
        }
    }
}

impl WarningEvent {
    pub fn new(warning: &CommandError) -> Self {
        Self {
            timestamp: current_timestamp(),
            event_type: "warning".to_string(),
            command: warning.command().to_string(),
            message: warning.to_string(),
        }
    }
}

/// Serialize any event to a single JSON line
pub fn to_json_line<T: Serialize>(event: &T) -> serde_json::Result<String> {
    serde_json::to_string(event)
}
