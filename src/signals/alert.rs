// =============================================================================
// Signal Alert — presentation-ready payload for a notification dispatcher
// =============================================================================
//
// A directional signal becomes an alert with a title, message and level.
// Neutral signals produce no alert. Storing and delivering alerts is the
// dispatcher's job; this module only builds and validates the payload.
// =============================================================================

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::signals::macd_crossover::{Signal, SignalKind};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 500;

/// Severity level understood by the notification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Alert describing a MACD crossover on one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalAlert {
    /// Unique identifier for this alert (UUID v4).
    pub id: String,

    /// Symbol the signal pertains to.
    pub symbol: String,

    pub title: String,
    pub message: String,
    pub level: AlertLevel,

    /// Signal strength in `[0, 100]`.
    pub strength: f64,

    /// ISO 8601 timestamp of when this alert was created.
    pub created_at: String,
}

impl SignalAlert {
    /// Build an alert for a directional signal. Returns `None` for neutral.
    pub fn from_signal(symbol: impl Into<String>, signal: &Signal) -> Option<Self> {
        let level = match signal.kind {
            SignalKind::Bullish => AlertLevel::Success,
            SignalKind::Bearish => AlertLevel::Warning,
            SignalKind::Neutral => return None,
        };
        let symbol = symbol.into();

        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("{} {} signal", symbol, signal.kind),
            message: format!("{} (strength {:.1})", signal.description, signal.strength),
            level,
            strength: signal.strength,
            symbol,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Check the payload limits the notification layer enforces.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            bail!("title is required");
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            bail!("title must be {MAX_TITLE_LEN} characters or less");
        }
        if self.message.is_empty() {
            bail!("message is required");
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            bail!("message must be {MAX_MESSAGE_LEN} characters or less");
        }
        Ok(())
    }
}
