// =============================================================================
// Signals Module
// =============================================================================
//
// Turns derived indicator series into discrete events:
// - MACD crossover classification of the latest bar
// - Alert payloads for the notification layer

pub mod alert;
pub mod macd_crossover;

pub use alert::{AlertLevel, SignalAlert};
pub use macd_crossover::{analyze_macd_signal, Signal, SignalKind};
