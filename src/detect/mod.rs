//! Pure heuristics over device records: category classification and
//! suspicious device detection.

pub mod category;
pub mod suspicious;

pub use category::classify;
pub use suspicious::{find_suspicious, Indicator, SuspiciousDevice};
