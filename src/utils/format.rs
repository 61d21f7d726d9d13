//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable form
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a compression ratio as a percentage saved
pub fn format_compression_ratio(original: u64, compressed: u64) -> String {
    if original == 0 {
        "N/A".to_string()
    } else {
        let ratio = 100.0 - (compressed as f64 / original as f64 * 100.0);
        format!("{ratio:.1}%")
    }
}
