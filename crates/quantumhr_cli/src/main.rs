//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quantumhr_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("quantumhr_core ping={}", quantumhr_core::ping());
    println!("quantumhr_core version={}", quantumhr_core::core_version());
}
