//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cty_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("cty_core ping={}", cty_core::ping());
    println!("cty_core version={}", cty_core::core_version());
}
