//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate
//! for binaries built on this framework.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! events carry their context as structured fields (`method`, `path`,
//! `order_id`, `status`, …) instead.
//!
//! ```bash
//! RUST_LOG=info shop-admin orders     # request outcomes only
//! RUST_LOG=debug shop-admin orders    # request bodies and response sizes
//! ```
//!
//! ## What Gets Traced
//!
//! - **Gateway**: one `gateway_send` span per request with `method` and `path`,
//!   a warning for every transport failure or rejected status.
//! - **Clients**: `#[instrument]` spans around every resource call.
//! - **Order Board**: start/shutdown, every load and transition outcome.
//!
//! Logs go to stderr so command output on stdout stays clean.

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
