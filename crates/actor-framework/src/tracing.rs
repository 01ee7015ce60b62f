//! # Observability & Tracing
//!
//! Every actor logs through the `tracing` crate with structured fields:
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` (with final store size)
//! - **Entity operations**: `Create`, `Get`, `List`, `Update`, `Delete`, `Action` at `debug`
//!   with their payloads, followed by an `info` line on success or a `warn` line on failure
//! - **Client calls**: spans from `#[instrument]` on the client methods
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `RUST_LOG=debug` a view of a catalog entry reads like:
//!
//! ```text
//! DEBUG view_resource{id=ResourceId(1)}: Sending request
//! DEBUG Action entity_type="Resource" id=resource_1 action=RecordView
//! INFO Action ok entity_type="Resource" id=resource_1
//! ```

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
///
/// Uses the compact format without module targets; `entity_type` already tells the
/// actors apart. Calling it twice is harmless: the second install is ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
