//! Custom actions for the Resource actor.
//!
//! Engagement counters are bumped through actions rather than updates so the
//! increment happens inside the actor, on the stored value.

/// Custom actions for Resource entities.
///
/// Both actions answer with a copy of the resource after the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAction {
    /// Adds one view. Backs `view_resource`, the reading operation that counts.
    RecordView,
    /// Adds one like. Never removes one: there is no per-user like state.
    Like,
}
