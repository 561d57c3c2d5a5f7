//! Inspection tracking for a residential complex.
//!
//! Private units and shared common zones each own a set of inspectable
//! items; checklists define inspection templates; inspections record a
//! visit against exactly one unit or one zone, with per-item detail
//! results tying an observed condition state to an item. The hard part
//! lives in [`inspection`]: the exclusive-or target rules and the
//! cross-entity coherence checks that a relational schema alone cannot
//! guarantee.

pub mod catalog;
pub mod checklist;
pub mod config;
pub mod error;
pub mod inspection;
pub mod inventory;
pub mod telemetry;
