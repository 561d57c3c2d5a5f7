//! The inspection engine and the pending-remediation report built on it.
//!
//! An inspection is bound to exactly one unit or one zone; every detail
//! recorded against it must observe an item owned by that same target.
//! Those two rules are enforced here and nowhere else, so everything
//! downstream (the pending report in particular) can trust the
//! ownership chain.

pub mod domain;
pub mod memory;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AddDetail, CreateInspection, DetailItemRef, Inspection, InspectionDetail, InspectionDetailId,
    InspectionId, InspectionTarget, InvalidReference, InvalidTarget,
};
pub use memory::InMemoryInspectionStore;
pub use report::{PendingEntry, PendingPolicy, PendingReport, PendingReportAggregator, ReportError};
pub use repository::{InspectionStore, InspectionStoreError, NewDetail, NewInspection};
pub use router::{inspection_router, pending_report_router};
pub use service::{InspectionError, InspectionService};
