//! Summary statistics for agriculture records.
//!
//! This crate transforms the flat record list into the derived forms
//! consumed by table and chart views: per-year production extremes and
//! per-crop average yields with deterministic palette assignment.

pub mod crop_yield;
pub mod memo;
pub mod palette;
pub mod year_extremes;
