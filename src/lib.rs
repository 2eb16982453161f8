//! HR & Payroll Architecture Viewer (archview)
//!
//! TUI application that presents the layered architecture of an HR and
//! payroll system, with one expandable layer section at a time.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `state` and
//! `view_state` are pure; `view`, `config` and `logging` touch the outside
//! world.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
