//! Core types and traits for the sim2d simulation sandbox.
//!
//! This is the leaf crate with zero dependencies. It defines the control
//! command vocabulary routed from the input collaborator to the active
//! engine, and the [`Integrator`] trait implemented by the conditionally
//! stable finite-difference engines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod integrator;

pub use command::{Command, Param};
pub use integrator::Integrator;
