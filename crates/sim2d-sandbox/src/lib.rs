//! Interactive session layer.
//!
//! A [`Session`] owns one engine of each kind, routes [`Command`]s to
//! whichever is active, advances it under the substep controller, and
//! shades the active field into an RGBA8 frame. The session is pure state:
//! it opens no window and reads no input device, so a UI shell, a test, or
//! a headless driver can all run it the same way.
//!
//! [`Command`]: sim2d_core::Command

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod session;

pub use session::{Mode, Session};
