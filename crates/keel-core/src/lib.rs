//! Core types for the Keel container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces every container shares:
//!
//! - [`ContainerError`]: the single error type returned by index-checked and
//!   fallible operations.
//! - [`GrowthPolicy`] and [`StringConfig`]: capacity growth rules.
//! - [`alloc`]: the global allocation collaborator (allocate / reallocate /
//!   free), which turns a null allocation into an error instead of a
//!   dangling buffer.
//! - [`RawBuf`]: an exclusively owned, typed heap allocation that knows its
//!   capacity but nothing about which slots are initialised.
//!
//! # Ownership model
//!
//! ```text
//! Vector<T> / StringBase<C>
//! └── RawBuf<T>          (pointer + capacity, frees on drop)
//!     └── alloc::*       (std::alloc, null → ContainerError)
//! ```
//!
//! Containers own exactly one `RawBuf` and track their own initialised
//! length. `RawBuf` never drops element values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod raw;

// Public re-exports for the primary API surface.
pub use config::{GrowthPolicy, StringConfig};
pub use error::ContainerError;
pub use raw::RawBuf;
