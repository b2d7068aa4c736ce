//! Character buffers for Keel.
//!
//! [`StringBase<C>`] is one implementation shared by every character width.
//! The unit type `C` is any [`CharUnit`]; the common widths have aliases:
//!
//! | Alias | Unit |
//! |-------|------|
//! | [`NarrowString`] | `c_char` (platform `char`) |
//! | [`String8`] | `u8` (UTF-8 code units) |
//! | [`String16`] | `u16` (UTF-16 code units) |
//! | [`String32`] | `u32` (Unicode scalar values) |
//! | [`WString`] | [`WChar`] (platform wide char) |
//!
//! Every allocated string keeps a terminator one past its last unit, so
//! [`StringBase::as_ptr`] can be handed to code expecting a terminated
//! sequence. Capacity is the smallest power of two that fits the content
//! plus terminator, never below the configured floor (1024 units unless a
//! [`keel_core::StringConfig`] says otherwise).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod edit;
mod string;
mod unit;

pub use edit::END;
pub use string::StringBase;
pub use unit::{CharUnit, WChar};

pub use keel_core::{ContainerError, StringConfig};

/// String of the platform's narrow `char`.
pub type NarrowString = StringBase<std::ffi::c_char>;
/// String of UTF-8 code units.
pub type String8 = StringBase<u8>;
/// String of UTF-16 code units.
pub type String16 = StringBase<u16>;
/// String of UTF-32 code units.
pub type String32 = StringBase<u32>;
/// String of the platform's wide character unit.
pub type WString = StringBase<WChar>;
