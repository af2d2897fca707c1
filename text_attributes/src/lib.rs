// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strongly typed text styling attributes.
//!
//! A [`StyleAttributes`] map carries the formatting a styling library
//! resolved for a run of text: the font, the paragraph style, brushes and
//! scalar adjustments. Each attribute is stored under an [`AttributeKind`]
//! and read back through typed lookups that report
//! [`Found`](Lookup::Found), [`WrongType`](Lookup::WrongType) or
//! [`Missing`](Lookup::Missing) rather than casting at runtime.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attribute;
mod font;
mod lookup;
mod paragraph;
mod raw_value;
mod style_attributes;

pub use crate::attribute::{Attribute, AttributeKind, AttributeValue, Brush};
pub use crate::font::{Font, FontStyle, FontWeight};
pub use crate::lookup::Lookup;
pub use crate::paragraph::{Alignment, LineBreakMode, ParagraphStyle};
pub use crate::raw_value::RawValue;
pub use crate::style_attributes::StyleAttributes;
