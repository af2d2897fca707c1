// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Text Attributes Dev
//!
//! This crate provides utilities for testing code that produces text
//! attributes: a [`Checks`] recorder offering typed assertions over
//! [`StyleAttributes`](text_attributes::StyleAttributes) maps, and
//! byte-level comparison of rendered images.
//!
//! Checks do not interrupt the test body; failures are recorded as they are
//! found and surface together when the recorder is dropped.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod brush;
mod checks;
mod image;

pub use crate::brush::ColorBrush;
pub use crate::checks::{Checks, Failure, DEFAULT_TOLERANCE};
pub use crate::image::png_data;
