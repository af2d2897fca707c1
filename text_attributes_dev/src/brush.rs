// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tiny_skia::Color;

/// A solid color brush for instantiating
/// [`StyleAttributes`](text_attributes::StyleAttributes) in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBrush {
    /// The brush color.
    pub color: Color,
}

impl ColorBrush {
    /// Creates a brush painting with `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for ColorBrush {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}
