// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph-level formatting.

use crate::RawValue;

/// Horizontal alignment of lines within a paragraph.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[repr(u8)]
pub enum Alignment {
    /// This is [`Alignment::Left`] for LTR text and [`Alignment::Right`] for RTL text.
    #[default]
    Start,
    /// This is [`Alignment::Right`] for LTR text and [`Alignment::Left`] for RTL text.
    End,
    /// Align content to the left edge.
    Left,
    /// Align each line centered within the container.
    Middle,
    /// Align content to the right edge.
    Right,
    /// Justify each line by spacing out content, except for the last line.
    Justified,
}

impl RawValue for Alignment {
    type Raw = u8;

    fn raw_value(&self) -> u8 {
        *self as u8
    }
}

/// How content that does not fit a line is broken or truncated.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[repr(u8)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordBoundary,
    /// Wrap at character boundaries.
    CharacterBoundary,
    /// Clip overflowing content at the paragraph edge.
    Clip,
    /// Drop leading content and mark the omission at the start.
    TruncateStart,
    /// Drop interior content and mark the omission in the middle.
    TruncateMiddle,
    /// Drop trailing content and mark the omission at the end.
    TruncateEnd,
}

impl RawValue for LineBreakMode {
    type Raw = u8;

    fn raw_value(&self) -> u8 {
        *self as u8
    }
}

/// Paragraph-level text formatting.
///
/// Spacing and indent fields are in points. The default value has every
/// metric at zero with start alignment and word-boundary breaking.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ParagraphStyle {
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space added after the paragraph.
    pub paragraph_spacing: f32,
    /// Space added before the paragraph.
    pub paragraph_spacing_before: f32,
    /// Indentation of the first line.
    pub first_line_indent: f32,
    /// Indentation of every line but the first.
    pub head_indent: f32,
    /// Multiplier applied to the natural line height. Zero means unset.
    pub line_height_multiple: f32,
    /// Horizontal alignment of lines.
    pub alignment: Alignment,
    /// Breaking behavior for overflowing content.
    pub line_break: LineBreakMode,
}

impl ParagraphStyle {
    /// Creates a paragraph style with all fields at their defaults.
    pub fn new() -> Self {
        Self::default()
    }
}
