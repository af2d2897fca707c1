// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use crate::{Font, ParagraphStyle};

/// Trait for types that represent the color of glyphs or decorations.
pub trait Brush: Clone + PartialEq + Default + Debug {}

impl<T: Clone + PartialEq + Default + Debug> Brush for T {}

/// The key an attribute is stored under in a
/// [`StyleAttributes`](crate::StyleAttributes) map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AttributeKind {
    /// The resolved font descriptor.
    Font,
    /// Paragraph-level formatting.
    Paragraph,
    /// Brush used to paint glyphs.
    ForegroundBrush,
    /// Brush used to paint behind the text.
    BackgroundBrush,
    /// Vertical offset of the baseline, in points.
    BaselineOffset,
    /// Extra spacing between letters, in points.
    Tracking,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
}

/// A value stored in a [`StyleAttributes`](crate::StyleAttributes) map.
///
/// One variant per [`AttributeKind`], so a value always knows the kind it
/// belongs under.
#[derive(Clone, PartialEq, Debug)]
pub enum AttributeValue<B: Brush> {
    /// The resolved font descriptor.
    Font(Font),
    /// Paragraph-level formatting.
    Paragraph(ParagraphStyle),
    /// Brush used to paint glyphs.
    ForegroundBrush(B),
    /// Brush used to paint behind the text.
    BackgroundBrush(B),
    /// Vertical offset of the baseline, in points.
    BaselineOffset(f32),
    /// Extra spacing between letters, in points.
    Tracking(f32),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
}

impl<B: Brush> AttributeValue<B> {
    /// The kind this value is stored under by
    /// [`StyleAttributes::apply`](crate::StyleAttributes::apply).
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Font(_) => AttributeKind::Font,
            Self::Paragraph(_) => AttributeKind::Paragraph,
            Self::ForegroundBrush(_) => AttributeKind::ForegroundBrush,
            Self::BackgroundBrush(_) => AttributeKind::BackgroundBrush,
            Self::BaselineOffset(_) => AttributeKind::BaselineOffset,
            Self::Tracking(_) => AttributeKind::Tracking,
            Self::Underline(_) => AttributeKind::Underline,
            Self::Strikethrough(_) => AttributeKind::Strikethrough,
        }
    }

    /// Diagnostic label for the payload carried by this value.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Font(_) => "Font",
            Self::Paragraph(_) => "ParagraphStyle",
            Self::ForegroundBrush(_) | Self::BackgroundBrush(_) => "brush",
            Self::BaselineOffset(_) | Self::Tracking(_) => "f32",
            Self::Underline(_) | Self::Strikethrough(_) => "bool",
        }
    }
}

/// Types that can be read out of an [`AttributeValue`].
///
/// Implementations tie a payload type to the variants that carry it, which
/// is what lets [`StyleAttributes::lookup`](crate::StyleAttributes::lookup)
/// stay typed instead of casting at runtime.
pub trait Attribute<B: Brush>: Sized + PartialEq + Debug {
    /// Diagnostic label for this payload type.
    const LABEL: &'static str;

    /// Borrows the payload if `value` carries this type.
    fn extract(value: &AttributeValue<B>) -> Option<&Self>;
}

impl<B: Brush> Attribute<B> for Font {
    const LABEL: &'static str = "Font";

    fn extract(value: &AttributeValue<B>) -> Option<&Self> {
        match value {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }
}

impl<B: Brush> Attribute<B> for ParagraphStyle {
    const LABEL: &'static str = "ParagraphStyle";

    fn extract(value: &AttributeValue<B>) -> Option<&Self> {
        match value {
            AttributeValue::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

impl<B: Brush> Attribute<B> for f32 {
    const LABEL: &'static str = "f32";

    fn extract(value: &AttributeValue<B>) -> Option<&Self> {
        match value {
            AttributeValue::BaselineOffset(float) | AttributeValue::Tracking(float) => Some(float),
            _ => None,
        }
    }
}

impl<B: Brush> Attribute<B> for bool {
    const LABEL: &'static str = "bool";

    fn extract(value: &AttributeValue<B>) -> Option<&Self> {
        match value {
            AttributeValue::Underline(flag) | AttributeValue::Strikethrough(flag) => Some(flag),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Attribute, AttributeKind, AttributeValue, Font, ParagraphStyle};

    // Tests instantiate the brush parameter with a plain color-like tuple.
    type TestBrush = (u8, u8, u8);

    #[test]
    fn value_reports_its_own_kind() {
        let value: AttributeValue<TestBrush> = AttributeValue::Font(Font::new("Roboto", 12.0));
        assert_eq!(value.kind(), AttributeKind::Font);

        let value: AttributeValue<TestBrush> = AttributeValue::Tracking(1.5);
        assert_eq!(value.kind(), AttributeKind::Tracking);
    }

    #[test]
    fn extraction_matches_payload_type() {
        let value: AttributeValue<TestBrush> = AttributeValue::BaselineOffset(2.0);
        assert_eq!(<f32 as Attribute<TestBrush>>::extract(&value), Some(&2.0));
        assert!(<ParagraphStyle as Attribute<TestBrush>>::extract(&value).is_none());
    }

    #[test]
    fn shared_payload_types_extract_from_every_carrier() {
        let underline: AttributeValue<TestBrush> = AttributeValue::Underline(true);
        let strikethrough: AttributeValue<TestBrush> = AttributeValue::Strikethrough(true);
        assert_eq!(
            <bool as Attribute<TestBrush>>::extract(&underline),
            Some(&true)
        );
        assert_eq!(
            <bool as Attribute<TestBrush>>::extract(&strikethrough),
            Some(&true)
        );
    }
}
