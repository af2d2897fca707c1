// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Attribute, AttributeKind, AttributeValue, Brush, Font, Lookup, ParagraphStyle};

/// A collection of styling attributes, containing at most one value per
/// [`AttributeKind`].
///
/// This is the shape a styling library hands to its tests: the resolved
/// attributes for a run of text. [`apply`](Self::apply) keys a value by its
/// own kind and can never mismatch; [`insert_keyed`](Self::insert_keyed)
/// stores under an explicit kind, so a producer that files a value under
/// the wrong key can be modeled and caught.
#[derive(Clone, PartialEq, Debug)]
pub struct StyleAttributes<B: Brush>(HashMap<AttributeKind, AttributeValue<B>>);

impl<B: Brush> StyleAttributes<B> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the number of attributes present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attributes are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `value` under its own kind, returning any overwritten value.
    pub fn apply(&mut self, value: AttributeValue<B>) -> Option<AttributeValue<B>> {
        self.0.insert(value.kind(), value)
    }

    /// Adds `value` under an explicit `kind`, returning any overwritten
    /// value.
    ///
    /// Unlike [`apply`](Self::apply) this can store a value under a kind it
    /// does not belong to; typed lookups report such entries as
    /// [`Lookup::WrongType`].
    pub fn insert_keyed(
        &mut self,
        kind: AttributeKind,
        value: AttributeValue<B>,
    ) -> Option<AttributeValue<B>> {
        self.0.insert(kind, value)
    }

    /// Removes and returns the value stored under `kind`.
    pub fn remove(&mut self, kind: AttributeKind) -> Option<AttributeValue<B>> {
        self.0.remove(&kind)
    }

    /// Borrows the value stored under `kind`.
    pub fn get(&self, kind: AttributeKind) -> Option<&AttributeValue<B>> {
        self.0.get(&kind)
    }

    /// Typed lookup of the payload stored under `kind`.
    pub fn lookup<T: Attribute<B>>(&self, kind: AttributeKind) -> Lookup<'_, T> {
        match self.0.get(&kind) {
            None => Lookup::Missing(kind),
            Some(value) => match T::extract(value) {
                Some(payload) => Lookup::Found(payload),
                None => Lookup::WrongType {
                    kind,
                    expected: T::LABEL,
                    found: value.type_label(),
                },
            },
        }
    }

    /// The font descriptor stored under [`AttributeKind::Font`].
    pub fn font(&self) -> Lookup<'_, Font> {
        self.lookup(AttributeKind::Font)
    }

    /// The paragraph style stored under [`AttributeKind::Paragraph`].
    pub fn paragraph(&self) -> Lookup<'_, ParagraphStyle> {
        self.lookup(AttributeKind::Paragraph)
    }

    /// The float stored under `kind`.
    pub fn float(&self, kind: AttributeKind) -> Lookup<'_, f32> {
        self.lookup(kind)
    }

    /// The flag stored under `kind`.
    pub fn flag(&self, kind: AttributeKind) -> Lookup<'_, bool> {
        self.lookup(kind)
    }

    /// The brush stored under `kind`.
    pub fn brush(&self, kind: AttributeKind) -> Lookup<'_, B> {
        match self.0.get(&kind) {
            None => Lookup::Missing(kind),
            Some(
                AttributeValue::ForegroundBrush(brush) | AttributeValue::BackgroundBrush(brush),
            ) => Lookup::Found(brush),
            Some(value) => Lookup::WrongType {
                kind,
                expected: "brush",
                found: value.type_label(),
            },
        }
    }

    /// Iterates over the stored attributes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKind, &AttributeValue<B>)> {
        self.0.iter()
    }
}

impl<B: Brush> Default for StyleAttributes<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributeKind, AttributeValue, Font, Lookup, ParagraphStyle, StyleAttributes};

    type TestBrush = (u8, u8, u8);

    const RED: TestBrush = (255, 0, 0);

    fn sample() -> StyleAttributes<TestBrush> {
        let mut attrs = StyleAttributes::new();
        attrs.apply(AttributeValue::Font(Font::new("Roboto", 14.0)));
        attrs.apply(AttributeValue::Paragraph(ParagraphStyle::new()));
        attrs.apply(AttributeValue::ForegroundBrush(RED));
        attrs.apply(AttributeValue::Tracking(1.5));
        attrs
    }

    #[test]
    fn apply_keys_by_value_kind() {
        let attrs = sample();
        assert_eq!(attrs.len(), 4);
        let font = attrs.font().found().expect("font present");
        assert_eq!(font.family, "Roboto");
        assert_eq!(attrs.float(AttributeKind::Tracking), Lookup::Found(&1.5));
    }

    #[test]
    fn apply_overwrites_and_returns_previous() {
        let mut attrs = sample();
        let previous = attrs.apply(AttributeValue::Font(Font::new("Arimo", 10.0)));
        assert_eq!(
            previous,
            Some(AttributeValue::Font(Font::new("Roboto", 14.0)))
        );
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn absent_kind_is_missing() {
        let attrs = sample();
        assert_eq!(
            attrs.float(AttributeKind::BaselineOffset),
            Lookup::Missing(AttributeKind::BaselineOffset)
        );
        assert!(!attrs.flag(AttributeKind::Underline).is_found());
    }

    #[test]
    fn mismatched_entry_is_wrong_type() {
        let mut attrs = StyleAttributes::<TestBrush>::new();
        attrs.insert_keyed(AttributeKind::Font, AttributeValue::Tracking(1.0));
        assert_eq!(
            attrs.font(),
            Lookup::WrongType {
                kind: AttributeKind::Font,
                expected: "Font",
                found: "f32",
            }
        );
    }

    #[test]
    fn brush_lookup_accepts_both_brush_kinds() {
        let mut attrs = sample();
        attrs.apply(AttributeValue::BackgroundBrush((0, 0, 255)));
        assert_eq!(
            attrs.brush(AttributeKind::ForegroundBrush),
            Lookup::Found(&RED)
        );
        assert_eq!(
            attrs.brush(AttributeKind::BackgroundBrush),
            Lookup::Found(&(0, 0, 255))
        );
        assert_eq!(
            attrs.brush(AttributeKind::Font),
            Lookup::WrongType {
                kind: AttributeKind::Font,
                expected: "brush",
                found: "Font",
            }
        );
    }

    #[test]
    fn remove_empties_the_map() {
        let mut attrs = sample();
        attrs.remove(AttributeKind::Font);
        attrs.remove(AttributeKind::Paragraph);
        attrs.remove(AttributeKind::ForegroundBrush);
        attrs.remove(AttributeKind::Tracking);
        assert!(attrs.is_empty());
        assert_eq!(attrs.font(), Lookup::Missing(AttributeKind::Font));
    }
}
