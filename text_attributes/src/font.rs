// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptors.

use alloc::string::String;
use core::fmt;

/// Visual weight of a font: the degree of blackness or stroke thickness.
///
/// Values follow the usual hundred-step scale, with [`NORMAL`](Self::NORMAL)
/// at 400 and [`BOLD`](Self::BOLD) at 700. Intermediate values are allowed.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight attribute with the given value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style or 'slope' of a font.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum FontStyle {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// A cursive or "true italic" style.
    Italic,
    /// A skewed or "slanted" style.
    Oblique,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        };
        write!(f, "{value}")
    }
}

/// An owned font descriptor.
///
/// This is the face selection a styling library resolved for a run of text,
/// not a loaded font: it carries the family name and the parameters used to
/// pick a face from it.
#[derive(Clone, PartialEq, Debug)]
pub struct Font {
    /// Name of the font family.
    pub family: String,
    /// Size in points.
    pub size: f32,
    /// Visual weight.
    pub weight: FontWeight,
    /// Visual style.
    pub style: FontStyle,
}

impl Font {
    /// Creates a descriptor for `family` at `size` points with default
    /// weight and style.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }

    /// Sets the visual weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the visual style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}
