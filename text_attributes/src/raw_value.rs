// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

/// Enumerations backed by a primitive value.
///
/// Comparing raw values treats distinct instances of an enumeration as
/// equal whenever they identify the same case, which is what the
/// enumeration-comparing checks want.
pub trait RawValue {
    /// The primitive type backing the enumeration.
    type Raw: Copy + PartialEq + Debug;

    /// Returns the primitive value backing `self`.
    fn raw_value(&self) -> Self::Raw;
}
