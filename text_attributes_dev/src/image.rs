// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte-level comparison of rendered images.

use tiny_skia::Pixmap;

use crate::Checks;

/// Encodes `image` as PNG bytes.
///
/// The encoding is deterministic for a given pixel buffer, so two pixmaps
/// can be compared through their encodings. A [`Pixmap`] always has
/// non-zero dimensions, which makes every image encodable.
pub fn png_data(image: &Pixmap) -> Vec<u8> {
    image.encode_png().expect("PNG encoding failed")
}

impl Checks {
    /// Checks that two images encode to identical bytes.
    #[track_caller]
    pub fn images_eq(&mut self, a: &Pixmap, b: &Pixmap) {
        let data_a = png_data(a);
        let data_b = png_data(b);
        if data_a != data_b {
            self.record(format!(
                "images differ: {}x{} ({} bytes) vs {}x{} ({} bytes)",
                a.width(),
                a.height(),
                data_a.len(),
                b.width(),
                b.height(),
                data_b.len()
            ));
        }
    }

    /// Checks that two images encode to different bytes.
    #[track_caller]
    pub fn images_ne(&mut self, a: &Pixmap, b: &Pixmap) {
        let data_a = png_data(a);
        let data_b = png_data(b);
        if data_a == data_b {
            self.record(format!(
                "images are identical: {}x{} ({} bytes)",
                a.width(),
                a.height(),
                data_a.len()
            ));
        }
    }
}
