// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred assertion recording over attribute maps.

use std::fmt;
use std::panic::Location;

use text_attributes::{
    Attribute, AttributeKind, Brush, Font, Lookup, ParagraphStyle, RawValue, StyleAttributes,
};

/// Tolerance used by the metric checks that do not take an explicit one.
pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// A single recorded check failure.
#[derive(Clone, Debug)]
pub struct Failure {
    /// Source location of the check that failed.
    pub location: &'static Location<'static>,
    /// Description of the mismatch.
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Records check failures without interrupting the test body.
///
/// Every check method looks a value up, compares it against an expectation
/// and records a [`Failure`] on mismatch, so a single test can verify a
/// whole set of attributes in one pass. An absent map, a missing kind or a
/// value of the wrong type is always a recorded failure, never a silent
/// pass.
#[derive(Default, Debug)]
pub struct Checks {
    failures: Vec<Failure>,
}

impl Checks {
    /// Creates a recorder with no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// The failures recorded so far.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consumes the recorder without panicking and returns its failures.
    pub fn into_failures(mut self) -> Vec<Failure> {
        std::mem::take(&mut self.failures)
    }

    #[track_caller]
    pub(crate) fn record(&mut self, message: String) {
        self.failures.push(Failure {
            location: Location::caller(),
            message,
        });
    }

    #[track_caller]
    fn resolve<'a, T>(&mut self, lookup: Lookup<'a, T>) -> Option<&'a T> {
        match lookup {
            Lookup::Found(value) => Some(value),
            Lookup::WrongType {
                kind,
                expected,
                found,
            } => {
                self.record(format!(
                    "{kind:?} attribute holds {found}, expected {expected}"
                ));
                None
            }
            Lookup::Missing(kind) => {
                self.record(format!("no {kind:?} attribute present"));
                None
            }
        }
    }

    #[track_caller]
    fn lookup_in<'a, B: Brush, T: Attribute<B>>(
        &mut self,
        attrs: Option<&'a StyleAttributes<B>>,
        kind: AttributeKind,
    ) -> Option<&'a T> {
        let lookup = match attrs {
            Some(attrs) => attrs.lookup(kind),
            None => Lookup::Missing(kind),
        };
        self.resolve(lookup)
    }

    #[track_caller]
    fn near(&mut self, label: &str, actual: f32, expected: f32, tolerance: f32) {
        if (actual - expected).abs() > tolerance {
            self.record(format!(
                "{label}: {actual} != {expected} (tolerance {tolerance})"
            ));
        }
    }

    /// Checks that the payload stored under `kind` equals `expected`.
    #[track_caller]
    pub fn attr_eq<B: Brush, T: Attribute<B>>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        kind: AttributeKind,
        expected: &T,
    ) {
        if let Some(actual) = self.lookup_in::<B, T>(attrs, kind) {
            if actual != expected {
                self.record(format!("{kind:?}: {actual:?} != {expected:?}"));
            }
        }
    }

    /// Checks that the brush stored under `kind` equals `expected`.
    #[track_caller]
    pub fn brush_eq<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        kind: AttributeKind,
        expected: &B,
    ) {
        let lookup = match attrs {
            Some(attrs) => attrs.brush(kind),
            None => Lookup::Missing(kind),
        };
        if let Some(actual) = self.resolve(lookup) {
            if actual != expected {
                self.record(format!("{kind:?}: {actual:?} != {expected:?}"));
            }
        }
    }

    /// Checks that the float stored under `kind` is within `tolerance` of
    /// `expected`.
    #[track_caller]
    pub fn attr_near<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        kind: AttributeKind,
        expected: f32,
        tolerance: f32,
    ) {
        if let Some(actual) = self.lookup_in::<B, f32>(attrs, kind) {
            let actual = *actual;
            self.near(&format!("{kind:?}"), actual, expected, tolerance);
        }
    }

    /// Checks a metric derived from the font attribute, within the
    /// [`DEFAULT_TOLERANCE`].
    #[track_caller]
    pub fn font_metric<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        metric: impl FnOnce(&Font) -> f32,
        expected: f32,
    ) {
        self.font_metric_within(attrs, metric, expected, DEFAULT_TOLERANCE);
    }

    /// Checks a metric derived from the font attribute, within `tolerance`.
    #[track_caller]
    pub fn font_metric_within<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        metric: impl FnOnce(&Font) -> f32,
        expected: f32,
        tolerance: f32,
    ) {
        if let Some(font) = self.lookup_in::<B, Font>(attrs, AttributeKind::Font) {
            let actual = metric(font);
            self.near("font metric", actual, expected, tolerance);
        }
    }

    /// Checks a metric derived from the paragraph attribute, within
    /// `tolerance`.
    #[track_caller]
    pub fn paragraph_metric_within<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        metric: impl FnOnce(&ParagraphStyle) -> f32,
        expected: f32,
        tolerance: f32,
    ) {
        if let Some(paragraph) = self.lookup_in::<B, ParagraphStyle>(attrs, AttributeKind::Paragraph)
        {
            let actual = metric(paragraph);
            self.near("paragraph metric", actual, expected, tolerance);
        }
    }

    /// Checks an integer derived from the paragraph attribute, exactly.
    #[track_caller]
    pub fn paragraph_value<B: Brush>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        value: impl FnOnce(&ParagraphStyle) -> i32,
        expected: i32,
    ) {
        if let Some(paragraph) = self.lookup_in::<B, ParagraphStyle>(attrs, AttributeKind::Paragraph)
        {
            let actual = value(paragraph);
            if actual != expected {
                self.record(format!("paragraph value: {actual} != {expected}"));
            }
        }
    }

    /// Checks an enumeration derived from the paragraph attribute.
    ///
    /// The comparison is between raw values, so distinct instances pass
    /// whenever they identify the same case.
    #[track_caller]
    pub fn paragraph_raw<B: Brush, E: RawValue>(
        &mut self,
        attrs: Option<&StyleAttributes<B>>,
        case: impl FnOnce(&ParagraphStyle) -> E,
        expected: E,
    ) {
        if let Some(paragraph) = self.lookup_in::<B, ParagraphStyle>(attrs, AttributeKind::Paragraph)
        {
            let actual = case(paragraph).raw_value();
            let expected = expected.raw_value();
            if actual != expected {
                self.record(format!("paragraph case: {actual:?} != {expected:?}"));
            }
        }
    }
}

impl Drop for Checks {
    // Failures are recorded as checks run and surface together here, so one
    // test reports every mismatched attribute instead of stopping at the
    // first. Nothing is raised if a panic is already unwinding.
    fn drop(&mut self) {
        if !self.failures.is_empty() && !std::thread::panicking() {
            use std::fmt::Write;
            let mut panic_msg = String::new();
            for failure in &self.failures {
                writeln!(&mut panic_msg, "{failure}").unwrap();
            }
            panic!("{}", &panic_msg);
        }
    }
}
