//! Error reporting data structures and miette integration.
//!
//! Errors returned by this crate only carry offsets into the path they failed
//! on. [`Diagnose`] pairs an error with that path, producing a [`Report`]
//! which can point at the offending segment.
//!
//! ```rust
//! use treeptr::{diagnostic::Diagnose, Path, Value};
//!
//! let data = Value::from(vec![Value::from("leaf")]);
//! let path = Path::from_static("/0/child");
//! let report = path.get(&data).diagnose(path).unwrap_err();
//! assert_eq!(report.subject(), "/0/child");
//! assert!(report.is_not_container());
//! ```

use crate::{EditError, ParseError, PathBuf};
use core::{fmt, ops::Deref};

/// Implemented by errors which can be converted into a [`Report`].
pub trait Diagnostic: Sized {
    /// The value which caused the error.
    type Subject: Deref;

    /// Combine the error with its subject to generate a [`Report`].
    fn into_report(self, subject: impl Into<Self::Subject>) -> Report<Self> {
        Report {
            source: self,
            subject: subject.into(),
        }
    }

    /// The docs.rs URL for this error
    fn url() -> &'static str;

    /// Returns the labels for the given [`Subject`](Diagnostic::Subject) if
    /// applicable.
    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>>;
}

/// A label for a span within a path or malformed string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label {
    text: String,
    offset: usize,
    len: usize,
}

impl Label {
    /// Creates a new instance of a [`Label`] from its parts
    pub fn new(text: String, offset: usize, len: usize) -> Self {
        Self { text, offset, len }
    }

    /// The message attached to the span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the start of the span.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(feature = "miette")]
impl From<Label> for miette::LabeledSpan {
    fn from(value: Label) -> Self {
        miette::LabeledSpan::new(Some(value.text), value.offset, value.len)
    }
}

/// An error wrapper which includes the subject of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<D: Diagnostic> {
    source: D,
    subject: D::Subject,
}

impl<D: Diagnostic> Report<D> {
    /// The value which caused the error.
    pub fn subject(&self) -> &<D::Subject as Deref>::Target {
        &self.subject
    }

    /// The error which occurred.
    pub fn original(&self) -> &D {
        &self.source
    }

    /// The original parts of the [`Report`].
    pub fn decompose(self) -> (D, D::Subject) {
        (self.source, self.subject)
    }

    /// The labels of the error, if any.
    pub fn labels(&self) -> Option<Box<dyn Iterator<Item = Label>>> {
        self.source.labels(&self.subject)
    }
}

impl<D: Diagnostic> Deref for Report<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.source
    }
}

impl<D: Diagnostic + fmt::Display> fmt::Display for Report<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl<D> std::error::Error for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(feature = "miette")]
impl<D> miette::Diagnostic for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug + miette::SourceCode,
{
    fn url<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(D::url()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.subject)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(D::labels(self, &self.subject)?.map(Into::into)))
    }
}

#[cfg(feature = "miette")]
impl miette::SourceCode for PathBuf {
    fn read_span<'a>(
        &'a self,
        span: &miette::SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<Box<dyn miette::SpanContents<'a> + 'a>, miette::MietteError> {
        miette::SourceCode::read_span(
            self.as_str(),
            span,
            context_lines_before,
            context_lines_after,
        )
    }
}

macro_rules! impl_diagnostic_url {
    (enum $type:ident) => {
        $crate::diagnostic::impl_diagnostic_url!("enum", $type)
    };
    (struct $type:ident) => {
        $crate::diagnostic::impl_diagnostic_url!("struct", $type)
    };
    ($kind:literal, $type:ident) => {
        concat!(
            "https://docs.rs/treeptr/",
            env!("CARGO_PKG_VERSION"),
            "/treeptr/",
            $kind,
            ".",
            stringify!($type),
            ".html",
        )
    };
}
pub(crate) use impl_diagnostic_url;

/// Extension for `Result`s holding a [`Diagnostic`] error, attaching the
/// subject of the failure.
pub trait Diagnose<T> {
    /// The error type of the `Result`.
    type Error: Diagnostic;

    /// Converts the error, if any, into a [`Report`] of `subject`.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>>;

    /// Like [`diagnose`](Diagnose::diagnose), producing the subject lazily.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>;
}

impl<T, E> Diagnose<T> for Result<T, E>
where
    E: Diagnostic,
{
    type Error = E;

    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>> {
        self.map_err(|error| error.into_report(subject.into()))
    }

    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>,
    {
        self.map_err(|error| error.into_report(f()))
    }
}

/*
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 crate errors                                 ║
║                               ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                               ║
╚══════════════════════════════════════════════════════════════════════════════╝
*/

impl Diagnostic for EditError {
    type Subject = PathBuf;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum EditError)
    }

    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>> {
        // the offset points at the slash; the label covers the segment after it
        let start = self.offset() + 1;
        let rest = subject.as_str().get(start..)?;
        let len = rest.find('/').unwrap_or(rest.len());
        let text = match self {
            Self::NotContainer { found, .. } => format!("{found} has no children"),
            Self::InvalidIndex { .. } => "not a list index".to_owned(),
            Self::IndexOutOfBounds { source, .. } => {
                format!("out of bounds (length {})", source.length)
            }
            Self::NotFound { .. } => "key not found".to_owned(),
        };
        Some(Box::new(core::iter::once(Label::new(text, start, len))))
    }
}

impl Diagnostic for ParseError {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum ParseError)
    }

    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>> {
        let len = subject.chars().next().map_or(0, char::len_utf8);
        let text = match self {
            Self::NoLeadingSlash => "must start with a slash ('/')".to_owned(),
        };
        Some(Box::new(core::iter::once(Label::new(
            text,
            self.offset(),
            len,
        ))))
    }
}
