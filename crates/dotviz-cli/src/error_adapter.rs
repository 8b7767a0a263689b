//! Error adapter for converting DotvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use dotviz::DotvizError;

/// Adapter that renders a [`DotvizError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a DotvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DotvizError::UnsupportedFormat(_) => "dotviz::unsupported_format",
            DotvizError::Io(_) => "dotviz::io",
            DotvizError::Config(_) => "dotviz::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DotvizError::UnsupportedFormat(_) => Some(Box::new("pass `--format svg`")),
            DotvizError::Config(_) => Some(Box::new(
                "check the configuration file or remove it to use the defaults",
            )),
            DotvizError::Io(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_codes() {
        let cases = [
            (
                DotvizError::UnsupportedFormat("png".to_string()),
                "dotviz::unsupported_format",
            ),
            (
                DotvizError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
                "dotviz::io",
            ),
            (DotvizError::Config("bad".to_string()), "dotviz::config"),
        ];

        for (err, expected) in &cases {
            let adapter = ErrorAdapter(err);
            assert_eq!(adapter.code().unwrap().to_string(), *expected);
            assert_eq!(adapter.to_string(), err.to_string());
        }
    }

    #[test]
    fn test_help() {
        let err = DotvizError::UnsupportedFormat("pdf".to_string());
        let help = ErrorAdapter(&err).help().unwrap().to_string();
        assert!(help.contains("svg"));

        let err = DotvizError::Io(io::Error::other("disk"));
        assert!(ErrorAdapter(&err).help().is_none());
    }

    #[test]
    fn test_graphical_report() {
        let err = DotvizError::UnsupportedFormat("png".to_string());
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("png"));
    }
}
