// Export Configuration
// Base64 line layout and DER length rules for exported keys

use crate::asn1::LengthForm;

/// Separator placed between wrapped Base64 lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for public key export
#[derive(Clone, Debug, Default)]
pub struct ExportConfig {
    /// Wrap Base64 output every `n` characters; `None` keeps a single line
    pub line_length: Option<usize>,
    pub line_ending: LineEnding,
    pub length_form: LengthForm,
}

impl ExportConfig {
    pub fn with_line_length(mut self, length: usize) -> Self {
        self.line_length = if length == 0 { None } else { Some(length) };
        self
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    pub fn with_length_form(mut self, form: LengthForm) -> Self {
        self.length_form = form;
        self
    }
}
