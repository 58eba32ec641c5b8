use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MattabResult<T> = Result<T, MattabError>;

/// Every error aborts the run; the category only selects the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MattabErrorCategory {
    /// A catalogue, display-name or filename mapping that cannot be used,
    /// or a malformed command line.
    Input,
    /// Reading an input file or writing an output artifact failed.
    Io,
    Internal,
}

impl MattabErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Input => 2,
            Self::Io => 3,
            Self::Internal => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Io => "io",
            Self::Internal => "internal",
        }
    }
}

impl Display for MattabErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error carried through every fallible library call.
///
/// `code` is a stable dotted identifier (`INPUT.CATALOGUE_PARSE`) that
/// tests and scripts can match on without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MattabError {
    category: MattabErrorCategory,
    code: &'static str,
    message: String,
}

impl MattabError {
    pub fn input(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(MattabErrorCategory::Input, code, message)
    }

    pub fn io(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(MattabErrorCategory::Io, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(MattabErrorCategory::Internal, code, message)
    }

    fn with_category(
        category: MattabErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub const fn category(&self) -> MattabErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    /// Lines written to stderr before the process exits.
    pub fn report_lines(&self) -> [String; 2] {
        [
            format!("ERROR: [{}] {}", self.code, self.message),
            format!("FATAL EXIT CODE: {}", self.exit_code()),
        ]
    }
}

impl Display for MattabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for MattabError {}
