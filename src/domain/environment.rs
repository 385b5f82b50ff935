use std::fmt;

use serde::Serialize;

/// Syntax family of a rendered install command.
///
/// Only used by presentation layers for highlighting; it has no effect on rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Bash,
    PowerShell,
    JavaScript,
    Python,
    CSharp,
    Java,
    Php,
}

impl Environment {
    /// Lowercase syntax label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Bash => "bash",
            Environment::PowerShell => "powershell",
            Environment::JavaScript => "javascript",
            Environment::Python => "python",
            Environment::CSharp => "csharp",
            Environment::Java => "java",
            Environment::Php => "php",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
