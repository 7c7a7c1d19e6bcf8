use std::fmt;
use std::str::FromStr;

use crate::error::VsixError;

/// A marketplace extension identifier of the form `publisher.name`.
///
/// The identifier is split on the FIRST `.`; both halves must be non-empty.
/// The name half may itself contain dots (`publisher.some.extension` names
/// the extension `some.extension` under `publisher`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionId {
    publisher: String,
    name: String,
}

impl ExtensionId {
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for ExtensionId {
    type Err = VsixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((publisher, name)) if !publisher.is_empty() && !name.is_empty() => Ok(Self {
                publisher: publisher.to_string(),
                name: name.to_string(),
            }),
            _ => Err(VsixError::InvalidIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.publisher, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_publisher_and_name() {
        let id: ExtensionId = "rust-lang.rust-analyzer".parse().unwrap();
        assert_eq!(id.publisher(), "rust-lang");
        assert_eq!(id.name(), "rust-analyzer");
        assert_eq!(id.to_string(), "rust-lang.rust-analyzer");
    }

    #[test]
    fn name_may_contain_further_dots() {
        let id: ExtensionId = "ms-vscode.cpptools.extras".parse().unwrap();
        assert_eq!(id.publisher(), "ms-vscode");
        assert_eq!(id.name(), "cpptools.extras");
    }

    #[test]
    fn rejects_identifier_without_dot() {
        let err = "invalid_id".parse::<ExtensionId>().unwrap_err();
        assert!(matches!(err, VsixError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_empty_publisher() {
        let err = ".extension".parse::<ExtensionId>().unwrap_err();
        assert!(matches!(err, VsixError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = "publisher.".parse::<ExtensionId>().unwrap_err();
        assert!(matches!(err, VsixError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_empty_string() {
        let err = "".parse::<ExtensionId>().unwrap_err();
        assert!(matches!(err, VsixError::InvalidIdentifier(_)));
    }
}
