use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// A parsed frame reduced to the two names worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMethodPair {
    pub klass: String,
    pub method: String,
}

/// The `.`-separated components of a demangled descriptor's leading token,
/// ordered outer scope to inner (module, type, inner type, function).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    components: Vec<String>,
}

impl QualifiedName {
    /// Split a demangled descriptor into scope components.
    ///
    /// The descriptor is whitespace-normalized, everything after its first
    /// token (return type, argument text) is discarded, and the token is
    /// split on `.`. Tokens with fewer than 2 components are rejected; a
    /// lone name gives nothing to report as the enclosing class.
    pub fn extract(descriptor: &str) -> Result<Self> {
        let token = descriptor.split_whitespace().next().unwrap_or("");
        let components: Vec<String> = token.split('.').map(str::to_owned).collect();
        if components.len() < 2 {
            return Err(ParseError::InsufficientComponents {
                token: token.to_owned(),
                found: components.len(),
            });
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Select the class and method names by position.
    ///
    /// The method is the innermost component, returned verbatim. The class
    /// is the component enclosing it; with `include_parent` and at least 4
    /// components, the grandparent scope is joined in front so inner-type
    /// call sites report as `Outer.Inner`. With fewer components there is
    /// no parent to include and the default selection applies.
    pub fn select_names(&self, include_parent: bool) -> ClassMethodPair {
        let n = self.components.len();
        let method = self.components[n - 1].clone();
        let klass = if include_parent && n >= 4 {
            format!("{}.{}", self.components[n - 3], self.components[n - 2])
        } else {
            self.components[n - 2].clone()
        };
        ClassMethodPair { klass, method }
    }
}
