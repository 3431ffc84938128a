use crate::constants::SCHEME_SEPARATOR;
use crate::util::strip_scheme;
use serde::Deserialize;
use thiserror::Error;

/// Configuration consumed by [`OriginGuard`](crate::OriginGuard).
///
/// An empty `origins` list is accepted and makes the guard reject every POST.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuardOptions {
    /// Trusted origins, e.g. `https://example.com`, or `example.com` when
    /// `ignore_scheme` is enabled.
    pub origins: Vec<String>,
    /// Compare origins without their `scheme://` prefix.
    #[serde(alias = "ignore_proto")]
    pub ignore_scheme: bool,
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origins.push(origin.into());
        self
    }

    pub fn ignore_scheme(mut self, enabled: bool) -> Self {
        self.ignore_scheme = enabled;
        self
    }

    /// Reports entries that can never match a browser-sent header.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origins.is_empty() {
            return Err(ValidationError::EmptyAllowList);
        }

        for (index, origin) in self.origins.iter().enumerate() {
            let compared = if self.ignore_scheme {
                strip_scheme(origin).unwrap_or(origin)
            } else {
                origin.as_str()
            };

            if compared.is_empty() {
                return Err(ValidationError::EmptyOrigin { index });
            }

            if compared.ends_with('/') {
                return Err(ValidationError::TrailingSlash {
                    origin: origin.clone(),
                });
            }

            if !self.ignore_scheme && !origin.contains(SCHEME_SEPARATOR) {
                return Err(ValidationError::MissingScheme {
                    origin: origin.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no trusted origins configured; every POST request would be rejected")]
    EmptyAllowList,
    #[error("trusted origin at index {index} is empty")]
    EmptyOrigin { index: usize },
    #[error("trusted origin '{origin}' ends with '/' and can never match an Origin header")]
    TrailingSlash { origin: String },
    #[error(
        "trusted origin '{origin}' has no scheme; enable ignore_scheme or configure it as scheme://host"
    )]
    MissingScheme { origin: String },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
