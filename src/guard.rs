use crate::constants::method;
use crate::context::RequestContext;
use crate::options::{GuardOptions, ValidationError};
use crate::result::{GuardDecision, HeaderCheck, MatchedHeader, Rejection};
use crate::util::{has_origin_prefix, non_empty, strip_scheme};
use indexmap::IndexSet;
use tracing::{debug, warn};

/// Origin/Referer based CSRF guard for POST requests.
///
/// The allow-list is copied and normalized once in [`OriginGuard::new`]; the
/// guard is read-only afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    origins: IndexSet<String>,
    ignore_scheme: bool,
}

impl OriginGuard {
    pub fn new(options: GuardOptions) -> Self {
        let GuardOptions {
            origins,
            ignore_scheme,
        } = options;

        let origins: IndexSet<String> = origins
            .into_iter()
            .map(|origin| {
                if !ignore_scheme {
                    return origin;
                }
                // Trusted entries without a scheme are kept as bare hosts.
                let stripped = strip_scheme(&origin).map(str::to_owned);
                stripped.unwrap_or(origin)
            })
            .collect();

        if origins.is_empty() {
            warn!("origin guard has no trusted origins; every POST request will be rejected");
        }
        debug!(
            origins = origins.len(),
            ignore_scheme, "origin guard configured"
        );

        Self {
            origins,
            ignore_scheme,
        }
    }

    /// Like [`OriginGuard::new`], but fails on allow-lists that can never
    /// match a browser request.
    pub fn try_new(options: GuardOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn check(&self, request: &RequestContext<'_>) -> GuardDecision {
        if request.method != method::POST {
            return GuardDecision::NotApplicable;
        }

        let origin = self.check_origin(request.origin);
        if origin.is_matched() {
            return GuardDecision::Accepted(MatchedHeader::Origin);
        }

        let referer = self.check_referer(request.referer);
        if referer.is_matched() {
            return GuardDecision::Accepted(MatchedHeader::Referer);
        }

        GuardDecision::Rejected(Rejection { origin, referer })
    }

    pub fn check_origin(&self, origin: Option<&str>) -> HeaderCheck {
        let Some(origin) = non_empty(origin) else {
            return HeaderCheck::Absent;
        };
        let Some(origin) = self.normalize(origin) else {
            return HeaderCheck::Malformed;
        };

        if self.origins.contains(origin) {
            HeaderCheck::Matched
        } else {
            HeaderCheck::Mismatch
        }
    }

    pub fn check_referer(&self, referer: Option<&str>) -> HeaderCheck {
        let Some(referer) = non_empty(referer) else {
            return HeaderCheck::Absent;
        };
        let Some(referer) = self.normalize(referer) else {
            return HeaderCheck::Malformed;
        };

        if self
            .origins
            .iter()
            .any(|allowed| has_origin_prefix(referer, allowed))
        {
            HeaderCheck::Matched
        } else {
            HeaderCheck::Mismatch
        }
    }

    /// Normalized allow-list in configuration order, duplicates removed.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn ignores_scheme(&self) -> bool {
        self.ignore_scheme
    }

    // Untrusted input without a scheme is rejected, never compared raw.
    fn normalize<'a>(&self, value: &'a str) -> Option<&'a str> {
        if self.ignore_scheme {
            strip_scheme(value)
        } else {
            Some(value)
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
