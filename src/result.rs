/// Outcome of checking a single request header against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    /// Header missing or empty.
    Absent,
    /// Scheme stripping is enabled and the value carries no `://`.
    Malformed,
    Mismatch,
    Matched,
}

impl HeaderCheck {
    pub fn is_matched(self) -> bool {
        matches!(self, HeaderCheck::Matched)
    }
}

/// Header that satisfied the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedHeader {
    Origin,
    Referer,
}

impl MatchedHeader {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedHeader::Origin => "origin",
            MatchedHeader::Referer => "referer",
        }
    }
}

/// Why a POST request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub origin: HeaderCheck,
    pub referer: HeaderCheck,
}

/// Overall decision returned by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The method is not guarded; forward as-is.
    NotApplicable,
    Accepted(MatchedHeader),
    Rejected(Rejection),
}

impl GuardDecision {
    pub fn is_forwarded(&self) -> bool {
        !matches!(self, GuardDecision::Rejected(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            GuardDecision::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
