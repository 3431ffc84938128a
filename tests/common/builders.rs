use bunner_csrf_rs::constants::method;
use bunner_csrf_rs::{GuardDecision, GuardOptions, OriginGuard, RequestContext};

#[derive(Default)]
pub struct GuardBuilder {
    origins: Vec<String>,
    ignore_scheme: bool,
}

impl GuardBuilder {
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

    pub fn ignore_scheme(mut self, enabled: bool) -> Self {
        self.ignore_scheme = enabled;
        self
    }

    pub fn options(&self) -> GuardOptions {
        GuardOptions::new()
            .origins(self.origins.clone())
            .ignore_scheme(self.ignore_scheme)
    }

    pub fn build(self) -> OriginGuard {
        OriginGuard::new(self.options())
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    referer: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            origin: None,
            referer: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn check(&self, guard: &OriginGuard) -> GuardDecision {
        guard.check(&RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
        })
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn post_request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn request(method: &str) -> RequestBuilder {
    RequestBuilder::new().method(method)
}
