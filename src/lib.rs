pub mod constants;
mod context;
mod guard;
mod layer;
mod options;
mod result;
mod util;

pub use context::RequestContext;
pub use guard::OriginGuard;
pub use layer::{Forbidden, OriginGuardLayer, OriginGuardService, RejectionHandler};
pub use options::{GuardOptions, ValidationError};
pub use result::{GuardDecision, HeaderCheck, MatchedHeader, Rejection};
pub use util::strip_scheme;
