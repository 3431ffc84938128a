pub mod header {
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
    pub const CONTENT_TYPE: &str = "Content-Type";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub const SCHEME_SEPARATOR: &str = "://";
pub const FORBIDDEN_BODY: &str = "Forbidden\n";
pub const FORBIDDEN_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
