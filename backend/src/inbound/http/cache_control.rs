//! Shared cache-control policies for HTTP handlers.

/// Remote-owned listings and reports must be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Probe answers must never be cached.
pub const NO_STORE: &str = "no-store";

/// Header tuple for private responses relayed from the remote authority.
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE_MUST_REVALIDATE)
}
