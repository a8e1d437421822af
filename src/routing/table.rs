// Route table module
// The fixture's fixed set of paths and their canned response policies

use hyper::body::Bytes;
use hyper::StatusCode;

/// What to answer for a matched path, and whether the process should
/// terminate once the answer has been flushed.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    pub status: StatusCode,
    pub body: Bytes,
    pub terminate: bool,
}

/// Ordered, immutable path-to-policy table with a 404 fallback.
///
/// Matching is exact-string and case-sensitive; the first matching entry
/// wins. The table is built once at startup and never mutated.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<(String, RoutePolicy)>,
    fallback: RoutePolicy,
}

impl RouteTable {
    /// The fixture's built-in routes:
    ///
    /// | Path      | Status | Body  | Side effect          |
    /// |-----------|--------|-------|----------------------|
    /// | `/health` | 200    | `OK`  | none                 |
    /// | `/crash`  | 200    | `DIE` | exit 1 after flush   |
    /// | other     | 404    | empty | none                 |
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (
                    "/health".to_string(),
                    RoutePolicy {
                        status: StatusCode::OK,
                        body: Bytes::from_static(b"OK"),
                        terminate: false,
                    },
                ),
                (
                    "/crash".to_string(),
                    RoutePolicy {
                        status: StatusCode::OK,
                        body: Bytes::from_static(b"DIE"),
                        terminate: true,
                    },
                ),
            ],
            fallback: RoutePolicy {
                status: StatusCode::NOT_FOUND,
                body: Bytes::new(),
                terminate: false,
            },
        }
    }

    /// Find the policy for a path: first exact match in table order, or
    /// the 404 fallback.
    pub fn lookup(&self, path: &str) -> &RoutePolicy {
        self.entries
            .iter()
            .find(|(entry_path, _)| entry_path.as_str() == path)
            .map_or(&self.fallback, |(_, policy)| policy)
    }
}
