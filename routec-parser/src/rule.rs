//! Parsed rule model for the routes DSL.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// HTTP verbs accepted in a routes file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// The verb as it appears in the DSL and in HTTP request lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        }
    }
}

impl FromStr for HttpVerb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpVerb::Get),
            "POST" => Ok(HttpVerb::Post),
            "PUT" => Ok(HttpVerb::Put),
            "DELETE" => Ok(HttpVerb::Delete),
            "PATCH" => Ok(HttpVerb::Patch),
            "HEAD" => Ok(HttpVerb::Head),
            "OPTIONS" => Ok(HttpVerb::Options),
            _ => Err(()),
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathPart {
    /// A literal segment matched verbatim.
    Static(String),
    /// `:name` — binds exactly one segment.
    Param(String),
    /// `*name` — binds the rest of the path; only valid in final position.
    Wildcard(String),
}

impl PathPart {
    /// The bound parameter name, for dynamic parts.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PathPart::Static(_) => None,
            PathPart::Param(name) | PathPart::Wildcard(name) => Some(name),
        }
    }
}

/// The handler a rule dispatches to: a dotted controller path plus a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerCall {
    /// Controller path, e.g. `["controllers", "users"]`.
    pub controller: Vec<String>,
    /// Handler method name, e.g. `show`.
    pub method: String,
}

impl fmt::Display for HandlerCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.controller.join("."), self.method)
    }
}

/// One parsed routes-file entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub verb: HttpVerb,
    pub path: Vec<PathPart>,
    pub call: HandlerCall,
    /// 1-based line in the routes file this rule came from.
    pub line: usize,
}

impl Rule {
    /// Names bound by dynamic path parts, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.path.iter().filter_map(PathPart::param_name)
    }

    /// The path pattern as written in the DSL.
    pub fn path_pattern(&self) -> String {
        let mut out = String::new();
        for part in &self.path {
            out.push('/');
            match part {
                PathPart::Static(s) => out.push_str(s),
                PathPart::Param(name) => {
                    out.push(':');
                    out.push_str(name);
                }
                PathPart::Wildcard(name) => {
                    out.push('*');
                    out.push_str(name);
                }
            }
        }
        if out.is_empty() { out.push('/') }
        out
    }
}
