/// Entry points diverted to the waitlist while pre-launch, unless configured.
pub const DEFAULT_GATED_ENTRIES: &str = "/signup,/dashboard,/admin";

/// Deployment-wide launch state.
///
/// Built once at startup and shared read-only; there is no hot reload.
/// While the product is pre-launch, every route at or below a gated entry
/// point must show the waitlist instead of the live experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchGate {
    live: bool,
    gated_entries: Vec<String>,
}

impl LaunchGate {
    pub fn new<I, S>(live: bool, gated_entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let gated_entries = gated_entries
            .into_iter()
            .filter_map(|entry| normalize_entry(entry.as_ref()))
            .collect();
        Self {
            live,
            gated_entries,
        }
    }

    /// Parse a comma separated list such as `/signup,/dashboard`.
    pub fn from_list(live: bool, raw: &str) -> Self {
        Self::new(live, raw.split(','))
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn gated_entries(&self) -> &[String] {
        &self.gated_entries
    }

    /// True when `route` must be diverted to the waitlist.
    pub fn gates(&self, route: &str) -> bool {
        if self.live {
            return false;
        }
        let route = normalize_path(route);
        self.gated_entries
            .iter()
            .any(|entry| is_at_or_below(route, entry))
    }
}

fn normalize_entry(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_slash = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    Some(normalize_path(&with_slash).to_string())
}

// Drop the query string and any trailing slash (except for the root).
fn normalize_path(route: &str) -> &str {
    let path = route.split(['?', '#']).next().unwrap_or(route);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn is_at_or_below(route: &str, entry: &str) -> bool {
    if entry == "/" {
        return true;
    }
    match route.strip_prefix(entry) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
