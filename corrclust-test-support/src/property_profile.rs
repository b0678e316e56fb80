//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts (or shrink generated graphs) for the clustering
//! property suites without touching the tests themselves.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "CORRCLUST_PBT_FORK";
/// Environment variable capping the vertex count of generated graphs.
pub const MAX_VERTICES_ENV_KEY: &str = "CORRCLUST_PBT_MAX_VERTICES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_vertices: usize,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to the supplied defaults for unset or
    /// malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use corrclust_test_support::property_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, 9);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_vertices() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_max_vertices: usize) -> Self {
        Self {
            cases: read_override(CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_override(FORK_ENV_KEY, false, parse_switch),
            max_vertices: read_override(
                MAX_VERTICES_ENV_KEY,
                default_max_vertices,
                parse_positive,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound for the vertex count of generated graphs.
    #[must_use]
    pub const fn max_vertices(&self) -> usize {
        self.max_vertices
    }
}

fn read_override<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if value == T::default() {
        return Err("value must be greater than zero".to_owned());
    }
    Ok(value)
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
