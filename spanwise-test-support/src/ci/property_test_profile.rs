//! Property-test run profile read from the environment.
//!
//! Suites share one interpretation of `PROGTEST_CASES` and
//! `SPANWISE_PBT_FORK` so CI can widen or narrow every property run at once.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWISE_PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";

/// Case count and fork mode for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment, falling back to the
    /// supplied defaults for unset or unparsable variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_cases, default_fork)
    }

    /// Builds a profile from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(
    ///     |key| (key == "PROGTEST_CASES").then(|| "12".to_owned()),
    ///     64,
    ///     false,
    /// );
    /// assert_eq!(profile.cases(), 12);
    /// ```
    #[must_use]
    pub fn from_lookup<L>(lookup: L, default_cases: u32, default_fork: bool) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let cases = resolve(&lookup, PROGTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = resolve(&lookup, SPANWISE_PBT_FORK_ENV_KEY, default_fork, parse_switch);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether proptest should run each case in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn resolve<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    T: Copy,
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a switch value")),
    }
}
