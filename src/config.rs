//! Render settings, read once at startup.

use std::env;
use std::str::FromStr;
use std::thread;

pub const MAX_DEPTH_VAR: &str = "COALRAY_MAX_DEPTH";
pub const THREADS_VAR: &str = "COALRAY_THREADS";

/// Deepest recursion accepted from the environment. Each bounce is a stack
/// frame on a render thread.
pub const MAX_DEPTH_LIMIT: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Bounces of reflection and refraction followed per camera ray.
    pub max_depth: usize,
    /// Size of the render thread pool.
    pub threads: usize,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            max_depth: 5,
            threads: thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(name: &str, raw: Option<String>, fallback: T,
        valid: fn(T) -> bool) -> T
{
    match raw {
        None => fallback,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if valid(value) => value,
            _ => {
                log::warn!("ignoring {}={:?}, using {}", name, raw, fallback);
                fallback
            }
        }
    }
}

impl RenderOptions {
    /// Reads `COALRAY_MAX_DEPTH` and `COALRAY_THREADS`. Unset, unparseable or
    /// out-of-range values keep their defaults.
    pub fn from_env() -> RenderOptions {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            max_depth: parse_or(MAX_DEPTH_VAR, lookup(MAX_DEPTH_VAR), defaults.max_depth,
                    |d| d <= MAX_DEPTH_LIMIT),
            threads: parse_or(THREADS_VAR, lookup(THREADS_VAR), defaults.threads, |n| n > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn options(vars: &[(&str, &str)]) -> RenderOptions {
        let vars: HashMap<String, String> = vars.iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect();
        RenderOptions::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let opts = options(&[]);
        assert_eq!(opts.max_depth, 5);
        assert!(opts.threads >= 1);
        assert_eq!(opts, RenderOptions::default());
    }

    #[test]
    fn reads_both_values() {
        let opts = options(&[(MAX_DEPTH_VAR, "0"), (THREADS_VAR, " 3 ")]);
        assert_eq!(opts, RenderOptions {max_depth: 0, threads: 3});
    }

    #[test]
    fn bad_values_fall_back() {
        let opts = options(&[(MAX_DEPTH_VAR, "deep"), (THREADS_VAR, "0")]);
        assert_eq!(opts, RenderOptions::default());
    }

    #[test]
    fn oversized_depth_falls_back() {
        let opts = options(&[(MAX_DEPTH_VAR, "2000")]);
        assert_eq!(opts.max_depth, 5);
        let limit = MAX_DEPTH_LIMIT.to_string();
        let opts = options(&[(MAX_DEPTH_VAR, limit.as_str())]);
        assert_eq!(opts.max_depth, MAX_DEPTH_LIMIT);
        let over = (MAX_DEPTH_LIMIT + 1).to_string();
        let opts = options(&[(MAX_DEPTH_VAR, over.as_str())]);
        assert_eq!(opts.max_depth, 5);
    }
}
