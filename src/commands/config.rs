use std::env;

use crate::hexgraph::{BuildOptions, Precision, Strategy, TieBreak};

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub precision: Option<u32>,
    pub strategy: Option<Strategy>,
    pub tie_break: Option<TieBreak>,
    pub threads: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_env_defaults() -> Self {
        let precision = env::var("HEXROUTE_PRECISION").ok().and_then(|s| parse_precision(&s));
        let strategy = env::var("HEXROUTE_STRATEGY").ok().and_then(|s| s.parse::<Strategy>().ok());
        let tie_break = env::var("HEXROUTE_TIE_BREAK").ok().and_then(|s| s.parse::<TieBreak>().ok());
        let threads = env::var("HEXROUTE_THREADS").ok().and_then(|s| s.trim().parse::<usize>().ok()).filter(|&n| n > 0);
        let log_level = env::var("HEXROUTE_LOG_LEVEL").ok();
        Self { precision, strategy, tie_break, threads, log_level }
    }

    /// Overlay every value set in `other` on top of `self`.
    pub fn overlay(&mut self, other: Config) {
        if other.precision.is_some() { self.precision = other.precision; }
        if other.strategy.is_some() { self.strategy = other.strategy; }
        if other.tie_break.is_some() { self.tie_break = other.tie_break; }
        if other.threads.is_some() { self.threads = other.threads; }
        if other.log_level.is_some() { self.log_level = other.log_level; }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            precision: self.precision.map(Precision).unwrap_or_default(),
            strategy: self.strategy.unwrap_or_default(),
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break.unwrap_or_default()
    }
}

pub fn parse_precision(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&p| p <= Precision::MAX)
}
