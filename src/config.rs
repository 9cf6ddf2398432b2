//
// crrq - binomial lattice pricing of European options written in Rust
// Copyright (c) 2016 by Albert Pang <albert.pang@me.com>
// All rights reserved.
//
// This file is a part of crrq
//
// crrq is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// crrq is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::option::{EuropeanOption, OptionType};

/// Parameter set for pricing one option from the command line.  Every field
/// has a default so a config file or the environment only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub dividend: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub steps: i64,
    pub put: bool,
}

impl Default for PricerConfig {
    fn default() -> Self {
        PricerConfig {
            spot: 100.0,
            strike: 105.0,
            rate: 0.02,
            dividend: 0.0,
            volatility: 0.1,
            maturity: 2.0,
            steps: 4,
            put: false,
        }
    }
}

impl PricerConfig {
    /// Reads a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reads CRRQ_* environment variables, loading a .env file first if
    /// there is one
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        PricerConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to the defaults for
    /// missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where F: Fn(&str) -> Option<String>
    {
        let d = PricerConfig::default();
        Ok(PricerConfig {
            spot: parse_or(&lookup, "CRRQ_SPOT", d.spot)?,
            strike: parse_or(&lookup, "CRRQ_STRIKE", d.strike)?,
            rate: parse_or(&lookup, "CRRQ_RATE", d.rate)?,
            dividend: parse_or(&lookup, "CRRQ_DIVIDEND", d.dividend)?,
            volatility: parse_or(&lookup, "CRRQ_VOLATILITY", d.volatility)?,
            maturity: parse_or(&lookup, "CRRQ_MATURITY", d.maturity)?,
            steps: parse_or(&lookup, "CRRQ_STEPS", d.steps)?,
            put: parse_or(&lookup, "CRRQ_PUT", d.put)?,
        })
    }

    pub fn option_type(&self) -> OptionType {
        if self.put { OptionType::Put } else { OptionType::Call }
    }

    pub fn to_option(&self) -> EuropeanOption {
        EuropeanOption::new(self.spot, self.strike, self.rate, self.dividend,
            self.volatility, self.maturity, self.steps, self.option_type())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where F: Fn(&str) -> Option<String>,
      T: FromStr,
      T::Err: std::fmt::Display
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>()
            .map_err(|e| Error::Config(format!("{key}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::config::*;

    fn lookup_from(pairs: &[(&str, &str)])
        -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|&(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = PricerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(PricerConfig::default(), cfg);
        let opt = cfg.to_option();
        assert_eq!(4, opt.steps());
        assert!(opt.is_call());
    }

    #[test]
    fn values_from_lookup() {
        let cfg = PricerConfig::from_lookup(lookup_from(&[
            ("CRRQ_SPOT", "50"), ("CRRQ_VOLATILITY", " 0.3 "),
            ("CRRQ_STEPS", "-3"), ("CRRQ_PUT", "true"),
        ])).unwrap();
        assert_eq!(50.0, cfg.spot);
        assert_eq!(0.3, cfg.volatility);
        assert_eq!(105.0, cfg.strike);
        let opt = cfg.to_option();
        assert_eq!(1, opt.steps());
        assert!(opt.is_put());
    }

    #[test]
    fn bad_value_is_config_error() {
        let err = PricerConfig::from_lookup(lookup_from(&[
            ("CRRQ_STRIKE", "one hundred"),
        ])).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.starts_with("CRRQ_STRIKE")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn partial_json() {
        let cfg: PricerConfig =
            serde_json::from_str(r#"{"strike": 95.0, "put": true}"#).unwrap();
        assert_eq!(95.0, cfg.strike);
        assert_eq!(100.0, cfg.spot);
        assert!(cfg.put);
    }

    #[test]
    fn missing_file_is_io_error() {
        match PricerConfig::from_file("/nonexistent/crrq.json") {
            Err(Error::Io(_)) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
