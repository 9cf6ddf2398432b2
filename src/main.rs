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
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crrq::config::PricerConfig;
use crrq::sweep::step_sweep;
use crrq::util::round_to;

/// Price a European option on a Cox-Ross-Rubinstein binomial lattice
#[derive(Parser, Debug)]
#[command(name = "crrq", version, about)]
struct Cli {
    /// JSON config file; without it CRRQ_* environment variables are used
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial stock price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Risk-free rate, continuously compounded p.a.
    #[arg(long)]
    rate: Option<f64>,

    /// Dividend yield, continuously compounded p.a.
    #[arg(long)]
    dividend: Option<f64>,

    /// Volatility p.a.
    #[arg(long)]
    volatility: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    maturity: Option<f64>,

    /// Number of time steps, clamped to at least 1
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Price the put first instead of the call
    #[arg(long, conflicts_with = "call")]
    put: bool,

    /// Price the call first, overriding a put set by config or environment
    #[arg(long)]
    call: bool,

    /// Decimal places shown
    #[arg(long, default_value_t = 2)]
    decimals: u32,

    /// Also price across these step counts, e.g. --sweep 10,100,1000
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    sweep: Vec<i64>,
}

impl Cli {
    fn load_config(&self) -> crrq::Result<PricerConfig> {
        let mut cfg = match self.config {
            Some(ref path) => PricerConfig::from_file(path)?,
            None => PricerConfig::from_env()?,
        };
        if let Some(v) = self.spot { cfg.spot = v; }
        if let Some(v) = self.strike { cfg.strike = v; }
        if let Some(v) = self.rate { cfg.rate = v; }
        if let Some(v) = self.dividend { cfg.dividend = v; }
        if let Some(v) = self.volatility { cfg.volatility = v; }
        if let Some(v) = self.maturity { cfg.maturity = v; }
        if let Some(v) = self.steps { cfg.steps = v; }
        if self.put { cfg.put = true; }
        if self.call { cfg.put = false; }
        Ok(cfg)
    }
}

fn label(is_put: bool) -> &'static str {
    if is_put { "Put" } else { "Call" }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            process::exit(1);
        }
    };
    tracing::info!(?cfg, "pricing");

    let mut opt = cfg.to_option();
    let places = cli.decimals;
    println!("{} option price: {}", label(opt.is_put()),
        round_to(opt.price(), places));
    opt.switch_type();
    println!("{} option price: {}", label(opt.is_put()),
        round_to(opt.price(), places));

    if !cli.sweep.is_empty() {
        opt.switch_type();
        let bs = opt.black_scholes();
        println!("{} steps sweep (Black-Scholes {}):", label(opt.is_put()),
            round_to(bs, places));
        for (steps, price) in step_sweep(&opt, &cli.sweep) {
            println!("{:>8} {:>14} {:>+14}", steps, round_to(price, places),
                round_to(price - bs, places));
        }
    }
}
