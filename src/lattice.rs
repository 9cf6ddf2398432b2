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
use tracing::{debug, trace, warn};

use crate::option::EuropeanOption;

/// Per-step quantities of a Cox-Ross-Rubinstein lattice, all derived from the
/// option parameters and never set independently.
///
/// # Fields
/// * `dt` - time duration of one time step
/// * `discount` - per-step discount factor, exp(-dt * (r - q))
/// * `up` - the up move factor, exp(v * sqrt(dt))
/// * `down` - the down move factor, 1 / up
/// * `pu` - the risk-neutral probability of an up move
/// * `pd` - the risk-neutral probability of a down move, 1 - pu
/// * `steps` - number of time steps in the lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConstants {
    pub dt: f64,
    pub discount: f64,
    pub up: f64,
    pub down: f64,
    pub pu: f64,
    pub pd: f64,
    pub steps: usize,
}

impl LatticeConstants {
    /// Calculates the risk-neutral probability of moving up a node in the
    /// next period.
    ///
    /// * `r` - interest rate
    /// * `q` - dividend yield
    /// * `v` - volatility p.a.
    /// * `dt` - the duration of time of one period
    pub fn calc_up_prob(r: f64, q: f64, v: f64, dt: f64) -> f64 {
        let u = (v*dt.sqrt()).exp();
        let d = 1.0/u;
        (((r-q)*dt).exp() - d)/(u-d)
    }

    /// Derives the lattice constants of an option.  Zero volatility makes
    /// up == down and the probabilities non-finite; that is logged and left
    /// to propagate into the price.
    pub fn setup(opt: &EuropeanOption) -> LatticeConstants {
        let dt = opt.dt();
        let up = (opt.volatility() * dt.sqrt()).exp();
        let down = 1.0/up;
        let pu = LatticeConstants::calc_up_prob(opt.rate(), opt.dividend(),
            opt.volatility(), dt);
        if !(0.0..=1.0).contains(&pu) {
            warn!(pu, "risk-neutral up probability outside [0, 1]");
        }
        LatticeConstants {
            dt,
            discount: opt.df(),
            up,
            down,
            pu,
            pd: 1.0 - pu,
            steps: opt.steps(),
        }
    }
}

/// Calculates the option payoff at each of the steps+1 terminal nodes.  Node
/// i is reached by i down moves and (steps - i) up moves, so index 0 holds
/// the highest stock price and the last index the lowest.
pub fn terminal_payoffs(opt: &EuropeanOption, c: &LatticeConstants)
    -> Vec<f64> {
    let n = c.steps;
    (0..(n+1)).map( |i| {
        let spot = opt.spot() * c.up.powi((n - i) as i32) * c.down.powi(i as i32);
        opt.option_type().intrinsic(spot, opt.strike())
    }).collect()
}

/// Runs backward induction over the terminal payoffs.  Each round replaces
/// every adjacent pair (up child at i, down child at i+1) by
///
/// V(i) = discount * [ V(i) * pu + V(i+1) * pd ]
///
/// and drops the last element, so after `steps` rounds one value remains:
/// the discounted risk-neutral expectation of the payoffs.  The same rule is
/// used for calls and puts.
///
/// # Panics
/// Panics unless `values` holds exactly `c.steps + 1` payoffs, as returned by
/// terminal_payoffs() for the same constants.
pub fn backward_induce(mut values: Vec<f64>, c: &LatticeConstants) -> f64 {
    assert_eq!(c.steps + 1, values.len(),
        "expected one terminal payoff per node");
    for j in (1..(c.steps+1)).rev() {
        for i in 0..j {
            values[i] = c.discount * (values[i] * c.pu + values[i+1] * c.pd);
        }
        values.truncate(j);
        trace!(remaining = j, "induction round");
    }
    debug_assert_eq!(1, values.len());
    values[0]
}

/// Prices a European option by setting up the lattice constants, building a
/// fresh vector of terminal payoffs and inducing it back to time zero
///
/// # Example
/// ```
/// use crrq::option::*;
/// use crrq::lattice;
///
/// let opt = EuropeanOption::new(50.0, 50.0, 0.05, 0.0, 0.3, 0.25, 100,
///     OptionType::Put);
/// let price = lattice::price(&opt);
/// assert!(price > 0.0);
/// ```
pub fn price(opt: &EuropeanOption) -> f64 {
    let c = LatticeConstants::setup(opt);
    debug!(steps = c.steps, dt = c.dt, discount = c.discount, up = c.up,
        down = c.down, pu = c.pu, option_type = ?opt.option_type(),
        "lattice constants");
    let payoffs = terminal_payoffs(opt, &c);
    backward_induce(payoffs, &c)
}
