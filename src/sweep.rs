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
use rayon::prelude::*;
use tracing::debug;

use crate::option::EuropeanOption;

/// Prices a batch of independent options in parallel on the rayon pool.
/// Each price() call owns its payoff vector, so nothing is shared between
/// workers.  Prices are returned in the same order as the input.
///
/// # Example
/// ```
/// use crrq::option::*;
/// use crrq::sweep::price_all;
///
/// let strikes = [90.0, 100.0, 110.0];
/// let opts: Vec<EuropeanOption> = strikes.iter().map(|&k| {
///     EuropeanOption::new(100.0, k, 0.02, 0.0, 0.2, 1.0, 100, OptionType::Call)
/// }).collect();
/// let prices = price_all(&opts);
/// assert!(prices[0] > prices[1] && prices[1] > prices[2]);
/// ```
pub fn price_all(opts: &[EuropeanOption]) -> Vec<f64> {
    debug!(options = opts.len(), threads = rayon::current_num_threads(),
        "pricing batch");
    opts.par_iter().map(|opt| opt.price()).collect()
}

/// Prices one option across several step counts, e.g. to watch the lattice
/// price converge.  Returns (steps, price) pairs with the step count after
/// clamping.
pub fn step_sweep(opt: &EuropeanOption, steps: &[i64]) -> Vec<(usize, f64)> {
    let opts: Vec<EuropeanOption> =
        steps.iter().map(|&n| opt.with_steps(n)).collect();
    let prices = price_all(&opts);
    opts.iter().map(|o| o.steps()).zip(prices).collect()
}

#[cfg(test)]
mod test {
    use crate::option::*;
    use crate::sweep::*;

    fn strike_ladder(opt_type: OptionType) -> Vec<EuropeanOption> {
        (0..37).map(|i| {
            EuropeanOption::new(100.0, 70.0 + i as f64 * 2.0, 0.03, 0.0, 0.25,
                1.5, 150, opt_type)
        }).collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut opts = strike_ladder(OptionType::Call);
        opts.extend(strike_ladder(OptionType::Put));
        let sequential: Vec<f64> = opts.iter().map(|o| o.price()).collect();
        let parallel = price_all(&opts);
        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn empty_batch() {
        assert!(price_all(&[]).is_empty());
    }

    #[test]
    fn call_prices_fall_with_strike() {
        let prices = price_all(&strike_ladder(OptionType::Call));
        assert!(prices.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn step_sweep_converges() {
        let opt = EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, 4,
            OptionType::Put);
        let bs = opt.black_scholes();
        let results = step_sweep(&opt, &[0, 10, 100, 1000]);
        assert_eq!(vec![1, 10, 100, 1000],
            results.iter().map(|&(n, _)| n).collect::<Vec<usize>>());
        let (_, coarse) = results[1];
        let (_, fine) = results[3];
        assert!((fine - bs).abs() < (coarse - bs).abs());
    }
}
