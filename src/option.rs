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
use probability::prelude::*;

use crate::lattice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put
}

impl OptionType {
    /// Returns the opposite option type
    pub fn switch(self) -> OptionType {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Intrinsic value of the option when the underlying trades at `spot`
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// A European option on a stock paying a continuous dividend yield, together
/// with the number of time steps used to discretise it on a binomial lattice.
///
/// # Fields
/// * `s0` - initial stock price
/// * `strike` - strike price
/// * `r` - interest rate, continuously compounded p.a.
/// * `q` - dividend yield, continuously compounded p.a.
/// * `v` - volatility p.a.
/// * `t` - time to expiry in years
/// * `steps` - number of time steps in the lattice, at least 1
/// * `opt_type` - call or put.  Whether the option is a call is always derived
///   from this, never stored separately
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    s0: f64,
    strike: f64,
    r: f64,
    q: f64,
    v: f64,
    t: f64,
    steps: usize,
    opt_type: OptionType,
}

impl EuropeanOption {
    /// Constructs a European option.  A step count below 1 is clamped to 1.
    ///
    /// # Example
    /// ```
    /// use crrq::option::*;
    ///
    /// let mut opt =
    ///     EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, 4,
    ///         OptionType::Call);
    /// let call = opt.price();
    /// opt.switch_type();
    /// let put = opt.price();
    /// println!("call: {:.2}, put: {:.2}", call, put);
    /// ```
    pub fn new(s0: f64, strike: f64, r: f64, q: f64, v: f64, t: f64,
        steps: i64, opt_type: OptionType) -> EuropeanOption {
        EuropeanOption {
            s0, strike, r, q, v, t,
            steps: steps.max(1) as usize,
            opt_type,
        }
    }

    pub fn spot(&self) -> f64 { self.s0 }
    pub fn strike(&self) -> f64 { self.strike }
    pub fn rate(&self) -> f64 { self.r }
    pub fn dividend(&self) -> f64 { self.q }
    pub fn volatility(&self) -> f64 { self.v }
    pub fn maturity(&self) -> f64 { self.t }
    pub fn steps(&self) -> usize { self.steps }
    pub fn option_type(&self) -> OptionType { self.opt_type }

    pub fn is_put(&self) -> bool {
        self.opt_type == OptionType::Put
    }

    pub fn is_call(&self) -> bool {
        !self.is_put()
    }

    /// Duration of one time step
    pub fn dt(&self) -> f64 {
        self.t / self.steps as f64
    }

    /// Per-step discount factor, exp(-dt * (r - q))
    pub fn df(&self) -> f64 {
        (-self.dt() * (self.r - self.q)).exp()
    }

    /// Turns a call into a put and vice versa.  Nothing computed for the
    /// previous type survives since every call to price() builds its own
    /// terminal payoffs
    pub fn switch_type(&mut self) {
        self.opt_type = self.opt_type.switch();
    }

    /// Returns a copy of this option with the step count replaced
    pub fn with_steps(&self, steps: i64) -> EuropeanOption {
        EuropeanOption { steps: steps.max(1) as usize, ..*self }
    }

    /// Prices the option on a Cox-Ross-Rubinstein lattice
    pub fn price(&self) -> f64 {
        lattice::price(self)
    }

    /// Closed-form Black-Scholes price for the same market parameters
    pub fn black_scholes(&self) -> f64 {
        black_scholes(self.s0, self.r, self.q, self.v, self.t, self.opt_type,
            self.strike)
    }
}

/// Calculate vanilla option price using the Black-Scholes equation
/// #Argument
/// * `s0` - initial stock price at time 0
/// * `r` - interest rate
/// * `q` - dividend yield
/// * `v` - volatility e.g. 0.4 is 40 vol points (per annum)
/// * `t` - number of years e.g. 0.25 is quarter of a year
/// * `opt_type` - option type
/// * `k` - strike price
///
/// #Example
/// ```
/// let call = crrq::option::black_scholes( 100.0, 0.02, 0.0, 0.4, 0.25,
///     crrq::option::OptionType::Call, 100.0);
/// println!( "price: {}", call);
/// ```
pub fn black_scholes(s0:f64, r:f64, q:f64, v: f64, t:f64, opt_type:OptionType,
    k:f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    let f = s0 * ((r-q)*t).exp();
    let d1 = 1.0 / v / t.sqrt() * ( (s0/k).ln() + (r-q+0.5*v*v)*t);
    let d2 = d1 - v*t.sqrt();
    match opt_type {
        OptionType::Call =>
            (-r*t).exp()*(f*normal.distribution(d1)-k*normal.distribution(d2)),
        OptionType::Put =>
            (-r*t).exp()*(k*normal.distribution(-d2)-f*normal.distribution(-d1))
    }
}

/// Right-hand side of put-call parity, i.e. what call - put should equal for
/// European options with the same strike and expiry
pub fn parity_gap(s0: f64, r: f64, q: f64, t: f64, k: f64) -> f64 {
    s0 * (-q*t).exp() - k * (-r*t).exp()
}

#[cfg(test)]
mod test {
    use crate::option::*;
    use crate::util::equal_within;

    #[test]
    fn put_call_parity() {
        let s0 = 100.0;
        let r = 0.02;
        let q = 0.0;
        let v = 0.4;
        let t = 0.25;
        let k = s0;
        let call = black_scholes(s0, r, q, v, t, OptionType::Call, k);
        let put = black_scholes(s0, r, q, v, t, OptionType::Put, k);
        println!("Call: {}, Put: {}", call, put);
        assert!(equal_within(call - put, parity_gap(s0, r, q, t, k),
            0.0000001));
    }

    #[test]
    fn steps_clamped_to_one() {
        for &n in [0, -1, -100].iter() {
            let opt = EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, n,
                OptionType::Call);
            assert_eq!(1, opt.steps());
            assert_eq!(2.0, opt.dt());
        }
        let opt = EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, 4,
            OptionType::Call);
        assert_eq!(4, opt.with_steps(0).with_steps(4).steps());
    }

    #[test]
    fn is_call_follows_is_put() {
        let mut opt = EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, 4,
            OptionType::Call);
        assert!(opt.is_call() && !opt.is_put());
        opt.switch_type();
        assert!(opt.is_put() && !opt.is_call());
        assert_eq!(OptionType::Put, opt.option_type());
    }

    #[test]
    fn switch_type_twice_restores_price() {
        let mut opt = EuropeanOption::new(100.0, 105.0, 0.02, 0.0, 0.1, 2.0, 50,
            OptionType::Call);
        let original = opt.price();
        opt.switch_type();
        let switched = opt.price();
        opt.switch_type();
        assert!(switched != original);
        assert_eq!(original.to_bits(), opt.price().to_bits());
    }

    #[test]
    fn discount_factor() {
        let opt = EuropeanOption::new(100.0, 105.0, 0.05, 0.01, 0.1, 2.0, 8,
            OptionType::Put);
        assert_eq!(0.25, opt.dt());
        assert!(equal_within(opt.df(), (-0.25f64 * 0.04).exp(), 1e-15));
    }

    #[test]
    fn intrinsic_value() {
        assert_eq!(5.0, OptionType::Call.intrinsic(105.0, 100.0));
        assert_eq!(0.0, OptionType::Put.intrinsic(105.0, 100.0));
        assert_eq!(0.0, OptionType::Call.intrinsic(95.0, 100.0));
        assert_eq!(5.0, OptionType::Put.intrinsic(95.0, 100.0));
    }
}
