use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::zp::Zp;

/// A commutative ring element usable as a polynomial coefficient.
///
/// Deliberately narrower than `num_traits::Zero + One`: [Zp] cannot produce a
/// zero or one without a modulus in hand, so those two are left out here and
/// picked up separately where they make sense (see [Polynomial::q] and
/// [Polynomial::v], which require `One` and are accordingly never available
/// for `Polynomial<Zp>`).
pub trait RingElement:
    Clone + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    fn is_zero(&self) -> bool;
}

impl RingElement for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl RingElement for BigInt {
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl RingElement for Zp {
    fn is_zero(&self) -> bool {
        Zp::is_zero(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Monomial<T> {
    i: u32,
    j: u32,
    c: T,
}

/// A sparse polynomial in two formal variables `Q` and `v`, stored as a
/// sorted list of monomials with nonzero coefficients. No term is ever
/// stored with a zero coefficient: callers test emptiness with
/// [Polynomial::is_zero] rather than scanning for zero terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    terms: Vec<Monomial<T>>,
}

impl<T: RingElement> Polynomial<T> {
    pub fn zero() -> Self {
        Polynomial { terms: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(i, j, coefficient)` in ascending `(i, j)` order.
    pub fn terms(&self) -> impl Iterator<Item = (u32, u32, &T)> {
        self.terms.iter().map(|m| (m.i, m.j, &m.c))
    }

    fn position(&self, i: u32, j: u32) -> Result<usize, usize> {
        self.terms.binary_search_by_key(&(i, j), |m| (m.i, m.j))
    }

    /// Adds `value` to the coefficient of `Q^i v^j`, dropping the term
    /// entirely if the result becomes zero. This is the only way terms enter
    /// the polynomial, so a zero coefficient can never be observed in
    /// [Polynomial::terms].
    pub fn add_term(&mut self, i: u32, j: u32, value: T) {
        match self.position(i, j) {
            Ok(idx) => {
                let combined = self.terms[idx].c.clone() + value;
                if combined.is_zero() {
                    self.terms.remove(idx);
                } else {
                    self.terms[idx].c = combined;
                }
            }
            Err(idx) => {
                if !value.is_zero() {
                    self.terms.insert(idx, Monomial { i, j, c: value });
                }
            }
        }
    }

    pub fn add_scalar(&mut self, value: T) {
        self.add_term(0, 0, value);
    }

    pub fn sub_scalar(&mut self, value: T) {
        self.add_term(0, 0, -value);
    }

    /// Multiplies every coefficient by `factor` in place, purging any term
    /// that collapses to zero.
    pub fn scale(&mut self, factor: &T) {
        if factor.is_zero() {
            self.terms.clear();
            return;
        }
        self.terms.retain_mut(|m| {
            m.c = m.c.clone() * factor.clone();
            !m.c.is_zero()
        });
    }

    pub fn scaled(&self, factor: &T) -> Self {
        let mut out = self.clone();
        out.scale(factor);
        out
    }

    /// Maps every coefficient through `f`, dropping terms whose image is
    /// zero. This is how a `Polynomial<Zp>` is derived from a
    /// `Polynomial<i64>` master polynomial under a chosen modulus, and how a
    /// final `Polynomial<BigInt>` answer is read back out of CRT-reconstructed
    /// coefficients: a blanket `From` impl can't thread a modulus through,
    /// so the conversion takes the mapping function explicitly instead.
    pub fn convert_with<U: RingElement>(&self, f: impl Fn(&T) -> U) -> Polynomial<U> {
        let terms = self
            .terms
            .iter()
            .filter_map(|m| {
                let c = f(&m.c);
                if c.is_zero() { None } else { Some(Monomial { i: m.i, j: m.j, c }) }
            })
            .collect();
        Polynomial { terms }
    }
}

impl<T: RingElement + One> Polynomial<T> {
    /// The monomial `Q`.
    pub fn q() -> Self {
        let mut p = Self::zero();
        p.add_term(1, 0, T::one());
        p
    }

    /// The monomial `v`.
    pub fn v() -> Self {
        let mut p = Self::zero();
        p.add_term(0, 1, T::one());
        p
    }
}

impl<T: RingElement> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        let mut out = self;
        for (i, j, c) in rhs.terms() {
            out.add_term(i, j, c.clone());
        }
        out
    }
}

impl<T: RingElement> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Polynomial<T>) -> Polynomial<T> {
        let mut out = self;
        for (i, j, c) in rhs.terms() {
            out.add_term(i, j, -c.clone());
        }
        out
    }
}

impl<T: RingElement> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        let terms = self
            .terms
            .into_iter()
            .map(|m| Monomial { i: m.i, j: m.j, c: -m.c })
            .collect();
        Polynomial { terms }
    }
}

impl<T: RingElement> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        let mut out = Polynomial::zero();
        for (li, lj, lc) in self.terms() {
            for (ri, rj, rc) in rhs.terms() {
                out.add_term(li + ri, lj + rj, lc.clone() * rc.clone());
            }
        }
        out
    }
}

impl Polynomial<BigInt> {
    /// Renders in the exact `+ c Q^i v^j` output form used for emitted
    /// answers: implicit `+` on the leading term, coefficients of magnitude
    /// 1 elided except for the constant term, and `Q`/`v` elided entirely
    /// when their exponent is zero.
    fn fmt_term(f: &mut fmt::Formatter<'_>, i: u32, j: u32, c: &BigInt) -> fmt::Result {
        let negative = c < &BigInt::zero();
        let magnitude = if negative { -c.clone() } else { c.clone() };
        write!(f, "{} ", if negative { "-" } else { "+" })?;
        let unit = magnitude == BigInt::one();
        if !unit || (i == 0 && j == 0) {
            write!(f, "{} ", magnitude)?;
        }
        fn write_factor(f: &mut fmt::Formatter<'_>, name: &str, exp: u32) -> fmt::Result {
            match exp {
                0 => Ok(()),
                1 => write!(f, "{} ", name),
                n => write!(f, "{}^{} ", name, n),
            }
        }
        write_factor(f, "Q", i)?;
        write_factor(f, "v", j)?;
        Ok(())
    }
}

impl fmt::Display for Polynomial<BigInt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for m in self.terms.iter() {
            Self::fmt_term(f, m.i, m.j, &m.c)?;
        }
        Ok(())
    }
}

/// A polynomial is itself a ring element: this is what lets `tutte-engine`
/// parameterize its transfer-matrix operators over `Polynomial<i64>`,
/// `Polynomial<BigInt>`, or `Polynomial<Zp>` uniformly, rather than
/// special-casing each coefficient type.
impl<T: RingElement> RingElement for Polynomial<T> {
    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl fmt::Display for Polynomial<Zp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, m) in self.terms.iter().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} Q^{} v^{}", m.c.rep(), m.i, m.j)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_term_purges_zero_result() {
        let mut p: Polynomial<i64> = Polynomial::zero();
        p.add_term(1, 2, 5);
        p.add_term(1, 2, -5);
        assert!(p.is_zero());
    }

    #[test]
    fn q_times_v_is_single_term() {
        let p: Polynomial<i64> = Polynomial::q() * Polynomial::v();
        let terms: Vec<_> = p.terms().map(|(i, j, c)| (i, j, *c)).collect();
        assert_eq!(terms, vec![(1, 1, 1)]);
    }

    #[test]
    fn distributes_over_addition() {
        let a: Polynomial<i64> = Polynomial::q() + Polynomial::v();
        let b = a.clone() * a.clone();
        // (Q+v)^2 = Q^2 + 2 Qv + v^2
        let terms: Vec<_> = b.terms().map(|(i, j, c)| (i, j, *c)).collect();
        assert_eq!(terms, vec![(0, 2, 1), (1, 1, 2), (2, 0, 1)]);
    }

    #[test]
    fn convert_with_drops_zero_images() {
        let mut p: Polynomial<i64> = Polynomial::zero();
        p.add_term(0, 0, 4);
        p.add_term(1, 0, 3);
        let converted = p.convert_with(|c| Zp::new(*c, 2));
        // 4 mod 2 = 0, dropped; 3 mod 2 = 1, kept
        let terms: Vec<_> = converted.terms().collect();
        assert_eq!(terms.len(), 1);
        assert_eq!((terms[0].0, terms[0].1), (1, 0));
    }

    #[test]
    fn bigint_display_matches_expected_form() {
        let mut p: Polynomial<BigInt> = Polynomial::zero();
        p.add_term(0, 0, BigInt::from(1));
        p.add_term(1, 0, BigInt::from(-1));
        p.add_term(2, 1, BigInt::from(3));
        let rendered = format!("{}", p);
        assert_eq!(rendered, "+ 1 - Q + 3 Q^2 v ");
    }

    #[test]
    fn zero_polynomial_displays_as_zero() {
        let p: Polynomial<BigInt> = Polynomial::zero();
        assert_eq!(format!("{}", p), "0");
    }
}
