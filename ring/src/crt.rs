use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::poly::Polynomial;
use crate::zp::Zp;

/// Eighteen primes just below 2^32, fixed so that repeated runs of the
/// Chinese-remainder recovery are reproducible and so that each prime fits a
/// `u32` representative while products still fit comfortably in a `u128`
/// during modular multiplication.
pub const PRIMES: [u64; 18] = [
    4294967291, 4294967279, 4294967231, 4294967197, 4294967189, 4294967161, 4294967143, 4294967111,
    4294967087, 4294967029, 4294966997, 4294966981, 4294966943, 4294966927, 4294966909, 4294966877,
    4294966829, 4294966813,
];

#[derive(Debug, thiserror::Error)]
pub enum CrtError {
    #[error("chinese-remainder reconstruction did not converge within {0} primes")]
    ModulusExhausted(usize),
}

/// Extended Euclidean inverse of `a` modulo `m`, normalized into `[0, m)`.
/// `a` and `m` must be coprime, which holds here because every entry of
/// [PRIMES] is prime and distinct.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> BigInt {
    let (mut old_r, mut r) = (a.clone(), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let new_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, new_r);
        let new_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, new_s);
    }
    ((old_s % m) + m) % m
}

/// Recovers a `Polynomial<BigInt>` from modular evaluations supplied by
/// `compute`, one prime at a time, stopping as soon as two consecutive
/// partial reconstructions agree.
///
/// `compute` is handed each prime from [PRIMES] in turn and must return the
/// Tutte polynomial reduced modulo that prime; this crate has no notion of
/// graphs or tree decompositions, so the caller supplies the actual
/// computation as a closure over whatever modulus-specialized machinery it
/// is built from.
pub fn reconstruct(
    mut compute: impl FnMut(u64) -> Polynomial<Zp>,
) -> Result<Polynomial<BigInt>, CrtError> {
    let mut residues: Vec<Polynomial<Zp>> = Vec::new();
    let mut pp = BigInt::one();
    let mut previous: Option<Polynomial<BigInt>> = None;

    for (k, &prime) in PRIMES.iter().enumerate() {
        residues.push(compute(prime));
        pp *= BigInt::from(prime);

        // CRT coefficients recomputed from scratch each round: cheap relative
        // to the modular transfer-matrix pass that produced each residue.
        let mut result: Polynomial<BigInt> = Polynomial::zero();
        for (i, &p_i) in PRIMES[..=k].iter().enumerate() {
            let p_i_big = BigInt::from(p_i);
            let cofactor = &pp / &p_i_big;
            let inv = mod_inverse(&cofactor, &p_i_big);
            let weight = cofactor * inv;
            let lifted = residues[i].convert_with(|c| BigInt::from(c.rep()));
            result = result + lifted.scaled(&weight);
        }

        let half = &pp / BigInt::from(2u8);
        let reduced = result.convert_with(|c| {
            let r = ((c % &pp) + &pp) % &pp;
            if r > half { r - &pp } else { r }
        });

        if previous.as_ref() == Some(&reduced) {
            return Ok(reduced);
        }
        previous = Some(reduced);
    }

    Err(CrtError::ModulusExhausted(PRIMES.len()))
}
