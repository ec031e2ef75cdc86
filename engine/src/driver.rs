use num_bigint::BigInt;
use tutte_ir::{Bag, Link};
use tutte_ring::{CrtError, Polynomial, Zp};

use crate::operators::TutteOperators;
use crate::transfer::transfer;

/// Specializes the master `Q`/`v` polynomials to `BigInt` coefficients and
/// runs the transfer recursion directly, with exact arbitrary-precision
/// arithmetic throughout.
pub fn run_direct(
    q_master: &Polynomial<i64>,
    v_master: &Polynomial<i64>,
    root: &Link<Bag>,
) -> Polynomial<BigInt> {
    let to_big = |c: &i64| BigInt::from(*c);
    let q = q_master.convert_with(to_big);
    let v = v_master.convert_with(to_big);
    let mut one = Polynomial::zero();
    one.add_term(0, 0, BigInt::from(1));
    let ops = TutteOperators::new(one, q, v);
    transfer(&ops, root)
}

/// Specializes the master polynomials to `Zp` coefficients under `prime`
/// and runs the transfer recursion once, for one leg of a Chinese-remainder
/// reconstruction.
pub fn run_modular(
    prime: u64,
    q_master: &Polynomial<i64>,
    v_master: &Polynomial<i64>,
    root: &Link<Bag>,
) -> Polynomial<Zp> {
    let to_zp = |c: &i64| Zp::new(*c, prime);
    let q = q_master.convert_with(to_zp);
    let v = v_master.convert_with(to_zp);
    let mut one = Polynomial::zero();
    one.add_term(0, 0, Zp::new(1, prime));
    let ops = TutteOperators::new(one, q, v);
    transfer(&ops, root)
}

/// Recovers the exact `BigInt` polynomial by running [run_modular] under
/// each of `tutte_ring`'s fixed primes and lifting via Chinese remainder,
/// stopping as soon as two consecutive reconstructions agree.
pub fn run_chinese_remainder(
    q_master: &Polynomial<i64>,
    v_master: &Polynomial<i64>,
    root: &Link<Bag>,
) -> Result<Polynomial<BigInt>, CrtError> {
    tutte_ring::reconstruct(|prime| {
        log::debug!("running transfer recursion modulo {prime}");
        let result = run_modular(prime, q_master, v_master, root);
        log::debug!("result (mod {prime}): {result}");
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::{master_q_v, Substitution};
    use tutte_ir::{BuildTreeDecomposition, Graph};
    use tutte_pass::Pass;

    fn triangle_root() -> Link<Bag> {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        BuildTreeDecomposition.run((g, vec![0, 1, 2])).unwrap()
    }

    #[test]
    fn direct_and_chinese_remainder_agree() {
        let (q, v) = master_q_v(Substitution::General);
        let root = triangle_root();
        let direct = run_direct(&q, &v, &root);
        let crt = run_chinese_remainder(&q, &v, &root).unwrap();
        assert_eq!(direct, crt);
    }
}
