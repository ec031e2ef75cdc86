use tutte_ring::Polynomial;

/// Which graph invariant to compute, expressed as a substitution into the
/// general two-variable recursion rather than a separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// The Tutte polynomial itself: `Q` and `v` stay formal variables.
    General,
    /// The flow polynomial: `v ← −Q`.
    Flow,
    /// The chromatic polynomial: `v ← −1`.
    Chromatic,
}

/// Builds the `i64`-coefficient master `Q` and `v` polynomials for `sub`.
/// These are the polynomials every run — direct `BigInt` or modular `Zp` —
/// is ultimately derived from via `Polynomial::convert_with`.
pub fn master_q_v(sub: Substitution) -> (Polynomial<i64>, Polynomial<i64>) {
    let q = Polynomial::q();
    let v = match sub {
        Substitution::General => Polynomial::v(),
        Substitution::Flow => -Polynomial::q(),
        Substitution::Chromatic => {
            let mut minus_one = Polynomial::zero();
            minus_one.add_term(0, 0, -1);
            minus_one
        }
    };
    (q, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_substitutes_v_with_negative_q() {
        let (_, v) = master_q_v(Substitution::Flow);
        let terms: Vec<_> = v.terms().map(|(i, j, c)| (i, j, *c)).collect();
        assert_eq!(terms, vec![(1, 0, -1)]);
    }

    #[test]
    fn chromatic_substitutes_v_with_negative_one() {
        let (_, v) = master_q_v(Substitution::Chromatic);
        let terms: Vec<_> = v.terms().map(|(i, j, c)| (i, j, *c)).collect();
        assert_eq!(terms, vec![(0, 0, -1)]);
    }

    #[test]
    fn general_keeps_q_and_v_formal() {
        let (q, v) = master_q_v(Substitution::General);
        assert_eq!(q.terms().map(|(i, j, c)| (i, j, *c)).collect::<Vec<_>>(), vec![(1, 0, 1)]);
        assert_eq!(v.terms().map(|(i, j, c)| (i, j, *c)).collect::<Vec<_>>(), vec![(0, 1, 1)]);
    }
}
