//! Modular scalar arithmetic, a sparse bivariate polynomial ring over a
//! generic coefficient type, and Chinese-remainder recovery of exact
//! coefficients from modular runs.
//!
//! Nothing in this crate knows about graphs, tree decompositions, or the
//! Tutte polynomial specifically: it is the number-theoretic substrate the
//! `tutte-engine` crate is built on.

mod crt;
mod poly;
mod zp;

pub use crt::{mod_inverse, reconstruct, CrtError, PRIMES};
pub use poly::{Polynomial, RingElement};
pub use zp::Zp;
