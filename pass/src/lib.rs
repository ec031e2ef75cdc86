//! Minimal pass infrastructure.
//!
//! A [Pass] is a unit of work with a typed input, a typed output, and a
//! typed error. The elimination-order heuristics and the tree-decomposition
//! builder are each a `Pass`; chaining them with [PassExt::chain] keeps
//! "which order produced this tree" independently testable without
//! reaching into a CLI or a `main`.

/// A single transformation step.
pub trait Pass {
    type Input;
    type Output;
    type Error;

    /// Runs the pass, consuming `input` and producing `Self::Output` or
    /// `Self::Error`.
    fn run(&mut self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Sequences two passes whose output/input types line up.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pass for Chain<A, B>
where
    A: Pass,
    B: Pass<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    fn run(&mut self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let mid = self.first.run(input)?;
        self.second.run(mid)
    }
}

/// Extension trait providing the `chain` combinator for any [Pass].
pub trait PassExt: Pass + Sized {
    fn chain<B>(self, second: B) -> Chain<Self, B>
    where
        B: Pass<Input = Self::Output, Error = Self::Error>,
    {
        Chain { first: self, second }
    }
}

impl<P: Pass> PassExt for P {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddOne;
    impl Pass for AddOne {
        type Input = i32;
        type Output = i32;
        type Error = ();

        fn run(&mut self, input: i32) -> Result<i32, ()> {
            Ok(input + 1)
        }
    }

    struct Double;
    impl Pass for Double {
        type Input = i32;
        type Output = i32;
        type Error = ();

        fn run(&mut self, input: i32) -> Result<i32, ()> {
            Ok(input * 2)
        }
    }

    #[test]
    fn chain_runs_passes_in_order() {
        let mut pipeline = AddOne.chain(Double);
        assert_eq!(pipeline.run(3), Ok(8));
    }
}
