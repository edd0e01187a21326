//! Weight algebra consumed by the searches.
//!
//! The searches never compare weights through `PartialOrd`; ordering is
//! injected separately as a `Fn(&W, &W) -> Ordering`. What lives here is the
//! additive structure: an identity, a dominating "infinity", and summation.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Additive structure over arc weights.
///
/// `sum` must be associative and monotone in both operands, and `infinity()`
/// must not be exceeded by any sum the search forms. Violations are caller
/// contract breaches and yield unspecified paths.
pub trait WeightAlgebra {
    type Weight: Clone;

    fn zero(&self) -> Self::Weight;

    fn infinity(&self) -> Self::Weight;

    fn sum(&self, a: &Self::Weight, b: &Self::Weight) -> Self::Weight;

    /// Three-way sum used for bidirectional meeting bounds.
    fn sum3(&self, a: &Self::Weight, b: &Self::Weight, c: &Self::Weight) -> Self::Weight {
        self.sum(a, &self.sum(b, c))
    }
}

/// Weight of the arc `(tail, head)`.
pub trait WeightFunction<N>: WeightAlgebra {
    fn weight(&self, tail: &N, head: &N) -> Self::Weight;
}

/// Primitive numeric weights with a saturating sum.
pub trait ArcWeight: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const INFINITY: Self;

    fn saturating_sum(self, other: Self) -> Self;
}

macro_rules! int_arc_weight {
    ($($t:ty),*) => {$(
        impl ArcWeight for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;
            #[inline]
            fn saturating_sum(self, other: Self) -> Self { self.saturating_add(other) }
        }
    )*};
}

macro_rules! float_arc_weight {
    ($($t:ty),*) => {$(
        impl ArcWeight for $t {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$t>::INFINITY;
            // IEEE addition already saturates at +inf.
            #[inline]
            fn saturating_sum(self, other: Self) -> Self { self + other }
        }
    )*};
}

int_arc_weight!(i32, i64, u32, u64, usize);
float_arc_weight!(f32, f64);

/// Closure-backed weight function over [`ArcWeight`] values.
///
/// ```
/// use sssp_bidir::{FnWeight, WeightAlgebra, WeightFunction};
/// let w = FnWeight::new(|a: &u32, b: &u32| (a + b) as i64);
/// assert_eq!(w.weight(&1, &2), 3);
/// assert_eq!(w.infinity(), i64::MAX);
/// ```
pub struct FnWeight<F, W> {
    weigh: F,
    _weight: PhantomData<fn() -> W>,
}

impl<F, W> FnWeight<F, W> {
    pub fn new<N>(weigh: F) -> Self
    where
        F: Fn(&N, &N) -> W,
    {
        Self { weigh, _weight: PhantomData }
    }
}

impl<F, W: ArcWeight> WeightAlgebra for FnWeight<F, W> {
    type Weight = W;

    fn zero(&self) -> W {
        W::ZERO
    }

    fn infinity(&self) -> W {
        W::INFINITY
    }

    fn sum(&self, a: &W, b: &W) -> W {
        a.saturating_sum(*b)
    }
}

impl<N, F, W> WeightFunction<N> for FnWeight<F, W>
where
    F: Fn(&N, &N) -> W,
    W: ArcWeight,
{
    fn weight(&self, tail: &N, head: &N) -> W {
        (self.weigh)(tail, head)
    }
}

/// Total weight of consecutive arcs along `path`; `zero()` for fewer than two nodes.
pub fn path_cost<N, F>(path: &[N], weights: &F) -> F::Weight
where
    F: WeightFunction<N>,
{
    path.windows(2).fold(weights.zero(), |acc, arc| {
        weights.sum(&acc, &weights.weight(&arc[0], &arc[1]))
    })
}
