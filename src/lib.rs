//! Single-slot memoization.
//!
//! A [`LazyCell`] wraps a [`Producer`] and remembers the last value it
//! produced: [`get_or_evaluate`](Memoize::get_or_evaluate) runs the producer
//! only when nothing is cached yet, [`force_evaluate`](Memoize::force_evaluate)
//! always runs it and replaces the cached value.
//!
//! Cells are not synchronized. Every operation that can run the producer
//! takes `&mut self`, so sharing a cell across threads needs an outer lock.
//!
//! ```
//! use memo_cell::{LazyCell, Memoize};
//!
//! let mut calls = 0;
//! let mut cell = LazyCell::new(|| {
//!     calls += 1;
//!     "expensive"
//! });
//!
//! assert!(!cell.is_cached());
//! assert_eq!(&"expensive", cell.get_or_evaluate());
//! assert_eq!(&"expensive", cell.get_or_evaluate());
//! drop(cell);
//! assert_eq!(1, calls);
//! ```

#[macro_use(debug_unreachable)]
extern crate debug_unreachable;

mod cell;
mod fallible;

pub use cell::{BoxedProducer, DynLazyCell, LazyCell};
pub use fallible::{TryLazyCell, TryProducer};

/// A zero-argument source of values.
pub trait Producer {
    type Output;

    fn produce(&mut self) -> Self::Output;
}

impl<V, F: FnMut() -> V> Producer for F {
    type Output = V;

    fn produce(&mut self) -> V {
        self()
    }
}

/// Producer of a known value, handing out clones of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal<T>(pub T);

impl<T: Clone> Producer for Literal<T> {
    type Output = T;

    fn produce(&mut self) -> T {
        self.0.clone()
    }
}

/// Operations shared by memoizing cells.
pub trait Memoize {
    type Output;

    /// Runs the producer unconditionally and caches its result.
    ///
    /// If the producer panics the previously cached value, if any, stays in
    /// place.
    fn force_evaluate(&mut self) -> &Self::Output;

    /// Returns the cached value, running the producer first if there is none.
    fn get_or_evaluate(&mut self) -> &Self::Output;

    fn is_cached(&self) -> bool;

    /// Forces evaluation and hands the cell back, so a cell can be built
    /// and populated in one expression.
    fn eager(mut self) -> Self
    where
        Self: Sized,
    {
        self.force_evaluate();
        self
    }
}

struct Field<V, P> {
    value: Option<V>,
    producer: P,
}

impl<V, P> Field<V, P> {
    fn new(producer: P) -> Self {
        Field { value: None, producer }
    }

    fn with_value(producer: P, value: V) -> Self {
        Field { value: Some(value), producer }
    }

    fn store(&mut self, value: V) -> &V {
        if self.value.is_some() {
            tracing::trace!(output = std::any::type_name::<V>(), "replacing cached value");
        }
        self.value.insert(value)
    }

    /// Callers must have filled the slot first.
    fn stored(&self) -> &V {
        match self.value {
            Some(ref v) => v,
            // SAFETY: every caller checks or fills `value` right before,
            // and nothing in between can reset it to `None`.
            None => unsafe { debug_unreachable!() },
        }
    }
}

impl<P: Producer> Field<P::Output, P> {
    fn compute(&mut self) -> &P::Output {
        tracing::trace!(output = std::any::type_name::<P::Output>(), "evaluating producer");
        let value = self.producer.produce();
        self.store(value)
    }
}
