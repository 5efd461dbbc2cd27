use super::*;
use std::any::type_name;
use std::fmt;

/// A zero-argument source of values that may fail.
pub trait TryProducer {
    type Output;
    type Error;

    fn try_produce(&mut self) -> Result<Self::Output, Self::Error>;
}

impl<V, E, F: FnMut() -> Result<V, E>> TryProducer for F {
    type Output = V;
    type Error = E;

    fn try_produce(&mut self) -> Result<V, E> {
        self()
    }
}

/// A memoizing cell around a fallible producer.
///
/// Only successful values are cached. A failed evaluation returns the
/// producer's error as is and leaves the cell exactly as it was before the
/// call, cached value included.
pub struct TryLazyCell<P: TryProducer>(Field<P::Output, P>);

impl<P: TryProducer> TryLazyCell<P> {
    pub fn new(producer: P) -> Self {
        TryLazyCell(Field::new(producer))
    }

    pub fn with_value(producer: P, value: P::Output) -> Self {
        TryLazyCell(Field::with_value(producer, value))
    }

    pub fn try_force_evaluate(&mut self) -> Result<&P::Output, P::Error> {
        tracing::trace!(output = type_name::<P::Output>(), "evaluating fallible producer");
        let value = self.0.producer.try_produce().map_err(|err| {
            tracing::debug!(
                output = type_name::<P::Output>(),
                cached = self.0.value.is_some(),
                "producer failed"
            );
            err
        })?;
        Ok(self.0.store(value))
    }

    pub fn try_get_or_evaluate(&mut self) -> Result<&P::Output, P::Error> {
        if self.0.value.is_none() {
            self.try_force_evaluate()?;
        }
        Ok(self.0.stored())
    }

    pub fn try_eager(mut self) -> Result<Self, P::Error> {
        self.try_force_evaluate()?;
        Ok(self)
    }

    pub fn is_cached(&self) -> bool {
        self.0.value.is_some()
    }

    pub fn cached(&self) -> Option<&P::Output> {
        self.0.value.as_ref()
    }

    pub fn into_value(self) -> Option<P::Output> {
        self.0.value
    }
}

impl<P: TryProducer> fmt::Debug for TryLazyCell<P>
where
    P::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryLazyCell")
            .field("value", &self.0.value)
            .field("producer", &"..")
            .finish()
    }
}
