use super::*;
use std::fmt;

/// A memoizing cell around a producer.
///
/// The producer runs at most once across any number of
/// [`get_or_evaluate`](Memoize::get_or_evaluate) calls, and again each time
/// [`force_evaluate`](Memoize::force_evaluate) is called.
pub struct LazyCell<P: Producer>(Field<P::Output, P>);

/// A cell whose producer type is erased.
pub type DynLazyCell<'a, T> = LazyCell<BoxedProducer<'a, T>>;

pub struct BoxedProducer<'a, V>(Box<dyn Producer<Output = V> + 'a>);

impl<'a, V> BoxedProducer<'a, V> {
    pub fn new<P: Producer<Output = V> + 'a>(producer: P) -> Self {
        BoxedProducer(Box::new(producer))
    }
}

impl<'a, V> Producer for BoxedProducer<'a, V> {
    type Output = V;

    fn produce(&mut self) -> V {
        self.0.produce()
    }
}

impl<P: Producer> LazyCell<P> {
    pub fn new(producer: P) -> Self {
        LazyCell(Field::new(producer))
    }

    /// A cell that starts out holding `value`. Forcing it runs `producer`.
    pub fn with_value(producer: P, value: P::Output) -> Self {
        LazyCell(Field::with_value(producer, value))
    }

    /// The cached value, without evaluating anything.
    pub fn cached(&self) -> Option<&P::Output> {
        self.0.value.as_ref()
    }

    pub fn into_value(self) -> Option<P::Output> {
        self.0.value
    }

    pub fn producer(&self) -> &P {
        &self.0.producer
    }
}

impl<T: Clone> LazyCell<Literal<T>> {
    /// A cell already holding `value`; forcing it yields clones of `value`.
    pub fn from_value(value: T) -> Self {
        LazyCell(Field::with_value(Literal(value.clone()), value))
    }
}

impl<'a, T> DynLazyCell<'a, T> {
    pub fn boxed<P: Producer<Output = T> + 'a>(producer: P) -> Self {
        LazyCell::new(BoxedProducer::new(producer))
    }
}

impl<P: Producer> Memoize for LazyCell<P> {
    type Output = P::Output;

    fn force_evaluate(&mut self) -> &P::Output {
        self.0.compute()
    }

    fn get_or_evaluate(&mut self) -> &P::Output {
        if self.0.value.is_none() {
            self.0.compute();
        }
        self.0.stored()
    }

    fn is_cached(&self) -> bool {
        self.0.value.is_some()
    }
}

impl<P: Producer> fmt::Debug for LazyCell<P>
where
    P::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCell")
            .field("value", &self.0.value)
            .field("producer", &"..")
            .finish()
    }
}
