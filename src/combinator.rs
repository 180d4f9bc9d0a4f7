//! Lazy Cartesian products.
//!
//! Every product here enumerates in row-major order: the first source varies
//! slowest and the last source varies fastest, as in
//!
//! ```text
//! for v1 in s1 { for v2 in s2 { ... for vn in sn { yield (v1, v2, ..., vn) } } }
//! ```

use log::debug;

use crate::error::{Error, Result};
use crate::factory;
use crate::tagged::{Parameter, TaggedValue};

/// Pair each element of `first` with each element of `second`.
///
/// This is an outer product, not a zip: it yields `len(first) * len(second)`
/// pairs. `second` is restarted by cloning its iterator for every element of
/// `first`.
pub fn pairwise<A, B>(first: A, second: B) -> impl Iterator<Item = (A::Item, B::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::IntoIter: Clone,
{
    let second = second.into_iter();
    first
        .into_iter()
        .flat_map(move |a| second.clone().map(move |b| (a.clone(), b)))
}

/// Append each element of `next` to each prior tuple.
pub fn extend<P, N, T>(priors: P, next: N) -> impl Iterator<Item = Vec<T>>
where
    P: IntoIterator<Item = Vec<T>>,
    N: IntoIterator<Item = T>,
    N::IntoIter: Clone,
    T: Clone,
{
    let next = next.into_iter();
    priors.into_iter().flat_map(move |prior| {
        next.clone().map(move |value| {
            let mut tuple = Vec::with_capacity(prior.len() + 1);
            tuple.extend_from_slice(&prior);
            tuple.push(value);
            tuple
        })
    })
}

/// Combine tagged sources into their Cartesian product.
///
/// Fails with [`Error::Argument`] when no source is given. The result is lazy:
/// nothing is combined until [`Combinations::iter`] is consumed.
pub fn create_values<I>(sources: I) -> Result<Combinations>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = TaggedValue>,
{
    let sources: Vec<Vec<TaggedValue>> = sources
        .into_iter()
        .map(|source| source.into_iter().collect())
        .collect();
    if sources.is_empty() {
        return Err(Error::Argument(
            "at least one source is required".to_owned(),
        ));
    }
    let combinations = Combinations { sources };
    debug!(
        "combining sources of sizes {:?} into {} tuples",
        combinations.sizes().collect::<Vec<_>>(),
        combinations.len()
    );
    Ok(combinations)
}

/// Combine any number of tagged sources.
///
/// ```
/// let numbers = paramcomb::factory::from_values([1, 2]);
/// let names = paramcomb::factory::from_values(["a", "b", "c"]);
/// let combinations = paramcomb::combine![numbers, names].unwrap();
/// assert_eq!(combinations.len(), 6);
/// ```
///
/// `combine![]` fails with [`Error::Argument`].
#[macro_export]
macro_rules! combine {
    ($($source:expr),* $(,)?) => {
        $crate::combinator::create_values::<
            ::std::vec::Vec<::std::vec::Vec<$crate::TaggedValue>>,
        >(::std::vec![
            $(::std::iter::Iterator::collect(::std::iter::IntoIterator::into_iter($source))),*
        ])
    };
}

/// The Cartesian product of one or more tagged sources.
///
/// Each call to [`iter`](Combinations::iter) starts a new enumeration, so the
/// product can be walked any number of times, including concurrently.
#[derive(Clone, Debug)]
pub struct Combinations {
    sources: Vec<Vec<TaggedValue>>,
}

impl Combinations {
    /// Combine sources that all hold the same raw type.
    pub fn from_raw<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Parameter,
    {
        create_values(sources.into_iter().map(factory::from_values))
    }

    /// Number of elements in each produced tuple.
    pub fn arity(&self) -> usize {
        self.sources.len()
    }

    /// Number of tuples, saturating at `usize::MAX`.
    ///
    /// Use [`checked_len`](Combinations::checked_len) to tell a saturated
    /// count from an exact one.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    /// Number of tuples, or `None` if it does not fit in a `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        if self.sizes().any(|size| size == 0) {
            return Some(0);
        }
        self.sizes().try_fold(1usize, usize::checked_mul)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: product(&self.sources),
            remaining: self.checked_len(),
        }
    }

    fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sources.iter().map(Vec::len)
    }
}

impl<'a> IntoIterator for &'a Combinations {
    type Item = Vec<TaggedValue>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type Tuples<'a> = Box<dyn Iterator<Item = Vec<TaggedValue>> + 'a>;

// Pair the first two sources, then fold the rest in from the left. The fold
// order is what fixes the enumeration order.
fn product<'a>(sources: &'a [Vec<TaggedValue>]) -> Tuples<'a> {
    match sources {
        [] => Box::new(std::iter::empty()),
        [only] => Box::new(only.iter().map(|value| vec![value.clone()])),
        [first, second, rest @ ..] => {
            let pairs: Tuples<'a> = Box::new(
                pairwise(first, second).map(|(a, b)| vec![a.clone(), b.clone()]),
            );
            rest.iter().fold(pairs, |priors, next| -> Tuples<'a> {
                Box::new(extend(priors, next.iter().cloned()))
            })
        }
    }
}

/// Iterator over the tuples of a [`Combinations`].
///
/// The size hint is exact whenever the product fits in a `usize`. Past that
/// it is `(usize::MAX, None)`, which is why this is not an
/// `ExactSizeIterator`.
pub struct Iter<'a> {
    inner: Tuples<'a>,
    remaining: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = Vec<TaggedValue>;

    fn next(&mut self) -> Option<Self::Item> {
        let tuple = self.inner.next()?;
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
