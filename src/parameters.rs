use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::factory;
use crate::tagged::TaggedValue;

type Replay<'a> = Box<dyn Fn() -> Box<dyn Iterator<Item = TaggedValue> + 'a> + 'a>;

enum Values<'a> {
    Eager(Box<[TaggedValue]>),
    Lazy(Replay<'a>),
}

/// One combination, read by position with the type checked on every access.
///
/// Built either eagerly, copying the values into an owned slice, or lazily
/// over a cloneable iterator that is replayed for each access. Both read the
/// same way.
pub struct ParameterTuple<'a> {
    count: usize,
    values: Values<'a>,
}

impl<'a> ParameterTuple<'a> {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = TaggedValue>,
    {
        let values: Box<[TaggedValue]> = values.into_iter().collect();
        ParameterTuple {
            count: values.len(),
            values: Values::Eager(values),
        }
    }

    /// Wrap `values` without collecting them.
    ///
    /// With `count` of `None` the iterator is walked once to count it. An
    /// explicit count larger than the sequence makes the missing positions
    /// fail as out of range.
    pub fn lazy<I>(values: I, count: Option<usize>) -> Self
    where
        I: IntoIterator<Item = TaggedValue>,
        I::IntoIter: Clone + 'a,
    {
        let values = values.into_iter();
        let count = count.unwrap_or_else(|| values.clone().count());
        ParameterTuple {
            count,
            values: Values::Lazy(Box::new(
                move || -> Box<dyn Iterator<Item = TaggedValue> + 'a> { Box::new(values.clone()) },
            )),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The value at `index` as a `T`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] outside `0..count` and with
    /// [`Error::TypeMismatch`] if the value there is not a `T`.
    pub fn get_value<T>(&self, index: usize) -> Result<T>
    where
        T: Any + Clone,
    {
        factory::get_value_strict(&self.element(index)?)
    }

    /// Like [`get_value`](Self::get_value), with both failures mapped to `None`.
    pub fn get_value_safe<T>(&self, index: usize) -> Option<T>
    where
        T: Any + Clone,
    {
        factory::get_value_safe(&self.element(index).ok()?)
    }

    /// All values as one statically-typed tuple.
    ///
    /// ```
    /// use paramcomb::ParameterTuple;
    ///
    /// let combinations = paramcomb::combine![
    ///     paramcomb::factory::from_values([5, 6]),
    ///     paramcomb::factory::from_values(["x"]),
    /// ]
    /// .unwrap();
    /// let first = ParameterTuple::new(combinations.iter().next().unwrap());
    /// assert_eq!(first.to_tuple::<(i32, &str)>(), Ok((5, "x")));
    /// ```
    pub fn to_tuple<T: FromParameters>(&self) -> Result<T> {
        T::from_parameters(self)
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = TaggedValue> + '_> {
        match &self.values {
            Values::Eager(values) => Box::new(values.iter().cloned()),
            Values::Lazy(replay) => replay(),
        }
    }

    fn element(&self, index: usize) -> Result<TaggedValue> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            count: self.count,
        };
        if index >= self.count {
            return Err(out_of_range);
        }
        let element = match &self.values {
            Values::Eager(values) => values.get(index).cloned(),
            Values::Lazy(replay) => replay().nth(index),
        };
        element.ok_or(out_of_range)
    }
}

impl fmt::Debug for ParameterTuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.values {
            Values::Eager(_) => "eager",
            Values::Lazy(_) => "lazy",
        };
        f.debug_struct("ParameterTuple")
            .field("count", &self.count)
            .field("kind", &kind)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for ParameterTuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={}:[", self.count)?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Rust tuples that can be read out of a [`ParameterTuple`] in one call.
pub trait FromParameters: Sized {
    const ARITY: usize;

    fn from_parameters(parameters: &ParameterTuple<'_>) -> Result<Self>;
}

macro_rules! tuple_from_parameters {
    ($arity:literal; $($index:tt $name:ident),+) => {
        impl<$($name),+> FromParameters for ($($name,)+)
        where
            $($name: Any + Clone,)+
        {
            const ARITY: usize = $arity;

            fn from_parameters(parameters: &ParameterTuple<'_>) -> Result<Self> {
                if parameters.count() != Self::ARITY {
                    return Err(Error::Arity {
                        expected: Self::ARITY,
                        actual: parameters.count(),
                    });
                }
                Ok(($(parameters.get_value::<$name>($index)?,)+))
            }
        }
    };
}

tuple_from_parameters!(1; 0 A);
tuple_from_parameters!(2; 0 A, 1 B);
tuple_from_parameters!(3; 0 A, 1 B, 2 C);
tuple_from_parameters!(4; 0 A, 1 B, 2 C, 3 D);
tuple_from_parameters!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
tuple_from_parameters!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
tuple_from_parameters!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
tuple_from_parameters!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
tuple_from_parameters!(9; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
tuple_from_parameters!(10; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
tuple_from_parameters!(11; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
tuple_from_parameters!(12; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);

/// Wrap each produced combination in a [`ParameterTuple`].
pub trait ParametersExt: Iterator<Item = Vec<TaggedValue>> + Sized {
    fn parameters(self) -> impl Iterator<Item = ParameterTuple<'static>> {
        self.map(ParameterTuple::new)
    }

    /// Wrap each combination in a lazily-read [`ParameterTuple`].
    ///
    /// The enumeration already materializes every combination as a `Vec`, so
    /// this saves no allocation over [`parameters`](Self::parameters). The
    /// values move into a shared slice that every access replays by index;
    /// a replay clones only a reference count.
    fn lazy_parameters(self, count: Option<usize>) -> impl Iterator<Item = ParameterTuple<'static>> {
        self.map(move |values| {
            let values: Arc<[TaggedValue]> = values.into();
            let indices = 0..values.len();
            ParameterTuple::lazy(indices.map(move |index| values[index].clone()), count)
        })
    }
}

impl<I> ParametersExt for I where I: Iterator<Item = Vec<TaggedValue>> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TaggedValue> {
        let mut values = factory::from_values([7i32]);
        values.extend(factory::from_values([String::from("seven")]));
        values
    }

    #[test]
    fn eager_and_lazy_read_alike() {
        let eager = ParameterTuple::new(sample());
        let lazy = ParameterTuple::lazy(sample(), None);
        for tuple in [&eager, &lazy] {
            assert_eq!(tuple.count(), 2);
            assert_eq!(tuple.get_value::<i32>(0), Ok(7));
            assert_eq!(tuple.get_value::<String>(1).as_deref(), Ok("seven"));
            assert_eq!(
                tuple.get_value::<i32>(2),
                Err(Error::IndexOutOfRange { index: 2, count: 2 })
            );
            assert!(matches!(
                tuple.get_value::<String>(0),
                Err(Error::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn lazy_count_beyond_sequence() {
        let lazy = ParameterTuple::lazy(sample(), Some(4));
        assert_eq!(lazy.count(), 4);
        assert_eq!(
            lazy.get_value::<i32>(3),
            Err(Error::IndexOutOfRange { index: 3, count: 4 })
        );
    }

    #[test]
    fn lazy_over_borrowed_values() {
        let values = sample();
        let lazy = ParameterTuple::lazy(values.iter().cloned(), None);
        assert_eq!(lazy.get_value_safe::<i32>(0), Some(7));
        assert_eq!(lazy.get_value_safe::<u64>(0), None);
        assert_eq!(lazy.get_value_safe::<i32>(9), None);
    }

    #[test]
    fn lazy_parameters_read_like_eager() {
        let combinations = || vec![sample(), sample()].into_iter();
        let eager: Vec<_> = combinations().parameters().collect();
        let lazy: Vec<_> = combinations().lazy_parameters(None).collect();
        assert_eq!(lazy.len(), 2);
        for (eager, lazy) in eager.iter().zip(&lazy) {
            assert!(format!("{lazy:?}").contains("lazy"));
            assert_eq!(lazy.count(), eager.count());
            assert_eq!(lazy.to_string(), eager.to_string());
            assert_eq!(lazy.to_tuple::<(i32, String)>(), eager.to_tuple());
            assert_eq!(lazy.get_value::<i32>(0), Ok(7));
            assert_eq!(lazy.get_value::<i32>(0), Ok(7));
        }
    }

    #[test]
    fn lazy_parameters_replay_shared_values() {
        let values = sample();
        let tuple = vec![values.clone()]
            .into_iter()
            .lazy_parameters(Some(2))
            .next()
            .unwrap();
        let first: Vec<TaggedValue> = tuple.iter().collect();
        let second: Vec<TaggedValue> = tuple.iter().collect();
        for value in [&first[1], &second[1]] {
            assert!(std::ptr::eq(
                value.downcast_ref::<String>().unwrap(),
                values[1].downcast_ref::<String>().unwrap()
            ));
        }
        assert_eq!(tuple.get_value::<String>(1).unwrap(), "seven");
    }

    #[test]
    fn display_lists_values() {
        assert_eq!(
            ParameterTuple::new(sample()).to_string(),
            "count=2:[7(0),seven(0)]"
        );
        assert_eq!(ParameterTuple::new(Vec::new()).to_string(), "count=0:[]");
    }

    #[test]
    fn tuple_extraction() {
        let tuple = ParameterTuple::new(sample());
        assert_eq!(
            tuple.to_tuple::<(i32, String)>(),
            Ok((7, "seven".to_owned()))
        );
        assert_eq!(
            tuple.to_tuple::<(i32,)>(),
            Err(Error::Arity {
                expected: 1,
                actual: 2
            })
        );
        assert!(matches!(
            tuple.to_tuple::<(String, String)>(),
            Err(Error::TypeMismatch { .. })
        ));
    }
}
