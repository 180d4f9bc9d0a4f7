//! Creation of tagged sequences and typed retrieval out of them.

use std::any::{self, Any};

use log::trace;

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::tagged::{Parameter, TaggedValue};

/// Tag every value with its position in `values`.
pub fn from_values<I>(values: I) -> Vec<TaggedValue>
where
    I: IntoIterator,
    I::Item: Parameter,
{
    let tagged: Vec<TaggedValue> = values
        .into_iter()
        .enumerate()
        .map(|(id, value)| TaggedValue::new(id, value))
        .collect();
    trace!(
        "tagged {} values of {}",
        tagged.len(),
        any::type_name::<I::Item>()
    );
    tagged
}

/// Tag every member of the domain `T`, in declaration order.
///
/// Only closed domains implement [`Domain`], so there is nothing to reject at
/// runtime. An enum without variants yields an empty sequence.
pub fn from_domain<T>() -> Vec<TaggedValue>
where
    T: Domain + Clone + Parameter,
{
    from_values(T::MEMBERS.iter().cloned())
}

/// The stored value as a `T`, failing if another type is stored.
pub fn get_value_strict<T>(value: &TaggedValue) -> Result<T>
where
    T: Any + Clone,
{
    value
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| Error::TypeMismatch {
            expected: any::type_name::<T>(),
            actual: value.type_name(),
        })
}

/// The stored value as a `T`, or `None` if another type is stored.
pub fn get_value_safe<T>(value: &TaggedValue) -> Option<T>
where
    T: Any + Clone,
{
    value.downcast_ref::<T>().cloned()
}

/// `(true, value)` if a `T` is stored, `(false, T::default())` otherwise.
pub fn try_get_value<T>(value: &TaggedValue) -> (bool, T)
where
    T: Any + Clone + Default,
{
    match get_value_safe(value) {
        Some(value) => (true, value),
        None => (false, T::default()),
    }
}
