use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

/// A value that can be carried by a [`TaggedValue`].
///
/// Implemented for every `'static` type that is `Debug + Send + Sync`. The
/// thread bounds let one set of combinations be read from several threads at
/// once, so single-threaded shared types such as `Rc`, `Cell` and `RefCell`
/// cannot be tagged. Use `Arc`, `Mutex` or the atomics in their place:
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// let tagged = paramcomb::factory::from_values([Arc::new(Mutex::new(0))]);
/// assert!(tagged[0].is::<Arc<Mutex<i32>>>());
/// ```
///
/// ```compile_fail
/// let tagged = paramcomb::factory::from_values([std::rc::Rc::new(0)]);
/// ```
///
/// ```compile_fail
/// let tagged = paramcomb::factory::from_values([std::cell::RefCell::new(0)]);
/// ```
pub trait Parameter: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;
}

impl<T> Parameter for T
where
    T: Any + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// One value of a source sequence, with its type erased and its position in
/// that sequence recorded as `id`.
///
/// Only the [`factory`](crate::factory) functions create tagged values, so the
/// `id` always names a real source position. Clones share the value.
#[derive(Clone)]
pub struct TaggedValue {
    id: usize,
    value: Arc<dyn Parameter>,
}

impl TaggedValue {
    pub(crate) fn new<T: Parameter>(id: usize, value: T) -> Self {
        TaggedValue {
            id,
            value: Arc::new(value),
        }
    }

    /// Position of the value in the sequence it was created from.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Name of the stored type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.parameter().type_name()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.parameter().as_any().is::<T>()
    }

    /// Borrow the stored value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.parameter().as_any().downcast_ref::<T>()
    }

    fn text(&self) -> Option<&dyn fmt::Display> {
        let any = self.parameter().as_any();
        if let Some(text) = any.downcast_ref::<String>() {
            Some(text)
        } else if let Some(text) = any.downcast_ref::<&'static str>() {
            Some(text)
        } else if let Some(text) = any.downcast_ref::<char>() {
            Some(text)
        } else {
            None
        }
    }

    // Deref explicitly: `Arc<dyn Parameter>` is itself a `Parameter`.
    fn parameter(&self) -> &dyn Parameter {
        &*self.value
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedValue")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish()
    }
}

/// Writes `value(id)`. Text (`String`, `&str`, `char`) is written as is,
/// any other value through its `Debug` form.
impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}({})", self.id),
            None => write!(f, "{:?}({})", self.parameter(), self.id),
        }
    }
}
