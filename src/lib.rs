//! Type-safe Cartesian products of heterogeneous parameter domains.
//!
//! Each source is a sequence of values of one type. The [`factory`] tags every
//! value with its position and erases its type, the [`combinator`] enumerates
//! every combination lazily, and [`ParameterTuple`] reads a combination back
//! out with the type checked at each position.
//!
//! ```
//! use paramcomb::{factory, Domain, ParameterTuple};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Domain)]
//! enum Browser {
//!     Firefox,
//!     Chrome,
//! }
//!
//! # fn main() -> paramcomb::Result<()> {
//! let combinations = paramcomb::combine![
//!     factory::from_domain::<Browser>(),
//!     factory::from_values([800, 1024, 1920]),
//! ]?;
//! assert_eq!(combinations.len(), 6);
//!
//! let tuples: Vec<ParameterTuple> = combinations.iter().map(ParameterTuple::new).collect();
//! assert_eq!(tuples[0].get_value::<Browser>(0)?, Browser::Firefox);
//! assert_eq!(tuples[2].get_value::<i32>(1)?, 1920);
//! assert_eq!(tuples[3].get_value::<Browser>(0)?, Browser::Chrome);
//! assert!(tuples[3].get_value::<String>(1).is_err());
//! # Ok(())
//! # }
//! ```

extern crate self as paramcomb;

pub mod combinator;
mod domain;
mod error;
pub mod factory;
mod parameters;
mod tagged;

pub use combinator::{create_values, Combinations};
pub use domain::Domain;
pub use error::{Error, Result};
pub use parameters::{FromParameters, ParameterTuple, ParametersExt};
pub use tagged::{Parameter, TaggedValue};
