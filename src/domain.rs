pub use paramcomb_derive::Domain;

/// A closed, statically-known set of values with a fixed order.
///
/// Derive it for a fieldless enum; the members are the variants in
/// declaration order.
///
/// ```
/// use paramcomb::Domain;
///
/// #[derive(Clone, Debug, PartialEq, Domain)]
/// enum Shade {
///     Light,
///     Dark,
/// }
///
/// assert_eq!(Shade::MEMBERS, &[Shade::Light, Shade::Dark]);
/// ```
///
/// Types that are not closed domains are rejected when the derive expands.
/// This compile error is the only domain error: every type that implements
/// `Domain` can be enumerated, and an enum without variants is simply an empty
/// domain.
///
/// ```compile_fail
/// use paramcomb::Domain;
///
/// #[derive(Clone, Debug, Domain)]
/// struct Point {
///     x: i32,
/// }
/// ```
///
/// ```compile_fail
/// use paramcomb::Domain;
///
/// #[derive(Clone, Debug, Domain)]
/// enum Reading {
///     Celsius(f64),
///     Missing,
/// }
/// ```
///
/// ```compile_fail
/// use paramcomb::Domain;
///
/// #[derive(Clone, Debug, Domain)]
/// enum Wrapper<T> {
///     Empty,
///     #[allow(dead_code)]
///     Phantom(std::marker::PhantomData<T>),
/// }
/// ```
pub trait Domain: Sized + 'static {
    const MEMBERS: &'static [Self];
}

impl Domain for bool {
    const MEMBERS: &'static [Self] = &[false, true];
}
