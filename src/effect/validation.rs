//! Validation - success, or every failure that occurred.
//!
//! Unlike `Result`, which stops at the first error, `Validation` combines
//! *independent* checks with [`apply`](Validation::apply) and keeps all of
//! their failures. Errors are accumulated left-to-right: the left operand's
//! errors always precede the right operand's.
//!
//! `Validation` deliberately has no `chain`. A chained step depends on the
//! previous step's value, so it can only run after that step succeeded, which
//! would silently turn accumulation back into short-circuiting. The witness
//! [`ValidationKind`] is therefore an [`Applicative`] but not a
//! [`Monad`](crate::typeclass::Monad):
//!
//! ```rust,compile_fail
//! use contextual::effect::ValidationKind;
//! use contextual::typeclass::Monad;
//!
//! fn requires_monad<M: Monad>() {}
//! requires_monad::<ValidationKind<String>>();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contextual::effect::Validation;
//!
//! let name: Validation<&str, &str> = Validation::invalid("bad name");
//! let email: Validation<&str, &str> = Validation::invalid("bad email");
//! let age: Validation<&str, u32> = Validation::valid(30);
//!
//! let user = Validation::combine3(name, email, age, |n, e, a| (n, e, a));
//! assert_eq!(user.errors(), Some(&["bad name", "bad email"][..]));
//! ```

use std::marker::PhantomData;

use smallvec::{SmallVec, smallvec};

use crate::typeclass::{Applicative, Functor, Portable, Semigroup, TypeConstructor};

/// An ordered sequence with at least one element.
///
/// `Validation::Invalid` carries a `NonEmpty`, so an invalid value without
/// errors cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<E> {
    items: SmallVec<[E; 2]>,
}

impl<E> NonEmpty<E> {
    /// Creates a sequence holding exactly one element.
    pub fn new(first: E) -> Self {
        Self {
            items: smallvec![first],
        }
    }

    /// Builds a sequence from an iterator, or `None` if it yields nothing.
    pub fn from_iterator<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let items: SmallVec<[E; 2]> = items.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first element.
    pub fn first(&self) -> &E {
        &self.items[0]
    }

    /// Number of elements, never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The elements in order.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Appends one element at the end.
    pub fn push(&mut self, item: E) {
        self.items.push(item);
    }

    /// Transforms every element, keeping the order.
    #[must_use]
    pub fn map<E2, F>(self, function: F) -> NonEmpty<E2>
    where
        F: FnMut(E) -> E2,
    {
        NonEmpty {
            items: self.items.into_iter().map(function).collect(),
        }
    }

    /// Converts into a `Vec`, keeping the order.
    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }
}

impl<E> Semigroup for NonEmpty<E> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<E> IntoIterator for NonEmpty<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a NonEmpty<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for NonEmpty<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<E>::deserialize(deserializer)?;
        Self::from_iterator(items)
            .ok_or_else(|| serde::de::Error::custom("expected at least one error"))
    }
}

/// The outcome of one or more independent checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// Every check passed.
    Valid(T),
    /// At least one check failed; errors are in evaluation order.
    Invalid(NonEmpty<E>),
}

impl<E, T> Validation<E, T> {
    /// A passed check.
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// A failed check with a single error.
    pub fn invalid(error: E) -> Self {
        Self::Invalid(NonEmpty::new(error))
    }

    /// A failed check with several errors, or `None` when `errors` is empty.
    pub fn invalid_all<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        NonEmpty::from_iterator(errors).map(Self::Invalid)
    }

    /// Returns `true` for `Valid`.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The accumulated errors, or `None` for `Valid`.
    pub fn errors(&self) -> Option<&[E]> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors.as_slice()),
        }
    }

    /// Applies `function` to a valid value; errors pass through untouched.
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transforms every accumulated error.
    pub fn map_errors<E2, F>(self, function: F) -> Validation<E2, T>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(function)),
        }
    }

    /// Combines this validation's function with an independent validation's value.
    ///
    /// Both operands are always inspected. The four cases are:
    ///
    /// ```text
    /// apply(Valid(f),    Valid(x))    = Valid(f(x))
    /// apply(Invalid(e1), Invalid(e2)) = Invalid(e1 ++ e2)
    /// apply(Invalid(e),  Valid(_))    = Invalid(e)
    /// apply(Valid(_),    Invalid(e))  = Invalid(e)
    /// ```
    pub fn apply<A, U>(self, other: Validation<E, A>) -> Validation<E, U>
    where
        T: FnOnce(A) -> U,
    {
        match (self, other) {
            (Self::Valid(function), Validation::Valid(value)) => Validation::Valid(function(value)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.combine(right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    /// Pairs the values of two independent validations.
    pub fn and_also<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        self.map(|left| move |right: U| (left, right)).apply(other)
    }

    /// Combines two independent validations with a binary function.
    pub fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and_also(other)
            .map(|(left, right)| function(left, right))
    }

    /// Combines three independent validations with a ternary function.
    pub fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.and_also(second)
            .and_also(third)
            .map(|((a, b), c)| function(a, b, c))
    }

    /// Combines four independent validations with a quaternary function.
    pub fn map4<B, C, D, R, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        fourth: Validation<E, D>,
        function: F,
    ) -> Validation<E, R>
    where
        F: FnOnce(T, B, C, D) -> R,
    {
        self.and_also(second)
            .and_also(third)
            .and_also(fourth)
            .map(|(((a, b), c), d)| function(a, b, c, d))
    }

    /// Lifts a ternary function over three validations; an associated-function
    /// spelling of [`map3`](Self::map3).
    pub fn combine3<B, C, D, F>(
        first: Self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        first.map3(second, third, function)
    }

    /// Combines any number of validations of the same type.
    ///
    /// Every operand is evaluated before the result is decided; the errors of
    /// all invalid operands are concatenated in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contextual::effect::Validation;
    ///
    /// let checks = vec![
    ///     Validation::valid(1),
    ///     Validation::invalid("second"),
    ///     Validation::valid(3),
    ///     Validation::invalid("fourth"),
    /// ];
    /// let combined: Validation<&str, Vec<i32>> = Validation::sequence(checks);
    /// assert_eq!(combined.errors(), Some(&["second", "fourth"][..]));
    /// ```
    pub fn sequence<I>(validations: I) -> Validation<E, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        validations.into_iter().fold(
            Validation::Valid(Vec::new()),
            |accumulated: Validation<E, Vec<T>>, next| {
                accumulated.map2(next, |mut values, value| {
                    values.push(value);
                    values
                })
            },
        )
    }

    /// Eliminates the validation into a plain value.
    pub fn fold<U, OnInvalid, OnValid>(self, on_invalid: OnInvalid, on_valid: OnValid) -> U
    where
        OnInvalid: FnOnce(NonEmpty<E>) -> U,
        OnValid: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Converts into a `Result` carrying every error.
    pub fn into_result(self) -> Result<T, NonEmpty<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts a `Result` into a single-error validation.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

/// Witness for `Validation<E, _>`: an [`Applicative`], never a `Monad`.
pub struct ValidationKind<E>(PhantomData<fn() -> E>);

impl<E> std::fmt::Debug for ValidationKind<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ValidationKind")
    }
}

impl<E: Portable> TypeConstructor for ValidationKind<E> {
    type Of<A: Portable> = Validation<E, A>;
}

impl<E: Portable> Functor for ValidationKind<E> {
    #[inline]
    fn map<A, B, F>(fa: Validation<E, A>, function: F) -> Validation<E, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        fa.map(function)
    }
}

impl<E: Portable> Applicative for ValidationKind<E> {
    #[inline]
    fn of<A>(value: A) -> Validation<E, A>
    where
        A: Portable + Clone,
    {
        Validation::Valid(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Validation<E, F>, fa: Validation<E, A>) -> Validation<E, B>
    where
        A: Portable,
        B: Portable,
        F: Fn(A) -> B + Portable,
    {
        function.apply(fa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn check_name(name: &str) -> Validation<String, String> {
        if name.is_empty() {
            Validation::invalid("bad name".to_string())
        } else {
            Validation::valid(name.to_string())
        }
    }

    fn check_age(age: i32) -> Validation<String, u8> {
        u8::try_from(age)
            .ok()
            .filter(|age| *age >= 18)
            .map_or_else(|| Validation::invalid("bad age".to_string()), Validation::valid)
    }

    #[rstest]
    fn apply_concatenates_left_then_right() {
        let left: Validation<&str, fn(i32) -> i32> =
            Validation::invalid_all(["l1", "l2"]).expect("non-empty errors");
        let right: Validation<&str, i32> =
            Validation::invalid_all(["r1"]).expect("non-empty errors");
        assert_eq!(left.apply(right).errors(), Some(&["l1", "l2", "r1"][..]));
    }

    #[rstest]
    #[case("ada", 36, true)]
    #[case("", 36, false)]
    #[case("ada", 12, false)]
    fn map2_accepts_only_fully_valid_input(
        #[case] name: &str,
        #[case] age: i32,
        #[case] expected_valid: bool,
    ) {
        let result = check_name(name).map2(check_age(age), |name, age| (name, age));
        assert_eq!(result.is_valid(), expected_valid);
    }

    #[rstest]
    fn both_failures_are_reported() {
        let result = check_name("").map2(check_age(3), |name, age| (name, age));
        assert_eq!(
            result.errors(),
            Some(&["bad name".to_string(), "bad age".to_string()][..])
        );
    }

    #[rstest]
    fn invalid_all_rejects_empty_error_list() {
        assert!(Validation::<&str, i32>::invalid_all(Vec::new()).is_none());
    }

    #[rstest]
    fn map4_collects_in_argument_order() {
        let result = Validation::<&str, i32>::invalid("a").map4(
            Validation::valid(2),
            Validation::<&str, i32>::invalid("c"),
            Validation::<&str, i32>::invalid("d"),
            |a, b, c, d| a + b + c + d,
        );
        assert_eq!(result.errors(), Some(&["a", "c", "d"][..]));
    }

    #[rstest]
    fn sequence_of_valid_values_keeps_order() {
        let combined = Validation::<&str, i32>::sequence(vec![
            Validation::valid(3),
            Validation::valid(1),
            Validation::valid(2),
        ]);
        assert_eq!(combined, Validation::Valid(vec![3, 1, 2]));
    }

    #[rstest]
    fn map_errors_rewrites_every_error() {
        let invalid = Validation::<&str, i32>::invalid_all(["x", "yy"]).expect("non-empty errors");
        assert_eq!(invalid.map_errors(str::len).errors(), Some(&[1, 2][..]));
    }

    #[rstest]
    fn result_round_trip_keeps_first_error() {
        let validation = Validation::<&str, i32>::from_result(Err("broken"));
        let errors = validation.into_result().unwrap_err();
        assert_eq!(errors.first(), &"broken");
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    fn witness_map2_accumulates() {
        let combined = ValidationKind::<&str>::map2(
            Validation::invalid("left"),
            Validation::<&str, i32>::invalid("right"),
            |a: i32, b: i32| a + b,
        );
        assert_eq!(combined.errors(), Some(&["left", "right"][..]));
    }
}
