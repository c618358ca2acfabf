//! Total elimination for `Option`
//!
//! `Visit` is the only way the GUI code pulls a value out of an `Option`:
//! every call site supplies one function per variant, so absence is always
//! handled explicitly and there is no unchecked unwrap anywhere in the tree.

/// Eliminates a value by handling both variants.
pub trait Visit<T> {
    /// Calls `on_none` when absent, `on_some` with the value otherwise.
    fn visit<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U;

    /// Side-effecting form of [`Visit::visit`].
    fn visit_with(self, on_none: impl FnOnce(), on_some: impl FnOnce(T))
    where
        Self: Sized,
    {
        self.visit(on_none, on_some)
    }
}

impl<T> Visit<T> for Option<T> {
    fn visit<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }
}
