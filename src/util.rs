//! Crate-private extension traits.

pub(crate) trait BoolExt {
    /// Returns `Some(f())` if `self` is true, else `None`.
    fn some<T, F: FnOnce() -> T>(self, f: F) -> Option<T>;
}

impl BoolExt for bool {
    fn some<T, F: FnOnce() -> T>(self, f: F) -> Option<T> {
        if self {
            Some(f())
        } else {
            None
        }
    }
}
