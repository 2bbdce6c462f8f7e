//! Structural invariant checks.
//!
//! `debug_invariants!` fires after every mutation in debug builds and
//! whenever the `strict-invariants` feature is enabled; it compiles to a
//! no-op otherwise. The checks walk the whole diagram, so release builds
//! keep them off by default.

#[cfg(any(debug_assertions, feature = "strict-invariants"))]
macro_rules! debug_invariants {
    ($c:expr) => {
        $c.debug_assert_invariants();
    };
}

#[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
macro_rules! debug_invariants {
    ($c:expr) => {};
}

pub(crate) use debug_invariants;
