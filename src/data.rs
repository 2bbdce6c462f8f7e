//! Payload contract for simplices and edges.
//!
//! The complex is generic over one node payload type and one edge payload
//! type. Where the heterogeneous original would give each dimension its
//! own type, a Rust instantiation uses a single type for all dimensions —
//! a plain value when every level stores the same thing, or an enum with
//! one variant per level when they differ. `default_for` is how the
//! complex materializes payloads for implicitly created faces.

/// Per-level payload: cloneable, with a level-indexed default.
///
/// `level` is the number of vertices of the carrying simplex (for node
/// payloads) or of the upper endpoint of the carrying edge (for edge
/// payloads). Implementations that do not vary by level can ignore it.
pub trait LevelData: Clone {
    /// The payload assigned to a freshly materialized simplex or edge at
    /// `level`. Explicitly supplied payloads overwrite this; re-insertion
    /// of an existing simplex never resets it.
    fn default_for(level: usize) -> Self;
}

macro_rules! impl_level_data_via_default {
    ($($t:ty),* $(,)?) => {
        $(impl LevelData for $t {
            #[inline]
            fn default_for(_level: usize) -> Self {
                <$t>::default()
            }
        })*
    };
}

impl_level_data_via_default!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_and_numeric_defaults() {
        let () = <() as LevelData>::default_for(3);
        assert_eq!(<i32 as LevelData>::default_for(0), 0);
        assert_eq!(<u64 as LevelData>::default_for(7), 0);
        assert_eq!(<String as LevelData>::default_for(1), String::new());
    }

    #[test]
    fn level_dependent_impls_are_possible() {
        #[derive(Clone, Debug, PartialEq)]
        enum Color {
            Vertex(u8),
            Higher,
        }
        impl LevelData for Color {
            fn default_for(level: usize) -> Self {
                if level <= 1 {
                    Color::Vertex(0)
                } else {
                    Color::Higher
                }
            }
        }
        assert_eq!(Color::default_for(1), Color::Vertex(0));
        assert_eq!(Color::default_for(2), Color::Higher);
    }
}
