//! Foundation types shared by the minimoe front-end crates.
//!
//! This crate carries the pieces that have no opinion about the
//! minimoe grammar: a string interner (`Symbol`/`StringTable`) and a
//! typed-index arena (`IndexVec`/`Idx`). Grammar-specific types
//! (`Token`, `Diagnostic`, the AST) live in `minimoe-lex` and
//! `minimoe-par`.

pub mod error;
pub mod index_vec;
pub mod symbol;

pub use index_vec::{Idx, IndexVec};
pub use symbol::{Symbol, StringTable};

/// Defines a newtype index backed by `u32` and implementing [`Idx`].
#[macro_export]
macro_rules! define_idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

pub use rustc_hash::{FxHashMap, FxHashSet};
