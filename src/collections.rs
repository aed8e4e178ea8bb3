use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;


/// Use indexmap so insertion order doubles as the node id, rustc_hash for fast hashing
pub(crate) type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
