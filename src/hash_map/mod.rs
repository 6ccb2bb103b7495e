//! Hash containers built on one chained-bucket engine
//!
//! - `ChainTable`: the shared engine — bucket array of optional collision
//!   chains, proactive power-of-two growth at 0.75 load
//! - `ChainMap`: key/value façade
//! - `ChainSet`: membership façade with set algebra

mod chain_map;
mod chain_set;
mod chain_table;

pub use chain_map::{ChainMap, Keys, Values};
pub use chain_set::{ChainSet, ChainSetIter};
pub use chain_table::{ChainTable, ChainTableIter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let mut table = ChainTable::<i32, &str>::new();
        table.insert(1, "one").unwrap();
        assert_eq!(table.get(&1), Some(&"one"));

        let mut map = ChainMap::<&str, i32>::new();
        map.insert("answer", 42).unwrap();
        assert_eq!(map.get(&"answer"), Some(&42));

        let mut set = ChainSet::<i32>::new();
        set.insert(7).unwrap();
        assert!(set.contains(&7));
    }
}
