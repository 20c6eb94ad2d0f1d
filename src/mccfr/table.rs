use super::regret::RegretNode;
use std::collections::HashMap;

/// Regret nodes live in a flat arena; the table maps an info-set key to its
/// arena index. This replaces the original "table of owning pointers"
/// pattern -- no double-free, no iterator invalidation, and sharding for
/// data-parallel training (§5) is just partitioning the key space.
#[derive(Debug, Default)]
pub struct StrategyTable {
    nodes: Vec<RegretNode>,
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl StrategyTable {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fetch the node for `key`, creating one with `arity` legal actions on
    /// first visit. The arity suffix baked into every key (§4.4) makes a
    /// later lookup at a different arity a structural bug rather than a
    /// reachable state; `None` signals that bug to the caller instead of
    /// silently indexing into a mismatched vector (§7).
    pub fn get_or_create(&mut self, key: &str, arity: usize) -> Option<&mut RegretNode> {
        let index = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.nodes.push(RegretNode::new(arity));
                self.keys.push(key.to_string());
                let i = self.nodes.len() - 1;
                self.index.insert(key.to_string(), i);
                i
            }
        };
        let node = &mut self.nodes[index];
        if node.arity() != arity {
            log::error!(
                "info-set key '{key}' observed with arity {} after being created with arity {}",
                arity,
                node.arity()
            );
            return None;
        }
        Some(node)
    }

    pub fn average_strategy(&self, key: &str) -> Option<Vec<f64>> {
        self.index.get(key).map(|&i| self.nodes[i].average_strategy())
    }

    /// Entries in insertion order, not hashmap iteration order -- this is
    /// what makes `save(load(f)) == f` byte-for-byte (§8 property 7)
    /// instead of merely "same keys, same values, any order".
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegretNode)> {
        self.keys.iter().map(String::as_str).zip(self.nodes.iter())
    }

    /// Append a node restored from persistence, preserving file order.
    pub fn insert_restored(&mut self, key: String, node: RegretNode) {
        let idx = self.nodes.len();
        self.index.insert(key.clone(), idx);
        self.keys.push(key);
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookup_returns_same_node() {
        let mut table = StrategyTable::new();
        table.get_or_create("k", 2).unwrap().update_regret(0, 1.0);
        assert_eq!(table.get_or_create("k", 2).unwrap().strategy_sum().len(), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn arity_mismatch_returns_none() {
        let mut table = StrategyTable::new();
        table.get_or_create("k", 2);
        assert!(table.get_or_create("k", 3).is_none());
    }

    #[test]
    fn distinct_keys_get_distinct_nodes() {
        let mut table = StrategyTable::new();
        table.get_or_create("a", 2);
        table.get_or_create("b", 3);
        assert_eq!(table.len(), 2);
    }
}
