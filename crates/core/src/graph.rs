//! Bundle-level dependency graph.

use bundlescope_api::BundleRecord;
use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap};

/// Recomputes `be_depends` of every record from the others' `all_depends`.
///
/// O(N²) over the record set. Previous values are overwritten, never
/// extended, so repeated calls give the same result.
pub fn compute_reverse_depends(records: &mut [BundleRecord]) {
    let reverse: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, target)| {
            records
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.depends_on(&target.name))
                .map(|(_, other)| other.name.clone())
                .collect()
        })
        .collect();

    for (record, be_depends) in records.iter_mut().zip(reverse) {
        record.be_depends = be_depends;
    }
}

/// Direct-dependency graph over bundle names.
pub struct DependencyGraph {
    topology: DiGraph<String, ()>,
    name_index: HashMap<String, NodeIndex>,
    /// Dependencies named by a record but not discovered themselves
    missing: BTreeSet<String>,
}

impl DependencyGraph {
    pub fn build(records: &[BundleRecord]) -> Self {
        let mut topology = DiGraph::new();
        let mut name_index = HashMap::new();

        for record in records {
            let idx = topology.add_node(record.name.clone());
            name_index.insert(record.name.clone(), idx);
        }

        let mut missing = BTreeSet::new();
        for record in records {
            let from = name_index[&record.name];
            for dep in &record.direct_depends {
                match name_index.get(dep) {
                    Some(&to) => {
                        topology.update_edge(from, to, ());
                    }
                    None => {
                        missing.insert(dep.clone());
                    }
                }
            }
        }

        Self {
            topology,
            name_index,
            missing,
        }
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Outgoing)
    }

    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
    }

    fn neighbors(&self, name: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.name_index.get(name) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = self
            .topology
            .neighbors_directed(idx, direction)
            .map(|n| self.topology[n].as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Bundles that no other bundle depends on.
    pub fn roots(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .topology
            .node_indices()
            .filter(|&n| {
                self.topology
                    .neighbors_directed(n, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|n| self.topology[n].as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Groups of bundles that depend on each other, each sorted by name.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.topology)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || self.topology.contains_edge(scc[0], scc[0])
            })
            .map(|scc| {
                let mut names: Vec<String> =
                    scc.into_iter().map(|n| self.topology[n].clone()).collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub fn missing(&self) -> &BTreeSet<String> {
        &self.missing
    }
}
