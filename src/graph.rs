use crate::Chips;
use crate::Compositions;
use crate::Configuration;
use crate::Vertex;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// labeled out-edges of one configuration
pub type Successors = BTreeMap<Vertex, Configuration>;

/// the firing graph of K3 with a fixed number of chips.
///
/// nodes are every valid Configuration with that total. an edge labeled
/// `v` runs from X to Y iff firing `v` at X yields Y with no negative
/// coordinate. chips are conserved, so every successor is itself a node.
///
/// keys iterate in the same lexicographic order the enumerator
/// produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiringGraph {
    chips: Chips,
    nodes: BTreeMap<Configuration, Successors>,
}

impl FiringGraph {
    pub fn build(n: Chips) -> Self {
        let nodes = Compositions::k3(n)
            .map(Configuration::from)
            .map(|x| (x, x.fire()))
            .collect::<BTreeMap<_, _>>();
        log::debug!(
            "built firing graph with {} chips: {} nodes",
            n,
            nodes.len()
        );
        Self { chips: n, nodes }
    }

    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn contains(&self, config: &Configuration) -> bool {
        self.nodes.contains_key(config)
    }
    pub fn get(&self, config: &Configuration) -> Option<&Successors> {
        self.nodes.get(config)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Configuration, &Successors)> {
        self.nodes.iter()
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Configuration> {
        self.nodes.keys()
    }
    /// every labeled transition as (from, vertex, to)
    pub fn edges(&self) -> impl Iterator<Item = (Configuration, Vertex, Configuration)> + '_ {
        self.nodes
            .iter()
            .flat_map(|(from, out)| out.iter().map(move |(v, to)| (*from, *v, *to)))
    }
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(BTreeMap::len).sum()
    }

    /// the same structure as a petgraph DiGraph, nodes inserted in key order
    pub fn digraph(&self) -> DiGraph<Configuration, Vertex> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let index = self
            .nodes()
            .map(|x| (*x, graph.add_node(*x)))
            .collect::<HashMap<Configuration, NodeIndex>>();
        for (from, vertex, to) in self.edges() {
            graph.add_edge(index[&from], index[&to], vertex);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a FiringGraph {
    type Item = (&'a Configuration, &'a Successors);
    type IntoIter = std::collections::btree_map::Iter<'a, Configuration, Successors>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[derive(serde::Serialize)]
struct Entry<'a> {
    node: &'a Configuration,
    edges: &'a Successors,
}

/// a list of { "node": [a, b, c], "edges": { "A": [..], .. } }
impl serde::Serialize for FiringGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(
            self.nodes
                .iter()
                .map(|(node, edges)| Entry { node, edges }),
        )
    }
}

impl std::fmt::Display for FiringGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "K3 firing graph: {} chips, {} nodes, {} edges",
            self.chips,
            self.len(),
            self.edge_count()
        )?;
        for (node, out) in &self.nodes {
            write!(f, "{}", node)?;
            if out.is_empty() {
                write!(f, "  ·")?;
            }
            for (vertex, next) in out {
                write!(f, "  ─{}→ {}", vertex, next)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
