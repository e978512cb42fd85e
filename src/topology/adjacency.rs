//! Row-adjacency strategy: each sheet is an adjacency list
//!
//! For every row the first non-empty cell is the source and every other
//! non-empty cell is a target. Each non-empty sheet becomes one subgraph.

use super::sanitize_node_id;
use crate::types::{CellValue, FlowGraph, GraphEdge, GraphNode, IdCollision, Subgraph, Workbook};
use indexmap::{IndexMap, IndexSet};

/// Maps node ids to the first label seen for them and records collisions
#[derive(Debug, Default)]
struct NodeRegistry {
    labels: IndexMap<String, String>,
    collisions: Vec<IdCollision>,
}

impl NodeRegistry {
    /// Id for `label`. A different label already owning the id is kept and the
    /// new one is merged into it.
    fn intern(&mut self, label: &str) -> String {
        let id = sanitize_node_id(label);
        match self.labels.get(&id) {
            Some(kept) if kept != label => {
                let already_reported = self
                    .collisions
                    .iter()
                    .any(|c| c.id == id && c.merged == label);
                if !already_reported {
                    let collision = IdCollision {
                        id: id.clone(),
                        kept: kept.clone(),
                        merged: label.to_string(),
                    };
                    tracing::warn!("node id collision: {}", collision);
                    self.collisions.push(collision);
                }
            }
            Some(_) => {}
            None => {
                self.labels.insert(id.clone(), label.to_string());
            }
        }
        id
    }

    fn node(&self, id: &str) -> GraphNode {
        let label = self.labels.get(id).map(String::as_str).unwrap_or(id);
        GraphNode::new(id, label)
    }
}

/// Builder for one sheet's subgraph
struct SubgraphBuilder {
    subgraph: Subgraph,
    declared: IndexSet<String>,
}

impl SubgraphBuilder {
    fn new(sheet_name: &str) -> Self {
        Self {
            subgraph: Subgraph {
                id: sanitize_node_id(sheet_name),
                label: sheet_name.to_string(),
                nodes: Vec::new(),
                edges: Vec::new(),
            },
            declared: IndexSet::new(),
        }
    }

    fn declare(&mut self, registry: &NodeRegistry, id: &str) {
        if self.declared.insert(id.to_string()) {
            self.subgraph.nodes.push(registry.node(id));
        }
    }

    fn add_row(&mut self, registry: &mut NodeRegistry, row: &[CellValue]) {
        let mut cells = row.iter().filter_map(CellValue::trimmed);
        let Some(source) = cells.next() else {
            return;
        };
        let source_id = registry.intern(&source);
        self.declare(registry, &source_id);

        for target in cells {
            let target_id = registry.intern(&target);
            self.declare(registry, &target_id);
            self.subgraph
                .edges
                .push(GraphEdge::new(source_id.clone(), target_id));
        }
    }
}

/// Build one subgraph per non-empty sheet from the sheet rows
pub fn build_adjacency_graph(workbook: &Workbook) -> FlowGraph {
    let mut graph = FlowGraph::new();
    let mut registry = NodeRegistry::default();

    for sheet in &workbook.sheets {
        if sheet.is_empty() {
            continue;
        }
        let mut builder = SubgraphBuilder::new(&sheet.name);
        for row in &sheet.rows {
            builder.add_row(&mut registry, row);
        }
        tracing::debug!(
            sheet = %sheet.name,
            nodes = builder.subgraph.nodes.len(),
            edges = builder.subgraph.edges.len(),
            "built sheet subgraph"
        );
        graph.subgraphs.push(builder.subgraph);
    }

    graph.collisions = registry.collisions;
    graph
}
