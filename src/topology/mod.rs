//! Topology mapping: screen names / sheet rows → [`FlowGraph`](crate::types::FlowGraph)
//!
//! Two strategies:
//! - [`fixed`] - a constant module table, pruned by the extracted screens
//! - [`adjacency`] - every sheet row read as `source, target, target, ...`

pub mod adjacency;
pub mod fixed;

pub use adjacency::build_adjacency_graph;
pub use fixed::{build_user_flow, Flavor};

/// Fallback id for labels that sanitize to nothing (e.g. `"()"`)
const EMPTY_ID: &str = "node";

/// Module node id: spaces and hyphens become underscores
pub fn sanitize_module_id(name: &str) -> String {
    name.replace([' ', '-'], "_")
}

/// Node id for free-form cell text: like [`sanitize_module_id`], with parentheses removed
pub fn sanitize_node_id(label: &str) -> String {
    let id: String = sanitize_module_id(label)
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect();
    if id.is_empty() {
        EMPTY_ID.to_string()
    } else {
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_module_id() {
        assert_eq!(sanitize_module_id("Inventory Management"), "Inventory_Management");
        assert_eq!(sanitize_module_id("Follow-up"), "Follow_up");
        assert_eq!(sanitize_module_id("Reports"), "Reports");
    }

    #[test]
    fn test_sanitize_node_id_strips_parentheses() {
        assert_eq!(sanitize_node_id("Sale (Godown)"), "Sale_Godown");
        assert_eq!(sanitize_node_id("Add-Item"), "Add_Item");
    }

    #[test]
    fn test_sanitize_node_id_empty() {
        assert_eq!(sanitize_node_id("()"), "node");
    }
}
