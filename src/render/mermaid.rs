//! Mermaid `flowchart TD` serialization

use crate::types::{FlowGraph, GraphEdge, GraphNode, NodeShape, NodeStyle};

const INDENT: &str = "    ";

/// Render the graph as a Mermaid flowchart body (no code fence).
///
/// Sections are separated by a blank line: top-level nodes, top-level edges,
/// one block per subgraph, styles.
pub fn render(graph: &FlowGraph) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !graph.nodes.is_empty() {
        sections.push(block(graph.nodes.iter().map(node_decl), 1));
    }
    if !graph.edges.is_empty() {
        sections.push(block(graph.edges.iter().map(edge_decl), 1));
    }
    for subgraph in &graph.subgraphs {
        let mut section = format!(
            "{INDENT}subgraph {}[\"{}\"]\n",
            subgraph.id,
            escape_label(&subgraph.label)
        );
        section.push_str(&block(subgraph.nodes.iter().map(node_decl), 2));
        section.push_str(&block(subgraph.edges.iter().map(edge_decl), 2));
        section.push_str(INDENT);
        section.push_str("end\n");
        sections.push(section);
    }
    if !graph.styles.is_empty() {
        sections.push(block(graph.styles.iter().map(style_decl), 1));
    }

    let mut out = String::from("flowchart TD\n");
    out.push_str(&sections.join("\n"));
    out
}

/// Wrap a flowchart body in a ```` ```mermaid ```` fence for Markdown viewers
pub fn fenced(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 16);
    out.push_str("```mermaid\n");
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn block<I: Iterator<Item = String>>(lines: I, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    lines.map(|line| format!("{indent}{line}\n")).collect()
}

fn node_decl(node: &GraphNode) -> String {
    let label = escape_label(&node.label);
    match node.shape {
        NodeShape::Rect => format!("{}[\"{}\"]", node.id, label),
        NodeShape::Stadium => format!("{}([\"{}\"])", node.id, label),
        NodeShape::Diamond => format!("{}{{\"{}\"}}", node.id, label),
    }
}

fn edge_decl(edge: &GraphEdge) -> String {
    format!("{} --> {}", edge.source, edge.target)
}

fn style_decl(style: &NodeStyle) -> String {
    format!("style {} {}", style.node, style.css)
}

/// Quoted labels cannot contain a raw `"`; Mermaid accepts the `#quot;` entity
fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Subgraph;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_top_level() {
        let mut graph = FlowGraph::new();
        graph.add_node(GraphNode::new("Start", "Start").with_shape(NodeShape::Stadium));
        graph.add_node(GraphNode::new("Dashboard", "Dashboard Overview").with_shape(NodeShape::Diamond));
        graph.add_edge(GraphEdge::new("Start", "Dashboard"));
        graph.add_style(NodeStyle::new("Start", "fill:#228B22"));

        let expected = "flowchart TD\n\
            \x20   Start([\"Start\"])\n\
            \x20   Dashboard{\"Dashboard Overview\"}\n\
            \n\
            \x20   Start --> Dashboard\n\
            \n\
            \x20   style Start fill:#228B22\n";
        assert_eq!(render(&graph), expected);
    }

    #[test]
    fn test_render_subgraph() {
        let mut graph = FlowGraph::new();
        graph.subgraphs.push(Subgraph {
            id: "Flows".into(),
            label: "Flows".into(),
            nodes: vec![GraphNode::new("Login", "Login"), GraphNode::new("Dashboard", "Dashboard")],
            edges: vec![GraphEdge::new("Login", "Dashboard")],
        });

        let expected = "flowchart TD\n\
            \x20   subgraph Flows[\"Flows\"]\n\
            \x20       Login[\"Login\"]\n\
            \x20       Dashboard[\"Dashboard\"]\n\
            \x20       Login --> Dashboard\n\
            \x20   end\n";
        assert_eq!(render(&graph), expected);
    }

    #[test]
    fn test_render_empty_graph() {
        assert_eq!(render(&FlowGraph::new()), "flowchart TD\n");
    }

    #[test]
    fn test_label_quotes_escaped() {
        let node = GraphNode::new("Say_Hi", "Say \"Hi\"");
        assert_eq!(node_decl(&node), "Say_Hi[\"Say #quot;Hi#quot;\"]");
    }

    #[test]
    fn test_fenced() {
        assert_eq!(fenced("flowchart TD\n"), "```mermaid\nflowchart TD\n```\n");
        assert_eq!(fenced("flowchart TD"), "```mermaid\nflowchart TD\n```\n");
    }
}
