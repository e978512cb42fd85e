//! Fixed module topology for the user-flow diagram
//!
//! The application is modelled as eight modules. Authentication and the
//! Dashboard form the frame of every diagram; the six feature modules hang
//! off the Dashboard and are kept only when the requirements mention them.
//! The data never adds edges, it only prunes this table.

use super::sanitize_module_id;
use crate::types::{FlowGraph, GraphEdge, GraphNode, NodeShape, NodeStyle};
use indexmap::IndexSet;

pub const START_ID: &str = "Start";
pub const LOGIN_ID: &str = "Login";
pub const DASHBOARD_ID: &str = "Dashboard";

pub const LOGIN_LABEL: &str = "User Authentication System";
pub const DASHBOARD_LABEL: &str = "Dashboard Overview";

/// Which rendering of the user flow is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Standalone `.mmd` file: modules selected by exact screen name
    Markup,
    /// Diagram embedded in the HTML page: modules selected by name or sub-feature,
    /// with per-module colors
    Page,
}

impl Flavor {
    fn start_label(self) -> &'static str {
        match self {
            Flavor::Markup => "Start",
            Flavor::Page => "User Starts",
        }
    }

    fn frame_styles(self) -> [NodeStyle; 3] {
        let (start_w, dash_w) = match self {
            Flavor::Markup => ("2px", "2px"),
            Flavor::Page => ("3px", "3px"),
        };
        [
            NodeStyle::new(
                START_ID,
                format!("fill:#228B22,stroke:#166534,stroke-width:{start_w},color:#fff"),
            ),
            NodeStyle::new(
                LOGIN_ID,
                "fill:#3b82f6,stroke:#1e40af,stroke-width:2px,color:#fff",
            ),
            NodeStyle::new(
                DASHBOARD_ID,
                format!("fill:#10b981,stroke:#059669,stroke-width:{dash_w},color:#fff"),
            ),
        ]
    }
}

/// A feature module reachable from the Dashboard
#[derive(Debug)]
pub struct FeatureModule {
    pub label: &'static str,
    /// Screen names that also count as mentioning this module
    pub features: &'static [&'static str],
    pub style: &'static str,
}

pub static FEATURE_MODULES: [FeatureModule; 6] = [
    FeatureModule {
        label: "Inventory Management",
        features: &["View Inventory", "Add Item", "Update Stock", "Low Stock Alerts"],
        style: "fill:#fef3c7,stroke:#f59e0b,stroke-width:2px",
    },
    FeatureModule {
        label: "Purchase Management",
        features: &["View Orders", "Create Order", "Track Delivery", "Supplier Management"],
        style: "fill:#dbeafe,stroke:#3b82f6,stroke-width:2px",
    },
    FeatureModule {
        label: "Sales Management",
        features: &["Record Sale", "View Sales", "Customer Management", "Payment Tracking"],
        style: "fill:#dcfce7,stroke:#10b981,stroke-width:2px",
    },
    FeatureModule {
        label: "Expense Management",
        features: &["Record Expense", "View Expenses", "Category Analysis"],
        style: "fill:#fee2e2,stroke:#ef4444,stroke-width:2px",
    },
    FeatureModule {
        label: "Reports",
        features: &["Financial Reports", "Sales Reports", "Expense Reports", "Profit Analysis"],
        style: "fill:#e9d5ff,stroke:#a855f7,stroke-width:2px",
    },
    FeatureModule {
        label: "User Management",
        features: &["View Users", "Add User", "Manage Roles", "Permissions"],
        style: "fill:#f3e8ff,stroke:#9333ea,stroke-width:2px",
    },
];

/// Module adjacency, in emission order. Keys and targets are module labels.
pub static TOPOLOGY: [(&str, &[&str]); 8] = [
    (LOGIN_LABEL, &[DASHBOARD_LABEL]),
    (
        DASHBOARD_LABEL,
        &[
            "Inventory Management",
            "Purchase Management",
            "Sales Management",
            "Expense Management",
            "Reports",
            "User Management",
        ],
    ),
    ("Inventory Management", &["Purchase Management", "Sales Management"]),
    ("Purchase Management", &["Expense Management"]),
    ("Sales Management", &["Reports"]),
    ("Expense Management", &["Reports"]),
    ("Reports", &[DASHBOARD_LABEL]),
    ("User Management", &[DASHBOARD_LABEL]),
];

/// Node id of a module label; the frame modules have short fixed ids
pub fn module_id(label: &str) -> String {
    match label {
        LOGIN_LABEL => LOGIN_ID.to_string(),
        DASHBOARD_LABEL => DASHBOARD_ID.to_string(),
        other => sanitize_module_id(other),
    }
}

fn is_frame(label: &str) -> bool {
    label == LOGIN_LABEL || label == DASHBOARD_LABEL
}

fn feature_module(label: &str) -> Option<&'static FeatureModule> {
    FEATURE_MODULES.iter().find(|m| m.label == label)
}

/// Feature modules the screens mention, in table order
pub fn selected_modules(screens: &[String], flavor: Flavor) -> Vec<&'static FeatureModule> {
    let screens: IndexSet<&str> = screens.iter().map(String::as_str).collect();
    FEATURE_MODULES
        .iter()
        .filter(|module| match flavor {
            Flavor::Markup => screens.contains(module.label),
            Flavor::Page => {
                screens.contains(module.label)
                    || module.features.iter().any(|f| screens.contains(f))
            }
        })
        .collect()
}

/// Build the user-flow graph for the given screens.
///
/// Frame nodes and edges are always present. A feature module is declared
/// when selected; an edge between modules is kept when at least one of its
/// feature-module endpoints is selected.
pub fn build_user_flow(screens: &[String], flavor: Flavor) -> FlowGraph {
    let selected: IndexSet<&str> = selected_modules(screens, flavor)
        .into_iter()
        .map(|m| m.label)
        .collect();

    let mut graph = FlowGraph::new();
    graph.add_node(GraphNode::new(START_ID, flavor.start_label()).with_shape(NodeShape::Stadium));
    graph.add_node(GraphNode::new(LOGIN_ID, LOGIN_LABEL));
    graph.add_node(GraphNode::new(DASHBOARD_ID, DASHBOARD_LABEL).with_shape(NodeShape::Diamond));
    for label in &selected {
        graph.add_node(GraphNode::new(module_id(label), *label));
    }

    graph.add_edge(GraphEdge::new(START_ID, LOGIN_ID));
    for &(source, targets) in TOPOLOGY.iter() {
        for target in targets.iter() {
            let keep = match (is_frame(source), is_frame(target)) {
                (true, true) => true,
                (true, false) => selected.contains(target),
                (false, true) => selected.contains(source),
                (false, false) => selected.contains(source) || selected.contains(target),
            };
            if keep {
                graph.add_edge(GraphEdge::new(module_id(source), module_id(target)));
            }
        }
    }

    for style in flavor.frame_styles() {
        graph.add_style(style);
    }
    if flavor == Flavor::Page {
        for label in &selected {
            if let Some(module) = feature_module(label) {
                graph.add_style(NodeStyle::new(module_id(label), module.style));
            }
        }
    }

    tracing::debug!(
        ?flavor,
        modules = selected.len(),
        edges = graph.edge_count(),
        "built user flow"
    );
    graph
}
