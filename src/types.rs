use std::fmt;

//==============================================================================
// Workbook Model
//==============================================================================

/// A single cell value as read from a worksheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell (or a cell outside the used range)
    Empty,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// Date/time rendered as text (ISO-8601 when the source provides it)
    DateTime(String),
    /// Excel error value such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Display text with surrounding whitespace removed, or `None` when blank
    pub fn trimmed(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let text = self.to_string();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// Format a number for display, dropping the fraction of integral values
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One worksheet: header row plus data rows, every row as wide as the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a sheet from headers and rows, padding short rows with empty cells
    pub fn with_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the sheet has no data rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Exact, case-sensitive header lookup
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the named column
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// All sheets of a workbook in their original order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

//==============================================================================
// Flow Graph Model
//==============================================================================

/// Mermaid node shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// `id["label"]`
    Rect,
    /// `id(["label"])`
    Stadium,
    /// `id{"label"}`
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape: NodeShape::Rect,
        }
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Directed edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Nodes and edges grouped under one labelled box (one per sheet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub id: String,
    pub label: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// `style <node> <css>` directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub node: String,
    pub css: String,
}

impl NodeStyle {
    pub fn new(node: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            css: css.into(),
        }
    }
}

/// Two different labels that sanitized to the same node id.
/// The first label is kept; the second is merged into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCollision {
    pub id: String,
    pub kept: String,
    pub merged: String,
}

impl fmt::Display for IdCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' and '{}' share node id '{}'",
            self.kept, self.merged, self.id
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub subgraphs: Vec<Subgraph>,
    pub styles: Vec<NodeStyle>,
    pub collisions: Vec<IdCollision>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    pub fn add_style(&mut self, style: NodeStyle) {
        self.styles.push(style);
    }

    /// Node declarations across the top level and all subgraphs
    pub fn node_count(&self) -> usize {
        self.nodes.len() + self.subgraphs.iter().map(|s| s.nodes.len()).sum::<usize>()
    }

    /// Edges across the top level and all subgraphs
    pub fn edge_count(&self) -> usize {
        self.edges.len() + self.subgraphs.iter().map(|s| s.edges.len()).sum::<usize>()
    }

    pub fn all_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges
            .iter()
            .chain(self.subgraphs.iter().flat_map(|s| s.edges.iter()))
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.all_edges()
            .any(|e| e.source == source && e.target == target)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes
            .iter()
            .chain(self.subgraphs.iter().flat_map(|s| s.nodes.iter()))
            .any(|n| n.id == id)
    }
}
