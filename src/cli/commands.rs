use crate::error::{FlowError, FlowResult};
use crate::excel::WorkbookLoader;
use crate::extract::extract_screens;
use crate::render::{fenced, render_mermaid, render_screens_page, render_sheets_page};
use crate::topology::{build_adjacency_graph, build_user_flow, Flavor};
use crate::types::{IdCollision, Sheet, Workbook};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for generated diagrams
pub const DEFAULT_OUTPUT_DIR: &str = "docs/flow-diagrams";

/// Sheet holding the `Screen Name` column (spelling matches the source workbooks)
pub const REQUIREMENTS_SHEET: &str = "Requirment Document";

/// Rows shown per sheet in verbose mode
const PREVIEW_ROWS: usize = 5;

/// Which diagram pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Screen names pruning the fixed module topology
    Screens,
    /// Every sheet read as an adjacency list
    Sheets,
}

impl Variant {
    /// Input locations tried in order
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Variant::Screens => &[
                "docs/Requirment Document .xlsx",
                "Documentss/Requirment Document .xlsx",
            ],
            Variant::Sheets => &[
                "docs/Requirment Document .xlsx",
                "Documentss/Requirment Document .xlsx",
                "docs/Requirement Document.xlsx",
            ],
        }
    }

    pub fn markup_file(self) -> &'static str {
        match self {
            Variant::Screens => "user-flow-diagram.mmd",
            Variant::Sheets => "flow-diagram.mmd",
        }
    }

    pub fn html_file(self) -> &'static str {
        match self {
            Variant::Screens => "user-flow-diagram.html",
            Variant::Sheets => "flow-diagram.html",
        }
    }
}

/// Driver settings shared by both variants
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Directory the candidate paths (and a relative output dir) resolve against
    pub root: PathBuf,
    /// Explicit input file; skips candidate discovery
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: false,
        }
    }
}

impl DriverOptions {
    /// Options rooted at `root` with default input discovery and output dir
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub markup_file: PathBuf,
    pub html_file: PathBuf,
    pub sheets: usize,
    pub screens: Vec<String>,
    pub nodes: usize,
    pub edges: usize,
    pub collisions: Vec<IdCollision>,
}

/// First existing path: the explicit input, else the variant's candidates
pub fn locate_input(variant: Variant, opts: &DriverOptions) -> FlowResult<PathBuf> {
    let candidates: Vec<PathBuf> = match &opts.input {
        Some(path) => vec![opts.resolve(path)],
        None => variant
            .candidates()
            .iter()
            .map(|c| opts.resolve(Path::new(c)))
            .collect(),
    };

    match candidates.iter().find(|p| p.exists()) {
        Some(path) => Ok(path.clone()),
        None => Err(FlowError::InputNotFound { candidates }),
    }
}

/// Run a variant end to end and write both output files.
///
/// Fails with `InputNotFound` or `Load` before anything is written.
pub fn run(variant: Variant, opts: &DriverOptions) -> FlowResult<RunSummary> {
    let input = locate_input(variant, opts)?;
    println!("{} {}", "📖 Reading Excel file:".cyan(), input.display());

    let workbook = WorkbookLoader::new(&input).load()?;
    if opts.verbose {
        print_workbook(&workbook);
    }

    let out_dir = opts.output_dir();
    let markup_file = out_dir.join(variant.markup_file());
    let html_file = out_dir.join(variant.html_file());

    let (markup, html, screens, graph) = match variant {
        Variant::Screens => {
            let empty = Sheet::new(REQUIREMENTS_SHEET);
            let requirements = workbook.sheet(REQUIREMENTS_SHEET).unwrap_or_else(|| {
                tracing::debug!("sheet '{}' not found, using empty sheet", REQUIREMENTS_SHEET);
                &empty
            });
            let screens = extract_screens(requirements);
            print_screens(&screens);

            let markup_graph = build_user_flow(&screens, Flavor::Markup);
            let page_graph = build_user_flow(&screens, Flavor::Page);
            let markup = fenced(&render_mermaid(&markup_graph));
            let html = render_screens_page(&screens, &render_mermaid(&page_graph), &workbook);
            (markup, html, screens, page_graph)
        }
        Variant::Sheets => {
            let graph = build_adjacency_graph(&workbook);
            let body = render_mermaid(&graph);
            let markup = fenced(&body);
            let html = render_sheets_page(&body, &workbook);
            (markup, html, Vec::new(), graph)
        }
    };

    fs::create_dir_all(&out_dir)?;
    fs::write(&markup_file, markup)?;
    tracing::debug!(path = %markup_file.display(), "wrote mermaid file");
    fs::write(&html_file, html)?;
    tracing::debug!(path = %html_file.display(), "wrote html file");

    Ok(RunSummary {
        input,
        markup_file,
        html_file,
        sheets: workbook.len(),
        screens,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        collisions: graph.collisions,
    })
}

/// Execute the screens command (user flow over the fixed module topology)
pub fn screens(opts: DriverOptions) -> FlowResult<()> {
    println!("{}", "🔀 ReqFlow - User Flow Diagram".bold().green());
    execute(Variant::Screens, &opts)
}

/// Execute the sheets command (one subgraph per sheet)
pub fn sheets(opts: DriverOptions) -> FlowResult<()> {
    println!("{}", "🔀 ReqFlow - Sheet Flow Diagram".bold().green());
    execute(Variant::Sheets, &opts)
}

/// Missing or unreadable input ends the run cleanly; write errors propagate
fn execute(variant: Variant, opts: &DriverOptions) -> FlowResult<()> {
    match run(variant, opts) {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(FlowError::InputNotFound { candidates }) => {
            println!("{}", "❌ Excel file not found.".red());
            println!("   Looking for files in:");
            for path in &candidates {
                println!("     - {}", path.display());
            }
            Ok(())
        }
        Err(e @ FlowError::Load(_)) => {
            println!("{} {}", "❌".red(), e);
            println!("{}", "Failed to read Excel file.".red());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_workbook(workbook: &Workbook) {
    println!(
        "   Found {} sheet(s): {:?}",
        workbook.len(),
        workbook.sheet_names()
    );
    for sheet in &workbook.sheets {
        println!("\n   📊 Sheet: {}", sheet.name.bright_blue().bold());
        println!(
            "      Rows: {}, Columns: {}",
            sheet.row_count(),
            sheet.column_count()
        );
        println!("      Columns: {:?}", sheet.columns);
        if !sheet.rows.is_empty() {
            println!("      First few rows:");
            for row in sheet.rows.iter().take(PREVIEW_ROWS) {
                let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                println!("        {}", cells.join(" | "));
            }
        }
    }
    println!();
}

fn print_screens(screens: &[String]) {
    println!(
        "\n{}",
        format!("Found {} unique screens:", screens.len()).bold()
    );
    for (i, screen) in screens.iter().enumerate() {
        println!("  {}. {}", i + 1, screen);
    }
}

fn print_summary(summary: &RunSummary) {
    for collision in &summary.collisions {
        println!("{} {}", "⚠️  Node id collision:".yellow(), collision);
    }
    println!("\n{}", "✅ Flow diagrams created successfully!".bold().green());
    println!(
        "   Sheets: {}, Nodes: {}, Edges: {}",
        summary.sheets, summary.nodes, summary.edges
    );
    println!("   - Input file: {}", summary.input.display());
    println!("   - Mermaid file: {}", summary.markup_file.display());
    println!("   - HTML file: {}", summary.html_file.display());
    println!(
        "\nOpen {} in your browser to view the diagram.",
        summary.html_file.display()
    );
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
