//! Standalone HTML pages embedding the Mermaid diagram and the source sheets

use crate::types::{Sheet, Workbook};
use std::fmt::Write as _;

/// Mermaid client library, loaded by the browser at view time
pub const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

pub const APP_NAME: &str = "Aziz Poultry Farm Management System";

const SCREENS_CSS: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            padding: 20px;
            background: linear-gradient(135deg, #f0fdf4 0%, #eff6ff 100%);
            margin: 0;
        }
        .container {
            max-width: 1400px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        }
        h1 {
            color: #228B22;
            border-bottom: 3px solid #228B22;
            padding-bottom: 15px;
            margin-bottom: 30px;
        }
        h2 {
            color: #323232;
            margin-top: 40px;
            margin-bottom: 20px;
        }
        .mermaid {
            text-align: center;
            margin: 30px 0;
            padding: 20px;
            background: #f9fafb;
            border-radius: 8px;
            border: 1px solid #e5e7eb;
        }
        .screens-list {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .screen-card {
            background: #f9fafb;
            padding: 15px;
            border-radius: 8px;
            border-left: 4px solid #228B22;
            box-shadow: 0 2px 4px rgba(0,0,0,0.05);
        }
        .screen-card h3 {
            margin: 0 0 10px 0;
            color: #228B22;
            font-size: 16px;
        }
        .data-table {
            margin-top: 30px;
            overflow-x: auto;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
            font-size: 14px;
        }
        th, td {
            border: 1px solid #e5e7eb;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #228B22;
            color: white;
            font-weight: 600;
        }
        tr:nth-child(even) {
            background-color: #f9fafb;
        }
        .info-box {
            background: #dbeafe;
            border-left: 4px solid #3b82f6;
            padding: 15px;
            margin: 20px 0;
            border-radius: 4px;
        }
"#;

const SHEETS_CSS: &str = r#"        body {
            font-family: Arial, sans-serif;
            padding: 20px;
            background: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #228B22;
            padding-bottom: 10px;
        }
        .mermaid {
            text-align: center;
            margin: 20px 0;
        }
        .data-table {
            margin-top: 30px;
            overflow-x: auto;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #228B22;
            color: white;
        }
        tr:nth-child(even) {
            background-color: #f9fafb;
        }
"#;

const SCREENS_INIT: &str = r#"        mermaid.initialize({
            startOnLoad: true,
            theme: 'default',
            flowchart: {
                useMaxWidth: true,
                htmlLabels: true,
                curve: 'basis'
            }
        });
"#;

const SHEETS_INIT: &str = "        mermaid.initialize({ startOnLoad: true, theme: 'default' });\n";

/// User-flow page: screen count, diagram, one card per screen, source tables
pub fn render_screens_page(screens: &[String], diagram: &str, workbook: &Workbook) -> String {
    let mut html = head("User Flow Diagram - Aziz Poultry", SCREENS_CSS);
    let _ = write!(
        html,
        "    <div class=\"container\">\n\
         \x20       <h1>🐔 {APP_NAME} - User Flow Diagram</h1>\n\
         \n\
         \x20       <div class=\"info-box\">\n\
         \x20           <strong>Total Screens Identified:</strong> {}\n\
         \x20       </div>\n\
         \n\
         \x20       <h2>User Flow Diagram</h2>\n",
        screens.len()
    );
    push_diagram(&mut html, diagram);

    html.push_str("\n        <h2>Identified Screens</h2>\n        <div class=\"screens-list\">\n");
    for screen in screens {
        let _ = write!(
            html,
            "            <div class=\"screen-card\">\n\
             \x20               <h3>{}</h3>\n\
             \x20           </div>\n",
            escape_html(screen)
        );
    }
    html.push_str("        </div>\n\n        <h2>Source Data</h2>\n");
    for sheet in &workbook.sheets {
        push_sheet(&mut html, sheet, false);
    }
    html.push_str("    </div>\n");

    tail(html, SCREENS_INIT)
}

/// Sheet-flow page: diagram and source tables with a row index column
pub fn render_sheets_page(diagram: &str, workbook: &Workbook) -> String {
    let mut html = head("Flow Diagram", SHEETS_CSS);
    let _ = writeln!(
        html,
        "    <div class=\"container\">\n        <h1>Flow Diagram - {APP_NAME}</h1>"
    );
    push_diagram(&mut html, diagram);

    html.push_str("\n        <div class=\"data-table\">\n            <h2>Source Data</h2>\n");
    for sheet in &workbook.sheets {
        push_sheet(&mut html, sheet, true);
    }
    html.push_str("        </div>\n    </div>\n");

    tail(html, SHEETS_INIT)
}

fn head(title: &str, css: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20   <title>{}</title>\n\
         \x20   <script src=\"{MERMAID_CDN}\"></script>\n\
         \x20   <style>\n\
         {css}\
         \x20   </style>\n\
         </head>\n\
         <body>\n",
        escape_html(title)
    )
}

fn tail(mut html: String, init: &str) -> String {
    html.push_str("\n    <script>\n");
    html.push_str(init);
    html.push_str("    </script>\n</body>\n</html>\n");
    html
}

/// Diagram source inside the Mermaid container. Only `&` and `<` are
/// escaped so arrows stay readable; Mermaid decodes entities before parsing.
fn push_diagram(html: &mut String, diagram: &str) {
    html.push_str("        <div class=\"mermaid\">\n");
    html.push_str(&diagram.replace('&', "&amp;").replace('<', "&lt;"));
    if !diagram.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("        </div>\n");
}

fn push_sheet(html: &mut String, sheet: &Sheet, with_index: bool) {
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&sheet.name));
    html.push_str(&render_table(sheet, with_index));
    html.push_str("<br><br>\n");
}

/// One `<table>` per sheet: header row in column order, one `<tr>` per row,
/// blank cells as empty `<td>`. `with_index` adds a leading 0-based row index.
pub fn render_table(sheet: &Sheet, with_index: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<table border=\"1\" class=\"dataframe data-table\" id=\"{}\">",
        escape_html(&table_id(&sheet.name))
    );

    out.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    if with_index {
        out.push_str("      <th></th>\n");
    }
    for column in &sheet.columns {
        let _ = writeln!(out, "      <th>{}</th>", escape_html(column));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for (idx, row) in sheet.rows.iter().enumerate() {
        out.push_str("    <tr>\n");
        if with_index {
            let _ = writeln!(out, "      <th>{}</th>", idx);
        }
        for cell in row {
            let _ = writeln!(out, "      <td>{}</td>", escape_html(&cell.to_string()));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

/// `table-<sheet name with spaces replaced by '-'>`
pub fn table_id(sheet_name: &str) -> String {
    format!("table-{}", sheet_name.replace(' ', "-"))
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
