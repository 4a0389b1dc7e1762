//! Output rendering for metrics records

use comfy_table::{ContentArrangement, Table};
use netsummary::{Metric, MetricsRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

/// Column order, matching the record's serialized field names
const COLUMNS: [&str; 18] = [
    "name",
    "directed",
    "n",
    "m",
    "density",
    "k",
    "k_in",
    "k_out",
    "S_largest_component",
    "C_avg_clustering",
    "r_assortativity",
    "ell_avg_distance_est",
    "max_in_node",
    "max_in_deg",
    "max_out_node",
    "max_out_deg",
    "max_node",
    "max_deg",
];

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Value(String),
    Undefined,
    /// Field does not apply to this record
    Absent,
}

impl Cell {
    fn table_text(&self) -> String {
        match self {
            Cell::Value(s) => s.clone(),
            Cell::Undefined => "undefined".to_string(),
            Cell::Absent => String::new(),
        }
    }

    fn csv_text(&self) -> String {
        match self {
            Cell::Value(s) => csv_escape(s),
            Cell::Undefined | Cell::Absent => String::new(),
        }
    }
}

fn value<T: ToString>(v: T) -> Cell {
    Cell::Value(v.to_string())
}

fn metric(m: Metric) -> Cell {
    match m {
        Metric::Value(v) => value(v),
        Metric::Undefined => Cell::Undefined,
    }
}

fn optional<T, F: FnOnce(T) -> Cell>(v: Option<T>, f: F) -> Cell {
    v.map_or(Cell::Absent, f)
}

fn cells(record: &MetricsRecord) -> [Cell; 18] {
    [
        value(&record.name),
        value(record.directed),
        value(record.n),
        value(record.m),
        value(record.density),
        optional(record.k, metric),
        optional(record.k_in, metric),
        optional(record.k_out, metric),
        value(record.largest_component_fraction),
        metric(record.avg_clustering),
        metric(record.assortativity),
        optional(record.avg_distance, metric),
        optional(record.max_in_node.as_ref(), value),
        optional(record.max_in_deg, value),
        optional(record.max_out_node.as_ref(), value),
        optional(record.max_out_deg, value),
        optional(record.max_node.as_ref(), value),
        optional(record.max_deg, value),
    ]
}

/// Cell grid restricted to the columns at least one record fills
fn grid(records: &[MetricsRecord]) -> (Vec<&'static str>, Vec<Vec<Cell>>) {
    let rows: Vec<[Cell; 18]> = records.iter().map(cells).collect();
    let keep: Vec<usize> = (0..COLUMNS.len())
        .filter(|&col| rows.iter().any(|row| row[col] != Cell::Absent))
        .collect();

    let header = keep.iter().map(|&col| COLUMNS[col]).collect();
    let body = rows
        .into_iter()
        .map(|row| keep.iter().map(|&col| row[col].clone()).collect())
        .collect();
    (header, body)
}

pub fn render(records: &[MetricsRecord], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Json => serde_json::to_string_pretty(records).map(|json| json + "\n"),
        OutputFormat::Csv => Ok(render_csv(records)),
        OutputFormat::Markdown => Ok(render_markdown(records)),
    }
}

fn render_table(records: &[MetricsRecord]) -> String {
    let (header, body) = grid(records);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    for row in &body {
        table.add_row(row.iter().map(Cell::table_text).collect::<Vec<_>>());
    }
    format!("{table}\n")
}

fn render_csv(records: &[MetricsRecord]) -> String {
    let (header, body) = grid(records);

    let mut out = header.join(",");
    out.push('\n');
    for row in &body {
        let line: Vec<String> = row.iter().map(Cell::csv_text).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Clustering below this reads as sparse local structure
const LOW_CLUSTERING: f64 = 0.05;

/// Report with metric definitions, a results table and per-graph conclusions.
///
/// Undefined metrics show as `undefined` in the table and produce no
/// conclusion line.
fn render_markdown(records: &[MetricsRecord]) -> String {
    let mut lines: Vec<String> = vec![
        "## Network Metrics Report".to_string(),
        String::new(),
        "Basic structural metrics computed for each network, with short explanations.".to_string(),
        String::new(),
        "### Metrics and definitions".to_string(),
        String::new(),
        "- **name**: dataset name.".to_string(),
        "- **directed**: whether the network is directed.".to_string(),
        "- **n**: number of nodes (|V|).".to_string(),
        "- **m**: number of edges (|E|).".to_string(),
        "- **density**: fraction of possible node pairs that are connected.".to_string(),
        "- **k** / **k_in** / **k_out**: mean degree. Undirected: k = 2m/n. Directed: k_in = k_out = m/n.".to_string(),
        "- **S_largest_component**: fraction of nodes in the largest component (weakly connected for directed networks).".to_string(),
        "- **C_avg_clustering**: average clustering coefficient (of the undirected projection for directed networks).".to_string(),
        "- **r_assortativity**: degree assortativity.".to_string(),
    ];
    if records.iter().any(|r| r.avg_distance.is_some()) {
        lines.push(
            "- **ell_avg_distance_est**: sampled estimate of the average distance in the largest component.".to_string(),
        );
    }

    lines.extend([
        String::new(),
        "### Notes".to_string(),
        String::new(),
        "- **k_in** and **k_out** do not apply to undirected networks, and **k** does not apply to directed ones; those cells are left empty.".to_string(),
        "- **C = 0** means no triangles (neighbors are not linked to each other), not that nodes lack neighbors.".to_string(),
        "- `undefined` marks a metric with no mathematical value for that network, such as assortativity when every degree is equal.".to_string(),
        String::new(),
        "### Results".to_string(),
        String::new(),
    ]);
    lines.extend(markdown_table(records));

    lines.extend([String::new(), "### Conclusions".to_string(), String::new()]);
    for record in records {
        lines.push(format!("- **{}**:", record.name));
        lines.extend(conclusions(record).into_iter().map(|c| format!("  - {c}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn markdown_table(records: &[MetricsRecord]) -> Vec<String> {
    let (header, body) = grid(records);
    let row = |cells: Vec<String>| format!("| {} |", cells.join(" | "));

    let mut lines = vec![
        row(header.iter().map(|h| h.to_string()).collect()),
        row(header.iter().map(|_| "---".to_string()).collect()),
    ];
    lines.extend(body.iter().map(|cells| {
        row(cells
            .iter()
            .map(|cell| cell.table_text().replace('|', "\\|"))
            .collect())
    }));
    lines
}

fn conclusions(record: &MetricsRecord) -> Vec<String> {
    let mut out = Vec::new();

    if let (Some(node), Some(deg)) = (&record.max_out_node, record.max_out_deg) {
        out.push(format!("Highest out-degree: node {node} with {deg} outgoing edges."));
    }
    if let (Some(node), Some(deg)) = (&record.max_in_node, record.max_in_deg) {
        out.push(format!("Highest in-degree: node {node} with {deg} incoming edges."));
    }
    if let (Some(node), Some(deg)) = (&record.max_node, record.max_deg) {
        out.push(format!("Highest degree: node {node} with {deg} edges."));
    }

    if let Metric::Value(c) = record.avg_clustering {
        out.push(
            if c == 0.0 {
                "C = 0 suggests weak local cohesion (no triangles among neighbors)."
            } else if c < LOW_CLUSTERING {
                "Low C suggests sparsely connected neighborhoods (few closed triads)."
            } else {
                "Moderate/high C indicates local communities (neighbors linked to each other)."
            }
            .to_string(),
        );
    }

    if let Metric::Value(r) = record.assortativity {
        out.push(
            if r < 0.0 {
                "r < 0 (disassortative): hubs tend to link to low-degree nodes."
            } else if r > 0.0 {
                "r > 0 (assortative): nodes tend to link to others of similar degree."
            } else {
                "r = 0: little degree correlation between linked nodes."
            }
            .to_string(),
        );
    }

    out
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsummary::{GraphStore, NetworkSummary, SummaryConfig};

    fn records() -> Vec<MetricsRecord> {
        let summary = NetworkSummary::new(SummaryConfig::seeded(3));
        // 4-cycle: every degree is 2, so assortativity is undefined
        let cycle = GraphStore::from_edges(vec![("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")], false).unwrap();
        vec![summary.summarize(&cycle, "cycle").unwrap()]
    }

    #[test]
    fn test_csv_leaves_undefined_empty() {
        let csv = render(&records(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();

        assert!(!header.contains(&"k_in"));
        let r = header.iter().position(|h| *h == "r_assortativity").unwrap();
        assert_eq!(row[r], "");
        let k = header.iter().position(|h| *h == "k").unwrap();
        assert_eq!(row[k], "2");
        assert_eq!(row[0], "cycle");
    }

    #[test]
    fn test_table_shows_undefined() {
        let table = render(&records(), OutputFormat::Table).unwrap();
        assert!(table.contains("undefined"));
        assert!(table.contains("C_avg_clustering"));
    }

    #[test]
    fn test_json_uses_null() {
        let json = render(&records(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["r_assortativity"], serde_json::Value::Null);
        assert_eq!(value[0]["n"], 4);
    }

    #[test]
    fn test_mixed_directedness_keeps_both_column_sets() {
        let summary = NetworkSummary::new(SummaryConfig::seeded(3));
        let directed = GraphStore::from_edges(vec![("x", "y")], true).unwrap();
        let mut all = records();
        all.push(summary.summarize(&directed, "arc").unwrap());

        let csv = render(&all, OutputFormat::Csv).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.contains("k_in"));
        assert!(header.contains(",k,"));
    }

    #[test]
    fn test_markdown_report_sections_and_conclusions() {
        let summary = NetworkSummary::new(SummaryConfig::seeded(3));
        let star = GraphStore::from_edges(vec![("hub", "a"), ("hub", "b"), ("hub", "c")], true).unwrap();
        let mut all = records();
        all.push(summary.summarize(&star, "star").unwrap());

        let report = render(&all, OutputFormat::Markdown).unwrap();
        assert!(report.starts_with("## Network Metrics Report\n"));
        assert!(report.contains("### Metrics and definitions"));
        assert!(report.contains("- **ell_avg_distance_est**"));
        assert!(report.contains("### Results"));
        assert!(report.contains("| name | directed |"));
        assert!(report.contains("| cycle | false |"));

        let conclusions = report.split("### Conclusions").nth(1).unwrap();
        let (cycle, star) = conclusions.split_once("- **star**:").unwrap();

        // Undirected 4-cycle: degree hub, no triangles, undefined r gives no line
        assert!(cycle.contains("Highest degree: node a with 2 edges."));
        assert!(cycle.contains("C = 0 suggests"));
        assert!(!cycle.contains("r <"));
        assert!(!cycle.contains("r >"));
        assert!(!cycle.contains("r = 0"));

        // Directed star: out-hub, in-degree tie broken by label, disassortative
        assert!(star.contains("Highest out-degree: node hub with 3 outgoing edges."));
        assert!(star.contains("Highest in-degree: node a with 1 incoming edges."));
        assert!(star.contains("r < 0 (disassortative)"));
        assert!(!star.contains("Highest degree:"));
    }

    #[test]
    fn test_markdown_skips_distance_definition_when_not_estimated() {
        let summary = NetworkSummary::new(SummaryConfig {
            estimate_distance: false,
            ..SummaryConfig::seeded(1)
        });
        let triangle = GraphStore::from_edges(vec![("x", "y"), ("y", "z"), ("z", "x")], false).unwrap();
        let record = summary.summarize(&triangle, "tri").unwrap();

        let report = render(&[record], OutputFormat::Markdown).unwrap();
        assert!(!report.contains("ell_avg_distance_est"));
        assert!(report.contains("Moderate/high C"));
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
