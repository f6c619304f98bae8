//! Integration tests for job files, rendering and the file spool.

use printlayout::render::{to_json, to_text};
use printlayout::{Error, JobSpec, JsonFormat, PrintServer, RegionKind, SpoolServer};
use std::fs;
use tempfile::TempDir;

const STATEMENT: &str = r##"{
    "file_name": "statement.pdf",
    "documents": [
        {
            "page_size": { "width": 200, "height": 300 },
            "margin": { "left": 10, "top": 10, "right": 10, "bottom": 10 },
            "regions": {
                "header": { "height": 30, "rule": "all", "label": "Statement" },
                "summary": { "height": 40, "rule": "last", "label": "Balance: 0.00" },
                "page_numbers": { "height": 10, "rule": "all" }
            },
            "alternating_colors": ["#FFFFFF", "#F0F0F0"],
            "items": [
                { "label": "Opening balance", "height": 60 },
                { "label": "Deposit", "height": 60 },
                { "label": "Withdrawal", "height": 60 },
                { "label": "Fee", "height": 60 },
                { "label": "Interest", "height": 60 }
            ]
        },
        {
            "regions": { "page_numbers": { "height": 10, "rule": "all-but-first" } },
            "items": [{ "label": "Notes", "height": 20 }, "page_break", { "label": "Terms", "height": 20 }]
        }
    ]
}"##;

fn write_job(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("statement.json");
    fs::write(&path, STATEMENT).unwrap();
    path
}

#[test]
fn test_layout_job_file() {
    let dir = TempDir::new().unwrap();
    let output = printlayout::layout_file(write_job(&dir)).unwrap();

    // Body: 280 - 30 - 10 = 240 (200 on the last page)
    let first: Vec<_> = output.pages_of(0).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].row_count(), 4);
    assert_eq!(first[1].row_count(), 1);
    assert!(first[1].has_region(RegionKind::Summary));

    let total = output.page_count();
    assert_eq!(total, 4);
    assert_eq!(output.pages[0].page_number_text(), Some("1 | 4"));
    // Continuous numbering checks rules against the batch position
    assert_eq!(output.pages[2].page_number_text(), Some("3 | 4"));
    assert_eq!(output.pages[3].page_number_text(), Some("4 | 4"));
}

#[test]
fn test_render_job() {
    let dir = TempDir::new().unwrap();
    let output = printlayout::layout_file(write_job(&dir)).unwrap();

    let text = to_text(&output).unwrap();
    assert!(text.starts_with("statement.pdf"));
    assert!(text.contains("Page 3 (document 2, page 1)"));
    assert!(text.contains("Opening balance  [#FFFFFF]"));
    assert!(text.contains("Deposit  [#F0F0F0]"));

    let json = to_json(&output, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pages"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["pages"][1]["regions"][1]["kind"], "summary");
}

#[test]
fn test_print_job_to_spool() {
    let dir = TempDir::new().unwrap();
    let spool = TempDir::new().unwrap();
    let server = SpoolServer::new(spool.path());
    server.create_queue("office").unwrap();

    let collection = JobSpec::from_file(write_job(&dir))
        .unwrap()
        .into_collection()
        .unwrap();
    assert!(collection.print_to_queue(&server, "office").unwrap());

    let files: Vec<_> = fs::read_dir(spool.path().join("office"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("statement-"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(value["document"]["pages"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_spool_queue_must_exist() {
    let spool = TempDir::new().unwrap();
    let server = SpoolServer::new(spool.path());

    assert!(matches!(
        server.open_queue("office"),
        Err(Error::QueueNotFound(_))
    ));
}

#[test]
fn test_malformed_job() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"documents\": [{ \"items\": [\"section_break\"] }] }").unwrap();

    assert!(matches!(JobSpec::from_file(&path), Err(Error::InvalidJob(_))));
}
