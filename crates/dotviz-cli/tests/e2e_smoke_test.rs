use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use dotviz::DotvizError;
use dotviz_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .dot files from a directory
fn collect_dot_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("dot")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path, format: &str) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

fn render_all(dir: PathBuf) -> usize {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_dot_files(dir.clone());
    assert!(!demos.is_empty(), "No demos found in {}", dir.display());

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_filename = format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match dotviz_cli::run(&args_for(demo_path, &output_path, "svg")) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("output should be written");
                if !svg.contains("<svg") || !svg.contains("</svg>") {
                    failed.push((demo_path.clone(), "incomplete SVG document".to_string()));
                }
            }
            Err(e) => failed.push((demo_path.clone(), e.to_string())),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }

    demos.len()
}

#[test]
fn e2e_smoke_test_demos() {
    let count = render_all(demos_dir());
    println!("All {count} demos rendered");
}

#[test]
fn e2e_smoke_test_malformed_demos() {
    // Malformed input degrades to a smaller drawing, never an error.
    let count = render_all(demos_dir().join("malformed"));
    println!("All {count} malformed demos rendered");
}

#[test]
fn e2e_unsupported_format_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.png");
    let input = demos_dir().join("single.dot");

    let err = dotviz_cli::run(&args_for(&input, &output_path, "png")).unwrap_err();

    assert!(matches!(err, DotvizError::UnsupportedFormat(_)));
    assert!(!output_path.exists());
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.dot");
    let output_path = temp_dir.path().join("out.svg");

    let err = dotviz_cli::run(&args_for(&input, &output_path, "svg")).unwrap_err();
    assert!(matches!(err, DotvizError::Io(_)));
}

#[test]
fn e2e_pipeline_demo_content() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("pipeline.svg");

    dotviz_cli::run(&args_for(
        &demos_dir().join("pipeline.dot"),
        &output_path,
        "svg",
    ))
    .expect("pipeline demo should render");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert_eq!(svg.matches(r#"class="node""#).count(), 4);
    assert_eq!(svg.matches(r#"class="edge""#).count(), 4);
    assert!(svg.contains("Fetch sources"));
    assert!(svg.contains("artifacts"));
}
