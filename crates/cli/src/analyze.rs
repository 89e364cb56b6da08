use crate::view::{BundleView, DuplicateView, EdgeView};
use bundlescope_api::{AnalysisReport, AnalysisState};
use bundlescope_core::AnalyzeConfig;
use std::path::PathBuf;
use std::time::Duration;
use tabled::{Table, settings::Style};
use tracing::info;

pub async fn run(
    path: PathBuf,
    json: bool,
    scene_only: bool,
    config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(file) => AnalyzeConfig::load_from(&file)?,
        None => AnalyzeConfig::load()?,
    };
    config.scene_only |= scene_only;
    let interval = Duration::from_millis(config.scene_poll_interval_ms);

    let mut session = bundlescope_runtime::build_default_session(config);

    info!("Analyzing bundles at: {}...", path.display());
    let mut state = session.analyze(&path)?;
    if state == AnalysisState::WaitingForScenes {
        state = bundlescope_runtime::wait_for_completion(&mut session, interval).await;
    }
    info!("Analysis finished in state {}", state);

    let report = session.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let bundles: Vec<BundleView> = report.bundles.iter().map(BundleView::from_record).collect();
    println!("{}", Table::new(&bundles).with(Style::psql()));

    let duplicates: Vec<DuplicateView> = report
        .duplicates
        .iter()
        .filter_map(|guid| report.assets.iter().find(|a| a.guid == *guid))
        .map(DuplicateView::from_asset)
        .collect();
    if !duplicates.is_empty() {
        println!("\nDuplicated assets:");
        println!("{}", Table::new(&duplicates).with(Style::psql()));
    }

    if !report.cross_bundle.is_empty() {
        let edges: Vec<EdgeView> = report.cross_bundle.iter().map(EdgeView::from).collect();
        println!("\nCross-bundle references:");
        println!("{}", Table::new(&edges).with(Style::psql()));
    }

    let stats = &report.stats;
    println!(
        "\n{} bundles ({} scene, {} roots) via {}, {} assets, {} duplicated",
        stats.bundle_count,
        stats.scene_bundle_count,
        stats.root_bundle_count,
        report.strategy.as_deref().unwrap_or("-"),
        stats.asset_count,
        stats.duplicate_count
    );
}
