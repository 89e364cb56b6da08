use crate::view::{DependencyView, join_or_dash};
use bundlescope_core::AnalyzeConfig;
use std::path::PathBuf;
use tabled::{Table, settings::Style};

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = bundlescope_runtime::build_default_session(AnalyzeConfig::load()?);
    session.analyze(&path)?;

    let graph = session.dependency_graph();
    let views: Vec<DependencyView> = session
        .all_bundles()
        .iter()
        .map(|b| DependencyView {
            bundle: b.name.clone(),
            depends_on: join_or_dash(graph.dependencies_of(&b.name)),
            depended_by: join_or_dash(graph.dependents_of(&b.name)),
        })
        .collect();
    println!("{}", Table::new(&views).with(Style::psql()));

    for cycle in graph.cycles() {
        println!("cycle: {}", cycle.join(" -> "));
    }
    if !graph.missing().is_empty() {
        println!(
            "missing: {}",
            join_or_dash(graph.missing().iter().map(String::as_str))
        );
    }
    Ok(())
}
