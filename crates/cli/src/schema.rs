use bundlescope_api::AnalysisReport;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(AnalysisReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
