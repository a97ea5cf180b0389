use colored::Colorize;

pub fn run() -> Result<(), String> {
    let catalog = super::load_story()?;
    let report = catalog.report();

    println!("  All checks passed for '{}'.", catalog.title());
    println!("  {} scenes, {} choice edges", report.scenes, report.edges);
    println!(
        "  start scene: \"{}\", terminal scenes: {}",
        catalog.start(),
        report.terminals.join(", ")
    );

    if !report.unreachable.is_empty() {
        println!(
            "  {} {} scenes unreachable from \"{}\": {}",
            "warning:".yellow(),
            report.unreachable.len(),
            catalog.start(),
            report.unreachable.join(", ")
        );
    }

    Ok(())
}
