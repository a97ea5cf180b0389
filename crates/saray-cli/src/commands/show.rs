use colored::Colorize;
use saray_engine::ScoreCategory;

pub fn run(id: &str) -> Result<(), String> {
    let catalog = super::load_story()?;
    let scene = catalog.require(id).map_err(|e| e.to_string())?;

    let kind = if scene.is_terminal() {
        "terminal scene"
    } else {
        "scene"
    };
    println!("  {} [{}]", scene.id.bold(), kind.dimmed());
    println!();
    println!("  {}", scene.description);
    println!();

    if let Some(card) = &scene.character {
        println!("  {} — \"{}\"", card.name.bold(), card.quote);
        println!("  portrait: {}", card.image.dimmed());
        println!();
    }

    for choice in &scene.options {
        println!("  {}) {}", choice.label.to_string().bold(), choice.text);
        println!("     {}", choice.outcome.italic());
        let deltas: Vec<String> = ScoreCategory::ALL
            .iter()
            .map(|&cat| format!("{cat} {:+}", choice.score_changes.get(cat)))
            .collect();
        println!(
            "     {} → {}",
            deltas.join("  "),
            choice.next_scene.as_str().dimmed()
        );
    }

    Ok(())
}
