use std::collections::BTreeSet;

use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let catalog = super::load_story()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Character", "Choices", "Leads to"]);

    for scene in catalog.scenes() {
        let character = scene
            .character
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("—");
        let successors: BTreeSet<&str> = scene
            .options
            .iter()
            .map(|c| c.next_scene.as_str())
            .collect();
        let leads_to = if successors.is_empty() {
            "(terminal)".to_string()
        } else {
            successors.into_iter().collect::<Vec<_>>().join(", ")
        };

        table.add_row(vec![
            scene.id.clone(),
            character.to_string(),
            scene.options.len().to_string(),
            leads_to,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", catalog.len());

    Ok(())
}
