use std::io::BufRead;
use std::path::Path;
use std::{fs, io};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use saray_engine::{CurrentScene, Label, Scene, ScoreCategory, Scores, Session};
use saray_story::{Protagonist, ROSTER};

pub fn run(
    from: Option<&str>,
    character: Option<&str>,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let catalog = super::load_story()?;
    if let Some(id) = from {
        catalog.require(id).map_err(|e| e.to_string())?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let protagonist = match character {
        Some(name) => saray_story::protagonist(name)
            .ok_or_else(|| format!("unknown protagonist: \"{name}\""))?,
        None => select_protagonist(&mut input)?,
    };
    println!();
    println!("  {} — playing as {}.", catalog.title(), protagonist.name.bold());
    println!();

    let mut session = match from {
        Some(id) => Session::start_at(&catalog, id),
        None => Session::new(&catalog),
    };

    run_loop(&mut session, &mut input)?;
    print_verdict(&session);

    if let Some(path) = transcript {
        let json = session
            .history()
            .to_json()
            .map_err(|e| format!("transcript serialization failed: {e}"))?;
        fs::write(path, json).map_err(|e| format!("could not write {}: {e}", path.display()))?;
        println!("  Transcript written to {}.", path.display());
    }

    Ok(())
}

/// Prompt for a protagonist. Empty input or EOF defaults to Hürrem.
fn select_protagonist(input: &mut impl BufRead) -> Result<&'static Protagonist, String> {
    println!("  Choose your character:");
    for (i, p) in ROSTER.iter().enumerate() {
        println!("    {}) {}", i + 1, p.name);
    }

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(&ROSTER[2]);
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(&ROSTER[2]);
        }
        if let Some(p) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ROSTER.get(i))
        {
            return Ok(p);
        }
        if let Some(p) = saray_story::protagonist(trimmed) {
            return Ok(p);
        }
        println!("  Pick 1-{} or a name.", ROSTER.len());
    }
}

/// Drive the session until play ends, the player quits, or input runs out.
fn run_loop(session: &mut Session<'_>, input: &mut impl BufRead) -> Result<(), String> {
    loop {
        if session.is_terminal() {
            match session.current() {
                CurrentScene::Scene(scene) => {
                    println!("  {}", scene.description.bold());
                    println!();
                    println!("  {}", "The story is complete.".green());
                }
                CurrentScene::Missing { id } => {
                    println!(
                        "  {} the story points at scene \"{id}\", which is missing from the catalog.",
                        "misconfigured ending:".yellow()
                    );
                }
            }
            return Ok(());
        }

        render_current(session);

        let Some(line) = read_line(input)? else {
            println!();
            return Ok(());
        };
        let answer = line.trim();
        match answer {
            "" => continue,
            "q" | "quit" => {
                println!("  Leaving the palace.");
                return Ok(());
            }
            "r" | "restart" => {
                session.reset();
                println!("  The story begins anew.");
                println!();
                continue;
            }
            "h" | "history" => {
                print_history(session);
                continue;
            }
            _ => {}
        }

        let Some(label) = Label::parse(answer) else {
            println!("  {} pick one of the offered letters.", "invalid input:".yellow());
            continue;
        };
        match session.choose(label) {
            Ok(turn) => {
                println!();
                println!("  {}", turn.outcome.italic());
                println!();
            }
            Err(e) => println!("  {} {e}", "invalid choice:".yellow()),
        }
    }
}

fn render_current(session: &Session<'_>) {
    let CurrentScene::Scene(scene) = session.current() else {
        return;
    };

    println!("{}", score_table(session.scores()));
    println!();
    render_scene(scene);

    let labels: Vec<String> = scene.options.iter().map(|c| c.label.to_string()).collect();
    println!(
        "  Ne yapacaksın? [{}]  (q quit, r restart, h history)",
        labels.join("/")
    );
}

fn render_scene(scene: &Scene) {
    if let Some(card) = &scene.character {
        println!("  {} — \"{}\"", card.name.bold(), card.quote.italic());
        println!();
    }
    println!("  {}", scene.description);
    println!();
    for choice in &scene.options {
        println!("  {}) {}", choice.label.to_string().bold(), choice.text);
    }
}

fn print_history(session: &Session<'_>) {
    if session.history().is_empty() {
        println!("  No choices made yet.");
        return;
    }
    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "  {:>3}. [{} / {}] {}",
            i + 1,
            entry.scene,
            entry.label,
            entry.choice
        );
    }
}

fn print_verdict(session: &Session<'_>) {
    println!();
    println!("  Choices made: {}", session.history().len());
    println!("{}", score_table(session.scores()));

    let leading = session.scores().leading();
    let epithet = match leading {
        ScoreCategory::Harem => "mistress of the harem",
        ScoreCategory::Suleyman => "keeper of the Sultan's heart",
        ScoreCategory::Divan => "voice of the imperial council",
    };
    println!("  {} {leading} — {epithet}", "Verdict:".bold());
}

fn score_table(scores: &Scores) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(ScoreCategory::ALL.map(|c| c.to_string()));
    table.add_row(ScoreCategory::ALL.map(|c| scores.get(c).to_string()));
    table
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .map_err(|e| format!("failed to read input: {e}"))?;
    if read == 0 { Ok(None) } else { Ok(Some(buf)) }
}
