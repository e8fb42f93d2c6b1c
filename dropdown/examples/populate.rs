use std::fs::File;

use dropdown::{Dropdown, ResultCollection, SelectState, SharedSelect};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("populate.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let species = SharedSelect::new(SelectState::new([("0", "Loading...")]));
    let mut handle = species.clone();
    let dropdown = Dropdown::new("-- choose species --");

    // What a fetch would hand back before and after the data arrives.
    dropdown.build_json(&serde_json::json!(""), &mut handle)?;
    print_select(&species);

    let payload = r#"[
        {"id": 9606, "name": "Human"},
        {"id": 10090, "name": "Mouse"},
        {"id": 9544, "name": "Rhesus macaque"}
    ]"#;
    let results = ResultCollection::from_json_str(payload)?;
    dropdown.build(&results, &mut handle);
    print_select(&species);

    if let Err(e) = dropdown.build_json(&serde_json::json!({"error": "timeout"}), &mut handle) {
        eprintln!("Error: {}", e);
    }
    print_select(&species);

    Ok(())
}

fn print_select(select: &SharedSelect) {
    select.read(|s| {
        for option in s.options() {
            let marker = if s.value.as_deref() == Some(option.value.as_str()) {
                '*'
            } else {
                ' '
            };
            println!("{marker} {:>6} {}", option.value, option.label);
        }
    });
    println!();
    select.clear_dirty();
}
