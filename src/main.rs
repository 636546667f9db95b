use log::debug;
use std::env;
use std::path::PathBuf;

use recipe_catalog::config::load_config_from;
use recipe_catalog::{recipes_to_json, CatalogConfig, Recipe, RecipeRepository};

const USAGE: &str = "\
Usage: recipe-catalog [--config <path>] [--file <path>] [--out <path>] <command>

Commands:
  list              List recipe names
  show <number>     Show one recipe
  delete <number>   Delete one recipe and save the catalog
  export            Print the catalog as JSON";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config_path = None;
    let mut load_path = None;
    let mut save_path = None;
    let mut positional = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(args.next().ok_or(USAGE)?)),
            "--file" => load_path = Some(PathBuf::from(args.next().ok_or(USAGE)?)),
            "--out" => save_path = Some(PathBuf::from(args.next().ok_or(USAGE)?)),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let mut config = match config_path {
        Some(path) => load_config_from(&path)?,
        None => CatalogConfig::load()?,
    };
    if let Some(path) = load_path {
        config.load_path = path;
    }
    if save_path.is_some() {
        config.save_path = save_path;
    }
    debug!("{:?}", config);

    let mut repository = RecipeRepository::from_config(&config);
    repository.load()?;

    match positional.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] => {
            for (i, recipe) in repository.get_all().enumerate() {
                println!("{:>3}. {}", i + 1, recipe.name());
            }
        }
        ["show", number] => {
            let recipe = repository.get_at(parse_number(number)?)?;
            print_recipe(&recipe);
        }
        ["delete", number] => {
            let removed = repository.delete_at(parse_number(number)?)?;
            repository.save()?;
            println!("Deleted '{}'", removed.name());
        }
        ["export"] => {
            let recipes: Vec<Recipe> = repository.get_all().collect();
            println!("{}", recipes_to_json(&recipes)?);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

/// Convert a 1-based number from the command line into an index.
fn parse_number(number: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let number: usize = number
        .parse()
        .map_err(|_| format!("'{}' is not a recipe number", number))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "recipe numbers start at 1".into())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.name());
    println!();
    println!("Ingredients:");
    for ingredient in recipe.ingredients() {
        println!("  - {}", ingredient);
    }
    println!();
    println!("Instructions:");
    for (i, instruction) in recipe.instructions().iter().enumerate() {
        println!("  {}. {}", i + 1, instruction);
    }
}
