use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use serde::Serialize;

use recipe_book::{BookConfig, BookFile, Ingredient, Recipe, RecipeBook, RecipeFilter};

#[derive(Parser)]
#[command(name = "recipe-book")]
#[command(author, version, about = "Keep a personal recipe book in a text file", long_about = None)]
struct Cli {
    /// Recipe book document (default: `book` from recipe-book.toml)
    #[arg(short, long, global = true)]
    book: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the names of all recipes
    List,
    /// Show a recipe in full
    Show {
        /// Recipe name (case-insensitive)
        name: String,
    },
    /// Find recipes by name, ingredients and category
    Filter {
        /// Exact recipe name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Ingredient the recipe must contain (repeat to match any of several)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Exact category
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// Add a new recipe
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        category: String,
        /// Ingredient as `name - amount` (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Preparation step (repeatable, kept in order)
        #[arg(short, long = "step")]
        steps: Vec<String>,
    },
    /// Remove every recipe with the given name
    Remove { name: String },
    /// Sort the book
    Sort {
        #[arg(value_enum)]
        by: SortKey,
    },
    /// Count recipes
    Count {
        /// Count per category instead of in total
        #[arg(long)]
        by_category: bool,
    },
    /// Mark a recipe as favourite
    Favourite { name: String },
    /// Remove a recipe from favourites
    Unfavourite { name: String },
    /// List favourite recipes
    Favourites,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Name,
    Category,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = BookConfig::load()?;

    let path = cli
        .book
        .clone()
        .or_else(|| config.book.clone())
        .ok_or("No recipe book given. Use --book or set `book` in recipe-book.toml")?;
    debug!("Using recipe book {}", path.display());

    let mut file = BookFile::from_config(path, &config);
    let mut book = file.load()?;

    let changed = run(&cli, &mut book)?;
    if changed {
        file.save(&book)?;
    }
    Ok(())
}

/// Runs one command against the book, returning whether it needs saving
fn run(cli: &Cli, book: &mut RecipeBook) -> Result<bool, Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::List => {
            print_names(cli.json, book.iter())?;
            Ok(false)
        }
        Commands::Show { name } => {
            let recipe = book
                .find_by_name(name)
                .ok_or_else(|| format!("No recipe named '{}'", name))?;
            if cli.json {
                print_json(recipe)?;
            } else {
                print!("{}", recipe);
            }
            Ok(false)
        }
        Commands::Filter {
            name,
            ingredients,
            category,
        } => {
            let found = RecipeFilter::new()
                .name(name.as_str())
                .ingredients(ingredients.iter().map(String::as_str))
                .category(category.as_str())
                .apply(book.iter());
            if !cli.json {
                println!("Found {} recipes:", found.len());
            }
            print_names(cli.json, found)?;
            Ok(false)
        }
        Commands::Add {
            name,
            category,
            ingredients,
            steps,
        } => {
            let ingredients = ingredients
                .iter()
                .map(|line| Ingredient::parse(line))
                .collect();
            book.add(Recipe::new(
                name.as_str(),
                category.as_str(),
                ingredients,
                steps.clone(),
            ));
            println!("Added '{}'", name);
            Ok(true)
        }
        Commands::Remove { name } => {
            let removed = book.remove(name);
            println!("Removed {} recipes named '{}'", removed, name);
            Ok(removed > 0)
        }
        Commands::Sort { by } => {
            match by {
                SortKey::Name => book.sort_by_name(),
                SortKey::Category => book.sort_by_category(),
            }
            print_names(cli.json, book.iter())?;
            Ok(true)
        }
        Commands::Count { by_category } => {
            if *by_category {
                let counts = book.count_by_category();
                if cli.json {
                    print_json(&counts)?;
                } else {
                    for (category, count) in &counts {
                        println!("{} : {}", category, count);
                    }
                }
            } else if cli.json {
                print_json(&book.len())?;
            } else {
                println!("Total recipes: {}", book.len());
            }
            Ok(false)
        }
        Commands::Favourite { name } => {
            match book.find_by_name(name).map(|recipe| recipe.favourite) {
                None => Err(format!("No recipe named '{}'", name).into()),
                Some(true) => {
                    println!("'{}' is already a favourite", name);
                    Ok(false)
                }
                Some(false) => {
                    book.set_favourite(name);
                    println!("'{}' marked as favourite", name);
                    Ok(true)
                }
            }
        }
        Commands::Unfavourite { name } => {
            if !book.unset_favourite(name) {
                return Err(format!("No recipe named '{}'", name).into());
            }
            println!("'{}' removed from favourites", name);
            Ok(true)
        }
        Commands::Favourites => {
            print_names(cli.json, book.favourites())?;
            Ok(false)
        }
    }
}

fn print_names<'a>(
    json: bool,
    recipes: impl IntoIterator<Item = &'a Recipe>,
) -> Result<(), serde_json::Error> {
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    if json {
        return print_json(&recipes);
    }
    for recipe in recipes {
        if recipe.favourite {
            println!("* {}", recipe.name);
        } else {
            println!("  {}", recipe.name);
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
