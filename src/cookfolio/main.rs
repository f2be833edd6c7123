use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use cookfolio::catalog::{Catalog, Recovery};
use cookfolio::error::{CookfolioError, Result};
use cookfolio::model::{Ingredient, Recipe, RecipeDraft};
use cookfolio::session::Session;
use cookfolio::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const EXCERPT_LEN: usize = 40;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut catalog = open_catalog()?;
    print_recovery(catalog.recovery());

    match cli.command {
        Some(Commands::Add {
            title,
            description,
            cooking_time,
            servings,
            category,
            image,
            ingredients,
            steps,
        }) => handle_add(
            &mut catalog,
            title,
            description,
            cooking_time,
            servings,
            category,
            image,
            &ingredients,
            steps,
        ),
        Some(Commands::View { index }) => handle_view(&catalog, index),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut catalog, index, yes),
        Some(Commands::List) | None => handle_list(&catalog),
    }
}

fn open_catalog() -> Result<Catalog<FileStore>> {
    // No resolvable data dir means a degraded but working catalog: loads are
    // empty and saves are no-ops.
    let store = match data_root() {
        Some(root) => FileStore::new(root),
        None => FileStore::unavailable(),
    };
    Catalog::open(store)
}

fn data_root() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("COOKFOLIO_HOME") {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "cookfolio", "cookfolio").map(|dirs| dirs.data_dir().to_path_buf())
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    catalog: &mut Catalog<FileStore>,
    title: String,
    description: String,
    cooking_time: u32,
    servings: u32,
    category: Option<String>,
    image: Option<String>,
    ingredients: &[String],
    steps: Vec<String>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CookfolioError::Api("Title cannot be empty".into()));
    }

    let ingredients = ingredients
        .iter()
        .map(|spec| parse_ingredient(spec))
        .collect::<Result<Vec<_>>>()?;

    let draft = RecipeDraft {
        title,
        description,
        ingredients,
        instructions: steps,
        cooking_time,
        servings,
        image,
        category,
    };
    let added = catalog.add(draft)?;
    println!("{}", format!("Recipe added: {}", added.title).green());
    Ok(())
}

fn handle_list(catalog: &Catalog<FileStore>) -> Result<()> {
    print_recipes(catalog.recipes());
    Ok(())
}

fn handle_view(catalog: &Catalog<FileStore>, index: usize) -> Result<()> {
    let id = resolve_index(catalog, index)?;
    let recipe = catalog
        .get(&id)
        .ok_or(CookfolioError::RecipeNotFound(id))?;
    print_full_recipe(index, recipe);
    Ok(())
}

fn handle_delete(catalog: &mut Catalog<FileStore>, index: usize, yes: bool) -> Result<()> {
    let id = resolve_index(catalog, index)?;
    let title = catalog
        .get(&id)
        .map(|r| r.title.clone())
        .unwrap_or_default();

    let mut session = Session::new();
    session.request_delete(id);

    if !yes && !prompt_confirm(&title)? {
        session.cancel_delete();
        println!("Aborted.");
        return Ok(());
    }

    if let Some(id) = session.confirm_delete() {
        if let Some(removed) = catalog.delete(&id)? {
            println!("{}", format!("Recipe deleted: {}", removed.title).green());
        }
    }
    Ok(())
}

/// Map a 1-based list position to a recipe id.
fn resolve_index(catalog: &Catalog<FileStore>, index: usize) -> Result<Uuid> {
    catalog
        .recipes()
        .get(index.checked_sub(1).ok_or_else(bad_index(index))?)
        .map(|r| r.id)
        .ok_or_else(bad_index(index))
}

fn bad_index(index: usize) -> impl Fn() -> CookfolioError {
    move || CookfolioError::Api(format!("No recipe at index {}", index))
}

fn parse_ingredient(spec: &str) -> Result<Ingredient> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(CookfolioError::Api(format!(
            "Invalid ingredient '{}': expected NAME:AMOUNT:UNIT",
            spec
        )));
    }
    Ok(Ingredient {
        name,
        amount: parts.next().unwrap_or("").trim().to_string(),
        unit: parts.next().unwrap_or("").trim().to_string(),
    })
}

fn prompt_confirm(title: &str) -> Result<bool> {
    print!("Delete '{}'? [y/N] ", title);
    std::io::stdout().flush().map_err(CookfolioError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(CookfolioError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_recovery(recovery: Recovery) {
    if recovery.reset {
        println!(
            "{}",
            "Warning: stored recipes could not be read; starting with an empty catalog".yellow()
        );
    }
    if recovery.dropped > 0 {
        println!(
            "{}",
            format!(
                "Warning: {} stored recipe(s) failed validation and were skipped",
                recovery.dropped
            )
            .yellow()
        );
    }
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes yet. Run `cookfolio add` to get started!");
        return;
    }

    for (i, recipe) in recipes.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);

        let badge = match &recipe.category {
            Some(category) => format!(" [{}]", category),
            None => String::new(),
        };
        let meta = format!("  {} min · serves {}", recipe.cooking_time, recipe.servings);

        let excerpt: String = recipe
            .description
            .chars()
            .take(EXCERPT_LEN)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let headline = if excerpt.is_empty() {
            recipe.title.clone()
        } else {
            format!("{} — {}", recipe.title, excerpt)
        };

        let time_ago = format_time_ago(recipe.created_at);
        let fixed_width = idx_str.width() + meta.width() + badge.width() + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let headline = truncate_to_width(&headline, available);
        let padding = available.saturating_sub(headline.width());

        println!(
            "  {}{}{}{}{}  {}",
            idx_str,
            headline,
            " ".repeat(padding),
            meta.dimmed(),
            badge.yellow(),
            time_ago.dimmed()
        );
    }
}

fn print_full_recipe(index: usize, recipe: &Recipe) {
    println!("{} {}", format!("{}.", index).yellow(), recipe.title.bold());
    println!("--------------------------------");
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!(
        "{}",
        format!(
            "{} min · serves {} · added {}",
            recipe.cooking_time,
            recipe.servings,
            format_time_ago(recipe.created_at).trim()
        )
        .dimmed()
    );
    if let Some(category) = &recipe.category {
        println!("{}", format!("[{}]", category).yellow());
    }
    if let Some(image) = &recipe.image {
        println!("{}", image.dimmed());
    }

    if !recipe.ingredients.is_empty() {
        println!("\n{}", "Ingredients".bold());
        for ingredient in &recipe.ingredients {
            let quantity = format!("{} {}", ingredient.amount, ingredient.unit);
            println!("  - {} {}", quantity.trim(), ingredient.name);
        }
    }

    if !recipe.instructions.is_empty() {
        println!("\n{}", "Instructions".bold());
        for (i, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
