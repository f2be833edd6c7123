use clap::{Parser, Subcommand};

/// Returns the version string, including git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cookfolio")]
#[command(version = get_version())]
#[command(about = "A personal recipe catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "new")]
    Add {
        /// Recipe title
        title: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Cooking time in minutes
        #[arg(long = "time", value_name = "MINUTES")]
        cooking_time: u32,

        /// Number of servings
        #[arg(long)]
        servings: u32,

        /// Category badge (e.g. "Dessert")
        #[arg(short, long)]
        category: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Ingredient as NAME:AMOUNT:UNIT (repeatable, in order)
        #[arg(short, long = "ingredient", value_name = "NAME:AMOUNT:UNIT")]
        ingredients: Vec<String>,

        /// Instruction step (repeatable, in order)
        #[arg(short, long = "step", value_name = "TEXT")]
        steps: Vec<String>,
    },

    /// List recipes
    #[command(alias = "ls")]
    List,

    /// View a recipe in full
    #[command(alias = "v")]
    View {
        /// 1-based position in the list
        index: usize,
    },

    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        /// 1-based position in the list
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
