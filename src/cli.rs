use clap::{Parser, Subcommand};

/// CateringPlanner: scales menu-item recipes into bulk ingredient quantities.
#[derive(Parser, Debug)]
#[command(name = "catering_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catering state JSON file.
    #[arg(short, long, default_value = "catering_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a new order interactively and show its ingredient summary.
    Order,

    /// Recompute the ingredient summary of a saved order.
    Summary {
        /// Order id (e.g. order-0001).
        id: String,

        /// Use shared-prep aware scaling.
        #[arg(long)]
        smart: bool,

        /// Export the summary to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// List stored ingredients, menu items and orders.
    List {
        /// List catalog ingredients.
        #[arg(long)]
        ingredients: bool,

        /// List menu items.
        #[arg(long)]
        menu: bool,

        /// List saved orders.
        #[arg(long)]
        orders: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}
