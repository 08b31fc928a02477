use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skyclerk::cli::{
    handle_accounts_command, handle_activities_command, handle_categories_command,
    handle_config_command, handle_contacts_command, handle_files_command, handle_labels_command,
    handle_ledger_command, handle_login, handle_logout, handle_me_command,
    handle_reports_command, handle_users_command, Context,
};
use skyclerk::config::ConfigPaths;
use skyclerk::display::OutputFormat;

/// Environment variable holding the log filter (EnvFilter syntax)
const LOG_ENV: &str = "SKYCLERK_LOG";

#[derive(Parser)]
#[command(
    name = "skyclerk",
    author = "Cloudmanic Labs",
    version,
    about = "Skyclerk CLI - manage your bookkeeping from the terminal",
    long_about = "A command-line interface for the Skyclerk bookkeeping API."
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Override the default account ID
    #[arg(long, global = true)]
    account: Option<u64>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to Skyclerk
    Login(skyclerk::cli::LoginArgs),

    /// Revoke the token and remove the local config
    Logout,

    /// Print the version
    Version,

    /// Show or initialize the config
    #[command(subcommand)]
    Config(skyclerk::cli::ConfigCommands),

    /// Manage accounts
    #[command(subcommand)]
    Accounts(skyclerk::cli::AccountsCommands),

    /// Show or update your profile
    Me {
        #[command(subcommand)]
        command: Option<skyclerk::cli::MeCommands>,
    },

    /// Manage ledger entries
    #[command(subcommand)]
    Ledger(skyclerk::cli::LedgerCommands),

    /// Manage categories
    #[command(subcommand)]
    Categories(skyclerk::cli::CategoriesCommands),

    /// Manage labels
    #[command(subcommand)]
    Labels(skyclerk::cli::LabelsCommands),

    /// Manage contacts
    #[command(subcommand)]
    Contacts(skyclerk::cli::ContactsCommands),

    /// Upload files and receipts
    #[command(subcommand)]
    Files(skyclerk::cli::FilesCommands),

    /// Show the account activity log
    Activities(skyclerk::cli::ActivitiesArgs),

    /// Manage account users and invitations
    #[command(subcommand)]
    Users(skyclerk::cli::UsersCommands),

    /// Profit and loss reports
    #[command(subcommand)]
    Reports(skyclerk::cli::ReportsCommands),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("skyclerk=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ConfigPaths::new()?;
    let ctx = Context::new(cli.output, cli.account, paths);

    match cli.command {
        Commands::Version => println!("skyclerk version {}", env!("CARGO_PKG_VERSION")),
        Commands::Login(args) => handle_login(&ctx, args)?,
        Commands::Logout => handle_logout(&ctx)?,
        Commands::Config(cmd) => handle_config_command(&ctx, cmd)?,
        Commands::Accounts(cmd) => handle_accounts_command(&ctx, cmd)?,
        Commands::Me { command } => handle_me_command(&ctx, command)?,
        Commands::Ledger(cmd) => handle_ledger_command(&ctx, cmd)?,
        Commands::Categories(cmd) => handle_categories_command(&ctx, cmd)?,
        Commands::Labels(cmd) => handle_labels_command(&ctx, cmd)?,
        Commands::Contacts(cmd) => handle_contacts_command(&ctx, cmd)?,
        Commands::Files(cmd) => handle_files_command(&ctx, cmd)?,
        Commands::Activities(args) => handle_activities_command(&ctx, args)?,
        Commands::Users(cmd) => handle_users_command(&ctx, cmd)?,
        Commands::Reports(cmd) => handle_reports_command(&ctx, cmd)?,
    }

    Ok(())
}
