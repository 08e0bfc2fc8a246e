//! CLI entry point for `campusdash`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;

use campusdash::config::{self, Config};
use campusdash::filter::{self, MailboxCounts, UserCategory};
use campusdash::model::mail::{Folder, Label, LabelFilter, MailMessage};
use campusdash::store::memory::MemoryStore;
use campusdash::store::seed::SeedData;
use campusdash::store::RecordStore;
use campusdash::tui::app::App;
use campusdash::tui::theme::Theme;
use campusdash::view::{Controller, Section};

#[derive(Parser)]
#[command(
    name = "campusdash",
    version,
    about = "Terminal admin dashboard for a university social network"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON seed file to use instead of the built-in data set
    #[arg(long, global = true, value_name = "FILE", env = "CAMPUSDASH_DATA")]
    data: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard in the TUI
    Open {
        /// Section to start in (overview, users, mailbox, explore)
        #[arg(long)]
        section: Option<Section>,
    },
    /// List users of a category
    Users {
        #[arg(short, long, default_value = "all")]
        category: UserCategory,
        #[arg(long)]
        json: bool,
    },
    /// List mailbox messages of a folder or label
    Mail {
        #[arg(short, long, default_value = "inbox")]
        folder: Folder,
        /// all, starred, social, company, important, private
        #[arg(short, long, default_value = "all")]
        label: LabelFilter,
        #[arg(long)]
        json: bool,
    },
    /// Compose and send a message, printing the records produced
    Send {
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        cc: String,
        #[arg(long, default_value = "")]
        bcc: String,
        #[arg(short, long, default_value = "")]
        subject: String,
        #[arg(short, long, default_value = "")]
        body: String,
        #[arg(long)]
        json: bool,
    },
    /// Show user category and mailbox counts
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the config file
        #[arg(long)]
        write: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Stderr output would tear the alternate screen.
    let interactive = matches!(cli.command, None | Some(Commands::Open { .. }));
    setup_logging(log_level, &config, !interactive);

    let seed_path = cli.data.or_else(|| config.data.seed_path.clone());
    let open_store = || -> anyhow::Result<MemoryStore> {
        let seed = SeedData::load(seed_path.as_deref())?;
        Ok(MemoryStore::from_seed(seed))
    };

    match cli.command {
        None => cmd_open(open_store()?, &config, None),
        Some(Commands::Open { section }) => cmd_open(open_store()?, &config, section),
        Some(Commands::Users { category, json }) => cmd_users(&open_store()?, category, json),
        Some(Commands::Mail {
            folder,
            label,
            json,
        }) => cmd_mail(&open_store()?, folder, label, json),
        Some(Commands::Send {
            to,
            cc,
            bcc,
            subject,
            body,
            json,
        }) => {
            let mut controller = new_controller(open_store()?, &config);
            let draft = controller.draft_mut();
            draft.to = to;
            draft.cc = cc;
            draft.bcc = bcc;
            draft.subject = subject;
            draft.body = body;
            cmd_send(controller, json)
        }
        Some(Commands::Stats { json }) => cmd_stats(&open_store()?, json),
        Some(Commands::Config { write }) => cmd_config(&config, write),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
    }
}

/// Set up tracing with a log file and, for non-interactive commands, stderr.
fn setup_logging(level: &str, config: &Config, to_stderr: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer =
        to_stderr.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let log_dir = config::cache_dir(config);
    let file_layer = std::fs::create_dir_all(&log_dir).is_ok().then(|| {
        let file_appender = tracing_appender::rolling::never(&log_dir, "campusdash.log");
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn new_controller(store: MemoryStore, config: &Config) -> Controller<MemoryStore> {
    Controller::new(
        store,
        config.mailbox.sender(),
        config.performance.filter_cache_size,
    )
}

fn cmd_open(store: MemoryStore, config: &Config, section: Option<Section>) -> anyhow::Result<()> {
    let start = match section {
        Some(s) => s,
        None => config.display.start_section.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid start_section, using overview");
            Section::Overview
        }),
    };
    let app = App::new(
        new_controller(store, config),
        Theme::by_name(&config.display.theme),
        config.general.date_format.clone(),
        config.display.show_sidebar,
        start,
    );
    campusdash::tui::run_tui(app)
}

fn cmd_users(store: &MemoryStore, category: UserCategory, json: bool) -> anyhow::Result<()> {
    let users = store.users();
    let selected = filter::select_users(&users, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!();
    println!("  {} ({} of {})", category, selected.len(), users.len());
    println!();
    println!(
        "  {:<24} {:<22} {:<10} {:<36} Badges",
        "Name", "Role", "Status", "Email"
    );
    for u in &selected {
        println!(
            "  {:<24} {:<22} {:<10} {:<36} {}",
            u.name,
            u.role,
            u.status,
            u.primary_email().unwrap_or("-"),
            u.badges.join(", ")
        );
    }
    println!();
    Ok(())
}

fn cmd_mail(
    store: &MemoryStore,
    folder: Folder,
    label: LabelFilter,
    json: bool,
) -> anyhow::Result<()> {
    let messages = store.messages();
    let selected = filter::select_messages(&messages, folder, label);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    let view = if label == LabelFilter::All {
        folder.name()
    } else {
        label.name()
    };
    println!();
    println!("  {view} ({} messages)", selected.len());
    println!();
    print_messages_table(&selected);
    Ok(())
}

fn print_messages_table(messages: &[&MailMessage]) {
    for m in messages {
        let flag = match (m.read, m.starred) {
            (false, true) => "N*",
            (false, false) => "N ",
            (true, true) => " *",
            (true, false) => "  ",
        };
        println!(
            "  {:>4} {flag} {}  {:<24} {}",
            m.id.0,
            m.timestamp.format("%Y-%m-%d %H:%M"),
            m.from.short_name(),
            m.subject
        );
    }
    println!();
}

fn cmd_send(mut controller: Controller<MemoryStore>, json: bool) -> anyhow::Result<()> {
    let receipt = controller.submit_draft();
    let produced: Vec<&MailMessage> = receipt
        .records
        .iter()
        .filter_map(|id| controller.messages().iter().find(|m| m.id == *id))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&produced)?);
        return Ok(());
    }

    println!();
    println!("  {}", receipt.notice);
    if receipt.delivered_internally {
        println!("  Delivered to an administrator inbox as well.");
    }
    println!();
    print_messages_table(&produced);
    Ok(())
}

#[derive(Serialize)]
struct Stats {
    users: Vec<(String, usize)>,
    folders: Vec<FolderStats>,
    starred: usize,
    labels: Vec<(String, usize)>,
    posts: usize,
}

#[derive(Serialize)]
struct FolderStats {
    folder: String,
    total: usize,
    unread: usize,
}

fn cmd_stats(store: &MemoryStore, json: bool) -> anyhow::Result<()> {
    let users = store.users();
    let messages = store.messages();
    let counts = MailboxCounts::tally(&messages);

    let stats = Stats {
        users: filter::category_counts(&users)
            .into_iter()
            .map(|(c, n)| (c.name().to_string(), n))
            .collect(),
        folders: Folder::ALL
            .into_iter()
            .map(|f| FolderStats {
                folder: f.name().to_string(),
                total: counts.total_in(f),
                unread: counts.unread_in(f),
            })
            .collect(),
        starred: counts.starred,
        labels: Label::ALL
            .into_iter()
            .map(|l| {
                let n = counts.for_label(LabelFilter::Label(l)).unwrap_or(0);
                (l.name().to_string(), n)
            })
            .collect(),
        posts: store.posts().len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!();
    println!("  Users:");
    for (name, n) in &stats.users {
        println!("    {name:<16} {n:>5}");
    }
    println!();
    println!("  Mailbox:");
    for f in &stats.folders {
        println!("    {:<16} {:>5}  ({} unread)", f.folder, f.total, f.unread);
    }
    println!("    {:<16} {:>5}", "Starred", stats.starred);
    for (name, n) in &stats.labels {
        println!("    {name:<16} {n:>5}");
    }
    println!();
    println!("  {:<18} {:>5}", "Posts:", stats.posts);
    println!();
    Ok(())
}

/// Print the loaded configuration, optionally saving it to the config file.
fn cmd_config(config: &Config, write: bool) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    if write {
        config::save_config(config)?;
        if let Some(path) = config::config_file_path() {
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "campusdash", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}
