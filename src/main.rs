use clap::Parser;
use distrule::display::format_result;
use distrule::executor::{self, ConnectionContext, ExecutorRegistry};
use distrule::parser::{parse_statement, parse_use_database};
use distrule::settings::{ConsoleSettings, DEFAULT_CONFIG_PATHS, load_metadata};
use distrule::{ContextManager, DistSqlError};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// distrule console
#[derive(Parser, Debug)]
#[command(name = "distrule")]
#[command(about = "Inspect cluster rule metadata with DistSQL SHOW queries", long_about = None)]
struct Args {
    /// Rules file (TOML)
    #[arg(short = 'r', long)]
    rules: Option<String>,

    /// Current database for database-scoped rules
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Execute a single statement and exit
    #[arg(short = 'c', long)]
    command: Option<String>,
}

struct Console {
    context_manager: ContextManager,
    registry: ExecutorRegistry,
    connection_context: ConnectionContext,
}

impl Console {
    fn handle(&mut self, input: &str) -> Result<String, DistSqlError> {
        if let Some(database) = parse_use_database(input) {
            if !self.context_manager.snapshot().contains_database(&database) {
                return Err(DistSqlError::DatabaseNotFound(database));
            }
            let message = format!("Database changed to '{database}'\n");
            self.connection_context.use_database(database);
            return Ok(message);
        }

        let statement = parse_statement(input).map_err(DistSqlError::ParseError)?;
        let result = executor::execute(
            statement,
            self.connection_context.clone(),
            &self.context_manager,
            &self.registry,
        )?;
        Ok(format_result(&result))
    }

    fn print_help() {
        println!("Statements:");
        println!("  SHOW TRANSACTION RULE");
        println!("  SHOW SQL_PARSER RULE");
        println!("  SHOW GLOBAL CLOCK RULE");
        println!("  SHOW READWRITE_SPLITTING RULES [FROM <database>]");
        println!("  USE <database>");
        println!("Meta-commands:");
        println!("  \\q, \\quit          - Quit");
        println!("  \\?, \\h, \\help      - Show this help");
    }

    fn repl(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut rl = DefaultEditor::new()?;

        let history_file = dirs::home_dir().map(|mut p| {
            p.push(".distrule_history");
            p
        });

        if let Some(ref path) = history_file {
            let _ = rl.load_history(path); // Ignore error if file doesn't exist
        }

        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║                 distrule rule console                    ║");
        println!("╚══════════════════════════════════════════════════════════╝");
        println!("Type '\\?' for help, 'quit' or 'exit' to quit.\n");

        loop {
            let prompt = format!("{}> ", self.connection_context.database_name().unwrap_or("distrule"));
            match rl.readline(&prompt) {
                Ok(line) => {
                    let query = line.trim();
                    if query.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(query);

                    match query {
                        "\\q" | "\\quit" => break,
                        "\\?" | "\\h" | "\\help" => {
                            Self::print_help();
                            continue;
                        }
                        _ if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") => break,
                        _ => {}
                    }

                    match self.handle(query) {
                        Ok(output) => print!("{output}"),
                        Err(e) => eprintln!("ERROR: {e}"),
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("✗ Input error: {e}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_file {
            let _ = rl.save_history(path);
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // CLI args override everything loaded from file and environment
    let mut settings = ConsoleSettings::load(DEFAULT_CONFIG_PATHS)?;
    if let Some(rules) = args.rules {
        settings.rules_file = rules;
    }
    if args.database.is_some() {
        settings.database = args.database;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let metadata = load_metadata(&settings.rules_file)?;
    info!(rules_file = %settings.rules_file, "console ready");

    let mut console = Console {
        context_manager: ContextManager::new(metadata),
        registry: ExecutorRegistry::with_default_executors(),
        connection_context: settings
            .database
            .map(ConnectionContext::for_database)
            .unwrap_or_default(),
    };

    match args.command {
        Some(command) => {
            let output = console.handle(&command)?;
            print!("{output}");
            Ok(())
        }
        None => console.repl(),
    }
}
