use appraise::{
    catalog::Catalog,
    cli::{self, CalcOptions, CliError, QueryOptions},
    input::FileInputLoader,
    output::{OutputMode, render_error},
    registry::{Context, OperationRegistry},
};
use clap::{Parser as ClapParser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "appraise")]
#[command(about = "Appraise - agent-facing CLI for product and bundle evaluation calculations")]
#[command(version)]
struct Cli {
    /// Log engine activity to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute DSL queries: operation(args) { fields }; ...
    Q {
        /// The query, e.g. 'calc(pricing.bvr, input="data.json") { minimal }'
        query: String,

        /// Output format: json | compact | llm
        #[arg(short, long, default_value = "json")]
        format: OutputMode,
    },

    /// Run a single calculation directly
    Calc {
        module: String,
        function: String,

        /// Input JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format: json | compact | llm
        #[arg(short, long, default_value = "json")]
        format: OutputMode,
    },

    /// List query operations, parameters and field presets
    Operations,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let catalog = Catalog::new();
    let loader = FileInputLoader;
    let registry = OperationRegistry::with_builtins();
    let context = Context::new(&catalog, &loader);

    let (result, format) = match args.command {
        Commands::Q { query, format } => (
            cli::execute_query(&QueryOptions { query, format }, &registry, context),
            format,
        ),
        Commands::Calc {
            module,
            function,
            input,
            format,
        } => {
            let options = CalcOptions {
                module,
                function,
                input,
                format,
            };
            (cli::execute_calc(&options, &registry, context), format)
        }
        Commands::Operations => (
            Ok(cli::operations_overview(&registry)),
            OutputMode::Json,
        ),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            report(&e, format);
            std::process::exit(1);
        }
    }
}

fn report(error: &CliError, format: OutputMode) {
    eprint!("{}", render_error(&error.to_string(), format));
}
