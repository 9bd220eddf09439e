use clap::{Parser, Subcommand};
use log::debug;
use swatch_svg::{render, server, QueryParams, Result};

/// Render color swatches as SVG, over HTTP or one at a time
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the swatch endpoint over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "SWATCH_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },

    /// Print the SVG for one set of parameters
    Render {
        /// Query string, e.g. 'color=f00&style=round&text=Hi'
        #[arg(default_value = "")]
        query: String,

        /// Read parameters from a JSON object instead ('-' for stdin)
        #[arg(long, conflicts_with = "query")]
        json: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve { host, port } => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(server::serve(&host, port))
        }
        Commands::Render { query, json } => {
            let params = QueryParams::load(&query, json.as_deref())?;
            debug!("rendering {:?}", params);
            println!("{}", render(&params));
            Ok(())
        }
    }
}
