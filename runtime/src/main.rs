#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proweb_seo::cli::{self, output};
use proweb_seo::{Capabilities, Deployment, SiteConfig, SiteUrl};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proweb-seo", author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress output.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Canonical site origin; overrides NEXT_PUBLIC_SITE_URL and SITE_URL.
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Treat this as a preview deployment (robots.txt disallows everything).
    #[arg(long, global = true)]
    preview: bool,

    /// Directory artifact mtimes are resolved against.
    #[arg(long, global = true)]
    content_root: Option<PathBuf>,

    /// Run without filesystem access, as an edge runtime would.
    #[arg(long, global = true)]
    edge: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve sitemaps and robots.txt over HTTP.
    Serve {
        #[arg(long)]
        listen: Option<SocketAddr>,

        /// Emit logs as JSON lines.
        #[arg(long, env = "PROWEB_LOG_JSON")]
        log_json: bool,
    },
    /// Print one document: a sitemap name or path, or `robots`.
    Render { document: String },
    /// Print the JSON-LD for a page path such as `/steden/utrecht`.
    Jsonld {
        #[arg(required_unless_present = "list")]
        page: Option<String>,

        /// Wrap the output in a `<script type="application/ld+json">` element.
        #[arg(long)]
        script: bool,

        #[arg(long, requires = "script")]
        nonce: Option<String>,

        /// List every page with structured data.
        #[arg(long)]
        list: bool,
    },
    /// Count URLs per sitemap.
    Stats,
    /// Check every sitemap entry and document; exits non-zero on issues.
    Validate,
    /// Show the colour theme for a city or service slug.
    Theme {
        slug: String,

        #[arg(long)]
        service: bool,
    },
}

impl Cli {
    fn site_config(&self) -> Result<SiteConfig> {
        let mut config = SiteConfig::from_env().context("invalid environment configuration")?;
        if let Some(raw) = &self.site_url {
            config.site_url = SiteUrl::parse(raw)?;
        }
        if self.preview {
            config.deployment = Deployment::Preview;
        }
        if let Some(root) = &self.content_root {
            config.content_root = root.clone();
        }
        if self.edge {
            config.capabilities = Capabilities::EDGE;
        }
        Ok(config)
    }
}

async fn run(args: Cli) -> Result<()> {
    let mut config = args.site_config()?;
    match args.command {
        Command::Serve { listen, log_json } => {
            if let Some(listen) = listen {
                config.listen = listen;
            }
            cli::serve::run(config, log_json).await
        }
        Command::Render { document } => cli::render_cmd::run(&config, &document),
        Command::Jsonld {
            page,
            script,
            nonce,
            list,
        } => match page {
            Some(page) if !list => cli::jsonld_cmd::run(&config, &page, script, nonce.as_deref()),
            _ => {
                cli::jsonld_cmd::list();
                Ok(())
            }
        },
        Command::Stats => cli::stats::run(&config),
        Command::Validate => cli::validate_cmd::run(&config),
        Command::Theme { slug, service } => cli::theme_cmd::run(&slug, service),
    }
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Output helpers read these so subcommands need no extra plumbing.
    if args.json {
        std::env::set_var(output::JSON_ENV, "1");
    }
    if args.quiet {
        std::env::set_var(output::QUIET_ENV, "1");
    }

    if let Err(e) = run(args).await {
        let s = output::Styled::new();
        eprintln!("  {} {e:#}", s.fail_sym());
        std::process::exit(1);
    }
}
