use clap::{Parser, Subcommand};
use quire::{config, manifest, output, run, site};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "Build-time pagination planner for static sites")]
#[command(long_about = "\
Build-time pagination planner for static sites

Computes the paginated page plan for a site described by a JSON manifest:
which items land on which page, where every page lives, and how the pages
chain together.

Site manifest (site.json):

  {
    \"title\": \"My Site\",
    \"items\": [
      { \"title\": \"First post\", \"data\": { \"date\": \"2026-01-02\" } },
      { \"title\": \"Draft\", \"hidden\": true }
    ],
    \"templates\": [
      { \"path\": \"blog/index.html\", \"paginate\": true },
      { \"path\": \"about/index.html\" }
    ]
  }

Policy (config.toml):

  [pagination]
  enabled = true                # pagination is opt-in
  per_page = 10                 # items per page
  permalink = \"/page:num/\"      # path pattern for pages 2..N

  Older sites may instead set the legacy top-level `paginate` key; the two
  styles are mutually exclusive.

Page 1 always keeps its template's own path; later pages substitute the
page index into the permalink pattern (blog/page2/index.html, ...). Hidden
items are never paginated.

Run 'quire gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site manifest describing items and templates
    #[arg(long, default_value = "site.json", global = true)]
    manifest: PathBuf,

    /// Pagination policy file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Directory for intermediate files (page plan manifest)
    #[arg(long, default_value = ".quire-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the page plan and write it to the temp dir
    Plan,
    /// Validate the policy and manifest without planning
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plan => {
            let effective = config::load_config(&cli.config)?;
            let site_manifest = manifest::SiteManifest::load(&cli.manifest)?;
            let mut site = manifest::ManifestSite::new(site_manifest);
            let report = run::run(&effective, &mut site, &site::TracingLogger);

            std::fs::create_dir_all(&cli.temp_dir)?;
            let plan_path = cli.temp_dir.join("pages.json");
            let json = serde_json::to_string_pretty(&report.artifacts)?;
            std::fs::write(&plan_path, json)?;

            output::print_plan(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.manifest.display());
            let effective = config::load_config(&cli.config)?;
            let site_manifest = manifest::SiteManifest::load(&cli.manifest)?;
            output::print_check(&site_manifest, &effective);
            println!("==> Policy and manifest are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
