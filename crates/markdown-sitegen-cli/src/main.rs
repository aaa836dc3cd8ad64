use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{extract_title, io, markdown_to_html};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sitegen", version, about = "Build a static site from markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and generate every page
    Build {
        /// Path to the site config file
        #[arg(long, default_value = markdown_sitegen_config::CONFIG_FILE_NAME)]
        config: PathBuf,
    },

    /// Print the HTML body of one markdown file
    Render {
        /// Path to the .md file
        file: PathBuf,
    },

    /// Print the title of one markdown file
    Title {
        /// Path to the .md file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config } => build(&config),
        Commands::Render { file } => {
            println!("{}", render(&file)?);
            Ok(())
        }
        Commands::Title { file } => {
            println!("{}", title(&file)?);
            Ok(())
        }
    }
}

fn render(file: &Path) -> Result<String> {
    let markdown = read_markdown(file)?;
    markdown_to_html(&markdown).with_context(|| format!("Failed to convert {}", file.display()))
}

fn title(file: &Path) -> Result<String> {
    let markdown = read_markdown(file)?;
    extract_title(&markdown)
        .with_context(|| format!("Failed to find a title in {}", file.display()))
}

/// Loads the config, resolving its paths against the config file's directory
fn resolve_config(config_path: &Path) -> Result<Config> {
    let config = match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            let root = config_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            config.relative_to(&root)
        }
        None => {
            log::info!(
                "No config file at {}, using default layout",
                config_path.display()
            );
            Config::default()
        }
    };
    Ok(config)
}

fn build(config_path: &Path) -> Result<()> {
    let config = resolve_config(config_path)?;

    io::copy_static(&config.static_dir, &config.public_dir).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            config.static_dir.display(),
            config.public_dir.display()
        )
    })?;

    let pages =
        io::generate_pages_recursive(&config.content_dir, &config.template_path, &config.public_dir)
            .context("Failed to generate pages")?;

    log::info!(
        "Generated {} page(s) in {}",
        pages.len(),
        config.public_dir.display()
    );
    Ok(())
}

fn read_markdown(file: &Path) -> Result<String> {
    io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ page_title }}</title>{{ html_content }}";

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_uses_default_config_path() {
        let cli = Cli::try_parse_from(["sitegen", "build"]).unwrap();
        match cli.command {
            Commands::Build { config } => {
                assert_eq!(config, PathBuf::from(markdown_sitegen_config::CONFIG_FILE_NAME));
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn render_requires_a_file() {
        assert!(Cli::try_parse_from(["sitegen", "render"]).is_err());
    }

    #[test]
    fn render_prints_page_body() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.md");
        fs::write(&file, "# Hi\r\n\r\nSome *text*").unwrap();

        assert_eq!(
            render(&file).unwrap(),
            "<div><h1>Hi</h1><p>Some <i>text</i></p></div>"
        );
    }

    #[test]
    fn title_reports_missing_heading() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.md");
        fs::write(&file, "## Sub only").unwrap();

        let err = title(&file).unwrap_err();
        assert!(err.to_string().contains("Failed to find a title"));

        fs::write(&file, "# Found").unwrap();
        assert_eq!(title(&file).unwrap(), "Found");
    }

    #[test]
    fn build_resolves_paths_against_config_directory() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site");
        fs::create_dir_all(site.join("pages").join("blog")).unwrap();
        fs::create_dir_all(site.join("assets")).unwrap();
        fs::write(site.join("pages").join("index.md"), "# Home").unwrap();
        fs::write(site.join("pages").join("blog").join("post.md"), "# Post").unwrap();
        fs::write(site.join("assets").join("site.css"), "body {}").unwrap();
        fs::write(site.join("layout.html"), TEMPLATE).unwrap();

        let config_path = site.join(markdown_sitegen_config::CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"content_dir = "pages"
template_path = "layout.html"
static_dir = "assets"
public_dir = "out"
"#,
        )
        .unwrap();

        build(&config_path).unwrap();

        let out = site.join("out");
        assert_eq!(fs::read_to_string(out.join("site.css")).unwrap(), "body {}");
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            "<title>Home</title><div><h1>Home</h1></div>"
        );
        assert_eq!(
            fs::read_to_string(out.join("blog").join("post.html")).unwrap(),
            "<title>Post</title><div><h1>Post</h1></div>"
        );
    }
}
