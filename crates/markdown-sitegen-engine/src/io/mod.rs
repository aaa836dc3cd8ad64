use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkdownError;
use crate::parsing::{extract_title, markdown_to_html};

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ page_title }}";
/// Placeholder replaced by the converted page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ html_content }}";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// Read a text file with line endings normalised to `\n`
///
/// A missing file is reported as [`IoError::NotFound`].
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(normalize_line_endings(&text))
}

/// Rewrite `\r\n` and lone `\r` as `\n`
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replace the title and content placeholders in a page template
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(TITLE_PLACEHOLDER, title)
}

/// Replace `dest_dir` with a fresh recursive copy of `source_dir`
///
/// A missing source directory is not an error; the destination is left
/// empty.
pub fn copy_static(source_dir: &Path, dest_dir: &Path) -> Result<(), IoError> {
    if dest_dir.exists() {
        log::info!("Deleting existing directory: {}", dest_dir.display());
        fs::remove_dir_all(dest_dir)?;
    }

    log::info!("Creating directory: {}", dest_dir.display());
    fs::create_dir_all(dest_dir)?;

    if !source_dir.exists() {
        log::warn!("Source directory does not exist: {}", source_dir.display());
        return Ok(());
    }

    copy_directory_recursive(source_dir, dest_dir)
}

fn copy_directory_recursive(source_dir: &Path, dest_dir: &Path) -> Result<(), IoError> {
    for source_path in sorted_entries(source_dir)? {
        let Some(name) = source_path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(name);

        if source_path.is_dir() {
            log::info!("Creating directory: {}", dest_path.display());
            fs::create_dir(&dest_path)?;
            copy_directory_recursive(&source_path, &dest_path)?;
        } else {
            log::info!(
                "Copying file: {} -> {}",
                source_path.display(),
                dest_path.display()
            );
            fs::copy(&source_path, &dest_path)?;
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// Convert one markdown file into an HTML page using `template_path`
pub fn generate_page(from_path: &Path, template_path: &Path, to_path: &Path) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} using template {} to {}",
        from_path.display(),
        template_path.display(),
        to_path.display()
    );

    let markdown = read_file(from_path)?;
    let template = read_file(template_path)?;

    let convert_error = |source| IoError::Convert {
        path: from_path.to_path_buf(),
        source,
    };
    let content = markdown_to_html(&markdown).map_err(convert_error)?;
    let title = extract_title(&markdown).map_err(convert_error)?;

    let page = render_template(&template, &title, &content);

    // Create parent directories if they don't exist
    if let Some(parent) = to_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(to_path, page)?;

    log::info!("Page generated at {}", to_path.display());
    Ok(())
}

/// Generate a page for every `.md` file under `content_dir`
///
/// Output paths mirror the content tree under `dest_dir` with an `.html`
/// extension. Returns the generated paths in the order they were written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    if !content_dir.exists() {
        return Err(IoError::NotFound(content_dir.to_path_buf()));
    }

    let mut generated = Vec::new();
    generate_pages_into(content_dir, template_path, dest_dir, &mut generated)?;
    Ok(generated)
}

fn generate_pages_into(
    dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    generated: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    for path in sorted_entries(dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };

        if path.is_dir() {
            generate_pages_into(&path, template_path, &dest_dir.join(name), generated)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            let to_path = dest_dir.join(name).with_extension("html");
            generate_page(&path, template_path, &to_path)?;
            generated.push(to_path);
        }
    }
    Ok(())
}
