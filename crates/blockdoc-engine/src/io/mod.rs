use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

use crate::editing::Page;
use crate::model::Block;
use crate::parsing::{from_markdown, to_markdown};
use crate::wire::{
    DEFAULT_EMOJI, DEFAULT_TITLE, FORMAT_VERSION, ImportedPage, WireError, from_wire_json,
    import_page, to_wire_json,
};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid workspace directory: {0}")]
    InvalidWorkspace(String),
    #[error("Invalid page JSON in {path}: {source}")]
    Wire {
        path: PathBuf,
        #[source]
        source: WireError,
    },
    #[error("Unsupported page format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// How a page file is stored, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Markdown,
    Json,
}

impl PageFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "md" => Some(PageFormat::Markdown),
            "json" => Some(PageFormat::Json),
            _ => None,
        }
    }
}

/// Read a page file and return its content
pub fn read_page(relative_path: &RelativePath, workspace_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(workspace_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a page file, creating parent directories as needed
pub fn write_page(
    relative_path: &RelativePath,
    workspace_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(workspace_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Recursively find `.md` and `.json` pages under the workspace, sorted
pub fn scan_pages(workspace_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_workspace(workspace_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(workspace_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if PageFormat::from_path(&path).is_some() {
            files.push(path);
        } else {
            log::debug!("Skipping non-page file {}", path.display());
        }
    }

    Ok(())
}

pub fn validate_workspace(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidWorkspace(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Load a page file as blocks: markdown through the line converter, JSON
/// as either an export envelope or a bare array of wire blocks.
pub fn load_blocks(relative_path: &RelativePath, workspace_root: &Path) -> Result<Vec<Block>, IoError> {
    Ok(load_document(relative_path, workspace_root)?.blocks)
}

/// Load a page file with its title. Markdown pages and bare JSON arrays are
/// titled after their file stem.
pub fn load_page(relative_path: &RelativePath, workspace_root: &Path) -> Result<Page, IoError> {
    Ok(load_document(relative_path, workspace_root)?.into())
}

fn load_document(relative_path: &RelativePath, workspace_root: &Path) -> Result<ImportedPage, IoError> {
    let absolute_path = relative_path.to_path(workspace_root);
    let format = PageFormat::from_path(&absolute_path)
        .ok_or_else(|| IoError::UnsupportedFormat(absolute_path.clone()))?;
    let content = read_page(relative_path, workspace_root)?;
    let stem = relative_path.file_stem().unwrap_or(DEFAULT_TITLE);

    let document = match format {
        PageFormat::Markdown => stem_titled(stem, from_markdown(&content)),
        PageFormat::Json if content.trim_start().starts_with('[') => {
            let blocks = from_wire_json(&content).map_err(|source| IoError::Wire {
                path: absolute_path.clone(),
                source,
            })?;
            stem_titled(stem, blocks)
        }
        PageFormat::Json => import_page(&content).map_err(|source| IoError::Wire {
            path: absolute_path.clone(),
            source,
        })?,
    };
    log::debug!(
        "Loaded {} root blocks from {}",
        document.blocks.len(),
        absolute_path.display()
    );
    Ok(document)
}

fn stem_titled(stem: &str, blocks: Vec<Block>) -> ImportedPage {
    ImportedPage {
        title: stem.to_string(),
        emoji: DEFAULT_EMOJI.to_string(),
        blocks,
        format_version: FORMAT_VERSION.to_string(),
        exported_at: None,
    }
}

/// Save blocks in the format implied by the file extension. JSON pages are
/// written as a bare array of wire blocks.
pub fn save_blocks(
    relative_path: &RelativePath,
    workspace_root: &Path,
    blocks: &[Block],
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(workspace_root);
    let content = match PageFormat::from_path(&absolute_path) {
        Some(PageFormat::Markdown) => to_markdown(blocks),
        Some(PageFormat::Json) => to_wire_json(blocks).map_err(|source| IoError::Wire {
            path: absolute_path.clone(),
            source,
        })?,
        None => return Err(IoError::UnsupportedFormat(absolute_path)),
    };
    write_page(relative_path, workspace_root, &content)
}
