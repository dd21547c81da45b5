//! Filesystem side of the generator: static asset copying and page output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::template::Template;

/// Replace `dst` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        log::info!("Removing {}", dst.display());
        fs::remove_dir_all(dst).map_err(Error::io(dst))?;
    }
    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    log::info!("Copying {} to {}", src.display(), dst.display());
    fs::create_dir_all(dst).map_err(Error::io(dst))?;

    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);
        if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            log::debug!("{} -> {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(Error::io(&path))?;
        }
    }
    Ok(())
}

/// Render one markdown file into `dest` through the template.
pub fn generate_page(from: &Path, template: &Template, dest: &Path, base_path: &str) -> Result<()> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(Error::io(from))?;
    let (page, _title) = crate::render_page(&markdown, template, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::write(dest, page).map_err(Error::io(dest))
}

/// Render every file under `content_dir` into a mirrored tree under
/// `dest_dir`, swapping each file's extension for `.html`.
pub fn generate_pages(content_dir: &Path, template: &Template, dest_dir: &Path, base_path: &str) -> Result<usize> {
    fs::create_dir_all(dest_dir).map_err(Error::io(dest_dir))?;

    let mut count = 0;
    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        if path.is_dir() {
            count += generate_pages(&path, template, &dest_dir.join(name), base_path)?;
        } else {
            let dest = dest_dir.join(name).with_extension("html");
            generate_page(&path, template, &dest, base_path)?;
            count += 1;
        }
    }
    Ok(count)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .map_err(Error::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::io(dir))?;
    paths.sort();
    Ok(paths)
}
