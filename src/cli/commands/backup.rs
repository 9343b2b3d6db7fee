use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        dest,
        compress,
        force,
    } = cmd
    {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest);

        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if dest.exists() && !force {
            return Err(AppError::Backup(format!(
                "{} already exists, pass --force to overwrite",
                dest.display()
            )));
        }

        fs::copy(src, dest)?;

        let final_path = if *compress {
            let compressed = compress_backup(dest)?;
            fs::remove_file(dest)?;
            compressed
        } else {
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
    }
    Ok(())
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
