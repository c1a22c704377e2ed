use crate::auth::Session;
use crate::errors::{AppError, AppResult};
use crate::store::{CsvStore, journal};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the register to `dest_file`; with `compress` the copy is packed
    /// (zip on Windows, tar.gz elsewhere) and the plain copy removed.
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(
        store: &CsvStore,
        session: &Session,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check register exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Register not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if dest.exists()
            && !force
            && !ask_confirmation(&format!("The file '{}' already exists.", dest.display()))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 4️⃣ Copy register
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = if cfg!(target_os = "windows") {
                compress_zip(dest)?
            } else {
                compress_tar_gz(dest)?
            };

            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Journal
        if let Err(e) = journal::write(
            src,
            session.operator(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write journal: {e}"));
        }

        Ok(Some(final_path))
    }
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("not a file path: {}", path.display())))
}

/// Compress a backup using .zip
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

/// Compress a backup using .tar.gz
fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&gz_path)?;

    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, entry_name(path)?)?;
    archive.into_inner()?.finish()?;

    info(format!("Compressed: {}", gz_path.display()));
    Ok(gz_path)
}
