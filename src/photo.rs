//! Examination photos: unique file names and PNG re-encoding.

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// `<national_id>_<YYYYmmddHHMMSS>_<token>.png`; the random token keeps two
/// captures of the same ID within one second apart.
pub fn photo_filename(national_id: &str, at: NaiveDateTime) -> String {
    let safe_id: String = national_id
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}.png",
        safe_id,
        at.format("%Y%m%d%H%M%S"),
        &token[..8]
    )
}

/// Decode `source` (any supported format) and store it as PNG under `dir`.
pub fn save_photo(source: &Path, dir: &Path, filename: &str) -> AppResult<PathBuf> {
    let img = image::open(source)?;

    fs::create_dir_all(dir)?;
    let dest = dir.join(filename);
    img.save_with_format(&dest, image::ImageFormat::Png)?;

    Ok(dest)
}
