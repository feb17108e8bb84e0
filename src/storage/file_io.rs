//! Profile file I/O with atomic writes
//!
//! Profiles are JSON or YAML, chosen by file extension. Writes go through a
//! temp file and a rename so a crash never leaves a half-written profile.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{CashflowError, CashflowResult};
use crate::models::Profile;

/// On-disk encoding of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// `.yaml` and `.yml` are YAML; anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a file in the given format, returning an error if it doesn't exist
pub fn read_required<T, P>(path: P, format: ProfileFormat) -> CashflowResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(CashflowError::Profile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| CashflowError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match format {
        ProfileFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            CashflowError::Json(format!("Failed to parse {}: {}", path.display(), e))
        }),
        ProfileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            CashflowError::Yaml(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write data atomically (write to temp, then rename)
pub fn write_atomic<T, P>(path: P, data: &T, format: ProfileFormat) -> CashflowResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CashflowError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| CashflowError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ProfileFormat::Json => serde_json::to_writer_pretty(&mut writer, data)?,
        ProfileFormat::Yaml => serde_yaml::to_writer(&mut writer, data)?,
    }

    writer
        .flush()
        .map_err(|e| CashflowError::Io(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CashflowError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CashflowError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Load and validate a profile
pub fn read_profile<P: AsRef<Path>>(path: P) -> CashflowResult<Profile> {
    let path = path.as_ref();
    let format = ProfileFormat::from_path(path);
    let mut profile: Profile = read_required(path, format)?;
    profile.assign_missing_ids();
    profile.validate()?;
    debug!(
        path = %path.display(),
        income = profile.income.len(),
        obligations = profile.obligations.len(),
        planned = profile.planned.len(),
        "profile loaded"
    );
    Ok(profile)
}

/// Write a profile in the format its extension names
pub fn write_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> CashflowResult<()> {
    let path = path.as_ref();
    write_atomic(path, profile, ProfileFormat::from_path(path))
}
