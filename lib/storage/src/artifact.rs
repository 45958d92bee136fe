// Artifact persistence: one compressed blob holding the catalog and matrix
use chrono::DateTime;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use reelrank_core::{Catalog, Error, Result, SimilarityMatrix};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk artifact format version. Bumped whenever the serialized layout
/// changes; loaders reject unknown versions.
const FORMAT_VERSION: u32 = 1;

/// The serialized artifact pair. The catalog and the matrix are shipped
/// together so the item-index correspondence can never drift between them.
#[derive(Debug, Serialize, Deserialize)]
struct ArtifactData {
    format_version: u32,
    created_at: u64,
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

/// Artifact description returned by [`save`], for external versioning and
/// integrity tracking of artifact pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactDescription {
    pub path: PathBuf,
    pub size: u64,
    pub checksum: String,
    pub created_at: Option<String>,
}

/// Serialize the catalog/matrix pair into a gzip-compressed bincode blob.
///
/// The pairing invariant is checked before anything is written, and the
/// write goes to `<path>.tmp` followed by an atomic rename, so a failed
/// build never leaves a partial artifact at the final path.
pub fn save(
    path: &Path,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
) -> Result<ArtifactDescription> {
    if catalog.len() != matrix.dim() {
        return Err(Error::ArtifactIntegrity(format!(
            "refusing to persist a mismatched pair: {} items, matrix dimension {}",
            catalog.len(),
            matrix.dim()
        )));
    }

    let created_at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let data = ArtifactData {
        format_version: FORMAT_VERSION,
        created_at,
        catalog: catalog.clone(),
        matrix: matrix.clone(),
    };
    let bytes = bincode::serialize(&data).map_err(|e| Error::Serialization(e.to_string()))?;

    // Write to temporary file first, then atomic rename
    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    encoder.write_all(&bytes)?;
    let mut writer = encoder.finish()?;
    writer.flush()?;
    drop(writer);
    fs::rename(&temp_path, path)?;

    let file_data = fs::read(path)?;
    let checksum = format!("{:x}", Sha256::digest(&file_data));
    let size = fs::metadata(path)?.len();

    info!(
        path = %path.display(),
        items = catalog.len(),
        size,
        "saved artifact"
    );

    Ok(ArtifactDescription {
        path: path.to_path_buf(),
        size,
        checksum,
        created_at: DateTime::from_timestamp(created_at as i64, 0)
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
    })
}

/// Load an artifact pair, verifying format version and the item-count /
/// matrix-dimension invariant before anything is served from it.
pub fn load(path: &Path) -> Result<(Catalog, SimilarityMatrix)> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| Error::ArtifactIntegrity(format!("corrupt artifact: {e}")))?;

    let data: ArtifactData = bincode::deserialize(&bytes)
        .map_err(|e| Error::ArtifactIntegrity(format!("undecodable artifact: {e}")))?;

    if data.format_version != FORMAT_VERSION {
        return Err(Error::ArtifactIntegrity(format!(
            "unsupported artifact format version {} (expected {})",
            data.format_version, FORMAT_VERSION
        )));
    }

    // Deserialization bypasses the constructors, re-check both invariants.
    data.matrix.validate().map_err(|_| {
        Error::ArtifactIntegrity(format!(
            "matrix score buffer does not match its declared dimension {}",
            data.matrix.dim()
        ))
    })?;
    if data.catalog.len() != data.matrix.dim() {
        return Err(Error::ArtifactIntegrity(format!(
            "item table has {} entries but matrix dimension is {}",
            data.catalog.len(),
            data.matrix.dim()
        )));
    }

    info!(
        path = %path.display(),
        items = data.catalog.len(),
        "loaded artifact"
    );
    Ok((data.catalog, data.matrix))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelrank_core::Item;

    fn sample_pair(n: usize) -> (Catalog, SimilarityMatrix) {
        let items = (0..n)
            .map(|i| Item {
                id: i as u64,
                title: format!("Movie {i}"),
                tag_text: format!("tag{i}"),
            })
            .collect();
        let catalog = Catalog::new(items).unwrap();
        let mut scores = vec![0.0f32; n * n];
        for i in 0..n {
            scores[i * n + i] = 1.0;
        }
        (catalog, SimilarityMatrix::new(n, scores).unwrap())
    }

    fn write_raw(path: &Path, data: &ArtifactData) {
        let bytes = bincode::serialize(data).unwrap();
        let file = File::create(path).unwrap();
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        encoder.write_all(&bytes).unwrap();
        encoder.finish().unwrap().flush().unwrap();
    }

    #[test]
    fn test_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        let (catalog, matrix) = sample_pair(4);

        let description = save(&path, &catalog, &matrix).unwrap();
        assert_eq!(description.size, fs::metadata(&path).unwrap().len());
        assert!(!description.checksum.is_empty());

        let (loaded_catalog, loaded_matrix) = load(&path).unwrap();
        assert_eq!(loaded_catalog, catalog);
        assert_eq!(loaded_matrix, matrix);
    }

    #[test]
    fn test_save_rejects_mismatched_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        let (catalog, _) = sample_pair(3);
        let (_, matrix) = sample_pair(2);

        let result = save(&path, &catalog, &matrix);
        assert!(matches!(result, Err(Error::ArtifactIntegrity(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_rejects_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        let (catalog, _) = sample_pair(3);
        let (_, matrix) = sample_pair(2);

        write_raw(
            &path,
            &ArtifactData {
                format_version: FORMAT_VERSION,
                created_at: 0,
                catalog,
                matrix,
            },
        );

        let result = load(&path);
        assert!(matches!(result, Err(Error::ArtifactIntegrity(_))));
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        let (catalog, matrix) = sample_pair(2);

        write_raw(
            &path,
            &ArtifactData {
                format_version: FORMAT_VERSION + 1,
                created_at: 0,
                catalog,
                matrix,
            },
        );

        let result = load(&path);
        assert!(matches!(result, Err(Error::ArtifactIntegrity(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        fs::write(&path, b"definitely not an artifact").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(Error::ArtifactIntegrity(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.artifact"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.artifact");
        let (catalog, matrix) = sample_pair(2);
        save(&path, &catalog, &matrix).unwrap();
        assert!(!temp_path_for(&path).exists());
    }
}
