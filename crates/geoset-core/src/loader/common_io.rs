// crates/geoset-core/src/loader/common_io.rs
use crate::error::{GeoSetError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens `path` for reading, gunzipping on the fly for `*.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoSetError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoSetError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_detection_by_extension() {
        assert!(is_gzip(Path::new("world/countries.geojson.gz")));
        assert!(is_gzip(Path::new("COUNTRIES.GZ")));
        assert!(!is_gzip(Path::new("countries.geojson")));
        assert!(!is_gzip(Path::new("gz")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.geojson"))
            .err()
            .unwrap();
        assert!(matches!(err, GeoSetError::NotFound(_)));
    }
}
