use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{DataType, Error, Family, Header, Result, quantizer};

/// Everything needed to produce one table: what to compute, how to store it
/// and how many samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSpec {
    pub family: Family,
    pub dtype: DataType,
    pub length: usize,
}

impl TableSpec {
    pub fn new(family: Family, dtype: DataType, length: usize) -> Self {
        Self {
            family,
            dtype,
            length,
        }
    }

    /// Rejects combinations that can never produce a usable table.
    ///
    /// Parameters outside their documented domain are only logged; the
    /// formulas are still evaluated for them.
    pub fn validate(&self) -> Result<()> {
        if self.dtype.is_signed() && !self.family.supports_signed() {
            return Err(Error::SignedTypeUnsupported {
                dtype: self.dtype,
                family: self.family.tag(),
            });
        }
        if self.length == 0 {
            return Err(Error::EmptyTable);
        }

        let normalized = |v: f64| v > 0.0 && v < 0.5;
        match self.family {
            Family::Sine => {}
            Family::Exp { ratio } => {
                if ratio <= 0.0 {
                    warn!(ratio, "ratio should be positive");
                }
            }
            Family::Voct { reference, .. } => {
                if !normalized(reference) {
                    warn!(reference, "reference should lie in (0, 0.5)");
                }
            }
            Family::Coeff { fmin, fmax, .. } => {
                if !normalized(fmin) || !normalized(fmax) {
                    warn!(fmin, fmax, "frequencies should lie in (0, 0.5)");
                }
            }
        }
        Ok(())
    }

    /// Table and variable name, e.g. `exp1000_u16x1024`.
    pub fn name(&self) -> String {
        format!("{}_{}x{}", self.family.prefix(), self.dtype, self.length)
    }

    pub fn file_name(&self) -> String {
        format!("{}.h", self.name())
    }

    /// Validates, generates and quantizes without touching the filesystem.
    pub fn build(&self) -> Result<GeneratedTable> {
        self.validate()?;

        debug!(
            family = ?self.family,
            dtype = %self.dtype,
            length = self.length,
            "generating table"
        );
        let samples = self.family.generate(self.length);
        let values = quantizer::quantize(&samples, self.dtype);

        Ok(GeneratedTable {
            name: self.name(),
            dtype: self.dtype,
            samples,
            values,
        })
    }

    /// Builds the table and writes `<out_dir>/<name>.h`, returning the table
    /// and the path written.
    pub fn write(&self, out_dir: &Path) -> Result<(GeneratedTable, PathBuf)> {
        let table = self.build()?;
        let path = table.write_to_dir(out_dir)?;
        Ok((table, path))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTable {
    pub name: String,
    pub dtype: DataType,
    /// Normalized samples before quantization.
    pub samples: Vec<f64>,
    pub values: Vec<i64>,
}

impl GeneratedTable {
    pub fn header(&self) -> Header<'_> {
        Header::new(&self.name, self.dtype, &self.values)
    }

    /// Writes the header into `dir`, creating the directory when missing.
    /// An existing file of the same name is overwritten.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("{}.h", self.name));
        let io_error = |source| Error::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        self.header().write_to(&mut writer).map_err(io_error)?;

        info!(path = %path.display(), values = self.values.len(), "wrote table");
        Ok(path)
    }
}
