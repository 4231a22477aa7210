use crate::error::{CarveError, Result};
use crate::types::WriteMode;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use utils::BinWriteExt;

/// Factory and writer for per-stream destinations.
///
/// A sink handles one destination at a time: `begin` opens a fresh one for
/// stream `index` (replacing any earlier content under that name), `append`
/// adds bytes to it and `finish` releases it.
pub trait OutputSink {
    /// Returns the destination's display name.
    fn begin(&mut self, index: usize) -> Result<String>;
    fn append(&mut self, bytes: &[u8]) -> Result<usize>;
    fn finish(&mut self) -> Result<()>;
}

pub fn output_name(prefix: &str, index: usize) -> String {
    format!("{}{}.wav", prefix, index)
}

/// Writes `<prefix><index>.wav` files into a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    prefix: String,
    mode: WriteMode,
    current: Option<PathBuf>,
    handle: Option<BufWriter<File>>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, mode: WriteMode) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            mode,
            current: None,
            handle: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(output_name(&self.prefix, index))
    }

    fn current_path(&self) -> Result<&Path> {
        self.current.as_deref().ok_or_else(|| {
            CarveError::Io(std::io::Error::other("no destination is open"))
        })
    }
}

fn destination_err(path: &Path) -> impl FnOnce(std::io::Error) -> CarveError + '_ {
    move |source| CarveError::Destination {
        path: path.to_path_buf(),
        source,
    }
}

impl OutputSink for DirectorySink {
    fn begin(&mut self, index: usize) -> Result<String> {
        self.finish()?;

        fs::create_dir_all(&self.dir).map_err(destination_err(&self.dir))?;
        let path = self.path_for(index);
        let file = File::create(&path).map_err(destination_err(&path))?;
        match self.mode {
            WriteMode::Scoped => self.handle = Some(BufWriter::new(file)),
            // Only truncate here, every append reopens the file.
            WriteMode::PerWrite => drop(file),
        }

        let name = path.display().to_string();
        self.current = Some(path);
        Ok(name)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<usize> {
        let path = self.current_path()?.to_path_buf();
        match self.mode {
            WriteMode::Scoped => {
                let handle = self.handle.as_mut().ok_or_else(|| {
                    CarveError::Io(std::io::Error::other("no destination is open"))
                })?;
                handle.write_counted(bytes).map_err(destination_err(&path))
            }
            WriteMode::PerWrite => {
                let mut file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(&path)
                    .map_err(destination_err(&path))?;
                file.write_counted(bytes).map_err(destination_err(&path))
            }
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let (Some(mut handle), Some(path)) = (self.handle.take(), self.current.as_deref()) {
            handle.flush().map_err(destination_err(path))?;
        }
        self.current = None;
        Ok(())
    }
}

/// Keeps every extracted stream in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub prefix: String,
    pub outputs: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            outputs: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.as_slice())
    }
}

impl OutputSink for MemorySink {
    fn begin(&mut self, index: usize) -> Result<String> {
        let name = output_name(&self.prefix, index);
        self.outputs.retain(|(n, _)| *n != name);
        self.outputs.push((name.clone(), Vec::new()));
        Ok(name)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<usize> {
        let (_, data) = self.outputs.last_mut().ok_or_else(|| {
            CarveError::Io(std::io::Error::other("no destination is open"))
        })?;
        data.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Counts bytes without storing them, for dry runs.
#[derive(Debug, Default)]
pub struct DiscardSink {
    pub prefix: String,
}

impl DiscardSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl OutputSink for DiscardSink {
    fn begin(&mut self, index: usize) -> Result<String> {
        Ok(output_name(&self.prefix, index))
    }

    fn append(&mut self, bytes: &[u8]) -> Result<usize> {
        Ok(bytes.len())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
