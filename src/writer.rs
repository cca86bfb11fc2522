use crate::error::CrawlError;
use crate::results::NoticeRecord;
use crate::utils::notice_file_name;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the file holding every notice of a run
pub const AGGREGATE_FILE_NAME: &str = "all_notices.json";

/// Writes notice records as pretty-printed JSON files into one directory
#[derive(Debug, Clone)]
pub struct NoticeWriter {
    output_dir: PathBuf,
}

impl NoticeWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write one notice to `notice_{index}_{slug}.json`
    pub fn write_notice(&self, index: usize, notice: &NoticeRecord) -> Result<PathBuf, CrawlError> {
        let path = self.output_dir.join(notice_file_name(index, &notice.title));
        self.write_json(&path, notice)?;
        Ok(path)
    }

    /// Write the whole batch to `all_notices.json`
    pub fn write_all(&self, notices: &[NoticeRecord]) -> Result<PathBuf, CrawlError> {
        let path = self.output_dir.join(AGGREGATE_FILE_NAME);
        self.write_json(&path, notices)?;
        Ok(path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), CrawlError> {
        fs::create_dir_all(&self.output_dir)?;

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
