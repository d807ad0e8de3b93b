use std::path::{Path, PathBuf};

/// Digits needed to print `frames`, i.e. `floor(log10(frames)) + 1`.
/// Zero still takes one digit.
pub fn pad_width(frames: u32) -> usize {
    frames.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Maps output indices to `<directory>/<prefix><zero-padded index>.<extension>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    directory: PathBuf,
    prefix: String,
    extension: String,
    width: usize,
}

impl FrameNaming {
    pub fn new(
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
        frames: u32,
    ) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            extension: extension.into(),
            width: pad_width(frames),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Left-pads with `'0'`; indices wider than the pad are kept whole
    pub fn file_name(&self, index: u32) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index,
            self.extension,
            width = self.width
        )
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        self.directory.join(self.file_name(index))
    }
}
