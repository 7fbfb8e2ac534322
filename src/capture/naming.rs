use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// 无法从 content-type 推断扩展名时使用的默认扩展名
pub const SENTINEL_EXTENSION: &str = "out";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// 采集文件命名规则
///
/// - 临时文件: `<dir_tmp>/<basename>-<YYYY-MM-DD-HH-mm>`
/// - 最终文件: `<dir_to_save_to>/<basename>-<YYYY-MM-DD-HH-mm>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureNaming {
    file_base_name: String,
}

impl CaptureNaming {
    pub fn new(basename: &str, start_time: &DateTime<Local>) -> Self {
        Self {
            file_base_name: format!("{}-{}", basename, start_time.format(TIMESTAMP_FORMAT)),
        }
    }

    pub fn file_base_name(&self) -> &str {
        &self.file_base_name
    }

    pub fn full_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_base_name, extension)
    }

    pub fn temp_path(&self, dir_tmp: &Path) -> PathBuf {
        dir_tmp.join(&self.file_base_name)
    }

    pub fn final_path(&self, dir_to_save_to: &Path, extension: &str) -> PathBuf {
        dir_to_save_to.join(self.full_file_name(extension))
    }
}
