//! 上传内容暂存
//!
//! 解码器需要文件路径而不是内存缓冲区，所以每次请求都把上传内容写入
//! 一个唯一命名的临时文件。`StagedUpload` 持有该文件，无论正常返回、
//! 提前返回还是 panic 展开，离开作用域时都会删除它。删除失败只记录日志。

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// 已暂存到磁盘的上传文件
pub struct StagedUpload {
    path: PathBuf,
    file: Option<NamedTempFile>,
}

impl StagedUpload {
    /// 将字节写入新的临时文件；`dir` 为空时使用系统临时目录
    pub fn create(bytes: &[u8], dir: Option<&Path>) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("upload-").suffix(".dxf");
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(bytes)?;
        file.flush()?;

        let path = file.path().to_path_buf();
        debug!("Staged {} bytes to {}", bytes.len(), path.display());

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 立即删除临时文件
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };
        match file.close() {
            Ok(()) => debug!("Removed staged file {}", self.path.display()),
            Err(err) => warn!(
                path = %self.path.display(),
                error = %err,
                "Failed to delete temp file"
            ),
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_close_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let staged = StagedUpload::create(b"0\nEOF\n", Some(dir.path())).unwrap();
        let path = staged.path().to_path_buf();

        assert_eq!(fs::read(&path).unwrap(), b"0\nEOF\n");
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("dxf"));

        staged.close();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file_on_early_return() {
        fn fails_midway(dir: &Path) -> Result<(), PathBuf> {
            let staged = StagedUpload::create(b"data", Some(dir)).unwrap();
            Err(staged.path().to_path_buf())
        }

        let dir = tempfile::tempdir().unwrap();
        let path = fails_midway(dir.path()).unwrap_err();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file_on_panic() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_path_buf();

        let result = std::panic::catch_unwind(move || {
            let _staged = StagedUpload::create(b"data", Some(dir_path.as_path())).unwrap();
            panic!("decoder blew up");
        });

        assert!(result.is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = StagedUpload::create(b"a", Some(dir.path())).unwrap();
        let b = StagedUpload::create(b"b", Some(dir.path())).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_already_removed_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let staged = StagedUpload::create(b"data", Some(dir.path())).unwrap();
        fs::remove_file(staged.path()).unwrap();
        staged.close();
    }
}
