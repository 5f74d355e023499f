use dirs::data_dir;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::{
    fs,
    path::{Path, PathBuf},
};

static DATA_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let base = data_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    base.join("event-host")
});

pub fn data_root() -> PathBuf {
    DATA_ROOT.clone()
}

/// `EVENT_HOST_CONFIG` points the console at an alternate config file.
pub fn config_path() -> PathBuf {
    std::env::var_os("EVENT_HOST_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| data_root().join("config.json"))
}

pub fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            log::warn!("failed to create parent {:?}: {err}", parent);
        }
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Stand-in for a browser object URL: unique per path and per add.
pub fn preview_url(path: &Path, seq: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    hasher.update(b"|");
    hasher.update(seq.to_be_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("blob:event-host/{}", &digest[..32])
}

pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_urls_differ_per_add() {
        let path = Path::new("/tmp/poster.png");
        let first = preview_url(path, 0);
        let second = preview_url(path, 1);
        assert!(first.starts_with("blob:event-host/"));
        assert_ne!(first, second);
    }

    #[test]
    fn content_type_comes_from_extension() {
        assert_eq!(content_type_for(Path::new("a/clip.MP4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("cover.jpeg")), "image/jpeg");
        assert_eq!(
            content_type_for(Path::new("notes")),
            "application/octet-stream"
        );
    }
}
