use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DraftError;
use crate::models::{RemoteId, ServerMedia};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.trim().to_ascii_lowercase().starts_with("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A file picked on this machine, not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub content_type: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    /// Declares the content type from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = utils::content_type_for(&path).to_string();
        Self { path, content_type }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    key: u64,
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: String,
}

impl PendingUpload {
    pub fn key(&self) -> u64 {
        self.key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    /// Already on the server. Legacy cover images carry no id.
    Remote { id: Option<RemoteId>, url: String },
    Local { upload_key: u64, preview_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItemDraft {
    pub source: MediaSource,
    pub kind: MediaKind,
}

impl MediaItemDraft {
    pub fn url(&self) -> &str {
        match &self.source {
            MediaSource::Remote { url, .. } => url,
            MediaSource::Local { preview_url, .. } => preview_url,
        }
    }

    pub fn server_id(&self) -> Option<&RemoteId> {
        match &self.source {
            MediaSource::Remote { id, .. } => id.as_ref(),
            MediaSource::Local { .. } => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.source, MediaSource::Local { .. })
    }
}

/// Server media ids to delete on the next successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionLedger {
    ids: Vec<RemoteId>,
}

impl DeletionLedger {
    pub fn mark(&mut self, id: RemoteId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn ids(&self) -> &[RemoteId] {
        &self.ids
    }

    pub fn contains(&self, id: &RemoteId) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Preview list, pending uploads and deletion ledger for one draft.
///
/// The first preview item is the cover image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaEditor {
    items: Vec<MediaItemDraft>,
    pending: Vec<PendingUpload>,
    ledger: DeletionLedger,
    next_key: u64,
}

impl MediaEditor {
    pub fn from_server(media: &[ServerMedia], legacy_image_url: Option<&str>) -> Self {
        let mut editor = Self::default();
        let usable: Vec<&ServerMedia> = media
            .iter()
            .filter(|record| !utils::is_blank(&record.file_url))
            .collect();
        if !usable.is_empty() {
            editor.items = usable
                .into_iter()
                .map(|record| MediaItemDraft {
                    source: MediaSource::Remote {
                        id: record.id.clone(),
                        url: record.file_url.clone(),
                    },
                    kind: record
                        .file_type
                        .as_deref()
                        .map(MediaKind::from_content_type)
                        .unwrap_or(MediaKind::Image),
                })
                .collect();
        } else if let Some(url) = legacy_image_url.filter(|url| !utils::is_blank(url)) {
            editor.items.push(MediaItemDraft {
                source: MediaSource::Remote {
                    id: None,
                    url: url.to_string(),
                },
                kind: MediaKind::Image,
            });
        }
        editor
    }

    pub fn items(&self) -> &[MediaItemDraft] {
        &self.items
    }

    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    pub fn ledger(&self) -> &DeletionLedger {
        &self.ledger
    }

    pub fn cover(&self) -> Option<&MediaItemDraft> {
        self.items.first()
    }

    pub fn add_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = LocalFile>,
    {
        for file in files {
            let key = self.next_key;
            self.next_key += 1;
            let preview_url = utils::preview_url(&file.path, key);
            self.items.push(MediaItemDraft {
                source: MediaSource::Local {
                    upload_key: key,
                    preview_url,
                },
                kind: MediaKind::from_content_type(&file.content_type),
            });
            self.pending.push(PendingUpload {
                key,
                file_name: display_name(&file.path),
                path: file.path,
                content_type: file.content_type,
            });
        }
    }

    /// Removes the item at `index`.
    ///
    /// Server-known items are recorded in the ledger; pending files are
    /// dropped from the upload list and never reach the ledger.
    pub fn remove(&mut self, index: usize) -> Result<MediaItemDraft, DraftError> {
        if index >= self.items.len() {
            return Err(DraftError::MediaOutOfRange(index));
        }
        let item = self.items.remove(index);
        match &item.source {
            MediaSource::Remote { id: Some(id), .. } => self.ledger.mark(id.clone()),
            MediaSource::Remote { id: None, .. } => {}
            MediaSource::Local { upload_key, .. } => {
                self.pending.retain(|upload| upload.key != *upload_key);
            }
        }
        Ok(item)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: u64, url: &str, file_type: Option<&str>) -> ServerMedia {
        ServerMedia {
            id: Some(RemoteId::from(id)),
            file_url: url.to_string(),
            file_type: file_type.map(str::to_string),
        }
    }

    #[test]
    fn legacy_image_url_becomes_single_item() {
        let editor = MediaEditor::from_server(&[], Some("https://cdn.test/cover.jpg"));
        assert_eq!(editor.items().len(), 1);
        let item = &editor.items()[0];
        assert_eq!(item.url(), "https://cdn.test/cover.jpg");
        assert_eq!(item.server_id(), None);
        assert_eq!(item.kind, MediaKind::Image);
    }

    #[test]
    fn media_list_wins_over_legacy_url() {
        let media = vec![
            remote(1, "https://cdn.test/a.jpg", None),
            remote(2, "https://cdn.test/b.mp4", Some("video")),
        ];
        let editor = MediaEditor::from_server(&media, Some("https://cdn.test/legacy.jpg"));
        assert_eq!(editor.items().len(), 2);
        assert_eq!(editor.items()[1].kind, MediaKind::Video);
        assert_eq!(
            editor.cover().map(MediaItemDraft::url),
            Some("https://cdn.test/a.jpg")
        );
    }

    #[test]
    fn media_records_without_url_are_skipped() {
        let media = vec![
            remote(1, "", Some("image")),
            remote(2, "https://cdn.test/b.jpg", None),
        ];
        let editor = MediaEditor::from_server(&media, None);
        assert_eq!(editor.items().len(), 1);
        assert_eq!(editor.items()[0].server_id(), Some(&RemoteId::from(2u64)));

        let only_blank = vec![remote(1, " ", None)];
        let editor = MediaEditor::from_server(&only_blank, Some("https://cdn.test/legacy.jpg"));
        assert_eq!(editor.items()[0].url(), "https://cdn.test/legacy.jpg");
    }

    #[test]
    fn blank_legacy_url_is_ignored() {
        let editor = MediaEditor::from_server(&[], Some("  "));
        assert!(editor.items().is_empty());
    }

    #[test]
    fn removing_remote_item_marks_ledger() {
        let media = vec![remote(7, "https://cdn.test/a.jpg", Some("image"))];
        let mut editor = MediaEditor::from_server(&media, None);
        editor.remove(0).expect("remove");
        assert!(editor.items().is_empty());
        assert!(editor.ledger().contains(&RemoteId::from(7u64)));
    }

    #[test]
    fn removing_pending_item_leaves_ledger_alone() {
        let media = vec![remote(7, "https://cdn.test/a.jpg", None)];
        let mut editor = MediaEditor::from_server(&media, None);
        editor.add_files(vec![
            LocalFile::new("/tmp/teaser.mp4", "video/mp4"),
            LocalFile::new("/tmp/poster.png", "image/png"),
        ]);
        assert_eq!(editor.items().len(), 3);
        assert_eq!(editor.pending().len(), 2);
        assert_eq!(editor.items()[1].kind, MediaKind::Video);
        assert!(editor.items()[1].is_pending());

        editor.remove(1).expect("remove teaser");
        assert_eq!(editor.items().len(), 2);
        assert_eq!(editor.pending().len(), 1);
        assert_eq!(editor.pending()[0].file_name, "poster.png");
        assert!(editor.ledger().is_empty());
    }

    #[test]
    fn same_file_added_twice_is_tracked_separately() {
        let mut editor = MediaEditor::default();
        editor.add_files(vec![
            LocalFile::new("/tmp/poster.png", "image/png"),
            LocalFile::new("/tmp/poster.png", "image/png"),
        ]);
        assert_ne!(editor.items()[0].url(), editor.items()[1].url());

        editor.remove(0).expect("remove first copy");
        assert_eq!(editor.pending().len(), 1);
        assert_eq!(editor.pending()[0].key(), 1);
    }

    #[test]
    fn ledger_ignores_repeat_ids() {
        let mut ledger = DeletionLedger::default();
        ledger.mark(RemoteId::from(4u64));
        ledger.mark(RemoteId::from(4u64));
        ledger.mark(RemoteId::from(2u64));
        assert_eq!(ledger.ids(), &[RemoteId::from(4u64), RemoteId::from(2u64)]);
    }

    #[test]
    fn out_of_range_removal_is_an_error() {
        let mut editor = MediaEditor::default();
        assert_eq!(editor.remove(0), Err(DraftError::MediaOutOfRange(0)));
    }
}
