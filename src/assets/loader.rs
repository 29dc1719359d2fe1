//! Directory-backed group enumeration
//!
//! A directory of media files stands in for an asset library group. The
//! loader enumerates it on a worker thread and streams pages back over a
//! channel; the owning thread applies them to its [`AssetGroup`] with
//! [`GroupLoader::drain_into`], so the group is only ever mutated on the
//! thread that owns the selection.

use super::error::{AssetError, Result};
use super::group::AssetGroup;
use super::types::{Asset, MediaFilter, MediaKind};
use crossbeam_channel::{Receiver, TryRecvError};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Messages sent from the loader thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    /// Enumeration found this many matching files
    Started { total: usize },
    /// Next batch of assets, in group order
    Page(Vec<Asset>),
    /// All pages have been sent
    Finished,
    /// Enumeration failed; no further events follow
    Failed(String),
}

/// Progress reported after draining loader events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadProgress {
    /// More pages are expected
    Loading,
    /// The group is fully loaded
    Finished,
}

/// List media file paths directly inside `dir`, sorted
fn media_paths(dir: &Path, filter: MediaFilter) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssetError::GroupNotFound(dir.display().to_string()));
    }

    let pattern = format!("{}/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut paths = Vec::new();

    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = MediaKind::from_path(&path)
            && filter.accepts(kind)
        {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Enumerate every media file in `dir` synchronously
///
/// # Errors
///
/// Returns `AssetError::GroupNotFound` if `dir` is not a directory, or a
/// glob error if an entry cannot be read.
pub fn scan_directory(dir: &Path, filter: MediaFilter) -> Result<Vec<Asset>> {
    Ok(media_paths(dir, filter)?
        .iter()
        .filter_map(|p| Asset::from_path(p))
        .collect())
}

/// Build a complete group from a directory
///
/// # Errors
///
/// See [`scan_directory`].
pub fn load_group(dir: &Path, filter: MediaFilter) -> Result<AssetGroup> {
    let mut group = AssetGroup::new(group_name(dir), filter);
    group.push_page(scan_directory(dir, filter)?);
    group.finish();
    Ok(group)
}

/// Group name derived from the directory name
#[must_use]
pub fn group_name(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Handle to a background enumeration
pub struct GroupLoader {
    receiver: Receiver<LoadEvent>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl GroupLoader {
    /// Start enumerating `dir` on a worker thread
    ///
    /// Assets are sent in pages of `page_size` (at least one asset per page).
    ///
    /// # Errors
    ///
    /// Returns `AssetError::GroupNotFound` immediately if `dir` is not a
    /// directory. Failures during enumeration arrive as
    /// [`LoadEvent::Failed`].
    pub fn spawn(dir: &Path, filter: MediaFilter, page_size: usize) -> Result<Self> {
        if !dir.is_dir() {
            return Err(AssetError::GroupNotFound(dir.display().to_string()));
        }

        let (sender, receiver) = crossbeam_channel::unbounded();
        let dir = dir.to_path_buf();
        let page_size = page_size.max(1);

        let handle = thread::spawn(move || {
            let paths = match media_paths(&dir, filter) {
                Ok(paths) => paths,
                Err(e) => {
                    let _ = sender.send(LoadEvent::Failed(e.to_string()));
                    return;
                }
            };

            if sender.send(LoadEvent::Started { total: paths.len() }).is_err() {
                return;
            }

            for chunk in paths.chunks(page_size) {
                let page: Vec<Asset> = chunk.iter().filter_map(|p| Asset::from_path(p)).collect();
                log::debug!("Loaded page of {} assets from {}", page.len(), dir.display());
                if sender.send(LoadEvent::Page(page)).is_err() {
                    // Receiver dropped; nobody is waiting for the rest
                    return;
                }
            }

            let _ = sender.send(LoadEvent::Finished);
        });

        Ok(Self {
            receiver,
            handle: Some(handle),
            finished: false,
        })
    }

    /// Whether the loader has delivered its final event
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply every event received so far to `group` without blocking
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the loader reported a failure, or
    /// `AssetError::LoaderDisconnected` if it stopped without finishing.
    pub fn drain_into(&mut self, group: &mut AssetGroup) -> Result<LoadProgress> {
        while !self.finished {
            match self.receiver.try_recv() {
                Ok(event) => self.apply(event, group)?,
                Err(TryRecvError::Empty) => return Ok(LoadProgress::Loading),
                Err(TryRecvError::Disconnected) => return Err(self.disconnected()),
            }
        }
        Ok(LoadProgress::Finished)
    }

    /// Block until the loader finishes, applying every page to `group`
    ///
    /// # Errors
    ///
    /// Same as [`drain_into`](Self::drain_into).
    pub fn wait_into(&mut self, group: &mut AssetGroup) -> Result<()> {
        while !self.finished {
            let event = self.receiver.recv().map_err(|_| self.disconnected())?;
            self.apply(event, group)?;
        }
        Ok(())
    }

    fn apply(&mut self, event: LoadEvent, group: &mut AssetGroup) -> Result<()> {
        match event {
            LoadEvent::Started { total } => group.begin(total),
            LoadEvent::Page(page) => {
                group.push_page(page);
            }
            LoadEvent::Finished => {
                group.finish();
                self.finish_thread();
            }
            LoadEvent::Failed(message) => {
                log::warn!("Loading group '{}' failed: {message}", group.name());
                self.finish_thread();
                return Err(AssetError::LoadFailed(message));
            }
        }
        Ok(())
    }

    fn disconnected(&mut self) -> AssetError {
        self.finish_thread();
        AssetError::LoaderDisconnected
    }

    fn finish_thread(&mut self) {
        self.finished = true;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
