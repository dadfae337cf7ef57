//! Wardrobe stored in a TOML file.
//!
//! ```toml
//! [[garment]]
//! record = "1,0,0,2,#ffffff,null,0"
//!
//! [[outfit]]
//! id = "6f1c2b8e-..."
//! saved_at = "2024-05-01T08:30:00Z"
//!
//! [outfit.garments]
//! top = 1
//! ```
//!
//! Garments use the compact record form so that hand-edited files stay
//! readable. The whole file is rewritten after every change. A top-level
//! `last_id` keeps removed ids from being handed out again.
//!
//! Records are validated on load: a subcategory outside its category or a
//! repeated id makes the whole file unreadable.

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use outfitter_core::{
    application::{
        ApplicationError,
        ports::{OutfitStore, WardrobeStore},
    },
    domain::{DomainValidator, Garment, GarmentId, SavedOutfit},
    error::{OutfitterError, OutfitterResult},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::data::WardrobeData;

#[derive(Debug, Default, Serialize, Deserialize)]
struct WardrobeFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_id: Option<GarmentId>,
    #[serde(default, rename = "garment", skip_serializing_if = "Vec::is_empty")]
    garments: Vec<GarmentEntry>,
    #[serde(default, rename = "outfit", skip_serializing_if = "Vec::is_empty")]
    outfits: Vec<SavedOutfit>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GarmentEntry {
    record: String,
}

/// File-backed wardrobe and saved-outfit store.
///
/// Clones share the same contents and write to the same file.
#[derive(Debug, Clone)]
pub struct TomlCloset {
    path: PathBuf,
    inner: Arc<RwLock<WardrobeData>>,
}

impl TomlCloset {
    /// Load the wardrobe at `path`. A missing file is an empty wardrobe; the
    /// file is created on the first change.
    pub fn open(path: impl Into<PathBuf>) -> OutfitterResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) => parse(&text).map_err(|reason| storage_error(&path, reason))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No wardrobe file yet");
                WardrobeData::default()
            }
            Err(e) => return Err(io_error(&path, e, "read")),
        };

        info!(
            path = %path.display(),
            garments = data.garments.len(),
            outfits = data.outfits.len(),
            "Wardrobe loaded"
        );
        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(data)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read<T>(&self, f: impl FnOnce(&WardrobeData) -> OutfitterResult<T>) -> OutfitterResult<T> {
        let data = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        f(&data)
    }

    /// Apply a change and write the file. Memory is only updated once the
    /// file has been written.
    fn update<T>(
        &self,
        f: impl FnOnce(&mut WardrobeData) -> OutfitterResult<T>,
    ) -> OutfitterResult<T> {
        let mut data = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut next = data.clone();
        let result = f(&mut next)?;
        self.persist(&next)?;
        *data = next;
        Ok(result)
    }

    fn persist(&self, data: &WardrobeData) -> OutfitterResult<()> {
        let text = render(data).map_err(|reason| storage_error(&self.path, reason))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e, "create directory"))?;
        }
        fs::write(&self.path, text).map_err(|e| io_error(&self.path, e, "write"))?;

        debug!(path = %self.path.display(), "Wardrobe written");
        Ok(())
    }
}

impl WardrobeStore for TomlCloset {
    fn list(&self) -> OutfitterResult<Vec<Garment>> {
        self.read(|data| Ok(data.garments.clone()))
    }

    fn get(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.read(|data| data.get(id))
    }

    fn insert(&self, garment: Garment) -> OutfitterResult<()> {
        self.update(|data| data.insert(garment))
    }

    fn remove(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.update(|data| data.remove(id))
    }

    fn next_id(&self) -> OutfitterResult<GarmentId> {
        self.read(|data| Ok(data.next_id()))
    }
}

impl OutfitStore for TomlCloset {
    fn save(&self, outfit: SavedOutfit) -> OutfitterResult<()> {
        self.update(|data| {
            data.save_outfit(outfit);
            Ok(())
        })
    }

    fn list(&self) -> OutfitterResult<Vec<SavedOutfit>> {
        self.read(|data| Ok(data.outfits.clone()))
    }

    fn remove(&self, id: Uuid) -> OutfitterResult<SavedOutfit> {
        self.update(|data| data.remove_outfit(id))
    }
}

fn parse(text: &str) -> Result<WardrobeData, String> {
    let file: WardrobeFile = toml::from_str(text).map_err(|e| e.to_string())?;

    let mut data = WardrobeData::default();
    for entry in &file.garments {
        let garment = Garment::from_record(&entry.record).map_err(|e| e.to_string())?;
        DomainValidator::validate_garment(&garment)
            .map_err(|e| format!("garment {}: {e}", garment.id))?;
        data.insert(garment).map_err(|e| e.to_string())?;
    }

    data.outfits = file.outfits;
    data.last_id = data.last_id.max(file.last_id);
    Ok(data)
}

fn render(data: &WardrobeData) -> Result<String, String> {
    let file = WardrobeFile {
        last_id: data.last_id,
        garments: data
            .garments
            .iter()
            .map(|g| GarmentEntry {
                record: g.to_record(),
            })
            .collect(),
        outfits: data.outfits.clone(),
    };
    toml::to_string(&file).map_err(|e| e.to_string())
}

fn storage_error(path: &Path, reason: String) -> OutfitterError {
    ApplicationError::StorageError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

fn io_error(path: &Path, e: io::Error, operation: &str) -> OutfitterError {
    storage_error(path, format!("Failed to {}: {}", operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use outfitter_core::domain::{Color, Formality, Material, OutfitIds, Palette, Subcategory};
    use tempfile::TempDir;

    fn hat(id: u32) -> Garment {
        Garment::new(
            GarmentId::new(id),
            Subcategory::Headwear,
            Formality::Flex,
            Palette::with_accent(Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)),
            Material::SoftFur,
        )
    }

    #[test]
    fn missing_file_is_an_empty_wardrobe() {
        let dir = TempDir::new().unwrap();
        let closet = TomlCloset::open(dir.path().join("wardrobe.toml")).unwrap();

        assert!(WardrobeStore::list(&closet).unwrap().is_empty());
        assert!(!closet.path().exists());
    }

    #[test]
    fn changes_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("wardrobe.toml");

        let closet = TomlCloset::open(&path).unwrap();
        closet.insert(hat(1)).unwrap();
        closet.insert(hat(2)).unwrap();
        WardrobeStore::remove(&closet, GarmentId::new(1)).unwrap();
        let saved = SavedOutfit::new(OutfitIds {
            accessory: Some(GarmentId::new(2)),
            ..OutfitIds::default()
        });
        closet.save(saved.clone()).unwrap();

        let reopened = TomlCloset::open(&path).unwrap();
        assert_eq!(WardrobeStore::list(&reopened).unwrap(), vec![hat(2)]);
        let outfits = OutfitStore::list(&reopened).unwrap();
        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].id, saved.id);
        assert_eq!(outfits[0].garments, saved.garments);
    }

    #[test]
    fn file_uses_record_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");

        TomlCloset::open(&path).unwrap().insert(hat(7)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("[[garment]]"));
        assert!(text.contains("7,5,15,2,#ff0000,#0000ff,4"));
    }

    #[test]
    fn hand_written_file_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        fs::write(
            &path,
            "[[garment]]\nrecord = \"1,0,0,2,#ffffff,null,0\"\n\n\
             [[garment]]\nrecord = \"2,1,4,0,#000000,null,3\"\n",
        )
        .unwrap();

        let closet = TomlCloset::open(&path).unwrap();
        assert_eq!(WardrobeStore::list(&closet).unwrap().len(), 2);
        assert_eq!(closet.next_id().unwrap(), GarmentId::new(3));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        fs::write(&path, "[[garment]]\nrecord = \"not,a,garment\"\n").unwrap();

        let err = TomlCloset::open(&path).unwrap_err();
        assert!(matches!(
            err,
            OutfitterError::Application(ApplicationError::StorageError { .. })
        ));
    }

    #[test]
    fn record_outside_its_category_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        // category top, subcategory boot
        fs::write(&path, "[[garment]]\nrecord = \"1,0,7,2,#808080,null,0\"\n").unwrap();

        let err = TomlCloset::open(&path).unwrap_err();
        assert!(matches!(
            &err,
            OutfitterError::Application(ApplicationError::StorageError { reason, .. })
                if reason.contains("does not belong")
        ));
    }

    #[test]
    fn repeated_id_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        fs::write(
            &path,
            "[[garment]]\nrecord = \"1,0,0,2,#ffffff,null,0\"\n\n\
             [[garment]]\nrecord = \"1,1,4,0,#000000,null,3\"\n",
        )
        .unwrap();

        let err = TomlCloset::open(&path).unwrap_err();
        assert!(matches!(
            &err,
            OutfitterError::Application(ApplicationError::StorageError { reason, .. })
                if reason.contains("already exists")
        ));
    }

    #[test]
    fn removed_ids_stay_retired_after_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");

        let closet = TomlCloset::open(&path).unwrap();
        closet.insert(hat(1)).unwrap();
        WardrobeStore::remove(&closet, GarmentId::new(1)).unwrap();

        let reopened = TomlCloset::open(&path).unwrap();
        assert!(WardrobeStore::list(&reopened).unwrap().is_empty());
        assert_eq!(reopened.next_id().unwrap(), GarmentId::new(2));
    }

    #[test]
    fn clones_write_through_the_same_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        let closet = TomlCloset::open(&path).unwrap();
        let other = closet.clone();

        closet.insert(hat(1)).unwrap();
        other.insert(hat(2)).unwrap();

        assert_eq!(WardrobeStore::list(&closet).unwrap().len(), 2);
        assert_eq!(WardrobeStore::list(&TomlCloset::open(&path).unwrap()).unwrap().len(), 2);
    }

    #[test]
    fn failed_insert_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wardrobe.toml");
        let closet = TomlCloset::open(&path).unwrap();
        closet.insert(hat(1)).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(closet.insert(hat(1)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
