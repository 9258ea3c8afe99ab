use std::sync::{Arc, RwLock};

use log::debug;

pub mod location;

pub use location::{home_dir_from_env, DbLocation};

/// The single database blob kept on disk.
///
/// Reads and writes go through one lock shared by every clone, so a reader
/// never observes a half-written file and concurrent writers are serialized.
#[derive(Debug, Clone)]
pub struct BlobStore {
    location: DbLocation,
    lock: Arc<RwLock<()>>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create database folder: {0}")]
    CreateFolder(std::io::Error),
    #[error("failed to read database file: {0}")]
    Read(std::io::Error),
    #[error("failed to write database file: {0}")]
    Write(std::io::Error),
    #[error("database lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReadDbResponse {
    Found { blob: Vec<u8> },
    NotFound,
}

#[derive(Debug)]
pub struct WriteDbRequest<'a> {
    pub blob: &'a [u8],
}

#[derive(Debug, PartialEq, Eq)]
pub struct WriteDbResponse {
    pub size: u64,
}

impl BlobStore {
    pub fn new(location: DbLocation) -> Self {
        Self {
            location,
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn location(&self) -> &DbLocation {
        &self.location
    }

    pub fn ensure_folder(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.location.folder).map_err(Error::CreateFolder)
    }

    pub fn read(&self) -> Result<ReadDbResponse, Error> {
        self.ensure_folder()?;
        let _guard = self.lock.read().map_err(|_| Error::LockPoisoned)?;
        let path = self.location.path();
        if !path.exists() {
            debug!("read_db(path={:?}) not found", path);
            return Ok(ReadDbResponse::NotFound);
        }
        let blob = std::fs::read(&path).map_err(Error::Read)?;
        debug!("read_db(path={:?}, size={})", path, blob.len());
        Ok(ReadDbResponse::Found { blob })
    }

    pub fn write(&self, request: WriteDbRequest<'_>) -> Result<WriteDbResponse, Error> {
        self.ensure_folder()?;
        let _guard = self.lock.write().map_err(|_| Error::LockPoisoned)?;
        let path = self.location.path();
        std::fs::write(&path, request.blob).map_err(Error::Write)?;
        let size = request.blob.len() as u64;
        debug!("write_db(path={:?}, size={})", path, size);
        Ok(WriteDbResponse { size })
    }
}
