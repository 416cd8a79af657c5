//! In-memory storage used in place of a real bucket.

use async_trait::async_trait;
use s3upload_storage::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// How the fake answers `put_object`.
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    Succeed,
    Timeout,
    Fail,
    Panic,
}

/// Records every put and keeps the last body written under each key.
pub struct RecordingStorage {
    behavior: Behavior,
    calls: AtomicUsize,
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl RecordingStorage {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => {
                self.objects
                    .lock()
                    .unwrap()
                    .insert((bucket.to_string(), key.to_string()), data);
                Ok(())
            }
            Behavior::Timeout => Err(StorageError::Canceled(
                "dispatch failure: timeout: connect timed out".to_string(),
            )),
            Behavior::Fail => Err(StorageError::UploadFailed(
                "dispatch failure: io error: Connection refused (os error 111)".to_string(),
            )),
            Behavior::Panic => panic!("storage backend panicked"),
        }
    }
}
