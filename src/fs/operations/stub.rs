//! In-memory Drive backend for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{DriveBackend, InsertOptions};
use crate::error::{DriveError, Result};
use crate::fs::{DriveFile, FileList, FileMetadata, Labels, ParentReference, FOLDER_MIME_TYPE};

/// A remote call seen by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List(String),
    Get(String),
    Insert(FileMetadata, InsertOptions),
    Content(String),
}

#[derive(Debug, Default)]
struct StubState {
    /// Every record, in insertion order
    files: Vec<DriveFile>,
    contents: HashMap<String, Vec<u8>>,
    calls: Vec<Call>,
    next_id: usize,
    page_token: Option<String>,
}

/// Drive backend that keeps its tree in memory and records every call.
#[derive(Debug, Default)]
pub(crate) struct StubBackend {
    state: Mutex<StubState>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(self, parent_id: &str, title: &str, id: &str) -> Self {
        self.add(parent_id, title, id, Some(FOLDER_MIME_TYPE), false, None)
    }

    pub fn file(self, parent_id: &str, title: &str, id: &str, content: &[u8]) -> Self {
        self.add(parent_id, title, id, Some("text/plain"), false, Some(content))
    }

    pub fn trashed(self, parent_id: &str, title: &str, id: &str) -> Self {
        self.add(parent_id, title, id, Some("text/plain"), true, None)
    }

    /// Report a `nextPageToken` on every listing.
    pub fn paginated(self) -> Self {
        self.state.lock().unwrap().page_token = Some("page-2".to_string());
        self
    }

    fn add(
        self,
        parent_id: &str,
        title: &str,
        id: &str,
        mime_type: Option<&str>,
        trashed: bool,
        content: Option<&[u8]>,
    ) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.files.push(DriveFile {
                id: id.to_string(),
                title: title.to_string(),
                mime_type: mime_type.map(str::to_string),
                parents: vec![ParentReference::folder(parent_id)],
                file_size: content.map(|c| c.len().to_string()),
                labels: Labels { trashed },
            });
            if let Some(content) = content {
                state.contents.insert(id.to_string(), content.to_vec());
            }
        }
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Parents listed, in call order.
    pub fn listed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List(parent) => Some(parent),
                _ => None,
            })
            .collect()
    }

    pub fn content_of(&self, id: &str) -> Option<Vec<u8>> {
        self.state.lock().unwrap().contents.get(id).cloned()
    }
}

fn not_found(id: &str) -> DriveError {
    DriveError::ApiError {
        code: 404,
        reason: "notFound".to_string(),
        message: format!("File not found: {}", id),
    }
}

/// Pull the parent identifier back out of `'<id>' in parents and trashed=false`.
fn parent_from_query(query: &str) -> Option<String> {
    let quoted = query.strip_prefix('\'')?;
    let end = quoted.find("' in parents")?;
    Some(quoted[..end].replace("\\'", "'").replace("\\\\", "\\"))
}

#[async_trait]
impl DriveBackend for StubBackend {
    async fn list_files(&self, query: &str) -> Result<FileList> {
        let mut state = self.state.lock().unwrap();
        let parent = parent_from_query(query)
            .ok_or_else(|| DriveError::Custom(format!("unexpected query: {}", query)))?;
        state.calls.push(Call::List(parent.clone()));

        let items = state
            .files
            .iter()
            .filter(|f| f.parents.iter().any(|p| p.id == parent))
            .cloned()
            .collect();

        Ok(FileList {
            items,
            next_page_token: state.page_token.clone(),
        })
    }

    async fn get_file(&self, file_id: &str) -> Result<DriveFile> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Get(file_id.to_string()));
        state
            .files
            .iter()
            .find(|f| f.id == file_id)
            .cloned()
            .ok_or_else(|| not_found(file_id))
    }

    async fn insert_file(
        &self,
        metadata: &FileMetadata,
        content: Vec<u8>,
        options: InsertOptions,
    ) -> Result<DriveFile> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Insert(metadata.clone(), options));

        state.next_id += 1;
        let id = format!("uploaded-{}", state.next_id);
        let file = DriveFile {
            id: id.clone(),
            title: metadata.title.clone(),
            mime_type: Some("application/octet-stream".to_string()),
            parents: metadata.parents.clone(),
            file_size: Some(content.len().to_string()),
            labels: Labels::default(),
        };
        state.files.push(file.clone());
        state.contents.insert(id, content);
        Ok(file)
    }

    async fn get_content(&self, file_id: &str) -> Result<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Content(file_id.to_string()));
        state
            .contents
            .get(file_id)
            .cloned()
            .ok_or_else(|| not_found(file_id))
    }
}

#[test]
fn test_parent_from_query() {
    assert_eq!(
        parent_from_query("'root' in parents and trashed=false").as_deref(),
        Some("root")
    );
    assert_eq!(
        parent_from_query(r"'it\'s' in parents and trashed=false").as_deref(),
        Some("it's")
    );
    assert_eq!(parent_from_query("title = 'x'"), None);
}
