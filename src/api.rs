use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

/// Endpoint serving the folder/file tree when no other URL is configured
pub const DEFAULT_LISTING_URL: &str = "https://66cff61d181d059277dcc21e.mockapi.io/api/files/files";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[serde(alias = "Folder", alias = "FOLDER", alias = "directory", alias = "dir")]
    Folder,
    #[serde(alias = "File", alias = "FILE")]
    File,
}

impl EntryKind {
    pub fn is_folder(self) -> bool {
        self == EntryKind::Folder
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Folder => "Folder",
            EntryKind::File => "File",
        }
    }
}

/// A folder or file record exactly as the listing endpoint sends it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "type")]
    pub kind: Option<EntryKind>,
    // mockapi nests children under "data"
    #[serde(default, alias = "data", deserialize_with = "deserialize_null_default")]
    pub children: Vec<RemoteEntry>,
}

impl RemoteEntry {
    /// Resolve the entry kind, falling back to its position in the tree
    ///
    /// Top-level records and records carrying children are folders,
    /// everything else nested below a folder is a file.
    pub fn resolved_kind(&self, depth: usize) -> EntryKind {
        match self.kind {
            Some(kind) => kind,
            None if depth == 0 || !self.children.is_empty() => EntryKind::Folder,
            None => EntryKind::File,
        }
    }
}

/// Accept both `"id": "3"` and `"id": 3`
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Parse a listing body into its top-level entries
pub fn parse_listing(body: &str) -> Result<Vec<RemoteEntry>> {
    serde_json::from_str(body).context("Failed to parse listing response")
}

#[derive(Clone)]
pub struct ListingClient {
    url: String,
    client: Client,
}

impl ListingClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the whole folder/file tree
    pub async fn get_listing(&self) -> Result<Vec<RemoteEntry>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listing")?
            .error_for_status()
            .context("Listing endpoint returned an error status")?;

        let text = response.text().await.context("Failed to read response")?;
        parse_listing(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mockapi_shape() {
        let body = r#"[
            {"id": "1", "name": "Documents", "data": [
                {"id": "1", "name": "cv.pdf"},
                {"id": "2", "name": "notes.txt"}
            ]},
            {"id": "2", "name": "Pictures"}
        ]"#;

        let entries = parse_listing(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].children.len(), 2);
        assert_eq!(entries[0].children[1].name, "notes.txt");
        assert!(entries[1].children.is_empty());
    }

    #[test]
    fn test_parse_numeric_id_and_null_children() {
        let body = r#"[{"id": 7, "name": "Music", "children": null}]"#;
        let entries = parse_listing(body).unwrap();
        assert_eq!(entries[0].id, "7");
        assert!(entries[0].children.is_empty());
    }

    #[test]
    fn test_parse_explicit_kind() {
        let body = r#"[{"id": "1", "name": "readme.md", "type": "file"}]"#;
        let entries = parse_listing(body).unwrap();
        assert_eq!(entries[0].kind, Some(EntryKind::File));
        assert_eq!(entries[0].resolved_kind(0), EntryKind::File);
    }

    #[test]
    fn test_resolved_kind_by_position() {
        let body = r#"[{"id": "1", "name": "Work", "data": [
            {"id": "1", "name": "a.txt"},
            {"id": "2", "name": "Sub", "data": [{"id": "1", "name": "b.txt"}]}
        ]}]"#;
        let entries = parse_listing(body).unwrap();
        assert_eq!(entries[0].resolved_kind(0), EntryKind::Folder);
        assert_eq!(entries[0].children[0].resolved_kind(1), EntryKind::File);
        assert_eq!(entries[0].children[1].resolved_kind(1), EntryKind::Folder);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_listing(r#"{"error": "not found"}"#).is_err());
    }
}
