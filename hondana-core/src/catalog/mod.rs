//! Remote catalog client
//!
//! Wraps the Rakuten Books search endpoint: one parameterized GET, with
//! three call shapes layered on it (raw search, single book by ISBN, cover
//! URL by ISBN). Every call re-queries the service; there is no retry and
//! no caching. A response with zero matches is a successful empty result.

mod series;

pub use series::derive_series_name;

use crate::error::MetadataError;
use crate::types::{compact_sales_date, BookDraft, LendingStatus};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Rakuten Books search endpoint
pub const DEFAULT_BASE_URL: &str =
    "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Caller-supplied search parameters: an exact ISBN or a free-text keyword,
/// plus optional pagination
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    isbn: Option<String>,
    keyword: Option<String>,
    page: Option<u32>,
}

impl SearchQuery {
    /// Exact-match lookup by ISBN
    pub fn by_isbn(isbn: impl Into<String>) -> Self {
        Self {
            isbn: Some(isbn.into()),
            ..Self::default()
        }
    }

    /// Free-text title search
    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    /// Request a specific result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// A raw catalog item projected into the local shape, before series-name
/// derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalBookResult {
    pub title: String,
    pub title_kana: String,
    pub author: String,
    pub cover_url: String,
    pub isbn: String,
    pub sales_date: String,
}

impl ExternalBookResult {
    /// Derive the series name from the title, producing a [`CatalogBook`]
    pub fn into_catalog_book(self) -> CatalogBook {
        CatalogBook {
            series_name: derive_series_name(&self.title),
            title: self.title,
            title_kana: self.title_kana,
            author: self.author,
            cover_url: self.cover_url,
            isbn: self.isbn,
            sales_date: self.sales_date,
        }
    }
}

/// A catalog match with its derived series name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBook {
    pub title: String,
    pub title_kana: String,
    pub author: String,
    pub cover_url: String,
    pub isbn: String,
    pub sales_date: String,
    pub series_name: String,
}

impl From<CatalogBook> for BookDraft {
    /// Stage a catalog match for commit: the single author becomes a
    /// one-element list and the sales date is compacted to the stored form.
    fn from(book: CatalogBook) -> Self {
        BookDraft {
            title: book.title,
            authors: if book.author.is_empty() {
                Vec::new()
            } else {
                vec![book.author]
            },
            release_date: compact_sales_date(&book.sales_date),
            cover_url: (!book.cover_url.is_empty()).then_some(book.cover_url),
            lending: LendingStatus::None,
            isbn: (!book.isbn.is_empty()).then_some(book.isbn),
            series_name: (!book.series_name.is_empty()).then_some(book.series_name),
        }
    }
}

/// One page of search results with the total match count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub books: Vec<CatalogBook>,
    pub total_count: u32,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    count: u32,
    #[serde(rename = "Items", default)]
    items: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "Item")]
    item: RawItem,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(rename = "titleKana", default)]
    title_kana: String,
    #[serde(default)]
    author: String,
    #[serde(rename = "largeImageUrl", default)]
    large_image_url: String,
    #[serde(default)]
    isbn: String,
    #[serde(rename = "salesDate", default)]
    sales_date: String,
}

impl RawItem {
    fn project(self) -> ExternalBookResult {
        ExternalBookResult {
            title: self.title,
            title_kana: self.title_kana,
            author: self.author,
            cover_url: self.large_image_url,
            isbn: self.isbn,
            sales_date: self.sales_date,
        }
    }
}

fn page_from_raw(raw: RawResponse) -> SearchPage {
    SearchPage {
        books: raw
            .items
            .into_iter()
            .map(|entry| entry.item.project().into_catalog_book())
            .collect(),
        total_count: raw.count,
    }
}

/// Seam for the cover-lookup workflow, so tests can substitute the remote
/// catalog
#[async_trait]
pub trait CoverSource: Send + Sync {
    /// Cover image URL for an ISBN, or `None` when the catalog has no image
    async fn cover_by_isbn(&self, isbn: &str) -> Result<Option<String>, MetadataError>;
}

/// Client for the Rakuten Books search API
pub struct RakutenClient {
    http: reqwest::Client,
    app_id: String,
    base_url: String,
}

impl RakutenClient {
    /// Create a client with the given application credential
    pub fn new(app_id: impl Into<String>) -> Result<Self, MetadataError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run a search, returning one page of matches and the total count
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage, MetadataError> {
        let mut params: Vec<(&str, String)> = vec![
            ("format", "json".to_string()),
            ("applicationId", self.app_id.clone()),
            ("outOfStockFlag", "1".to_string()),
        ];
        if let Some(isbn) = &query.isbn {
            params.push(("isbn", isbn.clone()));
        }
        if let Some(keyword) = &query.keyword {
            params.push(("title", keyword.clone()));
        }
        if let Some(page) = query.page {
            params.push(("page", page.to_string()));
        }

        let response = self.http.get(&self.base_url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status().as_u16()));
        }

        let raw: RawResponse = response.json().await?;
        Ok(page_from_raw(raw))
    }

    /// The first match for an ISBN, or `None` when the catalog has no entry
    pub async fn find_by_isbn(&self, isbn: &str) -> Result<Option<CatalogBook>, MetadataError> {
        let page = self.search(&SearchQuery::by_isbn(isbn)).await?;
        Ok(page.books.into_iter().next())
    }
}

#[async_trait]
impl CoverSource for RakutenClient {
    async fn cover_by_isbn(&self, isbn: &str) -> Result<Option<String>, MetadataError> {
        let page = self.search(&SearchQuery::by_isbn(isbn)).await?;
        Ok(page
            .books
            .into_iter()
            .next()
            .map(|book| book.cover_url)
            .filter(|url| !url.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "count": 2,
        "page": 1,
        "Items": [
            {
                "Item": {
                    "title": "サンプル 第3巻",
                    "titleKana": "サンプル ダイサンカン",
                    "author": "著者A",
                    "largeImageUrl": "https://example.com/3.jpg",
                    "isbn": "9784000000001",
                    "salesDate": "2024年03月05日"
                }
            },
            {
                "Item": {
                    "title": "単発の本",
                    "titleKana": "タンパツノホン",
                    "author": "著者B",
                    "largeImageUrl": "",
                    "isbn": "9784000000002",
                    "salesDate": "2023年11月"
                }
            }
        ]
    }"#;

    fn sample_page() -> SearchPage {
        let raw: RawResponse = serde_json::from_str(SAMPLE_BODY).unwrap();
        page_from_raw(raw)
    }

    #[test]
    fn test_response_mapping() {
        let page = sample_page();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.books.len(), 2);

        let first = &page.books[0];
        assert_eq!(first.title, "サンプル 第3巻");
        assert_eq!(first.series_name, "サンプル");
        assert_eq!(first.cover_url, "https://example.com/3.jpg");
        assert_eq!(first.isbn, "9784000000001");
    }

    #[test]
    fn test_zero_matches_is_empty_page() {
        let raw: RawResponse = serde_json::from_str(r#"{"count": 0, "page": 1, "Items": []}"#).unwrap();
        let page = page_from_raw(raw);
        assert_eq!(page.total_count, 0);
        assert!(page.books.is_empty());
    }

    #[test]
    fn test_catalog_book_stages_as_draft() {
        let page = sample_page();
        let draft: BookDraft = page.books[0].clone().into();

        assert_eq!(draft.title, "サンプル 第3巻");
        assert_eq!(draft.authors, vec!["著者A"]);
        assert_eq!(draft.release_date.as_deref(), Some("20240305"));
        assert_eq!(draft.series_name.as_deref(), Some("サンプル"));
        assert_eq!(draft.isbn.as_deref(), Some("9784000000001"));

        // An empty image URL stays absent rather than becoming Some("")
        let bare: BookDraft = page.books[1].clone().into();
        assert_eq!(bare.cover_url, None);
        assert_eq!(bare.release_date.as_deref(), Some("202311"));
    }
}
