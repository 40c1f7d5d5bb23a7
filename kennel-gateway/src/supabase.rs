//! `DogStore` over a Supabase project's PostgREST endpoint

use async_trait::async_trait;
use config::StoreCredentials;
use kennel_core::{
    DogId, DogPatch, DogQuery, DogRecord, DogStore, KennelError, NewDog, Result, SortOrder,
};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::client::Client;

pub const TABLE: &str = "dogs";

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const COUNT_EXACT: &str = "count=exact";

pub struct SupabaseStore {
    client: Client,
    table_url: String,
}

impl SupabaseStore {
    pub fn new(credentials: &StoreCredentials) -> Result<Self> {
        let invalid_key = |_| KennelError::Configuration("Supabase key is not a valid header value".into());

        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&credentials.anon_key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", credentials.anon_key)).map_err(invalid_key)?,
        );
        let client = Client::with_headers(headers)
            .map_err(|e| KennelError::Configuration(format!("{:#}", e)))?;

        info!(url = %credentials.url, "Connecting to record store");
        Ok(SupabaseStore {
            client,
            table_url: format!("{}/rest/v1/{}", credentials.url.trim_end_matches('/'), TABLE),
        })
    }

    fn eq_id(id: &DogId) -> (&'static str, String) {
        ("id", format!("eq.{}", id))
    }

    fn query_params(query: &DogQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];
        if let Some(id) = &query.id {
            params.push(Self::eq_id(id));
        }
        if let Some(status) = query.status {
            params.push(("status", format!("eq.{}", status)));
        }
        match query.order {
            SortOrder::Unordered => {}
            SortOrder::NewestFirst => params.push(("order", "created_at.desc".to_string())),
            SortOrder::OldestFirst => params.push(("order", "created_at.asc".to_string())),
        }
        params
    }

    /// Rows touched by a write; an empty result means the id matched nothing
    fn expect_rows(id: &DogId, rows: Vec<DogRecord>) -> Result<()> {
        if rows.is_empty() {
            return Err(KennelError::not_found(id));
        }
        Ok(())
    }
}

fn store_error(err: anyhow::Error) -> KennelError {
    KennelError::Store(format!("{:#}", err))
}

/// `Content-Range: 0-24/25` or `*/0`
fn parse_total(headers: &HeaderMap) -> Option<usize> {
    let range = headers.get(CONTENT_RANGE)?.to_str().ok()?;
    range.rsplit_once('/')?.1.trim().parse().ok()
}

#[async_trait]
impl DogStore for SupabaseStore {
    async fn list(&self, query: &DogQuery) -> Result<Vec<DogRecord>> {
        let request = self
            .client
            .request(Method::GET, &self.table_url)
            .query(&Self::query_params(query));
        self.client.send(request).await.map_err(store_error)
    }

    async fn get(&self, id: &DogId) -> Result<Option<DogRecord>> {
        let rows = self.list(&DogQuery::all().with_id(id.clone())).await?;
        Ok(rows.into_iter().next())
    }

    async fn count(&self) -> Result<usize> {
        let request = self
            .client
            .request(Method::HEAD, &self.table_url)
            .query(&[("select", "id")])
            .header(PREFER, COUNT_EXACT);
        let headers = self.client.send_for_headers(request).await.map_err(store_error)?;
        parse_total(&headers).ok_or_else(|| KennelError::store("Store did not report a row count"))
    }

    async fn insert(&self, dogs: Vec<NewDog>) -> Result<Vec<DogRecord>> {
        if dogs.is_empty() {
            return Ok(Vec::new());
        }
        let request = self
            .client
            .request(Method::POST, &self.table_url)
            .query(&[("select", "*")])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(&dogs);
        let inserted: Vec<DogRecord> = self.client.send(request).await.map_err(store_error)?;
        debug!(count = inserted.len(), "inserted dogs");
        Ok(inserted)
    }

    async fn update_by_id(&self, id: &DogId, patch: &DogPatch) -> Result<()> {
        let request = self
            .client
            .request(Method::PATCH, &self.table_url)
            .query(&[Self::eq_id(id)])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(patch);
        let rows = self.client.send(request).await.map_err(store_error)?;
        Self::expect_rows(id, rows)
    }

    async fn delete_by_id(&self, id: &DogId) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &self.table_url)
            .query(&[Self::eq_id(id)])
            .header(PREFER, RETURN_REPRESENTATION);
        let rows = self.client.send(request).await.map_err(store_error)?;
        Self::expect_rows(id, rows)
    }
}
