mod auth;
pub mod issues;
pub mod labels;

pub use auth::Token;
use log::debug;
use reqwest::{
    blocking::{Client as HttpClient, RequestBuilder},
    header::{self, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const GITHUB_BASE: &str = "https://api.github.com/";

/// Number of items requested per page from list endpoints
pub const PAGE_SIZE: usize = 100;

/// A client for the issues and labels of a single GitHub repository
pub struct Client {
    repository: String,
    token: Token,
    http: HttpClient,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("io error: {}", .0)]
    IOError(#[from] std::io::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),

    #[error("repository should look like owner/name, got {:?}", .0)]
    BadRepository(String),
}

impl Client {
    /// Create a client for `repository`, given as `owner/name`
    pub fn new(token: Token, repository: &str) -> Result<Self> {
        if !is_repository_name(repository) {
            return Err(Error::BadRepository(repository.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = HttpClient::builder()
            .user_agent(concat!("fmcourses/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Client {
            repository: repository.to_string(),
            token,
            http,
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}repos/{}/{}", GITHUB_BASE, self.repository, path)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(self.token.as_ref())
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let resp = self
            .authed(self.http.get(self.repo_url(path)))
            .query(query)
            .send()?
            .error_for_status()?;

        if log::log_enabled!(log::Level::Debug) {
            let s = resp.text()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.json()?)
        }
    }

    /// Fetch every page of a list endpoint
    pub(crate) fn get_all<T: for<'a> Deserialize<'a>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let mut out = Vec::new();
        for page in 1.. {
            let mut q = query.to_vec();
            q.push(("per_page", PAGE_SIZE.to_string()));
            q.push(("page", page.to_string()));

            let items: Vec<T> = self.get(path, &q)?;
            let len = items.len();
            debug!("{}: page {} had {} items", path, page, len);
            out.extend(items);

            if len < PAGE_SIZE {
                break;
            }
        }

        Ok(out)
    }
}

fn is_repository_name(s: &str) -> bool {
    match s.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_names() {
        assert!(is_repository_name("fme-teaching/fm-courses"));
        assert!(!is_repository_name("fm-courses"));
        assert!(!is_repository_name("/fm-courses"));
        assert!(!is_repository_name("a/b/c"));
    }

    #[test]
    fn test_rejects_bad_repository() {
        let res = Client::new(Token::from("x".to_string()), "nope");
        assert!(matches!(res, Err(Error::BadRepository(_))));
    }
}
