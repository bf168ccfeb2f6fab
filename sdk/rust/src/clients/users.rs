//! Users resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{
    Event, Repository, SocialAccount, User, UserOverview, UserSearchResults, UserSummary,
};

/// Page size for user listings (followers, following, repos, starred).
const PAGE_SIZE: &str = "100";
/// Page size for the public events feed.
const EVENTS_PAGE_SIZE: &str = "30";
/// Page size for user search.
const SEARCH_PAGE_SIZE: &str = "30";
/// Sort key sent for a user's repositories when the caller picks none.
const DEFAULT_REPO_SORT: &str = "stars";

/// Client for user-related operations.
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    /// Create a new users client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is rejected or the request fails.
    pub async fn authenticated(&self) -> Result<User, Error> {
        self.transport
            .request(Method::GET, "/user", None, None::<&()>)
            .await
    }

    /// Fetch a user by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the request fails.
    pub async fn get(&self, username: &str) -> Result<User, Error> {
        self.transport
            .request(Method::GET, &format!("/users/{username}"), None, None::<&()>)
            .await
    }

    /// Fetch a user's linked social accounts (strict call).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The endpoint is unavailable
    /// for some accounts and plans; callers wanting graceful degradation
    /// use [`UsersClient::social_accounts_or_empty`] instead.
    pub async fn social_accounts(&self, username: &str) -> Result<Vec<SocialAccount>, Error> {
        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/social_accounts"),
                None,
                None::<&()>,
            )
            .await
    }

    /// Fetch a user's linked social accounts, tolerating failure.
    ///
    /// The tolerant counterpart of [`UsersClient::social_accounts`]: any
    /// failure yields an empty list instead of an error, because the
    /// endpoint is a known-optional capability.
    pub async fn social_accounts_or_empty(&self, username: &str) -> Vec<SocialAccount> {
        self.social_accounts(username).await.unwrap_or_default()
    }

    /// Fetch a user's repositories, one page of up to 100.
    ///
    /// # Arguments
    ///
    /// * `username` - The user's login name
    /// * `sort` - Sort key, passed through to the API unvalidated
    ///   (default: "stars")
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn repos(
        &self,
        username: &str,
        sort: Option<&str>,
    ) -> Result<Vec<Repository>, Error> {
        let params = [
            ("sort", sort.unwrap_or(DEFAULT_REPO_SORT)),
            ("per_page", PAGE_SIZE),
        ];

        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/repos"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Fetch the repositories a user has starred, one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn starred(&self, username: &str) -> Result<Vec<Repository>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/starred"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Fetch a user's public events, most-recent page only (up to 30).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn events(&self, username: &str) -> Result<Vec<Event>, Error> {
        let params = [("per_page", EVENTS_PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/events/public"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Fetch a user's followers, one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn followers(&self, username: &str) -> Result<Vec<UserSummary>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/followers"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Fetch the users a user follows, one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn following(&self, username: &str) -> Result<Vec<UserSummary>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/users/{username}/following"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Search users with GitHub's free-text search syntax.
    ///
    /// The query string is passed through unparsed and unvalidated; one
    /// page of up to 30 results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn search(&self, query: &str) -> Result<UserSearchResults, Error> {
        let params = [("q", query), ("per_page", SEARCH_PAGE_SIZE)];

        self.transport
            .request(Method::GET, "/search/users", Some(&params), None::<&()>)
            .await
    }

    /// Assemble the aggregate detail view of a user.
    ///
    /// Fetches profile, repositories, starred repositories, events,
    /// followers and following concurrently, then the social accounts via
    /// the tolerant call. Fails if any of the strict fetches fails; a
    /// social accounts failure alone degrades to an empty list.
    ///
    /// # Errors
    ///
    /// Returns the first error of any strict fetch.
    pub async fn overview(&self, username: &str) -> Result<UserOverview, Error> {
        let (user, repos, starred, events, followers, following) = tokio::try_join!(
            self.get(username),
            self.repos(username, None),
            self.starred(username),
            self.events(username),
            self.followers(username),
            self.following(username),
        )?;

        let social_accounts = self.social_accounts_or_empty(username).await;

        Ok(UserOverview {
            user,
            repos,
            starred,
            events,
            followers,
            following,
            social_accounts,
        })
    }
}
