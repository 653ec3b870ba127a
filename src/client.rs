//! Represents a client abstraction for the Marvel Comics API.

mod transport;

pub use transport::{HttpTransport, Transport};

use std::time::Duration;
use tracing::instrument;

use crate::{
    Character, Comic, Creator, Event, Series, Story,
    errors::{ClientError, Error},
    list::{CharacterList, ComicList, CreatorList, EventList, List, SeriesList, StoryList},
    normalize::{Payload, Schema},
    stdx::http::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT},
};

/// A builder for configuring and creating instances of [`Client`] with custom settings.
///
/// The `ClientBuilder` provides an API for fine-tuning the HTTP transport a `Client` uses:
/// where requests go, how they identify themselves, and which query parameters are sent along
/// with every request.
///
/// Request signing is not done by this crate. The Marvel API expects `ts`, `apikey` and `hash`
/// query parameters; these are passed with [`param()`](ClientBuilder::param()).
///
/// # Example
///
/// ```
/// # use marvel_data::ClientBuilder;
/// let client = ClientBuilder::new()
///     .user_agent("custom-agent/1.0")
///     .param("apikey", "1234")
///     .build()?;
/// # Ok::<(), marvel_data::errors::ClientError>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    builder: reqwest::blocking::ClientBuilder,
    base_url: String,
    params: Vec<(String, String)>,
}

impl Default for ClientBuilder {
    #[must_use]
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    ///
    /// This includes a default user agent (`marvel-data/VERSION`) and the public API base URL,
    /// `https://gateway.marvel.com/v1/public/`.
    #[must_use]
    pub fn new() -> Self {
        let builder = reqwest::blocking::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .use_rustls_tls();

        Self {
            builder,
            base_url: DEFAULT_BASE_URL.to_owned(),
            params: Vec::new(),
        }
    }

    /// Sets a custom `User-Agent` header for the [`Client`].
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        Self {
            builder: self.builder.user_agent(user_agent),
            ..self
        }
    }

    /// Sets the URL resource paths like `events/336` are resolved against.
    ///
    /// A trailing `/` is added if missing, so that the last segment isn't replaced on join.
    #[must_use]
    pub fn base_url(self, base_url: &str) -> Self {
        let mut base_url = base_url.to_owned();

        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self { base_url, ..self }
    }

    /// Sets a timeout for the whole of each request, from connecting until the body has been read.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            builder: self.builder.timeout(timeout),
            ..self
        }
    }

    /// Adds a query parameter sent with every request, e.g. the `apikey`.
    #[must_use]
    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Consumes the `ClientBuilder` and returns a fully-configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the base URL doesn't parse, or if the underlying HTTP client
    /// could not be built, such as when TLS initialization fails.
    pub fn build(self) -> Result<Client, ClientError> {
        let base_url = url::Url::parse(&self.base_url)?;
        let http = self.builder.build()?;

        Ok(Client {
            transport: HttpTransport::new(http, base_url, self.params),
        })
    }
}

/// A high-level, blocking client for the Marvel Comics API.
///
/// Every method does a single request through its [`Transport`], normalizes the JSON it gets back
/// and builds the matching entity, or [`List`] of entities.
///
/// # Configuration
///
/// [`Client::new()`] talks to the public API over HTTP with default settings. Use
/// [`Client::builder()`] to customize that, or [`Client::with_transport()`] to fetch JSON some
/// other way altogether.
///
/// # Example
///
/// ```no_run
/// # use marvel_data::{Client, errors::Error};
/// let client = Client::builder()
///     .param("ts", "1")
///     .param("apikey", "<public key>")
///     .param("hash", "<hash>")
///     .build()?;
///
/// let event = client.event(336)?;
/// assert_eq!("Secret Empire", event.title);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

// Creation impls
impl Client {
    /// Instantiates a new [`Client`] with the default settings.
    ///
    /// No query parameters are configured, so the API will refuse requests until credentials are
    /// added through [`Client::builder()`].
    ///
    /// # Panics
    ///
    /// This function will panic if the TLS backend cannot be initialized. For a safer alternative
    /// that returns a `Result` instead of panicking, use the [`ClientBuilder`].
    #[must_use]
    pub fn new() -> Self {
        ClientBuilder::new().build().expect("Client::new()")
    }

    /// Returns a [`ClientBuilder`] for creating a custom-configured `Client`.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a `Client` that fetches JSON through the given `transport`.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the transport requests go through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

// Public facing impls
impl<T: Transport> Client<T> {
    /// Fetches the [`Series`] with the given `id`.
    ///
    /// # Errors
    ///
    /// - [`ClientError`] if the request itself fails
    /// - [`ApiError`](crate::errors::ApiError) if the API answers with an error code, e.g. for an unknown `id`, or
    ///   the series fails to load
    #[instrument(name = "fetching series", skip(self))]
    pub fn series(&self, id: i64) -> Result<Series, Error> {
        self.entity(&format!("series/{id}"))
    }

    /// Fetches a page of [`Series`], filtered and ordered by `params`, e.g. `[("titleStartsWith", "Dead")]`.
    #[instrument(name = "listing series", skip(self))]
    pub fn series_list(&self, params: &[(&str, &str)]) -> Result<SeriesList, Error> {
        self.list("series", params)
    }

    /// Fetches the [`Creator`] with the given `id`.
    ///
    /// The returned creator keeps the full response in [`Creator::response`].
    #[instrument(name = "fetching creator", skip(self))]
    pub fn creator(&self, id: i64) -> Result<Creator, Error> {
        self.entity(&format!("creators/{id}"))
    }

    /// Fetches a page of [`Creator`]s, filtered and ordered by `params`.
    #[instrument(name = "listing creators", skip(self))]
    pub fn creators_list(&self, params: &[(&str, &str)]) -> Result<CreatorList, Error> {
        self.list("creators", params)
    }

    /// Fetches the [`Event`] with the given `id`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use marvel_data::{Client, errors::Error};
    /// # let client = Client::new();
    /// let event = client.event(336)?;
    ///
    /// assert_eq!("Secret Empire", event.title);
    /// assert_eq!(Some(322), event.next.map(|next| next.id));
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(name = "fetching event", skip(self))]
    pub fn event(&self, id: i64) -> Result<Event, Error> {
        self.entity(&format!("events/{id}"))
    }

    /// Fetches a page of [`Event`]s, filtered and ordered by `params`, e.g. `[("orderBy", "modified")]`.
    #[instrument(name = "listing events", skip(self))]
    pub fn events_list(&self, params: &[(&str, &str)]) -> Result<EventList, Error> {
        self.list("events", params)
    }

    /// Fetches the [`Character`] with the given `id`.
    #[instrument(name = "fetching character", skip(self))]
    pub fn character(&self, id: i64) -> Result<Character, Error> {
        self.entity(&format!("characters/{id}"))
    }

    /// Fetches a page of [`Character`]s, filtered and ordered by `params`.
    #[instrument(name = "listing characters", skip(self))]
    pub fn characters_list(&self, params: &[(&str, &str)]) -> Result<CharacterList, Error> {
        self.list("characters", params)
    }

    /// Fetches the [`Comic`] with the given `id`.
    #[instrument(name = "fetching comic", skip(self))]
    pub fn comic(&self, id: i64) -> Result<Comic, Error> {
        self.entity(&format!("comics/{id}"))
    }

    /// Fetches a page of [`Comic`]s, filtered and ordered by `params`.
    #[instrument(name = "listing comics", skip(self))]
    pub fn comics_list(&self, params: &[(&str, &str)]) -> Result<ComicList, Error> {
        self.list("comics", params)
    }

    /// Fetches the [`Story`] with the given `id`.
    #[instrument(name = "fetching story", skip(self))]
    pub fn story(&self, id: i64) -> Result<Story, Error> {
        self.entity(&format!("stories/{id}"))
    }

    /// Fetches a page of [`Story`]s, filtered and ordered by `params`.
    #[instrument(name = "listing stories", skip(self))]
    pub fn stories_list(&self, params: &[(&str, &str)]) -> Result<StoryList, Error> {
        self.list("stories", params)
    }
}

// Internal only impls
impl<T: Transport> Client<T> {
    fn entity<E: Schema>(&self, path: &str) -> Result<E, Error> {
        let response = self.transport.fetch(path, &[])?;
        Ok(E::load(Payload::Envelope(response))?)
    }

    fn list<E: Schema>(&self, path: &str, params: &[(&str, &str)]) -> Result<List<E>, Error> {
        let response = self.transport.fetch(path, params)?;
        let list = List::load(response)?;

        tracing::debug!(count = list.len(), total = list.total(), "loaded page");

        Ok(list)
    }
}
