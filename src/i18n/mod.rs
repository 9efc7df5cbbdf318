// SPDX-License-Identifier: MPL-2.0
//! Localized string dictionaries with a persistent cache.
//!
//! [`LocalizedStrings`] keeps one [`StringDictionary`] per language code in
//! memory. [`LocalizedStrings::load`] fills it, either from the persistent
//! cache or from the network. [`LocalizedStrings::string`] reads it
//! synchronously.
//!
//! # Cache freshness
//!
//! The cache stores a single last-refresh timestamp shared by every
//! language. A successful network fetch of any language refreshes it, so a
//! language cached long ago can be served as fresh after a different
//! language was fetched. This matches the stored data format and is kept
//! as-is.
//!
//! # Concurrency
//!
//! `load` takes `&self`. Concurrent loads are not coalesced: two loads of the
//! same language may both hit the network, and whichever finishes last wins
//! in memory and in the store.
//!
//! # Example
//!
//! ```no_run
//! use localized_strings::config::Config;
//! use localized_strings::i18n::LocalizedStrings;
//!
//! # async fn run() -> localized_strings::error::Result<()> {
//! let strings = LocalizedStrings::open_default(&Config::default())?;
//! strings.load("ja", "https://example.com/locale/ja.json").await?;
//! println!("{}", strings.string("ja", "greeting", "Hello"));
//! # Ok(())
//! # }
//! ```

pub mod cache;

use crate::application::port::{Clock, Fetcher, KeyValueStore};
use crate::config::{CacheConfig, Config, DEFAULT_KEY_PREFIX};
use crate::domain::{ExpiryWindow, FreshnessPolicy, StringDictionary};
use crate::error::{Error, Result};
use crate::infrastructure::{FileStore, HttpFetcher, MemoryStore, SystemClock};
use cache::PersistentCache;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Per-language string dictionaries backed by a persistent cache.
pub struct LocalizedStrings<F = HttpFetcher> {
    strings: RwLock<HashMap<String, StringDictionary>>,
    cache: PersistentCache,
    fetcher: F,
    clock: Arc<dyn Clock>,
    expiry: ExpiryWindow,
    freshness: FreshnessPolicy,
}

impl LocalizedStrings<HttpFetcher> {
    /// Creates a store using HTTP and the given persistent store.
    ///
    /// # Errors
    ///
    /// Fails if the `[http]` section is invalid, see [`HttpFetcher::new`].
    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Ok(Builder::new(fetcher)
            .store(store)
            .cache_config(&config.cache)
            .build())
    }

    /// Creates a store using HTTP and the on-disk cache in the data directory.
    ///
    /// Falls back to an in-memory cache if no data directory can be
    /// determined.
    ///
    /// # Errors
    ///
    /// Fails if the `[http]` section is invalid, see [`HttpFetcher::new`].
    pub fn open_default(config: &Config) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match FileStore::open_default() {
            Some(store) => Arc::new(store),
            None => {
                tracing::warn!("no data directory available, cache will not persist");
                Arc::new(MemoryStore::new())
            }
        };
        Self::from_config(config, store)
    }
}

impl<F: Fetcher> LocalizedStrings<F> {
    /// Starts building a store around `fetcher`.
    pub fn builder(fetcher: F) -> Builder<F> {
        Builder::new(fetcher)
    }

    /// Loads the dictionary for `lang`, from the persistent cache when it is
    /// fresh and holds an entry, otherwise from `url`.
    ///
    /// On a network load the dictionary is written back to the cache and the
    /// global refresh timestamp is set to now. Failing to write the cache
    /// does not fail the load.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request produced no response
    /// - [`Error::Http`] for any status other than 200
    /// - [`Error::InvalidDocument`] if the body is `null` or not JSON
    pub async fn load(&self, lang: &str, url: &str) -> Result<()> {
        let now = self.clock.now();
        if self
            .freshness
            .is_fresh(self.expiry, self.cache.last_refresh(), now)
        {
            if let Some(dictionary) = self.cache.read_entry(lang) {
                tracing::debug!(lang, "serving strings from persistent cache");
                self.insert(lang, dictionary);
                return Ok(());
            }
        }

        tracing::debug!(lang, url, "fetching strings");
        let response = self
            .fetcher
            .get(url)
            .await
            .map_err(|err| Error::Transport {
                status: err.status,
                status_text: err.message,
            })?;

        if response.status != 200 {
            return Err(Error::http(response.status, &response.status_text));
        }

        let dictionary = StringDictionary::parse_document(&response.body).map_err(|err| {
            tracing::debug!(url, error = %err, "rejected localization document");
            Error::InvalidDocument {
                url: url.to_string(),
            }
        })?;

        self.persist(lang, &dictionary);
        self.insert(lang, dictionary);
        Ok(())
    }

    /// Loads several languages concurrently.
    ///
    /// Languages that load before a failure stay loaded.
    ///
    /// # Errors
    ///
    /// Returns the first error any of the loads produced.
    pub async fn load_all<L, U>(&self, requests: &[(L, U)]) -> Result<()>
    where
        L: AsRef<str>,
        U: AsRef<str>,
    {
        futures_util::future::try_join_all(
            requests
                .iter()
                .map(|(lang, url)| self.load(lang.as_ref(), url.as_ref())),
        )
        .await
        .map(|_| ())
    }

    /// Returns the fetcher this store was built with.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn persist(&self, lang: &str, dictionary: &StringDictionary) {
        let result = self
            .cache
            .write_entry(lang, dictionary)
            .and_then(|()| self.cache.mark_refreshed(self.clock.now()));
        if let Err(err) = result {
            tracing::warn!(lang, error = %err, "failed to update persistent string cache");
        }
    }
}

impl<F> LocalizedStrings<F> {
    /// Returns the string for `key` in `lang`, or `default` if the language
    /// is not loaded or has no such key.
    #[must_use]
    pub fn string(&self, lang: &str, key: &str, default: &str) -> String {
        self.lookup(lang, key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Like [`string`](Self::string) with the key itself as the default.
    #[must_use]
    pub fn string_or_key(&self, lang: &str, key: &str) -> String {
        self.string(lang, key, key)
    }

    /// Returns the string for `key` in `lang`, if loaded.
    #[must_use]
    pub fn lookup(&self, lang: &str, key: &str) -> Option<String> {
        self.read_strings()
            .get(lang)
            .and_then(|dictionary| dictionary.get(key))
            .map(str::to_string)
    }

    /// Returns whether a dictionary for `lang` is in memory.
    #[must_use]
    pub fn is_loaded(&self, lang: &str) -> bool {
        self.read_strings().contains_key(lang)
    }

    /// Returns the loaded language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.read_strings().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Returns a copy of the dictionary loaded for `lang`.
    #[must_use]
    pub fn dictionary(&self, lang: &str) -> Option<StringDictionary> {
        self.read_strings().get(lang).cloned()
    }

    #[must_use]
    pub fn expiry(&self) -> ExpiryWindow {
        self.expiry
    }

    #[must_use]
    pub fn freshness(&self) -> FreshnessPolicy {
        self.freshness
    }

    #[must_use]
    pub fn cache(&self) -> &PersistentCache {
        &self.cache
    }

    fn insert(&self, lang: &str, dictionary: StringDictionary) {
        self.strings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(lang.to_string(), dictionary);
    }

    // Writers only ever insert whole dictionaries, so a poisoned map is still consistent
    fn read_strings(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, StringDictionary>> {
        self.strings.read().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`LocalizedStrings`].
///
/// Defaults: in-memory store, system clock, 3-day expiry, prefix
/// `"LocalizedStringsKey."`, compatible freshness.
pub struct Builder<F> {
    fetcher: F,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    expiry: ExpiryWindow,
    key_prefix: String,
    freshness: FreshnessPolicy,
}

impl<F: Fetcher> Builder<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            store: Arc::new(MemoryStore::new()),
            clock: Arc::new(SystemClock),
            expiry: ExpiryWindow::default(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            freshness: FreshnessPolicy::default(),
        }
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn expiry(mut self, expiry: ExpiryWindow) -> Self {
        self.expiry = expiry;
        self
    }

    #[must_use]
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn freshness(mut self, freshness: FreshnessPolicy) -> Self {
        self.freshness = freshness;
        self
    }

    /// Applies expiry, key prefix and freshness from a `[cache]` section.
    #[must_use]
    pub fn cache_config(self, cache: &CacheConfig) -> Self {
        self.expiry(cache.expiry_window())
            .key_prefix(cache.key_prefix())
            .freshness(cache.freshness)
    }

    pub fn build(self) -> LocalizedStrings<F> {
        LocalizedStrings {
            strings: RwLock::new(HashMap::new()),
            cache: PersistentCache::new(self.store, self.key_prefix),
            fetcher: self.fetcher,
            clock: self.clock,
            expiry: self.expiry,
            freshness: self.freshness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchError;
    use crate::test_utils::{test_now, ManualClock, ReadOnlyStore, StubFetcher};
    use chrono::Duration;

    const EN_URL: &str = "https://example.com/locale/en.json";
    const JA_URL: &str = "https://example.com/locale/ja.json";
    const EN_BODY: &str = r#"{"greeting": "Hello", "farewell": "Goodbye"}"#;
    const JA_BODY: &str = r#"{"greeting": "こんにちは"}"#;

    struct Fixture {
        store: Arc<MemoryStore>,
        clock: Arc<ManualClock>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                store: Arc::new(MemoryStore::new()),
                clock: Arc::new(ManualClock::default()),
            }
        }

        fn strings(&self, fetcher: StubFetcher) -> LocalizedStrings<StubFetcher> {
            self.builder(fetcher).build()
        }

        fn builder(&self, fetcher: StubFetcher) -> Builder<StubFetcher> {
            LocalizedStrings::builder(fetcher)
                .store(self.store.clone())
                .clock(self.clock.clone())
        }
    }

    fn stub() -> StubFetcher {
        StubFetcher::new()
            .with_body(EN_URL, EN_BODY)
            .with_body(JA_URL, JA_BODY)
    }

    // -------------------------------------------------------------------------
    // string
    // -------------------------------------------------------------------------

    #[test]
    fn unloaded_language_returns_key() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());
        assert_eq!(strings.string_or_key("en", "greeting"), "greeting");
        assert_eq!(strings.string("en", "greeting", "fallback"), "fallback");
        assert!(!strings.is_loaded("en"));
    }

    #[tokio::test]
    async fn loaded_language_returns_values_and_defaults() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.expect("load succeeds");

        assert_eq!(strings.string("en", "greeting", "x"), "Hello");
        assert_eq!(strings.string("en", "missing", "x"), "x");
        assert_eq!(strings.string_or_key("en", "missing"), "missing");
        assert_eq!(strings.lookup("en", "farewell").as_deref(), Some("Goodbye"));
        assert!(strings.is_loaded("en"));
    }

    #[tokio::test]
    async fn languages_are_kept_apart() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();
        strings.load("ja", JA_URL).await.unwrap();

        assert_eq!(strings.string_or_key("en", "greeting"), "Hello");
        assert_eq!(strings.string_or_key("ja", "greeting"), "こんにちは");
        assert_eq!(strings.string_or_key("ja", "farewell"), "farewell");
        assert_eq!(strings.languages(), vec!["en".to_string(), "ja".to_string()]);
    }

    // -------------------------------------------------------------------------
    // load: network path
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn network_load_writes_entry_and_timestamp() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();

        let cached = fixture
            .store
            .get_item("LocalizedStringsKey.en")
            .expect("entry persisted");
        assert_eq!(
            StringDictionary::parse_document(&cached).unwrap(),
            strings.dictionary("en").unwrap()
        );
        assert_eq!(strings.cache().last_refresh(), Some(test_now()));
    }

    #[tokio::test]
    async fn not_found_reports_status() {
        let fixture = Fixture::new();
        let strings =
            fixture.strings(StubFetcher::new().with_status(EN_URL, 404, "Not Found"));

        let err = strings.load("en", EN_URL).await.unwrap_err();

        assert_eq!(
            err,
            Error::Http {
                status: 404,
                status_text: "Not Found".to_string()
            }
        );
        assert!(err.to_string().contains("404"));
        assert!(!strings.is_loaded("en"));
        assert!(fixture.store.is_empty());
    }

    #[tokio::test]
    async fn non_200_success_codes_are_failures() {
        let fixture = Fixture::new();
        let strings = fixture.strings(StubFetcher::new().with_status(EN_URL, 204, "No Content"));

        let err = strings.load("en", EN_URL).await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 204, .. }));
    }

    #[tokio::test]
    async fn null_body_is_invalid_document() {
        let fixture = Fixture::new();
        let strings = fixture.strings(StubFetcher::new().with_body(EN_URL, "null"));

        let err = strings.load("en", EN_URL).await.unwrap_err();

        assert_eq!(
            err,
            Error::InvalidDocument {
                url: EN_URL.to_string()
            }
        );
        assert!(err.to_string().contains(EN_URL));
        assert!(!strings.is_loaded("en"));
        assert_eq!(fixture.store.get_item("LocalizedStringsKey.date"), None);
    }

    #[tokio::test]
    async fn unparsable_body_is_invalid_document() {
        let fixture = Fixture::new();
        let strings =
            fixture.strings(StubFetcher::new().with_body(EN_URL, "<html>oops</html>"));

        let err = strings.load("en", EN_URL).await.unwrap_err();
        assert!(matches!(err, Error::InvalidDocument { url } if url == EN_URL));
    }

    #[tokio::test]
    async fn empty_object_loads_successfully() {
        let fixture = Fixture::new();
        let strings = fixture.strings(StubFetcher::new().with_body(EN_URL, "{}"));

        strings.load("en", EN_URL).await.expect("empty dictionary is valid");

        assert!(strings.is_loaded("en"));
        assert_eq!(strings.string_or_key("en", "anything"), "anything");
        assert_eq!(
            fixture.store.get_item("LocalizedStringsKey.en").as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let fixture = Fixture::new();
        let strings = fixture.strings(
            StubFetcher::new().with_error(EN_URL, FetchError::new("connection refused")),
        );

        let err = strings.load("en", EN_URL).await.unwrap_err();

        assert_eq!(
            err,
            Error::Transport {
                status: None,
                status_text: "connection refused".to_string()
            }
        );
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_dictionary() {
        let fixture = Fixture::new();
        let strings = fixture.builder(stub()).freshness(FreshnessPolicy::Strict).build();
        strings.load("en", EN_URL).await.unwrap();

        fixture.clock.advance(Duration::days(10));
        strings
            .fetcher()
            .respond(EN_URL, Ok(crate::application::port::FetchResponse::with_status(500, "")));

        let err = strings.load("en", EN_URL).await.unwrap_err();
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert_eq!(strings.string_or_key("en", "greeting"), "Hello");
    }

    #[tokio::test]
    async fn cache_write_failure_does_not_fail_load() {
        let strings = LocalizedStrings::builder(stub())
            .store(Arc::new(ReadOnlyStore))
            .clock(Arc::new(ManualClock::default()))
            .build();

        strings.load("en", EN_URL).await.expect("memory still populated");
        assert_eq!(strings.string_or_key("en", "greeting"), "Hello");
    }

    // -------------------------------------------------------------------------
    // load: cache path
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn second_load_within_window_uses_cache() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();
        let first = strings.dictionary("en");
        fixture.clock.advance(Duration::hours(1));
        strings.load("en", EN_URL).await.unwrap();

        assert_eq!(strings.fetcher().calls(), 1);
        assert_eq!(strings.dictionary("en"), first);
    }

    #[tokio::test]
    async fn cache_is_shared_between_instances() {
        let fixture = Fixture::new();
        let first = fixture.strings(stub());
        first.load("ja", JA_URL).await.unwrap();

        let second = fixture.strings(stub());
        second.load("ja", JA_URL).await.unwrap();

        assert_eq!(second.fetcher().calls(), 0);
        assert_eq!(second.string_or_key("ja", "greeting"), "こんにちは");
    }

    #[tokio::test]
    async fn cache_entries_from_other_prefix_are_invisible() {
        let fixture = Fixture::new();
        let first = fixture.strings(stub());
        first.load("en", EN_URL).await.unwrap();

        let other = fixture.builder(stub()).key_prefix("Other.").build();
        other.load("en", EN_URL).await.unwrap();

        assert_eq!(other.fetcher().calls(), 1);
        assert!(fixture.store.get_item("Other.en").is_some());
    }

    #[tokio::test]
    async fn missing_entry_falls_through_to_network() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();
        strings.load("ja", JA_URL).await.unwrap();

        assert_eq!(strings.fetcher().calls(), 2);
    }

    #[tokio::test]
    async fn null_or_corrupt_entry_falls_through_to_network() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());
        strings.load("en", EN_URL).await.unwrap();

        fixture.store.set_item("LocalizedStringsKey.en", "null").unwrap();
        strings.load("en", EN_URL).await.unwrap();
        assert_eq!(strings.fetcher().calls(), 2);

        fixture.store.set_item("LocalizedStringsKey.en", "{not json").unwrap();
        strings.load("en", EN_URL).await.unwrap();
        assert_eq!(strings.fetcher().calls(), 3);
        assert_eq!(strings.string_or_key("en", "greeting"), "Hello");
    }

    #[tokio::test]
    async fn entry_without_timestamp_is_not_served() {
        let fixture = Fixture::new();
        fixture
            .store
            .set_item("LocalizedStringsKey.en", r#"{"greeting": "Stale"}"#)
            .unwrap();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();

        assert_eq!(strings.fetcher().calls(), 1);
        assert_eq!(strings.string_or_key("en", "greeting"), "Hello");
    }

    #[tokio::test]
    async fn one_refresh_makes_every_cached_language_fresh() {
        let fixture = Fixture::new();
        fixture
            .store
            .set_item("LocalizedStringsKey.ja", r#"{"greeting": "古い"}"#)
            .unwrap();
        let strings = fixture.strings(stub());

        strings.load("en", EN_URL).await.unwrap();
        strings.load("ja", JA_URL).await.unwrap();

        // ja was never fetched, but the global timestamp says the cache is fresh
        assert_eq!(strings.fetcher().calls(), 1);
        assert_eq!(strings.string_or_key("ja", "greeting"), "古い");
    }

    #[tokio::test]
    async fn compatible_policy_serves_cache_long_after_window() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());
        strings.load("en", EN_URL).await.unwrap();

        fixture.clock.advance(Duration::days(30));
        strings.load("en", EN_URL).await.unwrap();

        assert_eq!(strings.fetcher().calls(), 1);
    }

    #[tokio::test]
    async fn compatible_policy_refetches_when_timestamp_is_far_in_future() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());
        strings.load("en", EN_URL).await.unwrap();

        let future = test_now() + Duration::days(4);
        strings.cache().mark_refreshed(future).unwrap();
        strings.load("en", EN_URL).await.unwrap();

        assert_eq!(strings.fetcher().calls(), 2);
    }

    #[tokio::test]
    async fn strict_policy_refetches_after_window() {
        let fixture = Fixture::new();
        let strings = fixture
            .builder(stub())
            .freshness(FreshnessPolicy::Strict)
            .expiry(ExpiryWindow::from_days(3))
            .build();
        strings.load("en", EN_URL).await.unwrap();

        fixture.clock.advance(Duration::days(2));
        strings.load("en", EN_URL).await.unwrap();
        assert_eq!(strings.fetcher().calls(), 1);

        fixture.clock.advance(Duration::days(2));
        strings.load("en", EN_URL).await.unwrap();
        assert_eq!(strings.fetcher().calls(), 2);
        assert_eq!(
            strings.cache().last_refresh(),
            Some(test_now() + Duration::days(4))
        );
    }

    // -------------------------------------------------------------------------
    // concurrency
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn concurrent_loads_of_same_language_last_write_wins() {
        const A_URL: &str = "https://a.example.com/en.json";
        const B_URL: &str = "https://b.example.com/en.json";
        let fixture = Fixture::new();
        let strings = fixture.strings(
            StubFetcher::new()
                .with_body(A_URL, r#"{"greeting": "Hello from A", "only_a": "a"}"#)
                .with_body(B_URL, r#"{"greeting": "Hello from B", "only_b": "b"}"#),
        );

        let (a, b) = tokio::join!(strings.load("en", A_URL), strings.load("en", B_URL));
        a.expect("first load succeeds");
        b.expect("second load succeeds");

        assert_eq!(strings.fetcher().calls(), 2);
        let greeting = strings.string_or_key("en", "greeting");
        match greeting.as_str() {
            "Hello from A" => {
                assert_eq!(strings.string_or_key("en", "only_a"), "a");
                assert_eq!(strings.string_or_key("en", "only_b"), "only_b");
            }
            "Hello from B" => {
                assert_eq!(strings.string_or_key("en", "only_b"), "b");
                assert_eq!(strings.string_or_key("en", "only_a"), "only_a");
            }
            other => panic!("unexpected greeting {other}"),
        }
    }

    #[tokio::test]
    async fn load_all_loads_every_language() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        strings
            .load_all(&[("en", EN_URL), ("ja", JA_URL)])
            .await
            .expect("both load");

        assert_eq!(strings.languages(), vec!["en".to_string(), "ja".to_string()]);
    }

    #[tokio::test]
    async fn load_all_reports_first_failure() {
        let fixture = Fixture::new();
        let strings = fixture.strings(stub());

        let err = strings
            .load_all(&[("en", EN_URL), ("fr", "https://example.com/locale/fr.json")])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http { status: 404, .. }));
    }

    #[test]
    fn builder_applies_cache_config() {
        let cache = CacheConfig {
            expiry_days: Some(9),
            key_prefix: Some("Custom.".to_string()),
            freshness: FreshnessPolicy::Strict,
        };
        let strings = LocalizedStrings::builder(StubFetcher::new())
            .cache_config(&cache)
            .build();

        assert_eq!(strings.expiry().days(), 9);
        assert_eq!(strings.freshness(), FreshnessPolicy::Strict);
        assert_eq!(strings.cache().prefix(), "Custom.");
    }
}
