//! The list-view controller.

use parking_lot::Mutex;
use tracing::{debug, trace};

use roster_cache::{BlobStore, PageCache};
use roster_client::{DirectoryClient, UpdateUserRequest, User};
use roster_session::{SessionStore, TokenArea};

use crate::auth::DEMO;
use crate::error::{Error, Result};
use crate::search::{build_index, filter_users};
use crate::validation::{Field, validate_email, validate_name};

/// Static user-facing message for failed page fetches. Not retried
/// automatically; the user re-triggers via page navigation.
const FETCH_FAILED: &str = "Failed to fetch users. Please try again.";

/// Page count assumed before the first successful fetch reports one.
const FALLBACK_TOTAL_PAGES: u32 = 2;

/// View state, re-entered on every page change or authentication change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A page load is in flight (also the initial state).
    Loading,
    /// A page is displayed; edit and delete are available.
    Ready,
    /// The last load failed with a retryable message.
    Error(String),
}

/// Snapshot of the controller's display state.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Current page number.
    pub page: u32,
    /// Records on the current page.
    pub records: Vec<User>,
    /// Total page count, once known.
    pub total_pages: Option<u32>,
    /// Current view state.
    pub state: ViewState,
}

/// Editable fields for a user update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

impl UpdateFields {
    /// Run the local format checks. A violation means the update never
    /// reaches the directory client.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.first_name {
            validate_name(Field::FirstName, name)?;
        }
        if let Some(name) = &self.last_name {
            validate_name(Field::LastName, name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.first_name {
            user.first_name = name.clone();
        }
        if let Some(name) = &self.last_name {
            user.last_name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

impl From<&UpdateFields> for UpdateUserRequest {
    fn from(fields: &UpdateFields) -> Self {
        UpdateUserRequest {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
        }
    }
}

/// Mutable display state, serialized behind one lock.
struct Inner {
    state: ViewState,
    page: u32,
    records: Vec<User>,
    total_pages: Option<u32>,
    /// Bumped on every load; a fetch resolving under an older generation
    /// is discarded instead of clobbering the current page.
    generation: u64,
}

/// Orchestrates session store, page cache, and directory client into the
/// page-of-records workflow.
///
/// All collaborators are injected; the controller owns no ambient state.
/// Methods take `&self` — internal display state is serialized behind a
/// lock that is never held across an await.
pub struct ListViewController<S: BlobStore, P: TokenArea, L: TokenArea> {
    client: DirectoryClient,
    cache: PageCache<S, User>,
    session: SessionStore<P, L>,
    inner: Mutex<Inner>,
}

impl<S: BlobStore, P: TokenArea, L: TokenArea> ListViewController<S, P, L> {
    /// Create a controller over the given collaborators.
    pub fn new(client: DirectoryClient, cache: PageCache<S, User>, session: SessionStore<P, L>) -> Self {
        Self {
            client,
            cache,
            session,
            inner: Mutex::new(Inner {
                state: ViewState::Loading,
                page: 1,
                records: Vec::new(),
                total_pages: None,
                generation: 0,
            }),
        }
    }

    /// The session store.
    pub fn session(&self) -> &SessionStore<P, L> {
        &self.session
    }

    /// The page cache.
    pub fn cache(&self) -> &PageCache<S, User> {
        &self.cache
    }

    /// Current view state.
    pub fn state(&self) -> ViewState {
        self.inner.lock().state.clone()
    }

    /// Snapshot of the current display state.
    pub fn view(&self) -> PageView {
        let inner = self.inner.lock();
        Self::view_of(&inner)
    }

    fn view_of(inner: &Inner) -> PageView {
        PageView {
            page: inner.page,
            records: inner.records.clone(),
            total_pages: inner.total_pages,
            state: inner.state.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authentication flows
    // ─────────────────────────────────────────────────────────────────────────

    /// Log in with the demo account.
    ///
    /// Any pair other than the designated test credentials is rejected
    /// locally with [`Error::InvalidCredentials`] before any network call.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        if !DEMO.matches_login(email, password) {
            return Err(Error::InvalidCredentials);
        }

        let response = self.client.auth().login(email, password).await?;
        self.session.login(response.token)?;
        Ok(())
    }

    /// Register the demo account.
    pub async fn register(&self, email: &str, password: &str) -> Result<()> {
        if !DEMO.matches_register(email, password) {
            return Err(Error::InvalidCredentials);
        }

        let response = self.client.auth().register(email, password).await?;
        self.session.login(response.token)?;
        Ok(())
    }

    /// Log out, clearing both storage areas and the display state.
    pub fn logout(&self) -> Result<()> {
        self.session.logout()?;

        let mut inner = self.inner.lock();
        inner.records.clear();
        inner.state = ViewState::Loading;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Load a page of users, cache first.
    ///
    /// On a fresh cache hit no network call is made. On a miss the page is
    /// fetched, written through to the cache, and displayed. A fetch that
    /// fails leaves the controller in [`ViewState::Error`] with a static
    /// retryable message; nothing is retried automatically.
    pub async fn load_page(&self, page: u32) -> Result<PageView> {
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        let generation = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.page = page;
            inner.state = ViewState::Loading;
            inner.generation
        };

        if let Some(hit) = self.cache.read(page)? {
            trace!(page, "serving page from cache");
            let mut inner = self.inner.lock();
            inner.records = hit.records;
            if hit.total_pages.is_some() {
                inner.total_pages = hit.total_pages;
            }
            inner.state = ViewState::Ready;
            return Ok(Self::view_of(&inner));
        }

        match self.client.users().list(page).await {
            Ok(response) => {
                let mut inner = self.inner.lock();
                if inner.generation != generation {
                    debug!(page, "discarding stale page load");
                    return Ok(Self::view_of(&inner));
                }

                self.cache
                    .write(page, response.data.clone(), response.total_pages)?;
                inner.records = response.data;
                inner.total_pages = Some(response.total_pages);
                inner.state = ViewState::Ready;
                Ok(Self::view_of(&inner))
            }
            Err(e) => {
                let mut inner = self.inner.lock();
                if inner.generation == generation {
                    inner.state = ViewState::Error(FETCH_FAILED.to_string());
                }
                Err(e.into())
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Update a user on the current page.
    ///
    /// Fields are validated locally first; violations never reach the
    /// client. The in-memory list and the page's cache entry are rewritten
    /// only after the remote acknowledges — a remote failure leaves state
    /// unchanged.
    pub async fn update_user(&self, id: i64, fields: UpdateFields) -> Result<()> {
        self.require_ready()?;
        fields.validate()?;

        self.client
            .users()
            .update(id, &UpdateUserRequest::from(&fields))
            .await?;

        let mut inner = self.inner.lock();
        for user in inner.records.iter_mut() {
            if user.id == id {
                fields.apply_to(user);
            }
        }

        let total_pages = inner.total_pages.unwrap_or(FALLBACK_TOTAL_PAGES);
        self.cache
            .write(inner.page, inner.records.clone(), total_pages)?;
        debug!(id, "user updated and page cache rewritten");
        Ok(())
    }

    /// Delete a user from the current page.
    ///
    /// The record disappears from the displayed list and the page's cache
    /// entry only after the remote acknowledges.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.require_ready()?;

        self.client.users().remove(id).await?;

        let mut inner = self.inner.lock();
        inner.records.retain(|user| user.id != id);

        let total_pages = inner.total_pages.unwrap_or(FALLBACK_TOTAL_PAGES);
        self.cache
            .write(inner.page, inner.records.clone(), total_pages)?;
        debug!(id, "user deleted and page cache rewritten");
        Ok(())
    }

    fn require_ready(&self) -> Result<()> {
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }
        if self.inner.lock().state != ViewState::Ready {
            return Err(Error::NotReady);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Search the whole directory.
    ///
    /// Builds the full index by fetching all pages concurrently, then
    /// applies the multi-term filter. The index is not cached.
    pub async fn search(&self, query: &str) -> Result<Vec<User>> {
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        let index = build_index(&self.client).await?;
        Ok(filter_users(&index, query).into_iter().cloned().collect())
    }
}
