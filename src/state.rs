//! UI selection state: app-owned, SDK-provided accessors.

use crate::domain::server_realm::ServerRealmOption;

/// The selected server realm and the free-text search query.
///
/// The app owns one instance and passes it to its views. Setters are the
/// only mutation path; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    selected_server_realm: Option<ServerRealmOption>,
    search_query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_server_realm(&self) -> Option<&ServerRealmOption> {
        self.selected_server_realm.as_ref()
    }

    pub fn selected_server(&self) -> Option<&str> {
        self.selected_server_realm.as_ref().map(|o| o.server.as_str())
    }

    pub fn selected_server_slug(&self) -> Option<&str> {
        self.selected_server_realm
            .as_ref()
            .map(|o| o.server_slug.as_str())
    }

    pub fn selected_realm(&self) -> Option<&str> {
        self.selected_server_realm.as_ref().map(|o| o.realm.as_str())
    }

    pub fn selected_realm_slug(&self) -> Option<&str> {
        self.selected_server_realm
            .as_ref()
            .map(|o| o.realm_slug.as_str())
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_selected_server_realm(&mut self, option: Option<ServerRealmOption>) {
        self.selected_server_realm = option;
    }

    pub fn clear_selected_server_realm(&mut self) {
        self.selected_server_realm = None;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search_query(&mut self) {
        self.search_query.clear();
    }
}
