use serde::Serialize;
use url::Url;

/// Tag that marks a project as no longer maintained.
pub const ARCHIVE_TAG: &str = "archive";

/// One catalogued project.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunes: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<Url>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl App {
    pub fn is_archive(&self) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|tag| tag == ARCHIVE_TAG))
    }
}

/// A category node. The synthetic root has no `id` and owns every top-level category.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<App>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AppCategory>>,
}

impl AppCategory {
    pub fn is_parent(&self) -> bool {
        self.parent.is_none()
    }

    pub fn add_child(&mut self, child: AppCategory) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    pub fn app_count(&self) -> usize {
        self.apps.as_ref().map_or(0, Vec::len)
    }
}
