use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::data::{App, AppCategory};
use crate::fields;

const ID: &str = "id";
const DESCRIPTION: &str = "description";
const TITLE: &str = "title";
const PARENT: &str = "parent";

pub fn category_from_json(object: &Map<String, Value>) -> AppCategory {
    AppCategory {
        id: fields::string(object, ID),
        description: fields::string(object, DESCRIPTION),
        title: fields::string(object, TITLE),
        parent: fields::string(object, PARENT),
        ..Default::default()
    }
}

/// Builds the synthetic root from the category list and the app mapping.
///
/// Children are attached only to top-level categories. A category whose parent
/// is itself a child, or does not exist, is dropped. Deeper hierarchies are not
/// supported by the catalogue consumers.
pub fn generate_root(mapping: &HashMap<String, Vec<App>>, categories: &[Value]) -> AppCategory {
    let mut cats: Vec<AppCategory> = Vec::new();
    let mut children: Vec<AppCategory> = Vec::new();

    for object in fields::objects(categories) {
        let mut category = category_from_json(object);

        if let Some(id) = &category.id {
            let mut apps = mapping.get(id).cloned().unwrap_or_default();
            apps.sort_by_cached_key(|app| app.title.as_deref().unwrap_or("").to_lowercase());
            category.apps = Some(apps);
        }

        if category.is_parent() {
            cats.push(category);
        } else {
            children.push(category);
        }
    }

    for child in children {
        insert(child, &mut cats);
    }

    cats.sort_by(|a, b| {
        a.title
            .as_deref()
            .unwrap_or("")
            .cmp(b.title.as_deref().unwrap_or(""))
    });

    AppCategory {
        children: Some(cats),
        ..Default::default()
    }
}

fn insert(child: AppCategory, list: &mut [AppCategory]) {
    if let Some(parent) = list.iter_mut().find(|item| item.id == child.parent) {
        parent.add_child(child);
    } else {
        tracing::debug!(id = ?child.id, parent = ?child.parent, "dropping orphaned category");
    }
}
