use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::data::App;
use crate::fields;

const CATEGORY_IDS: &str = "category-ids";
const DESCRIPTION: &str = "description";
const ITUNES: &str = "itunes";
const SCREENSHOTS: &str = "screenshots";
const SOURCE: &str = "source";
const STARS: &str = "stars";
const TAGS: &str = "tags";
const TITLE: &str = "title";

pub fn app_from_json(object: &Map<String, Value>) -> App {
    App {
        category_ids: fields::string_list(object, CATEGORY_IDS),
        description: fields::string(object, DESCRIPTION),
        itunes: fields::url(object, ITUNES),
        screenshots: fields::url_list(object, SCREENSHOTS),
        source: fields::url(object, SOURCE),
        stars: fields::int(object, STARS),
        tags: fields::string_list(object, TAGS),
        title: fields::string(object, TITLE),
    }
}

/// Maps each category id to the non-archived apps listing it, in source order.
pub fn generate_mapping(projects: &[Value]) -> HashMap<String, Vec<App>> {
    let mut items: HashMap<String, Vec<App>> = HashMap::new();

    for object in fields::objects(projects) {
        let app = app_from_json(object);
        if app.is_archive() {
            continue;
        }

        let Some(ids) = app.category_ids.as_deref() else {
            continue;
        };
        for id in ids {
            items.entry(id.clone()).or_default().push(app.clone());
        }
    }

    items
}
