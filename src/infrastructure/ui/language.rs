use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::domain::errors::{AppResult, DomError};
use crate::domain::layout::Language;
use crate::domain::layout::TranslationBundle;
use crate::domain::layout::language::LANGUAGE_STORAGE_KEY;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::{self, js_error};
use crate::infrastructure::http::DashboardHttpClient;

const FLAG_IMAGE_ID: &str = "header-lang-img";

/// Switch the page to `language` and load its translation bundle.
pub async fn select_language(
    document: &Document,
    http: &DashboardHttpClient,
    language: Language,
    static_root: &str,
) -> AppResult<()> {
    if let Some(flag) = document.get_element_by_id(FLAG_IMAGE_ID) {
        flag.set_attribute("src", &language.flag_src(static_root)).map_err(js_error)?;
    }
    dom::local_storage()?
        .set_item(LANGUAGE_STORAGE_KEY, language.code())
        .map_err(js_error)?;

    let bundle = TranslationBundle::from_json(http.fetch_json(&language.bundle_url(static_root)).await?);

    dom::html(document)?.set_attribute("lang", language.code()).map_err(js_error)?;
    if let Some(title) = bundle.title() {
        document.set_title(title);
    }

    let mut translated = 0;
    for (key, text) in bundle.texts() {
        for element in dom::query_all(document, &format!("[key='{}']", key))? {
            element.set_text_content(Some(text));
            translated += 1;
        }
    }

    get_logger().info(
        LogComponent::Infrastructure("Language"),
        &format!("switched to '{}', {} elements translated", language.code(), translated),
    );
    Ok(())
}

fn spawn_selection(document: Document, http: DashboardHttpClient, code: String, static_root: String) {
    spawn_local(async move {
        let result = match Language::from_code(&code) {
            Ok(language) => select_language(&document, &http, language, &static_root).await,
            Err(error) => Err(error.into()),
        };
        if let Err(error) = result {
            get_logger().warn(
                LogComponent::Infrastructure("Language"),
                &format!("language '{}' not applied: {}", code, error),
            );
        }
    });
}

/// Restore the stored language and listen to the `.language` menu items.
pub fn install(
    document: &Document,
    http: &DashboardHttpClient,
    static_root: &str,
    default_language: &str,
    listeners: &mut Vec<EventListener>,
) -> Result<(), DomError> {
    let stored = dom::local_storage()?.get_item(LANGUAGE_STORAGE_KEY).map_err(js_error)?;
    if let Some(code) = stored.filter(|code| code != default_language && code != "null") {
        spawn_selection(document.clone(), http.clone(), code, static_root.to_string());
    }

    for item in dom::query_all(document, ".language")? {
        let document = document.clone();
        let http = http.clone();
        let static_root = static_root.to_string();
        let target = item.clone();
        listeners.push(EventListener::new(&item, "click", move |_| {
            if let Some(code) = target.get_attribute("data-lang") {
                spawn_selection(document.clone(), http.clone(), code, static_root.clone());
            }
        }));
    }

    Ok(())
}
