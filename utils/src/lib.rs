use fluent::{FluentBundle, FluentResource};
use gloo::utils::window;
use i18n::LanguageType;
use unic_langid::{langid, LanguageIdentifier};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[macro_export]
macro_rules! tr {
    ($model:expr, $key:expr) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, None, &mut errors)
            .to_string()
    }};
    ($model:expr, $key:expr, $($arg_name:expr => $arg_value:expr),* $(,)?) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut args = ::fluent::FluentArgs::new();
        $(
            args.set($arg_name, $arg_value);
        )*

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, Some(&args), &mut errors)
            .to_string()
    }};
}

/// Build a bundle for `lang` from an FTL resource.
///
/// Placeables are not wrapped in unicode isolation marks, the formatted text
/// is written verbatim into the page.
pub fn create_bundle(lang: LanguageType, content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = lang
        .lang_id()
        .parse::<LanguageIdentifier>()
        .unwrap_or(langid!("zh-CN"));
    let mut bundle = FluentBundle::new(vec![lang_id]);
    bundle.set_use_isolating(false);
    let resource =
        FluentResource::try_new(content.into()).expect("Failed to create FluentResource.");
    bundle
        .add_resource(resource)
        .expect("Failed to add FTL resources to the bundle.");

    bundle
}

/// 写入系统剪切板
pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    log::debug!("write clipboard: {}", text);
    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
