#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use storefront::StorefrontApp;
use storefront::api::ProductApi;
use storefront::config::ShopConfig;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use storefront::api::ThreadRunner;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShopConfig::from_env();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Web-larek")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "storefront",
        native_options,
        Box::new(move |cc| {
            let tasks = ThreadRunner::start(Some(cc.egui_ctx.clone()))?;
            let api = ProductApi::new(&config);
            Ok(Box::new(StorefrontApp::new(Box::new(api), Box::new(tasks))))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use storefront::api::LocalRunner;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("no document to mount into");
            return;
        };
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("the_canvas_id was not found or is not a canvas");
            return;
        };

        let config = ShopConfig::from_env();
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    let tasks = LocalRunner::new(cc.egui_ctx.clone());
                    let api = ProductApi::new(&config);
                    Ok(Box::new(StorefrontApp::new(Box::new(api), Box::new(tasks))))
                }),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("failed to start eframe: {:?}", err);
        }
    });
}
