// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Tiempos del español",
        options,
        Box::new(|cc| Ok(Box::new(tiempos_quiz::DrillApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirige el log a la consola del navegador.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("tiempos_quiz_canvas")
            .expect("Falta el elemento tiempos_quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("tiempos_quiz_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(tiempos_quiz::DrillApp::new(cc)))),
            )
            .await
            .expect("No se pudo arrancar eframe en el navegador");
    });
}
