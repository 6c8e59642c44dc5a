//! Save dialogs for exported images (native builds only).

use super::state::SketchApp;
use crate::export;

impl SketchApp {
    fn build_export_svg(&self) -> Option<String> {
        let (width, height) = self.sketch.viewport()?;
        let (svg, _w, _h) = export::build_svg(
            &self.sketch.frame(),
            width,
            height,
            self.sketch.config(),
            &self.export_options,
        );
        Some(svg)
    }

    /// Exports the current frame to SVG through a save dialog.
    pub fn export_svg(&mut self) {
        let Some(svg) = self.build_export_svg() else {
            log::warn!("nothing to export before the first frame");
            return;
        };
        spawn_save("SVG", "svg", "sketch.svg", svg.into_bytes());
    }

    /// Exports the current frame to PNG through a save dialog.
    pub fn export_png(&mut self) {
        let Some(svg) = self.build_export_svg() else {
            log::warn!("nothing to export before the first frame");
            return;
        };
        match export::render_png(&svg, self.export_options.png_scale) {
            Ok(png) => spawn_save("PNG", "png", "sketch.png", png),
            Err(e) => log::error!("PNG export failed: {e}"),
        }
    }
}

/// Asks for a destination on a background task and writes `bytes` there.
fn spawn_save(filter: &'static str, extension: &'static str, file_name: &'static str, bytes: Vec<u8>) {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        log::error!("cannot open save dialog: no async runtime");
        return;
    };
    runtime.spawn(async move {
        if let Some(handle) = rfd::AsyncFileDialog::new()
            .add_filter(filter, &[extension])
            .set_file_name(file_name)
            .save_file()
            .await
        {
            let path = handle.path();
            match std::fs::write(path, &bytes) {
                Ok(()) => log::info!("exported {}", path.display()),
                Err(e) => log::error!("failed to save {}: {e}", path.display()),
            }
        }
    });
}
