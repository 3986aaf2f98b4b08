// src/main.rs
use std::env;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use popmovies::app::{read_saved_state, MoviesApp, TmdbFetcher};
use popmovies::config::app_config;

fn pick_renderer() -> eframe::Renderer {
    match env::var("POPMOVIES_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cfg = app_config();
    if cfg.tmdb_api_key.is_none() {
        info!("No TMDb api key configured; the grid will stay empty.");
    }

    let fetcher = match TmdbFetcher::from_config(cfg) {
        Ok(f) => f,
        Err(e) => {
            error!("http client build failed: {e}");
            return Ok(());
        }
    };

    // Re-created screen: reuse the list the last run left behind
    let restored = if env::var_os("POPMOVIES_RESTORE").is_some() {
        read_saved_state(&cfg.state_path)
    } else {
        None
    };

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        multisampling: 0,
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };

    match eframe::run_native(
        "Popular Movies",
        options,
        Box::new(move |cc| Ok(Box::new(MoviesApp::new(cc, cfg, Arc::new(fetcher), restored)))),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: try POPMOVIES_RENDERER=wgpu or glow.");
            Err(e)
        }
    }
}
