use clap::Parser;
use log::{info, warn};
use nalgebra::Vector3;
use scanline_phong::core::projector::Viewport;
use scanline_phong::io::config::Config;
use scanline_phong::io::image::save_framebuffer;
use scanline_phong::pipeline::renderer::Renderer;
use scanline_phong::scene::context::{RenderContext, ShadingMode};

/// Offline renderer demonstrating per-pixel Phong shading via scanline
/// rasterization.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a TOML scene config; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides the configured output path.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded config from '{}'", path);
                cfg
            }
            Err(e) => {
                warn!("{}; falling back to defaults", e);
                Config::default()
            }
        },
        None => Config::default(),
    };

    let width = config.render.width;
    let height = config.render.height;
    let aspect_ratio = width as f32 / height as f32;

    let camera = config.camera.build(aspect_ratio);
    let light = config.light.build();
    let mut ctx = RenderContext::new(camera, Viewport::with_size(width, height), light);
    ctx.model_matrix = config.object.model_matrix();
    ctx.shading_mode = config.object.shading_mode();

    let triangles = config.object.triangles();
    if triangles.is_empty() {
        warn!("Object generated no triangles; only the background will be visible");
    }
    if ctx.shading_mode != ShadingMode::Phong {
        warn!(
            "{} shading belongs to the fixed pipeline; rendering per-pixel Phong anyway",
            ctx.shading_mode.label()
        );
    }
    info!(
        "Rendering {} triangles at {}x{} ({} shading)",
        triangles.len(),
        width,
        height,
        ctx.shading_mode.label()
    );

    let mut renderer = Renderer::new(width, height);
    renderer.clear(Vector3::from(config.render.background));

    let base_color = Vector3::from(config.object.base_color);
    renderer.draw_triangles(&ctx, &triangles, &base_color);

    let output = args.output.as_deref().unwrap_or(&config.render.output);
    save_framebuffer(&renderer.framebuffer, output);
    info!("Render saved to {}", output);
}
