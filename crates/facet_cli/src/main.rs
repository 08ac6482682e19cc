//! facet - render a scene to PNG by ray tracing, or rasterize a Gouraud
//! triangle, and optionally pick the object under a window coordinate.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use facet_core::Scene;
use facet_math::{Camera, Vec2, Vec3};
use facet_renderer::{
    draw_line, draw_triangle, pick, render_parallel, Color, FillRule, ImageBuffer, RenderConfig,
    ScreenTriangle, DEFAULT_BUCKET_SIZE,
};

#[derive(Parser)]
#[command(name = "facet")]
#[command(about = "Software ray tracer and triangle rasterizer", long_about = None)]
struct Cli {
    /// Scene document (JSON). Uses the built-in showcase scene when omitted
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output PNG
    #[arg(long, short = 'o', value_name = "PATH", default_value = "render.png")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Trace)]
    mode: Mode,

    /// Report the object under window coordinate X Y (top-left origin)
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pick: Option<Vec<f32>>,

    /// Camera position. Frames the whole scene when omitted
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    eye: Option<Vec<f32>>,

    /// Point the camera looks at
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    target: Option<Vec<f32>>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Edge policy for the rasterizer
    #[arg(long, value_enum, default_value_t = Fill::Inclusive)]
    fill_rule: Fill,

    /// Light only the side of a surface its normal points to
    #[arg(long)]
    one_sided: bool,

    /// Draw only the triangle's edges (raster mode)
    #[arg(long)]
    wireframe: bool,

    /// Also write the scene document to this path
    #[arg(long, value_name = "PATH")]
    save_scene: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Ray trace the scene
    Trace,
    /// Rasterize a vertex-colored triangle
    Raster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Fill {
    Inclusive,
    TopLeft,
}

impl From<Fill> for FillRule {
    fn from(fill: Fill) -> Self {
        match fill {
            Fill::Inclusive => FillRule::Inclusive,
            Fill::TopLeft => FillRule::TopLeft,
        }
    }
}

fn vec3_arg(values: Option<&[f32]>, default: Vec3) -> Vec3 {
    match values {
        Some([x, y, z]) => Vec3::new(*x, *y, *z),
        _ => default,
    }
}

/// Orbit-style view direction, pitched 15 degrees down toward the target.
fn orbit_direction() -> Vec3 {
    let pitch = 15f32.to_radians();
    Vec3::new(0.0, pitch.sin(), pitch.cos())
}

/// Eye and target that fit the scene's bounding sphere into the vertical
/// field of view. `None` for an empty scene.
fn frame_scene(scene: &Scene, fov_degrees: f32) -> Option<(Vec3, Vec3)> {
    let (min, max) = scene.bounds()?;
    let center = (min + max) * 0.5;
    let radius = (max - min).length() * 0.5;
    let distance = radius / (fov_degrees.to_radians() * 0.5).sin();
    if !distance.is_finite() || distance <= 0.0 {
        return None;
    }
    Some((center + orbit_direction() * distance, center))
}

/// Camera from the flags, falling back to framing the scene and then to
/// an 18 unit orbit around (0, 1, 0).
fn build_camera(cli: &Cli, scene: &Scene, aspect: f32) -> Camera {
    let (eye, target) = frame_scene(scene, cli.fov).unwrap_or_else(|| {
        let target = Vec3::new(0.0, 1.0, 0.0);
        (target + orbit_direction() * 18.0, target)
    });
    Camera::new(
        vec3_arg(cli.eye.as_deref(), eye),
        vec3_arg(cli.target.as_deref(), target),
        aspect,
    )
    .with_fov_degrees(cli.fov)
}

/// Reject flags the selected mode would ignore.
fn check_mode_flags(cli: &Cli) -> Result<()> {
    if cli.mode == Mode::Raster {
        let ignored = [
            ("--scene", cli.scene.is_some()),
            ("--save-scene", cli.save_scene.is_some()),
            ("--pick", cli.pick.is_some()),
        ];
        if let Some((flag, _)) = ignored.iter().find(|(_, set)| *set) {
            bail!("{} only applies to --mode trace", flag);
        }
    } else if cli.wireframe {
        bail!("--wireframe only applies to --mode raster");
    }
    Ok(())
}

fn load_scene(cli: &Cli) -> Result<Scene> {
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the showcase scene");
            Scene::default_showcase()
        }
    };

    if let Some(path) = &cli.save_scene {
        scene
            .save(path)
            .with_context(|| format!("Failed to save scene {}", path.display()))?;
    }

    Ok(scene)
}

/// Demo triangle, laid out for an 800x600 window and scaled to
/// the requested size.
fn gouraud_triangle(width: u32, height: u32) -> ScreenTriangle {
    let scale = Vec2::new(width as f32 / 800.0, height as f32 / 600.0);
    ScreenTriangle::new(
        Vec2::new(200.0, 120.0) * scale,
        Vec2::new(120.0, 420.0) * scale,
        Vec2::new(520.0, 380.0) * scale,
    )
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &image.to_rgba8(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if cli.width == 0 || cli.height == 0 {
        bail!("Image size must be non-zero, got {}x{}", cli.width, cli.height);
    }
    check_mode_flags(&cli)?;

    let config = RenderConfig {
        bucket_size: cli.bucket_size,
        two_sided: !cli.one_sided,
        ..RenderConfig::default().with_resolution(cli.width, cli.height)
    };

    let image = match cli.mode {
        Mode::Trace => {
            let scene = load_scene(&cli)?;
            let camera = build_camera(&cli, &scene, config.aspect_ratio());

            if let Some([x, y]) = cli.pick.as_deref() {
                match pick(&camera, *x, *y, cli.width, cli.height, &scene) {
                    Some((index, hit)) => log::info!(
                        "Picked {} #{} at distance {:.3}, point {}",
                        scene.primitives[index].shape.kind(),
                        index,
                        hit.distance,
                        hit.point
                    ),
                    None => log::info!("Nothing under ({}, {})", x, y),
                }
            }

            render_parallel(&camera, &scene, &config)
        }
        Mode::Raster => {
            let mut image = ImageBuffer::filled(cli.width, cli.height, config.background);
            let triangle = gouraud_triangle(cli.width, cli.height);
            let count = if cli.wireframe {
                let [a, b, c] = triangle.vertices().map(|v| v.floor().as_ivec2());
                [(a, b), (b, c), (c, a)]
                    .into_iter()
                    .map(|(p0, p1)| draw_line(&mut image, p0, p1, Color::ONE))
                    .sum::<usize>()
            } else {
                let colors = [Color::X, Color::Y, Color::Z];
                draw_triangle(&mut image, triangle, colors, cli.fill_rule.into())
            };
            log::info!("Rasterized {} pixels", count);
            image
        }
    };

    save_png(&image, &cli.output)
}
