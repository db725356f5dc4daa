//! Demo renderer for a guide overlay
//!
//! Draws a synthetic phone-sized screen, composites a guide mask over it and
//! outlines where each decoration would be placed, then writes a PNG. Useful
//! for eyeballing a guide TOML without a host UI.

mod logging;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use guidemask_overlay::types::{
    Anchor, Fit, GuideConfig, HighlightShape, PaddingSpec, Placement, mask_colors,
};
use guidemask_overlay::utils::color_from_rgba;
use guidemask_overlay::{Guide, Rect, Size, load_config, renderer};

/// Measured size used for every decoration in the demo
const DEMO_DECORATION_SIZE: Size = Size::new(160.0, 56.0);

#[derive(Parser, Debug)]
#[command(name = "guidemask-demo", about = "Render a guide overlay to a PNG")]
struct Args {
    /// Guide config TOML; a built-in sample is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, default_value = "guide.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 1080)]
    width: u32,

    #[arg(long, default_value_t = 1920)]
    height: u32,

    /// Target rect as left,top,right,bottom
    #[arg(long, value_delimiter = ',', num_args = 4, default_values_t = [100.0, 200.0, 300.0, 400.0])]
    target: Vec<f32>,
}

fn sample_config() -> GuideConfig {
    GuideConfig {
        padding: PaddingSpec::uniform(20.0),
        shape: HighlightShape::rounded_rect(8.0),
        mask_alpha: 180,
        density: 2.75,
        decorations: vec![
            Placement::new(Anchor::Bottom, Fit::Start).with_offset(0.0, 8.0),
            Placement::new(Anchor::Right, Fit::Center),
        ],
        ..Default::default()
    }
}

/// Paint a stand-in app screen: background plus a column of cards
fn draw_screen(surface: &mut [u8], width: u32, height: u32) {
    renderer::clear(surface, width, height, color_from_rgba(mask_colors::SLATE));
    let card = color_from_rgba([235, 238, 242, 255]);
    let mut top = 80.0;
    while top + 240.0 < height as f32 {
        renderer::fill_shape(
            surface,
            width,
            height,
            Rect::from_xywh(60.0, top, width as f32 - 120.0, 240.0),
            HighlightShape::rounded_rect(16.0),
            card,
        );
        top += 300.0;
    }
}

fn write_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), png::EncodingError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load guide config");
                return ExitCode::FAILURE;
            }
        },
        None => sample_config(),
    };

    let &[left, top, right, bottom] = args.target.as_slice() else {
        tracing::error!(values = args.target.len(), "Target needs exactly four values");
        return ExitCode::FAILURE;
    };

    let mut guide = Guide::new(config);
    guide.set_target(Some(Rect::from_ltrb(left, top, right, bottom)));
    guide.measure(args.width, args.height);

    let mut surface = renderer::create_buffer(args.width, args.height);
    draw_screen(&mut surface, args.width, args.height);

    let sizes = vec![DEMO_DECORATION_SIZE; guide.decorations().len()];
    let frame = match guide.render(&mut surface, args.width, args.height, &sizes) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::error!(error = %e, "Failed to render guide");
            return ExitCode::FAILURE;
        }
    };

    let outline = color_from_rgba(mask_colors::WHITE);
    for placed in &frame.decorations {
        renderer::stroke_shape(
            &mut surface,
            args.width,
            args.height,
            placed.rect,
            HighlightShape::rounded_rect(6.0),
            3.0,
            outline,
        );
        tracing::info!(id = placed.id.0, rect = ?placed.rect, "Placed decoration");
    }

    if let Err(e) = write_png(&args.out, &surface, args.width, args.height) {
        tracing::error!(error = %e, path = %args.out.display(), "Failed to write PNG");
        return ExitCode::FAILURE;
    }

    tracing::info!(highlight = ?frame.highlight, path = %args.out.display(), "Guide rendered");
    guide.teardown();
    ExitCode::SUCCESS
}
