use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod wire;

use rectkit::api::*;
use wire::{path_from_wire, path_to_wire, WireGraph, WireLine, WirePath, WireRaster, WireRect};

#[derive(Parser)]
#[command(name = "rectkit")]
#[command(about = "Rectilinear geometry toolkit: clipping, contours, decomposition, matching")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Liang-Barsky clip a line segment against an axis-aligned window
    ClipLine {
        #[arg(long)]
        window: String,
        #[arg(long)]
        line: String,
    },
    /// Liang-Barsky-Foley clip an orthogonal polygon against a window
    ClipPoly {
        #[arg(long)]
        window: String,
        #[arg(long)]
        path: String,
    },
    /// Extract orthogonal polygon contours from a binary raster
    Contours {
        #[arg(long)]
        raster: String,
        #[arg(long, default_value_t = false)]
        clockwise: bool,
    },
    /// Decompose an orthogonal polygon (with holes) into rectangles
    Decompose {
        #[arg(long)]
        polygon: String,
        #[arg(long, default_value_t = false)]
        clockwise: bool,
    },
    /// Maximum bipartite matching (Hopcroft-Karp)
    Match {
        #[arg(long)]
        graph: String,
    },
    /// Minimum vertex cover via König's theorem
    Cover {
        #[arg(long)]
        graph: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::ClipLine { window, line } => run_clip_line(window, line),
        Action::ClipPoly { window, path } => clip_poly(window, path),
        Action::Contours { raster, clockwise } => contours(raster, clockwise),
        Action::Decompose { polygon, clockwise } => decompose(polygon, clockwise),
        Action::Match { graph } => run_match(graph),
        Action::Cover { graph } => cover(graph),
    }
}

/// Reads `arg` as a JSON payload: the literal value, or stdin if `arg == "-"`.
fn read_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}

fn run_clip_line(window: String, line: String) -> Result<()> {
    let start = Instant::now();
    let window_json = read_arg(&window)?;
    let line_json = read_arg(&line)?;
    let window: WireRect = serde_json::from_str(&window_json).context("parsing --window")?;
    let line: WireLine = serde_json::from_str(&line_json).context("parsing --line")?;

    let (clipped, visible) = clip_line(window.into(), line.into());
    let out = json!({ "line": WireLine::from(clipped), "visible": visible });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "clip-line", input_bytes = window_json.len() + line_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}

fn clip_poly(window: String, path: String) -> Result<()> {
    let start = Instant::now();
    let window_json = read_arg(&window)?;
    let path_json = read_arg(&path)?;
    let window: WireRect = serde_json::from_str(&window_json).context("parsing --window")?;
    let path: WirePath = serde_json::from_str(&path_json).context("parsing --path")?;

    let clipped = clip_polygon(window.into(), &path_from_wire(path));
    let out = json!({ "path": path_to_wire(&clipped) });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "clip-poly", input_bytes = window_json.len() + path_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}

fn contours(raster: String, clockwise: bool) -> Result<()> {
    let start = Instant::now();
    let raster_json = read_arg(&raster)?;
    let raster: WireRaster = serde_json::from_str(&raster_json).context("parsing --raster")?;
    let grid = Grid::from_row_major(raster.height, raster.width, raster.data)
        .context("building raster grid")?;

    let paths = get_contours(&grid, clockwise);
    let out = json!({ "paths": paths.iter().map(|p| path_to_wire(p)).collect::<Vec<_>>() });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "contours", input_bytes = raster_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}

fn decompose(polygon: String, clockwise: bool) -> Result<()> {
    let start = Instant::now();
    let polygon_json = read_arg(&polygon)?;
    let wire_paths: Vec<WirePath> = serde_json::from_str(&polygon_json).context("parsing --polygon")?;
    let paths: Vec<Path> = wire_paths.into_iter().map(path_from_wire).collect();

    let rects = decompose_region(&paths, clockwise).context("decomposing region")?;
    let out = json!({ "rects": rects.into_iter().map(WireRect::from).collect::<Vec<_>>() });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "decompose", input_bytes = polygon_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}

fn run_match(graph: String) -> Result<()> {
    let start = Instant::now();
    let graph_json = read_arg(&graph)?;
    let graph: WireGraph = serde_json::from_str(&graph_json).context("parsing --graph")?;

    let matching = bipartite_matching(graph.n, graph.m, &graph.edges);
    let out = json!({ "matching": matching });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "match", input_bytes = graph_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}

fn cover(graph: String) -> Result<()> {
    let start = Instant::now();
    let graph_json = read_arg(&graph)?;
    let graph: WireGraph = serde_json::from_str(&graph_json).context("parsing --graph")?;

    let (left, right) = bipartite_vertex_cover(graph.n, graph.m, &graph.edges);
    let out = json!({ "left": left, "right": right });
    println!("{}", serde_json::to_string(&out)?);

    tracing::info!(subcommand = "cover", input_bytes = graph_json.len(), elapsed_us = start.elapsed().as_micros() as u64, "done");
    Ok(())
}
