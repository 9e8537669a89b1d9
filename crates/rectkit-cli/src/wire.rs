//! JSON wire schema for the CLI subcommands. Versioned separately from
//! `rectkit`'s Rust API: these types exist only to give the library's
//! `nalgebra`-backed geometry a stable, dependency-free JSON shape.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct WirePoint {
    pub x: f64,
    pub y: f64,
}

impl From<WirePoint> for rectkit::Point {
    fn from(p: WirePoint) -> Self {
        rectkit::Point::new(p.x, p.y)
    }
}

impl From<rectkit::Point> for WirePoint {
    fn from(p: rectkit::Point) -> Self {
        WirePoint { x: p.x, y: p.y }
    }
}

#[derive(Serialize, Deserialize)]
pub struct WireLine {
    pub a: WirePoint,
    pub b: WirePoint,
}

impl From<WireLine> for rectkit::Line {
    fn from(l: WireLine) -> Self {
        rectkit::Line { a: l.a.into(), b: l.b.into() }
    }
}

impl From<rectkit::Line> for WireLine {
    fn from(l: rectkit::Line) -> Self {
        WireLine { a: l.a.into(), b: l.b.into() }
    }
}

#[derive(Serialize, Deserialize)]
pub struct WireRect {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl From<WireRect> for rectkit::Rect {
    fn from(r: WireRect) -> Self {
        rectkit::Rect::new(r.llx, r.lly, r.urx, r.ury)
    }
}

impl From<rectkit::Rect> for WireRect {
    fn from(r: rectkit::Rect) -> Self {
        WireRect { llx: r.llx, lly: r.lly, urx: r.urx, ury: r.ury }
    }
}

pub type WirePath = Vec<WirePoint>;

pub fn path_from_wire(path: WirePath) -> rectkit::Path {
    path.into_iter().map(rectkit::Point::from).collect()
}

pub fn path_to_wire(path: &[rectkit::Point]) -> WirePath {
    path.iter().map(|&p| p.into()).collect()
}

#[derive(Serialize, Deserialize)]
pub struct WireRaster {
    pub height: usize,
    pub width: usize,
    pub data: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct WireGraph {
    pub n: usize,
    pub m: usize,
    pub edges: Vec<(usize, usize)>,
}
