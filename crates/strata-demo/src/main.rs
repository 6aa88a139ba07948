// File: crates/strata-demo/src/main.rs
// Summary: Demo renders two candle windows and a volume window on one canvas, from CSV or sample data.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use clap::Parser;
use strata_core::export::{write_png, write_svg};
use strata_core::geometry::Rect;
use strata_core::scene::{Group, Node, Style};
use strata_core::{Candle, Color, Container, ContainerOptions, EdgeSpace, TimePoint, Timestamp, VolumeBar};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 1300.0;
const HEIGHT: f64 = 650.0;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser, Debug)]
#[command(about = "Render a stacked candle/volume chart to SVG")]
struct Args {
    /// OHLC CSV with time/open/high/low/close[/volume] columns; sample data when omitted.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Container options as TOML.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "target/out/index.svg")]
    out: PathBuf,
    /// Also write a PNG next to the SVG.
    #[arg(long)]
    png: bool,
}

struct Row {
    candle: Candle,
    volume: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let opts = match &args.config {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            ContainerOptions::from_toml_str(&raw)?
        }
        None => ContainerOptions::default(),
    };

    let rows = match &args.csv {
        Some(p) => load_ohlc_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => sample_rows()?,
    };
    if rows.is_empty() {
        bail!("no candles loaded; check headers/delimiter");
    }
    info!(candles = rows.len(), "loaded data");

    let (t0, t1) = time_bounds(&rows);
    let (low, high) = price_bounds(&rows);
    let max_vol = rows.iter().map(|r| r.volume).fold(0.0, f64::max).max(1.0);

    let mut chart = Container::with_options(WIDTH - 100.0, HEIGHT - 50.0, opts)?;
    chart.add_window("candles", EdgeSpace::ALL, low, high, 50.0, t0, t1)?;
    chart.add_window("candles2", EdgeSpace::ALL, low, high, 25.0, t0, t1)?;
    chart.add_window("volume", EdgeSpace::ALL, 0.0, max_vol, 25.0, t0, t1)?;
    chart.init()?;
    chart.translate(10.0, 10.0);

    for r in &rows {
        chart.stock_candle("candles", &r.candle)?;
        chart.stock_candle("candles2", &r.candle)?;
        chart.volume("volume", &VolumeBar { t: r.candle.t, volume: r.volume })?;
    }
    let closes: Vec<TimePoint> = rows.iter().map(|r| TimePoint::new(r.candle.t, r.candle.close)).collect();
    chart.smooth_by_time("candles", &closes, None)?;
    chart.hor("candles", (low + high) / 2.0, None)?;
    chart.complete();

    let mut canvas = Group::new();
    let border = Style::new().no_fill().stroke(Color::BLACK).stroke_width(2.0);
    canvas.append(Node::rect(Rect::from_ltwh(1.0, 1.0, WIDTH - 2.0, HEIGHT - 2.0), border));
    canvas.append(chart.into_root());

    write_svg(&canvas, WIDTH, HEIGHT, &args.out)?;
    info!(path = %args.out.display(), "wrote svg");
    if args.png {
        let png = args.out.with_extension("png");
        write_png(&canvas, WIDTH as i32, HEIGHT as i32, &png)?;
        info!(path = %png.display(), "wrote png");
    }
    Ok(())
}

fn sample_rows() -> Result<Vec<Row>> {
    let data = [
        ("2015-02-01 15:00:00", 100.0, 200.0, 250.0, 50.0, 100.0),
        ("2015-02-01 15:05:00", 500.0, 300.0, 650.0, 50.0, 444.0),
        ("2015-02-01 15:10:00", 100.0, 200.0, 250.0, 50.0, 678.0),
        ("2015-02-01 15:15:00", 200.0, 400.0, 450.0, 150.0, 1000.0),
        ("2015-02-01 15:20:00", 400.0, 350.0, 520.0, 300.0, 787.0),
        ("2015-02-01 15:25:00", 350.0, 600.0, 640.0, 320.0, 909.0),
        ("2015-02-01 15:30:00", 600.0, 720.0, 800.0, 560.0, 1000.0),
        ("2015-02-01 15:35:00", 720.0, 650.0, 760.0, 600.0, 567.0),
        ("2015-02-01 15:40:00", 650.0, 680.0, 700.0, 610.0, 456.0),
        ("2015-02-01 15:45:00", 680.0, 540.0, 690.0, 500.0, 123.0),
        ("2015-02-01 15:50:00", 540.0, 580.0, 620.0, 520.0, 12.0),
        ("2015-02-01 15:55:00", 580.0, 610.0, 900.0, 560.0, 300.0),
    ];
    data.iter()
        .map(|&(t, open, close, high, low, volume)| -> Result<Row> {
            let t = parse_time(t).with_context(|| format!("bad sample time {t}"))?;
            Ok(Row { candle: Candle::try_new(t, open, high, low, close)?, volume })
        })
        .collect()
}

/// Load an OHLC CSV; rows with unparsable or inconsistent prices are skipped.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_vol = idx(&["volume", "vol", "v"]);
    let Some(i_time) = i_time else { bail!("no time column in {:?}", headers) };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let num = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok());
        let Some(t) = rec.get(i_time).and_then(parse_time) else { continue };
        let (Some(o), Some(h), Some(l), Some(c)) = (num(i_open), num(i_high), num(i_low), num(i_close)) else {
            continue;
        };
        match Candle::try_new(t, o, h, l, c) {
            Ok(candle) => out.push(Row { candle, volume: num(i_vol).unwrap_or(0.0) }),
            Err(e) => warn!(%t, error = %e, "skipping row"),
        }
    }
    out.sort_by_key(|r| r.candle.t);
    Ok(out)
}

/// Accepts `YYYY-mm-dd HH:MM:SS`, RFC 3339, or epoch seconds/milliseconds.
fn parse_time(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return if n > 10_i64.pow(12) { Utc.timestamp_millis_opt(n).single() } else { Utc.timestamp_opt(n, 0).single() };
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, TIME_FORMAT).ok().map(|n| n.and_utc())
}

fn time_bounds(rows: &[Row]) -> (Timestamp, Timestamp) {
    let first = rows[0].candle.t;
    let last = rows[rows.len() - 1].candle.t;
    if last > first { (first, last) } else { (first, first + chrono::Duration::minutes(1)) }
}

fn price_bounds(rows: &[Row]) -> (f64, f64) {
    let low = rows.iter().map(|r| r.candle.low).fold(f64::INFINITY, f64::min);
    let high = rows.iter().map(|r| r.candle.high).fold(f64::NEG_INFINITY, f64::max);
    if high > low { (low, high) } else { (low, low + 1.0) }
}
