// File: crates/strata-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use strata_core::scene::{Group, Node, Text};
use strata_core::Timestamp;

pub fn at(h: u32, m: u32, s: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2015, 2, 1, h, m, s).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Every text node in the scene, depth first.
pub fn texts(g: &Group) -> Vec<&Text> {
    let mut out = Vec::new();
    collect_texts(g, &mut out);
    out
}

fn collect_texts<'a>(g: &'a Group, out: &mut Vec<&'a Text>) {
    for n in g.children() {
        match n {
            Node::Group(inner) => collect_texts(inner, out),
            Node::Text(t) => out.push(t),
            _ => {}
        }
    }
}
