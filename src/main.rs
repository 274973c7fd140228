//! Walkthrough of `numarray`: creating arrays, copying versus aliasing,
//! casting, and the NaN and infinity sentinels.
//!
//! Each section prints what it demonstrates. The NaN and infinity sections
//! end with a construction that must fail; by default that error stops the
//! tour, as an unhandled error would.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use numarray::{array, DType, NumArray, INF, NAN, NEG_INF};
use tracing::{error, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Creation,
    Copying,
    Casting,
    Nan,
    Infinity,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::Creation,
        Section::Copying,
        Section::Casting,
        Section::Nan,
        Section::Infinity,
    ];
}

#[derive(Parser, Debug)]
#[command(version, about = "Tour of numarray construction, copying, casting and special values")]
struct Args {
    /// Sections to run, in order; all of them when omitted
    #[arg(value_enum)]
    sections: Vec<Section>,

    /// Log the expected failures and carry on instead of stopping
    #[arg(long)]
    keep_going: bool,
}

/// Booleans are printed with Python's spelling, like the rest of the tour.
fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn show(name: &str, a: &NumArray) {
    println!("Array {}: {}", name, a.repr());
}

fn creation() -> Result<()> {
    let arr = array![-1, 2, 5; DType::Float32]?;
    println!("{}", arr.repr());

    // mixed integers and floats are all stored as floats
    let arr1 = array![0, 0.1, 2];
    println!("{}", arr1.repr());
    Ok(())
}

fn copying() -> Result<()> {
    let a = array![0, 1];
    let b = array![9, 8];
    let c = a.alias();
    show("a", &a);
    c.set(0, 5)?;
    show("a", &a);

    let d = b.copy();
    d.set(0, 6)?;
    show("b", &b);
    Ok(())
}

fn casting() -> Result<()> {
    let arr = array![0, 1, 2];
    println!("{}", arr.dtype());
    let arr = arr.astype(DType::Float32)?;
    println!("{}", arr.dtype());
    Ok(())
}

fn nan() -> Result<()> {
    let arr = array![NAN, 1, 2];
    println!("{}", arr.repr());

    let arr = array![NAN, "abc"];
    println!("{}", arr.repr());

    array![NAN, 1, 2; DType::Int32].context("NaN has no int32 representation")?;
    Ok(())
}

fn infinity() -> Result<()> {
    println!("{}", py_bool(INF > 1_000_000.));

    let arr = array![INF, 5];
    println!("{}", arr.repr());

    let arr = array![NEG_INF, 1];
    println!("{}", arr.repr());

    array![INF, 3; DType::Int32].context("infinity has no int32 representation")?;
    Ok(())
}

fn run(section: Section) -> Result<()> {
    match section {
        Section::Creation => creation(),
        Section::Copying => copying(),
        Section::Casting => casting(),
        Section::Nan => nan(),
        Section::Infinity => infinity(),
    }
}

fn main() -> Result<()> {
    let log_level = std::env::var("NUMARRAY_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let sections = if args.sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        args.sections
    };

    for section in sections {
        info!(?section, "running section");
        match run(section) {
            Ok(()) => {}
            Err(e) if args.keep_going => error!("{:#}", e),
            Err(e) => return Err(e.context(format!("section {:?} stopped", section))),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_comparison_prints_python_bool() {
        assert_eq!(py_bool(INF > 1_000_000.), "True");
        assert_eq!(py_bool(NEG_INF > -1_000_000.), "False");
    }

    #[test]
    fn sentinel_sections_stop_on_int32() {
        assert!(creation().is_ok());
        assert!(copying().is_ok());
        assert!(casting().is_ok());
        let err = nan().unwrap_err();
        assert_eq!(err.to_string(), "NaN has no int32 representation");
        assert!(infinity().is_err());
    }
}
