// src/output.rs
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::chart::{Marker, PayoffSample, Region};

fn region_name(region: Region) -> &'static str {
    match region {
        Region::Profit => "profit",
        Region::Loss => "loss",
    }
}

pub fn write_samples_csv<W: Write>(mut out: W, samples: &[PayoffSample]) -> io::Result<()> {
    writeln!(out, "price,payoff,region")?;
    for s in samples {
        writeln!(out, "{},{},{}", s.price, s.payoff, region_name(s.region()))?;
    }
    Ok(())
}

pub fn write_markers_csv<W: Write>(mut out: W, markers: &[Marker]) -> io::Result<()> {
    writeln!(out, "marker,price")?;
    for m in markers {
        let name = match m {
            Marker::Strike(_) => "strike",
            Marker::BreakEvenUp(_) => "break_even_up",
            Marker::BreakEvenDown(_) => "break_even_down",
        };
        writeln!(out, "{},{}", name, m.price())?;
    }
    Ok(())
}

pub fn write_samples_to_csv(filename: impl AsRef<Path>, samples: &[PayoffSample]) -> io::Result<()> {
    write_samples_csv(File::create(filename)?, samples)
}

pub fn write_markers_to_csv(filename: impl AsRef<Path>, markers: &[Marker]) -> io::Result<()> {
    write_markers_csv(File::create(filename)?, markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_csv() {
        let samples = [
            PayoffSample {
                price: 100.0,
                payoff: -5.0,
            },
            PayoffSample {
                price: 200.0,
                payoff: 45.0,
            },
        ];
        let mut buf = Vec::new();
        write_samples_csv(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "price,payoff,region\n100,-5,loss\n200,45,profit\n");
    }

    #[test]
    fn test_markers_csv() {
        let mut buf = Vec::new();
        write_markers_csv(&mut buf, &[Marker::Strike(150.0), Marker::BreakEvenUp(155.5)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "marker,price\nstrike,150\nbreak_even_up,155.5\n");
    }
}
