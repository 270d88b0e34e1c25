//! Worked examples that print value/derivative pairs.
//!
//! Each routine seeds its input with [`DualNumber::variable`] and writes two
//! lines per function followed by a blank line.

use std::io::{self, Write};

use log::debug;

use crate::forwards::{smooth_step, DualNumber};

pub const PI: f32 = std::f32::consts::PI;

/// Exponent used by [`test_simple`].
const SIMPLE_EXPONENT: f32 = 1.337;

fn report<W: Write>(out: &mut W, name: &str, x: f32, y: DualNumber) -> io::Result<()> {
    writeln!(out, "{name}({x:.4}) = {:.4}", y.real())?;
    writeln!(out, "{name}'({x:.4}) = {:.4}", y.dual())?;
    writeln!(out)
}

pub fn test_smooth_step<W: Write>(out: &mut W, x: f32) -> io::Result<()> {
    debug!("smoothstep at {x}");
    let y = smooth_step(DualNumber::variable(x));
    report(out, "smoothstep 3x^2-2x^3", x, y)
}

pub fn test_trig<W: Write>(out: &mut W, x: f32) -> io::Result<()> {
    debug!("trig at {x}");
    let seed = DualNumber::variable(x);
    report(out, "sin", x, seed.sin())?;
    report(out, "cos", x, seed.cos())?;
    report(out, "tan", x, seed.tan())?;
    report(out, "atan", x, seed.atan())
}

pub fn test_simple<W: Write>(out: &mut W, x: f32) -> io::Result<()> {
    debug!("simple at {x}");
    let y = DualNumber::constant(3.0) / DualNumber::variable(x).sqrt();
    writeln!(out, "3/sqrt({x:.4}) = {:.4}", y.real())?;
    writeln!(out, "3/sqrt({x:.4})' = {:.4}", y.dual())?;
    writeln!(out)?;

    let y = (DualNumber::variable(x) + DualNumber::constant(1.0)).powf(SIMPLE_EXPONENT);
    writeln!(out, "({x:.4}+1)^{SIMPLE_EXPONENT} = {:.4}", y.real())?;
    writeln!(out, "({x:.4}+1)^{SIMPLE_EXPONENT}' = {:.4}", y.dual())?;
    writeln!(out)
}

/// Runs every routine in order.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    test_smooth_step(out, 0.5)?;
    test_smooth_step(out, 0.75)?;
    test_trig(out, PI * 0.25)?;
    test_simple(out, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_smooth_step_output() {
        let text = capture(|out| test_smooth_step(out, 0.5));
        assert_eq!(
            text,
            "smoothstep 3x^2-2x^3(0.5000) = 0.5000\nsmoothstep 3x^2-2x^3'(0.5000) = 1.5000\n\n"
        );
    }

    #[test]
    fn test_trig_output() {
        let text = capture(|out| test_trig(out, PI * 0.25));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "sin(0.7854) = 0.7071");
        assert_eq!(lines[1], "sin'(0.7854) = 0.7071");
        assert_eq!(lines[3], "cos(0.7854) = 0.7071");
        assert_eq!(lines[4], "cos'(0.7854) = -0.7071");
        assert_eq!(lines[6], "tan(0.7854) = 1.0000");
        assert_eq!(lines[7], "tan'(0.7854) = 2.0000");
        assert_eq!(lines[9], "atan(0.7854) = 0.6658");
        assert_eq!(lines[10], "atan'(0.7854) = 0.6185");
    }

    #[test]
    fn test_simple_output() {
        let text = capture(|out| test_simple(out, 3.0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "3/sqrt(3.0000) = 1.7321");
        assert_eq!(lines[1], "3/sqrt(3.0000)' = -0.2887");
        assert_eq!(lines[3], "(3.0000+1)^1.337 = 6.3820");
        assert_eq!(lines[4], "(3.0000+1)^1.337' = 2.1332");
    }

    #[test]
    fn test_run_prints_every_routine() {
        let text = capture(|out| run(out));
        assert_eq!(text.matches("smoothstep").count(), 4);
        assert!(text.contains("atan'(0.7854)"));
        assert!(text.ends_with("\n\n"));
    }
}
