//! Text report of the resolved surface, in the benchmark's printf layout.

use std::io::{self, Write};

use crate::config::ReportLayout;
use crate::field::ParticleField;
use crate::particle::{NetForce, Particle};

pub const SEPARATOR: &str = "-------------------------------------";

/// `%.{precision}f`, with C spelling for non-finite values.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    format!("{:.*}", precision, value)
}

/// `%.{precision}G`: shortest of fixed and scientific notation with
/// `precision` significant digits, trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-NAN" } else { "NAN" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-INF" } else { "INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let p = precision.max(1);
    // The exponent is taken after rounding to `p` digits, as C does.
    let scientific = format!("{:.*e}", p - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= p as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (p as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Report entry for one electron.
pub fn format_particle(particle: &Particle, net: NetForce, layout: ReportLayout) -> String {
    let x = format_fixed(particle.pos.x as f64, 4);
    let y = format_fixed(particle.pos.y as f64, 4);
    let force = format_general(net.magnitude as f64, 10);
    let angle = format_fixed(net.angle_deg as f64, 3);
    match layout {
        ReportLayout::Block => format!(
            "Electron at ({}, {}):\n    Net Force: {} Newtons\n    Angle: {}°",
            x, y, force, angle
        ),
        ReportLayout::Line => format!(
            "Electron at ({}, {}): Net Force: {} Newtons, Angle: {}°",
            x, y, force, angle
        ),
    }
}

/// Write every resolved electron in index order.
pub fn write_report<W: Write>(
    out: &mut W,
    field: &ParticleField,
    layout: ReportLayout,
) -> io::Result<()> {
    for (i, particle) in field.iter().enumerate() {
        let Some(net) = particle.net else {
            log::warn!("electron {} has no resolved net force; skipped", i);
            continue;
        };
        if layout == ReportLayout::Block {
            writeln!(out, "{}", SEPARATOR)?;
        }
        writeln!(out, "{}", format_particle(particle, net, layout))?;
    }
    if layout == ReportLayout::Block {
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DegeneratePolicy;
    use crate::forces::compute_net_forces;

    #[test]
    fn general_format_switches_to_scientific_outside_ten_digits() {
        assert_eq!(format_general(2.5, 10), "2.5");
        assert_eq!(format_general(123456.0, 10), "123456");
        assert_eq!(format_general(0.0001, 10), "0.0001");
        assert_eq!(format_general(0.00001, 10), "1E-05");
        assert_eq!(format_general(1.0e10, 10), "1E+10");
        assert_eq!(format_general(12345678901.0, 10), "1.23456789E+10");
        assert_eq!(format_general(9999999999.7, 10), "1E+10");
        assert_eq!(format_general(-3.25e-28, 10), "-3.25E-28");
        assert_eq!(format_general(1.0 / 3.0, 10), "0.3333333333");
    }

    #[test]
    fn general_format_spells_special_values_like_c() {
        assert_eq!(format_general(0.0, 10), "0");
        assert_eq!(format_general(f64::INFINITY, 10), "INF");
        assert_eq!(format_general(f64::NEG_INFINITY, 10), "-INF");
        assert_eq!(format_general(f64::NAN, 10), "NAN");
        assert_eq!(format_fixed(f64::NAN, 3), "nan");
        assert_eq!(format_fixed(1.23456, 3), "1.235");
    }

    #[test]
    fn block_report_frames_each_electron() {
        let field = ParticleField::from_positions(
            [(0.0, 0.0), (1.0, 0.0)],
            DegeneratePolicy::Propagate,
        )
        .unwrap();
        let field = compute_net_forces(field);

        let mut out = Vec::new();
        write_report(&mut out, &field, ReportLayout::Block).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], "Electron at (0.0000, 0.0000):");
        assert!(lines[2].starts_with("    Net Force: 2.30707"), "{}", lines[2]);
        assert!(lines[2].ends_with("E-28 Newtons"), "{}", lines[2]);
        assert_eq!(lines[3], "    Angle: 180.000°");
        assert_eq!(lines[4], SEPARATOR);
        assert_eq!(lines[5], "Electron at (1.0000, 0.0000):");
        assert_eq!(lines[7], "    Angle: 0.000°");
        assert_eq!(lines[8], SEPARATOR);
    }

    #[test]
    fn line_report_has_one_line_per_electron() {
        let field = ParticleField::from_positions(
            [(0.25, 0.5), (0.75, 0.5), (0.5, 0.9)],
            DegeneratePolicy::Propagate,
        )
        .unwrap();
        let field = compute_net_forces(field);

        let mut out = Vec::new();
        write_report(&mut out, &field, ReportLayout::Line).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Electron at (0.2500, 0.5000): Net Force: "));
        assert!(lines.iter().all(|l| l.contains(" Newtons, Angle: ") && l.ends_with('°')));
    }

    #[test]
    fn non_finite_force_is_printed_not_hidden() {
        let field = ParticleField::from_positions(
            [(0.3, 0.3), (0.3, 0.3)],
            DegeneratePolicy::Propagate,
        )
        .unwrap();
        let field = compute_net_forces(field);
        let net = field[0].net.unwrap();
        let line = format_particle(&field[0], net, ReportLayout::Line);
        assert!(line.contains("Net Force: INF Newtons"), "{line}");
    }
}
