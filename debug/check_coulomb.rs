use coulomb_surface::config::DegeneratePolicy;
use coulomb_surface::forces::{coulomb_magnitude, compute_net_forces};
use coulomb_surface::units;
use coulomb_surface::ParticleField;

fn main() {
    println!("K (f64):            {:.6e} N·m²/C²", units::COULOMB_CONSTANT_SI);
    println!("K (f32):            {:.6e}", units::K);
    println!("Q (f32):            {:.6e} C", units::Q);

    let double = units::COULOMB_CONSTANT_SI * units::ELEMENTARY_CHARGE_SI * units::ELEMENTARY_CHARGE_SI;
    let single = units::pair_constant();
    println!("\nK·Q² (f64):         {:.9e} N at 1 m", double);
    println!("K·Q² (f32):         {:.9e} N at 1 m", single);
    println!("relative error:     {:.3e}", ((single as f64) - double).abs() / double);

    println!("\nForce between two electrons on the unit square:");
    for d in [1.0f32, 0.1, 1e-3, 1e-6] {
        println!("  d = {:>8.1e} m  ->  {:.6e} N", d, coulomb_magnitude(d * d));
    }

    match ParticleField::from_positions([(0.0, 0.0), (1.0, 0.0)], DegeneratePolicy::Reject) {
        Ok(field) => {
            let field = compute_net_forces(field);
            println!("\nTwo-electron check:");
            for p in field.iter() {
                if let Some(net) = p.net {
                    println!(
                        "  ({:.1}, {:.1}): |F| = {:.9e} N at {:.6}°",
                        p.pos.x, p.pos.y, net.magnitude, net.angle_deg
                    );
                }
            }
        }
        Err(e) => eprintln!("failed to build field: {}", e),
    }
}
