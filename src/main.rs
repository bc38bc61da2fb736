// main.rs
//
// Demo of the cone/spiral plotting helpers: builds the scene for a few
// parameter sets, reports each spiral's arc length, and writes every figure
// to an SVG file under svg/.

use std::fs;

use conespiral::io::svg::SvgRenderer;
use conespiral::{ConicalSpiral, Figure};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the /svg folder exists
    fs::create_dir_all("svg")?;

    let renderer = SvgRenderer::default();

    for (radius, height, pitch) in [(5.0, 10.0, 2.0), (5.0, 10.0, 4.0), (3.0, 12.0, 1.5)] {
        let spiral = ConicalSpiral::from_dimensions(radius, height, pitch)?;

        println!("Cone Radius (r) = {radius:.4}");
        println!("Cone Height (h) = {height:.4}");
        println!("Spiral Distance (d) = {pitch:.4}");
        println!("Spiral Arc Length = {:.4}", spiral.arc_length());

        let mut figure = Figure::cone_and_spiral(&spiral);
        figure.add_support_points(&spiral, 1.0)?;

        let name = format!("svg/cone_r{radius}_h{height}_d{pitch}.svg");
        svg::save(&name, &renderer.render(&figure))?;
        println!("wrote {name}");
        println!();
    }

    Ok(())
}
