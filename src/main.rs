use log::warn;
use std::io::{self, Write};
use std::path::Path;
use wall_detector::input::WallLines;
use wall_detector::render::{CommandRenderer, Renderer};
use wall_detector::{save_walls_json, Wall, WallDetector, WallParams};

const OUTPUT_PATH: &str = "walls.json";
const DRAW_TOOL: &str = "./draw_walls.py";

fn main() {
    env_logger::init();

    println!("PlanMorph Wall Detector");
    let mut detector = WallDetector::new(WallParams::default());
    collect_walls(&mut detector);

    let valid = detector.valid_walls();
    match save_walls_json(Path::new(OUTPUT_PATH), &valid) {
        Ok(count) => {
            println!("Saved {count} walls to {OUTPUT_PATH}");
            let renderer = CommandRenderer::new(DRAW_TOOL);
            if let Err(e) = renderer.render(Path::new(OUTPUT_PATH)) {
                warn!("drawing tool failed: {e}");
            }
        }
        Err(e) => println!("Error: {e}"),
    }

    println!("\nValid walls:");
    if valid.is_empty() {
        println!("No valid walls found.");
    } else {
        for wall in &valid {
            println!("{}", describe(wall));
        }
    }
}

/// Reads coordinate lines from stdin until the quit sentinel or EOF,
/// forwarding valid 4-tuples to the detector. Malformed lines and degenerate
/// segments are reported and skipped.
fn collect_walls(detector: &mut WallDetector) {
    let stdin = io::stdin();
    let mut lines = WallLines::new(stdin.lock());
    loop {
        print!("\nEnter wall coordinates (x1 y1 x2 y2) or 'q' to quit: ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok([x1, y1, x2, y2])) => match detector.add_wall(x1, y1, x2, y2) {
                Ok(wall) => println!("Added {}", describe(wall)),
                Err(e) => println!("Error: {e}"),
            },
            Some(Err(e)) => println!("{e}"),
            None => break,
        }
    }
}

fn describe(wall: &Wall) -> String {
    format!(
        "wall: ({},{}) to ({},{}), length = {}mm, angle = {}°",
        wall.x1, wall.y1, wall.x2, wall.y2, wall.length, wall.angle
    )
}
