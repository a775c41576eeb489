use arboard::Clipboard;
use fovscan::config::Config;
use fovscan::mesh::fan_triangles;
use fovscan::{Scene, VisibilityScanner, Wall};
use macroquad::prelude::*;
use std::path::Path;

/// Fallback scene when no scene file is present: a room with a few
/// free-standing walls to scan around.
fn default_walls() -> Vec<Wall> {
    vec![
        Wall::new(250.0, 150.0, 400.0, 150.0),
        Wall::new(500.0, 250.0, 500.0, 400.0),
        Wall::new(150.0, 350.0, 250.0, 450.0),
        Wall::new(550.0, 120.0, 650.0, 180.0),
        Wall::new(350.0, 500.0, 500.0, 520.0),
    ]
}

fn boundary_to_json(boundary: &[Vec3]) -> String {
    let points: Vec<[f32; 3]> = boundary.iter().map(|p| [p.x, p.y, p.z]).collect();
    serde_json::to_string_pretty(&points).unwrap_or_default()
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Boundary copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main("FovScan - Visibility Polygon Demo")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();

    let scene = match Scene::load(Path::new(&config.scene.path)) {
        Ok(scene) => {
            println!("Loaded scene from {}", config.scene.path);
            scene
        }
        Err(_) => {
            println!("No scene file at {}, using built-in walls", config.scene.path);
            Scene::new(default_walls())
        }
    };
    let walls = scene.walls.clone();

    let scanner = match VisibilityScanner::new(config.scan.clone(), scene) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("Invalid scan configuration: {}", e);
            return;
        }
    };

    let background = Color::from_rgba(
        config.visual.background_r,
        config.visual.background_g,
        config.visual.background_b,
        255,
    );
    let fill = Color::new(0.3, 0.8, 0.5, 0.35);

    let mut heading: f32 = 0.0;

    loop {
        let (mouse_x, mouse_y) = mouse_position();
        let observer = vec3(mouse_x, mouse_y, 0.0);

        if is_key_down(KeyCode::Q) {
            heading += 90.0 * get_frame_time();
        }
        if is_key_down(KeyCode::E) {
            heading -= 90.0 * get_frame_time();
        }

        let boundary = match scanner.scan(observer, heading) {
            Ok(boundary) => boundary,
            Err(e) => {
                eprintln!("Scan failed: {}", e);
                return;
            }
        };

        clear_background(background);

        // Visible region as a triangle fan anchored at the observer
        let indices = fan_triangles(boundary.len());
        for triangle in indices.chunks_exact(3) {
            draw_triangle(
                boundary[triangle[0] as usize].truncate(),
                boundary[triangle[1] as usize].truncate(),
                boundary[triangle[2] as usize].truncate(),
                fill,
            );
        }

        for wall in &walls {
            draw_line(wall.x1, wall.y1, wall.x2, wall.y2, 3.0, RED);
        }

        if config.visual.show_rays {
            for point in boundary.iter().skip(1) {
                draw_line(observer.x, observer.y, point.x, point.y, 1.0, GRAY);
            }
        }
        if config.visual.show_points {
            for point in boundary.iter().skip(1) {
                draw_circle(point.x, point.y, 2.0, YELLOW);
            }
        }
        draw_circle(observer.x, observer.y, 4.0, BLUE);

        let info = format!(
            "Boundary points: {}\nHeading: {:.0} deg (Q/E to turn)\nC: copy boundary to clipboard\nEsc: close window",
            boundary.len(),
            heading
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);

        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&boundary_to_json(&boundary));
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await
    }
}
